use std::sync::atomic::{AtomicU64, Ordering};

use crate::adapters::http::ApiClient;
use crate::domain::directory::{CourtCategory, CourtDirectory};
use crate::domain::display::{CaseDisplay, CauseListDisplay};
use crate::domain::model::{CauseListQuery, DownloadRequest, SearchQuery};
use crate::domain::ports::LookupView;
use crate::utils::error::LookupError;

pub const SEARCH_ERROR_FALLBACK: &str = "An error occurred while fetching case details.";
pub const CAUSE_LIST_ERROR_FALLBACK: &str = "An error occurred while fetching cause list.";
pub const DOWNLOAD_FAILED_ALERT: &str = "Failed to download document.";
pub const DOWNLOAD_ERROR_ALERT: &str = "An error occurred while downloading the document.";

/// How a form submission settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// The result was rendered into the view.
    Rendered,
    /// An error message was shown in the form's error area.
    Failed,
    /// A newer submission of the same form took over before this one
    /// finished; the view was left untouched.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Opened,
    Failed,
}

/// Drives a [`LookupView`] through the search, cause list and download
/// flows. Each of the two forms has its own generation counter; a
/// submission that is no longer the newest for its form stops touching
/// the view when its response arrives.
pub struct FormController<V: LookupView> {
    client: ApiClient,
    directory: CourtDirectory,
    view: V,
    search_generation: AtomicU64,
    cause_list_generation: AtomicU64,
}

impl<V: LookupView> FormController<V> {
    pub fn new(client: ApiClient, directory: CourtDirectory, view: V) -> Self {
        Self {
            client,
            directory,
            view,
            search_generation: AtomicU64::new(0),
            cause_list_generation: AtomicU64::new(0),
        }
    }

    /// Rebuilds the court selection list for a category value coming
    /// straight from the category widget. Unrecognized values clear the
    /// list down to the placeholder.
    pub async fn populate_court_names(&self, category: &str) {
        let options = self.directory.options(CourtCategory::parse(category));
        self.view.set_court_options(&options).await;
    }

    pub async fn submit_case_search(&self, query: SearchQuery) -> FormOutcome {
        let generation = self.next_generation(&self.search_generation);

        if let Err(e) = self
            .directory
            .validate_selection(query.court_type, &query.court_name)
        {
            self.view
                .show_case_error(&error_text(&e, SEARCH_ERROR_FALLBACK))
                .await;
            return FormOutcome::Failed;
        }

        tracing::info!(
            "Fetching case details for {} {}/{} from {} {} Court",
            query.case_type,
            query.case_number,
            query.year,
            query.court_name,
            query.court_type
        );

        self.view.set_loading(true).await;
        let result = self.client.search_case(&query).await;

        if self.is_stale(&self.search_generation, generation) {
            tracing::debug!("Discarding superseded search response");
            return FormOutcome::Superseded;
        }
        self.view.set_loading(false).await;

        match result {
            Ok(case) => {
                self.view.render_case(&CaseDisplay::from_result(case)).await;
                FormOutcome::Rendered
            }
            Err(e) => {
                tracing::warn!("Case search failed: {}", e);
                self.view
                    .show_case_error(&error_text(&e, SEARCH_ERROR_FALLBACK))
                    .await;
                FormOutcome::Failed
            }
        }
    }

    pub async fn submit_cause_list_search(&self, query: CauseListQuery) -> FormOutcome {
        let generation = self.next_generation(&self.cause_list_generation);

        if let Err(e) = self
            .directory
            .validate_selection(query.court_type, &query.court_name)
        {
            self.view
                .show_cause_list_error(&error_text(&e, CAUSE_LIST_ERROR_FALLBACK))
                .await;
            return FormOutcome::Failed;
        }

        tracing::info!(
            "Fetching cause list for {} {} Court on {}",
            query.court_name,
            query.court_type,
            query.date
        );

        self.view.set_loading(true).await;
        let result = self.client.fetch_cause_list(&query).await;

        if self.is_stale(&self.cause_list_generation, generation) {
            tracing::debug!("Discarding superseded cause list response");
            return FormOutcome::Superseded;
        }
        self.view.set_loading(false).await;

        match result {
            Ok(list) => {
                self.view
                    .render_cause_list(&CauseListDisplay::from_result(list))
                    .await;
                FormOutcome::Rendered
            }
            Err(e) => {
                tracing::warn!("Cause list fetch failed: {}", e);
                self.view
                    .show_cause_list_error(&error_text(&e, CAUSE_LIST_ERROR_FALLBACK))
                    .await;
                FormOutcome::Failed
            }
        }
    }

    /// Requests a document download and hands the resolved URL to the
    /// view. Failures surface as alerts, not as form errors.
    pub async fn request_download(&self, request: DownloadRequest) -> DownloadOutcome {
        tracing::info!(
            "Requesting download of {} for case {}",
            request.document_type,
            request.case_id
        );

        match self.client.request_download(&request).await {
            Ok(response) => match response.file_path.as_deref() {
                Some(file_path) if !file_path.is_empty() => {
                    match self.client.downloads_url(file_path) {
                        Ok(url) => {
                            self.view.open_download(&url).await;
                            DownloadOutcome::Opened
                        }
                        Err(e) => {
                            tracing::warn!("Bad download path {:?}: {}", file_path, e);
                            self.view.alert(DOWNLOAD_FAILED_ALERT).await;
                            DownloadOutcome::Failed
                        }
                    }
                }
                _ => {
                    self.view.alert(DOWNLOAD_FAILED_ALERT).await;
                    DownloadOutcome::Failed
                }
            },
            Err(e) => {
                tracing::warn!("Document download failed: {}", e);
                self.view.alert(DOWNLOAD_ERROR_ALERT).await;
                DownloadOutcome::Failed
            }
        }
    }

    fn next_generation(&self, counter: &AtomicU64) -> u64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_stale(&self, counter: &AtomicU64, generation: u64) -> bool {
        counter.load(Ordering::SeqCst) != generation
    }
}

/// Picks the message to show for a failed submission: the server's own
/// error text when it sent one, a local validation message as-is, and
/// the generic fallback for everything else.
fn error_text(error: &LookupError, fallback: &str) -> String {
    match error {
        LookupError::ServerError {
            message: Some(message),
            ..
        } => message.clone(),
        LookupError::ValidationError { message } => message.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::SelectOption;
    use crate::domain::ports::LookupView;
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use url::Url;

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Loading(bool),
        CourtOptions(Vec<SelectOption>),
        Case(CaseDisplay),
        CaseError(String),
        CauseList(CauseListDisplay),
        CauseListError(String),
        Download(Url),
        Alert(String),
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        events: Arc<Mutex<Vec<ViewEvent>>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: ViewEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[async_trait]
    impl LookupView for RecordingView {
        async fn set_loading(&self, active: bool) {
            self.push(ViewEvent::Loading(active));
        }

        async fn set_court_options(&self, options: &[SelectOption]) {
            self.push(ViewEvent::CourtOptions(options.to_vec()));
        }

        async fn render_case(&self, case: &CaseDisplay) {
            self.push(ViewEvent::Case(case.clone()));
        }

        async fn show_case_error(&self, message: &str) {
            self.push(ViewEvent::CaseError(message.to_string()));
        }

        async fn render_cause_list(&self, list: &CauseListDisplay) {
            self.push(ViewEvent::CauseList(list.clone()));
        }

        async fn show_cause_list_error(&self, message: &str) {
            self.push(ViewEvent::CauseListError(message.to_string()));
        }

        async fn open_download(&self, url: &Url) {
            self.push(ViewEvent::Download(url.clone()));
        }

        async fn alert(&self, message: &str) {
            self.push(ViewEvent::Alert(message.to_string()));
        }
    }

    fn controller_for(server: &MockServer) -> (FormController<RecordingView>, RecordingView) {
        let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let view = RecordingView::default();
        let controller = FormController::new(client, CourtDirectory::default(), view.clone());
        (controller, view)
    }

    fn search_query(court_name: &str) -> SearchQuery {
        SearchQuery {
            court_type: CourtCategory::High,
            court_name: court_name.to_string(),
            case_type: "WP".to_string(),
            case_number: "1234".to_string(),
            year: "2023".to_string(),
        }
    }

    fn case_body(case_id: &str) -> serde_json::Value {
        serde_json::json!({
            "case_id": case_id,
            "court": "Delhi",
            "case_type": "WP",
            "case_number": "1234",
            "year": "2023",
            "status": "Pending",
            "parties": {"petitioner": "A", "respondent": "B"},
            "filing_date": "2023-01-15",
            "next_hearing_date": "",
            "documents": [
                {"id": "doc1", "type": "order", "date": "2024-03-05"},
                {"type": "judgment", "date": "2024-03-06"}
            ]
        })
    }

    #[tokio::test]
    async fn test_populate_court_names_places_placeholder_first() {
        let server = MockServer::start();
        let (controller, view) = controller_for(&server);

        controller.populate_court_names("high").await;

        let events = view.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ViewEvent::CourtOptions(options) => {
                assert_eq!(options.len(), 26);
                assert_eq!(options[0].value, "");
                assert_eq!(options[0].label, "Select Court Name");
            }
            other => panic!("Expected CourtOptions, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_populate_court_names_unrecognized_category() {
        let server = MockServer::start();
        let (controller, view) = controller_for(&server);

        controller.populate_court_names("supreme").await;

        match &view.events()[0] {
            ViewEvent::CourtOptions(options) => {
                assert_eq!(options.len(), 1);
                assert_eq!(options[0].label, "Select Court Name");
            }
            other => panic!("Expected CourtOptions, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_success_renders_formatted_case() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(case_body("HC312342023"));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller.submit_case_search(search_query("Delhi")).await;

        mock.assert();
        assert_eq!(outcome, FormOutcome::Rendered);

        let events = view.events();
        assert_eq!(events[0], ViewEvent::Loading(true));
        assert_eq!(events[1], ViewEvent::Loading(false));
        match &events[2] {
            ViewEvent::Case(case) => {
                assert_eq!(case.filing_date, "15 Jan 2023");
                assert_eq!(case.next_hearing_date, "Not Available");
                assert_eq!(case.documents.len(), 1);
                assert_eq!(case.documents[0].label, "Order");
            }
            other => panic!("Expected Case, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_unknown_court_settles_without_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(case_body("HC312342023"));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller.submit_case_search(search_query("Atlantis")).await;

        assert_eq!(outcome, FormOutcome::Failed);
        mock.assert_hits(0);

        let events = view.events();
        assert_eq!(
            events,
            vec![ViewEvent::CaseError(
                "Court 'Atlantis' not found in supported High Courts".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_search_error_shows_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/search");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": "No case found with the given details"}));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller.submit_case_search(search_query("Delhi")).await;

        assert_eq!(outcome, FormOutcome::Failed);
        let events = view.events();
        assert_eq!(events[0], ViewEvent::Loading(true));
        assert_eq!(events[1], ViewEvent::Loading(false));
        assert_eq!(
            events[2],
            ViewEvent::CaseError("No case found with the given details".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_error_without_body_uses_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/search");
            then.status(500);
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller.submit_case_search(search_query("Delhi")).await;

        assert_eq!(outcome, FormOutcome::Failed);
        assert_eq!(
            view.events()[2],
            ViewEvent::CaseError(SEARCH_ERROR_FALLBACK.to_string())
        );
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_older_one() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/search")
                .json_body_partial(r#"{"court_name": "Delhi"}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(case_body("HC-OLD"));
        });
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/search")
                .json_body_partial(r#"{"court_name": "Bombay"}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(case_body("HC-NEW"));
        });
        let (controller, view) = controller_for(&server);

        // join! polls the second submission before either response can
        // arrive, so the first submission is stale by the time its
        // response is processed, whatever the network timing.
        let (first, second) = tokio::join!(
            controller.submit_case_search(search_query("Delhi")),
            controller.submit_case_search(search_query("Bombay"))
        );

        assert_eq!(first, FormOutcome::Superseded);
        assert_eq!(second, FormOutcome::Rendered);

        let events = view.events();
        let rendered: Vec<&CaseDisplay> = events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Case(case) => Some(case),
                _ => None,
            })
            .collect();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].case_id, "HC-NEW");

        let loader_offs = events
            .iter()
            .filter(|event| **event == ViewEvent::Loading(false))
            .count();
        assert_eq!(loader_offs, 1);
    }

    #[tokio::test]
    async fn test_forms_supersede_independently() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(case_body("HC312342023"));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/causelist");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "court": "Delhi",
                    "date": "2024-03-05",
                    "cases": []
                }));
        });
        let (controller, view) = controller_for(&server);

        let (search, cause_list) = tokio::join!(
            controller.submit_case_search(search_query("Delhi")),
            controller.submit_cause_list_search(CauseListQuery {
                court_type: CourtCategory::High,
                court_name: "Delhi".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            })
        );

        // Different forms never supersede each other.
        assert_eq!(search, FormOutcome::Rendered);
        assert_eq!(cause_list, FormOutcome::Rendered);

        let events = view.events();
        assert!(events.iter().any(|e| matches!(e, ViewEvent::Case(_))));
        assert!(events.iter().any(|e| matches!(e, ViewEvent::CauseList(_))));
    }

    #[tokio::test]
    async fn test_cause_list_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/causelist");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "court": "Bombay",
                    "date": "2024-03-05",
                    "judge": "Hon'ble Justice A. Sharma",
                    "court_hall": "Court Hall 3",
                    "cases": [{
                        "serial_no": 1,
                        "case_type": "WP",
                        "case_type_full": "Writ Petition",
                        "case_number": "1234",
                        "year": "2023",
                        "parties": "A vs B",
                        "purpose": "Arguments",
                        "advocate": "R. Mehta"
                    }]
                }));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller
            .submit_cause_list_search(CauseListQuery {
                court_type: CourtCategory::High,
                court_name: "Bombay".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            })
            .await;

        assert_eq!(outcome, FormOutcome::Rendered);
        match &view.events()[2] {
            ViewEvent::CauseList(list) => {
                assert_eq!(list.date, "05 Mar 2024");
                assert_eq!(list.rows.len(), 1);
                assert_eq!(list.judge.as_deref(), Some("Hon'ble Justice A. Sharma"));
            }
            other => panic!("Expected CauseList, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cause_list_unknown_district_court() {
        let server = MockServer::start();
        let (controller, view) = controller_for(&server);

        let outcome = controller
            .submit_cause_list_search(CauseListQuery {
                court_type: CourtCategory::District,
                court_name: "Gotham".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            })
            .await;

        assert_eq!(outcome, FormOutcome::Failed);
        assert_eq!(
            view.events(),
            vec![ViewEvent::CauseListError(
                "Court 'Gotham' not found in supported District Courts".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_download_success_opens_resolved_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/download").json_body(
                serde_json::json!({"case_id": "HC312342023", "document_type": "order"}),
            );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"file_path": "case_HC312342023_order.pdf"}));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller
            .request_download(DownloadRequest {
                case_id: "HC312342023".to_string(),
                document_type: "order".to_string(),
            })
            .await;

        mock.assert();
        assert_eq!(outcome, DownloadOutcome::Opened);
        match &view.events()[0] {
            ViewEvent::Download(url) => {
                assert!(url
                    .as_str()
                    .ends_with("/downloads/case_HC312342023_order.pdf"));
            }
            other => panic!("Expected Download, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_without_file_path_alerts() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/download");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({}));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller
            .request_download(DownloadRequest {
                case_id: "HC312342023".to_string(),
                document_type: "order".to_string(),
            })
            .await;

        assert_eq!(outcome, DownloadOutcome::Failed);
        assert_eq!(
            view.events(),
            vec![ViewEvent::Alert(DOWNLOAD_FAILED_ALERT.to_string())]
        );
    }

    #[tokio::test]
    async fn test_download_transport_error_alerts() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/download");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": "No document found"}));
        });
        let (controller, view) = controller_for(&server);

        let outcome = controller
            .request_download(DownloadRequest {
                case_id: "HC999".to_string(),
                document_type: "order".to_string(),
            })
            .await;

        assert_eq!(outcome, DownloadOutcome::Failed);
        assert_eq!(
            view.events(),
            vec![ViewEvent::Alert(DOWNLOAD_ERROR_ALERT.to_string())]
        );
    }
}
