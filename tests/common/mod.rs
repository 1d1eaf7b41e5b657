use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use court_lookup::core::{CaseDisplay, CauseListDisplay, LookupView, SelectOption};
use court_lookup::{ApiClient, CourtDirectory, FormController};
use httpmock::MockServer;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ViewEvent {
    Loading(bool),
    CourtOptions(Vec<SelectOption>),
    Case(CaseDisplay),
    CaseError(String),
    CauseList(CauseListDisplay),
    CauseListError(String),
    Download(Url),
    Alert(String),
}

/// View double that records every call the controller makes, in order.
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn rendered_cases(&self) -> Vec<CaseDisplay> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Case(case) => Some(case),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
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

#[allow(dead_code)]
pub fn recording_controller(
    server: &MockServer,
) -> (FormController<RecordingView>, RecordingView) {
    let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let view = RecordingView::default();
    let controller = FormController::new(client, CourtDirectory::default(), view.clone());
    (controller, view)
}

#[allow(dead_code)]
pub fn case_response(case_id: &str) -> serde_json::Value {
    serde_json::json!({
        "case_id": case_id,
        "court": "Delhi",
        "case_type": "WP",
        "case_number": "1234",
        "year": "2023",
        "status": "Pending",
        "parties": {
            "petitioner": "Ramesh Kumar",
            "respondent": "State of Delhi"
        },
        "filing_date": "2023-01-15",
        "next_hearing_date": "2024-06-01",
        "documents": [
            {"id": "doc1", "type": "order", "date": "2024-03-05"},
            {"id": "doc2", "type": "judgment", "date": null},
            {"type": "petition", "date": "2023-01-15"}
        ]
    })
}

#[allow(dead_code)]
pub fn cause_list_response() -> serde_json::Value {
    serde_json::json!({
        "court": "Bombay",
        "date": "2024-03-05",
        "judge": "Hon'ble Justice A. Sharma",
        "court_hall": "Court Hall 3",
        "cases": [
            {
                "serial_no": 1,
                "case_type": "WP",
                "case_type_full": "Writ Petition",
                "case_number": "1234",
                "year": "2023",
                "parties": "Ramesh Kumar vs State",
                "purpose": "Arguments",
                "advocate": "R. Mehta"
            },
            {
                "serial_no": 2,
                "case_type": "CRL.A",
                "case_number": "482",
                "year": "2022",
                "parties": "State vs Mohan",
                "purpose": "Final Hearing"
            }
        ]
    })
}
