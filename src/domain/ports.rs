use crate::domain::directory::SelectOption;
use crate::domain::display::{CaseDisplay, CauseListDisplay};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// The rendering surface the form controller drives. Implementations
/// must tolerate any call order; the controller guarantees only that a
/// loading indicator switched on is switched off again before a result
/// or error for the same submission is shown.
#[async_trait]
pub trait LookupView: Send + Sync {
    async fn set_loading(&self, active: bool);

    /// Replaces the court selection list wholesale.
    async fn set_court_options(&self, options: &[SelectOption]);

    async fn render_case(&self, case: &CaseDisplay);

    async fn show_case_error(&self, message: &str);

    async fn render_cause_list(&self, list: &CauseListDisplay);

    async fn show_cause_list_error(&self, message: &str);

    /// Navigates to (or fetches) a fully resolved document URL.
    async fn open_download(&self, url: &Url);

    /// User-facing notification outside the two result panes.
    async fn alert(&self, message: &str);
}

/// Byte sink for downloaded documents.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn download_dir(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
