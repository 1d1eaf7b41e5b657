use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::core::render;
use crate::domain::directory::SelectOption;
use crate::domain::display::{CaseDisplay, CauseListDisplay};
use crate::domain::ports::{LookupView, Storage};
use crate::utils::error::{LookupError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LookupError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(LookupError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: text, html, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Terminal rendering surface. Results go to stdout in the selected
/// format; loader and alert traffic goes to stderr so piped output
/// stays clean. Document URLs are fetched and handed to the storage
/// backend instead of being navigated to.
pub struct ConsoleView<S: Storage> {
    format: OutputFormat,
    storage: S,
    client: Client,
}

impl<S: Storage> ConsoleView<S> {
    pub fn new(format: OutputFormat, storage: S) -> Self {
        Self {
            format,
            storage,
            client: Client::new(),
        }
    }

    fn print_json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => println!("{:#}", json),
            Err(e) => tracing::error!("Failed to serialize output: {}", e),
        }
    }

    async fn save_document(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::ServerError {
                status: status.as_u16(),
                message: None,
            });
        }
        let data = response.bytes().await?;

        let file_name = url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .unwrap_or("document.pdf")
            .to_string();

        self.storage.write_file(&file_name, &data).await?;
        Ok(file_name)
    }
}

#[async_trait]
impl<S: Storage> LookupView for ConsoleView<S> {
    async fn set_loading(&self, active: bool) {
        if active {
            eprintln!("🔍 Fetching from court services...");
        }
    }

    async fn set_court_options(&self, options: &[SelectOption]) {
        match self.format {
            OutputFormat::Text => println!("{}", render::court_options_text(options)),
            OutputFormat::Html => println!("{}", render::court_options_html(options)),
            OutputFormat::Json => self.print_json(&options),
        }
    }

    async fn render_case(&self, case: &CaseDisplay) {
        match self.format {
            OutputFormat::Text => println!("{}", render::case_details_text(case)),
            OutputFormat::Html => println!("{}", render::case_details_html(case)),
            OutputFormat::Json => self.print_json(case),
        }
    }

    async fn show_case_error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("❌ {}", message),
            OutputFormat::Html => println!("{}", render::error_html(message)),
            OutputFormat::Json => println!("{}", serde_json::json!({ "error": message })),
        }
    }

    async fn render_cause_list(&self, list: &CauseListDisplay) {
        match self.format {
            OutputFormat::Text => println!("{}", render::cause_list_text(list)),
            OutputFormat::Html => println!("{}", render::cause_list_html(list)),
            OutputFormat::Json => self.print_json(list),
        }
    }

    async fn show_cause_list_error(&self, message: &str) {
        self.show_case_error(message).await;
    }

    async fn open_download(&self, url: &Url) {
        match self.save_document(url).await {
            Ok(file_name) => println!("📁 Document saved: {}", file_name),
            Err(e) => {
                tracing::warn!("Document fetch failed: {}", e);
                eprintln!("❌ Failed to fetch document: {}", e);
            }
        }
    }

    async fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}
