use clap::{Args, Parser, Subcommand};

use crate::adapters::console::OutputFormat;
use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::config::DOWNLOAD_DIR_DEFAULT;
use crate::domain::directory::CourtCategory;
use crate::domain::model::{CauseListQuery, DownloadRequest, SearchQuery};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "court-lookup")]
#[command(about = "Case status and cause list lookups against an eCourts-style service")]
pub struct Cli {
    #[arg(long, default_value = "http://localhost:5000")]
    pub base_url: String,

    #[arg(long, help = "Load service settings and court directory from a TOML file")]
    pub config: Option<String>,

    #[arg(long, default_value = "text", help = "Output format: text, html or json")]
    pub format: OutputFormat,

    #[arg(long, default_value = DOWNLOAD_DIR_DEFAULT)]
    pub download_dir: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up the status of a single case
    Search(SearchArgs),
    /// Fetch the cause list for a court and date
    Causelist(CauseListArgs),
    /// Request a document and save it locally
    Download(DownloadArgs),
    /// Print the court selection list for a category
    Courts(CourtsArgs),
    /// Print the known case type abbreviations
    CaseTypes,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[arg(long, help = "Court system: high or district")]
    pub court_type: CourtCategory,

    #[arg(long)]
    pub court_name: String,

    #[arg(long, help = "Case type abbreviation, e.g. WP or CRL.A")]
    pub case_type: String,

    #[arg(long)]
    pub case_number: String,

    #[arg(long, help = "Filing year, e.g. 2023")]
    pub year: String,
}

impl SearchArgs {
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            court_type: self.court_type,
            court_name: self.court_name,
            case_type: self.case_type,
            case_number: self.case_number,
            year: self.year,
        }
    }
}

impl Validate for SearchArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("court_name", &self.court_name)?;
        validation::validate_non_empty_string("case_type", &self.case_type)?;
        validation::validate_case_number("case_number", &self.case_number)?;
        validation::validate_year("year", &self.year)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct CauseListArgs {
    #[arg(long, help = "Court system: high or district")]
    pub court_type: CourtCategory,

    #[arg(long)]
    pub court_name: String,

    #[arg(long, help = "Hearing date as YYYY-MM-DD; defaults to today")]
    pub date: Option<chrono::NaiveDate>,
}

impl CauseListArgs {
    pub fn into_query(self) -> CauseListQuery {
        CauseListQuery {
            court_type: self.court_type,
            court_name: self.court_name,
            date: self
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        }
    }
}

impl Validate for CauseListArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("court_name", &self.court_name)
    }
}

#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    #[arg(long)]
    pub case_id: String,

    #[arg(long, help = "Document type, e.g. order or judgment")]
    pub document_type: String,
}

impl DownloadArgs {
    pub fn into_request(self) -> DownloadRequest {
        DownloadRequest {
            case_id: self.case_id,
            document_type: self.document_type,
        }
    }
}

impl Validate for DownloadArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("case_id", &self.case_id)?;
        validation::validate_non_empty_string("document_type", &self.document_type)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct CourtsArgs {
    /// Raw category value; anything unrecognized yields only the
    /// placeholder entry.
    #[arg(long, default_value = "high")]
    pub court_type: String,
}

impl ConfigProvider for Cli {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}
