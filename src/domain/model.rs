use serde::{Deserialize, Serialize};

use crate::domain::directory::CourtCategory;

/// Request body for the case-status search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub court_type: CourtCategory,
    pub court_name: String,
    pub case_type: String,
    pub case_number: String,
    pub year: String,
}

/// Request body for the cause-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseListQuery {
    pub court_type: CourtCategory,
    pub court_name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: chrono::NaiveDate,
}

/// Request body for the document-download endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub case_id: String,
    pub document_type: String,
}

/// Case details as returned by the service. Dates arrive as plain
/// strings and may be empty, e.g. `next_hearing_date` for disposed
/// cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_id: String,
    pub court: String,
    pub case_type: String,
    pub case_number: String,
    pub year: String,
    pub status: String,
    pub parties: Parties,
    #[serde(default)]
    pub filing_date: String,
    #[serde(default)]
    pub next_hearing_date: String,
    #[serde(default)]
    pub documents: Vec<CaseDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parties {
    pub petitioner: String,
    pub respondent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Cause list for one court and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseList {
    pub court: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub judge: Option<String>,
    #[serde(default)]
    pub court_hall: Option<String>,
    #[serde(default)]
    pub cases: Vec<CauseListEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseListEntry {
    pub serial_no: u32,
    pub case_type: String,
    #[serde(default)]
    pub case_type_full: Option<String>,
    pub case_number: String,
    pub year: String,
    pub parties: String,
    pub purpose: String,
    #[serde(default)]
    pub advocate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResponse {
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Error payload the service sends with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
