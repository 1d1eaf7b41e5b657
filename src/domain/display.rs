use serde::Serialize;

use crate::domain::model::{CaseResult, CauseList};
use crate::utils::format::{capitalize_first, format_date, format_document_date};

/// Case details ready for rendering: dates formatted, document rows
/// filtered down to the ones that can actually be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseDisplay {
    pub case_id: String,
    pub court: String,
    pub case_type: String,
    pub case_number: String,
    pub year: String,
    pub status: String,
    pub petitioner: String,
    pub respondent: String,
    pub filing_date: String,
    pub next_hearing_date: String,
    pub documents: Vec<DocumentRow>,
}

/// One downloadable document. `case_id` and `doc_type` together form
/// the download request for this row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub label: String,
    pub date: String,
    pub case_id: String,
    pub doc_type: String,
}

impl CaseDisplay {
    pub fn from_result(result: CaseResult) -> Self {
        let documents = result
            .documents
            .iter()
            .filter(|doc| doc.id.as_deref().is_some_and(|id| !id.is_empty()))
            .map(|doc| DocumentRow {
                label: capitalize_first(&doc.doc_type),
                date: format_document_date(doc.date.as_deref()),
                case_id: result.case_id.clone(),
                doc_type: doc.doc_type.clone(),
            })
            .collect();

        Self {
            case_id: result.case_id,
            court: result.court,
            case_type: result.case_type,
            case_number: result.case_number,
            year: result.year,
            status: result.status,
            petitioner: result.parties.petitioner,
            respondent: result.parties.respondent,
            filing_date: format_date(&result.filing_date),
            next_hearing_date: format_date(&result.next_hearing_date),
            documents,
        }
    }
}

/// Cause list ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseListDisplay {
    pub court: String,
    pub date: String,
    pub judge: Option<String>,
    pub court_hall: Option<String>,
    pub rows: Vec<CauseRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseRow {
    pub serial_no: u32,
    pub case_type: String,
    pub case_type_full: Option<String>,
    pub case_number: String,
    pub year: String,
    pub parties: String,
    pub purpose: String,
    pub advocate: Option<String>,
}

impl CauseListDisplay {
    pub fn from_result(list: CauseList) -> Self {
        let rows = list
            .cases
            .into_iter()
            .map(|entry| CauseRow {
                serial_no: entry.serial_no,
                case_type: entry.case_type,
                case_type_full: entry.case_type_full,
                case_number: entry.case_number,
                year: entry.year,
                parties: entry.parties,
                purpose: entry.purpose,
                advocate: entry.advocate,
            })
            .collect();

        Self {
            court: list.court,
            date: format_date(&list.date),
            judge: list.judge,
            court_hall: list.court_hall,
            rows,
        }
    }
}
