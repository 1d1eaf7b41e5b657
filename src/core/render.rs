//! Pure renderers turning display models into output fragments.
//!
//! The HTML builders emit the same markup the lookup page works with
//! (`list-group` document rows, a six-column cause list table); the
//! text builders produce the terminal equivalent.

use crate::domain::directory::SelectOption;
use crate::domain::display::{CaseDisplay, CauseListDisplay};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn court_options_html(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}">{}</option>"#,
                html_escape(&option.value),
                html_escape(&option.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn case_details_html(case: &CaseDisplay) -> String {
    let documents = if case.documents.is_empty() {
        r#"<div class="list-group-item">No documents available</div>"#.to_string()
    } else {
        case.documents
            .iter()
            .map(|row| {
                format!(
                    r#"<div class="list-group-item d-flex justify-content-between align-items-center">
    <div>
        <h6>{}</h6>
        <small>Date: {}</small>
    </div>
    <button class="btn btn-sm btn-primary download-btn" data-case-id="{}" data-doc-type="{}">Download</button>
</div>"#,
                    html_escape(&row.label),
                    html_escape(&row.date),
                    html_escape(&row.case_id),
                    html_escape(&row.doc_type)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<div id="caseDetails">
<p><strong>Court:</strong> <span id="resultCourt">{}</span></p>
<p><strong>Case Type:</strong> <span id="resultCaseType">{}</span></p>
<p><strong>Case Number:</strong> <span id="resultCaseNumber">{}</span></p>
<p><strong>Year:</strong> <span id="resultYear">{}</span></p>
<p><strong>Status:</strong> <span id="resultStatus">{}</span></p>
<p><strong>Petitioner:</strong> <span id="resultPetitioner">{}</span></p>
<p><strong>Respondent:</strong> <span id="resultRespondent">{}</span></p>
<p><strong>Filing Date:</strong> <span id="resultFilingDate">{}</span></p>
<p><strong>Next Hearing:</strong> <span id="resultNextHearing">{}</span></p>
<div id="documentsContainer" class="list-group">
{}
</div>
</div>"#,
        html_escape(&case.court),
        html_escape(&case.case_type),
        html_escape(&case.case_number),
        html_escape(&case.year),
        html_escape(&case.status),
        html_escape(&case.petitioner),
        html_escape(&case.respondent),
        html_escape(&case.filing_date),
        html_escape(&case.next_hearing_date),
        documents
    )
}

pub fn cause_list_html(list: &CauseListDisplay) -> String {
    let rows = if list.rows.is_empty() {
        r#"<tr><td colspan="6" class="text-center">No cases found</td></tr>"#.to_string()
    } else {
        list.rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    row.serial_no,
                    html_escape(&row.case_type),
                    html_escape(&row.case_number),
                    html_escape(&row.year),
                    html_escape(&row.parties),
                    html_escape(&row.purpose)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut header = format!(
        r#"<p><strong>Court:</strong> <span id="clResultCourt">{}</span></p>
<p><strong>Date:</strong> <span id="clResultDate">{}</span></p>"#,
        html_escape(&list.court),
        html_escape(&list.date)
    );
    if let Some(judge) = &list.judge {
        header.push_str(&format!(
            "\n<p><strong>Judge:</strong> {}</p>",
            html_escape(judge)
        ));
    }
    if let Some(court_hall) = &list.court_hall {
        header.push_str(&format!(
            "\n<p><strong>Court Hall:</strong> {}</p>",
            html_escape(court_hall)
        ));
    }

    format!(
        r#"<div id="causeListDetails">
{}
<table class="table table-striped">
<thead><tr><th>S.No</th><th>Case Type</th><th>Case Number</th><th>Year</th><th>Parties</th><th>Purpose</th></tr></thead>
<tbody id="causeListTable">
{}
</tbody>
</table>
</div>"#,
        header, rows
    )
}

pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">{}</div>"#,
        html_escape(message)
    )
}

pub fn court_options_text(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|option| {
            if option.value.is_empty() {
                option.label.clone()
            } else {
                format!("  - {}", option.label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn case_details_text(case: &CaseDisplay) -> String {
    let mut lines = vec![
        "Case Details".to_string(),
        field_line("Court", &case.court),
        field_line("Case Type", &case.case_type),
        field_line("Case Number", &case.case_number),
        field_line("Year", &case.year),
        field_line("Status", &case.status),
        field_line("Petitioner", &case.petitioner),
        field_line("Respondent", &case.respondent),
        field_line("Filing Date", &case.filing_date),
        field_line("Next Hearing", &case.next_hearing_date),
        String::new(),
        "Documents".to_string(),
    ];

    if case.documents.is_empty() {
        lines.push("  No documents available".to_string());
    } else {
        for row in &case.documents {
            lines.push(format!("  - {} (Date: {})", row.label, row.date));
            lines.push(format!(
                "    download: court-lookup download --case-id {} --document-type {}",
                row.case_id, row.doc_type
            ));
        }
    }

    lines.join("\n")
}

pub fn cause_list_text(list: &CauseListDisplay) -> String {
    let mut lines = vec![
        "Cause List".to_string(),
        field_line("Court", &list.court),
        field_line("Date", &list.date),
    ];
    if let Some(judge) = &list.judge {
        lines.push(field_line("Judge", judge));
    }
    if let Some(court_hall) = &list.court_hall {
        lines.push(field_line("Court Hall", court_hall));
    }
    lines.push(String::new());

    if list.rows.is_empty() {
        lines.push("  No cases found".to_string());
    } else {
        for row in &list.rows {
            let case_type = match &row.case_type_full {
                Some(full) => format!("{} ({})", row.case_type, full),
                None => row.case_type.clone(),
            };
            let mut line = format!(
                "  {}. {} {}/{}  {}  [{}]",
                row.serial_no, case_type, row.case_number, row.year, row.parties, row.purpose
            );
            if let Some(advocate) = &row.advocate {
                line.push_str(&format!("  Adv: {}", advocate));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn field_line(label: &str, value: &str) -> String {
    format!("  {:<14}{}", format!("{}:", label), value)
}
