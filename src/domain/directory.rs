use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::{LookupError, Result};

/// First entry of every court dropdown, with an empty value.
pub const SELECT_COURT_PLACEHOLDER: &str = "Select Court Name";

/// The two court systems the lookup service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtCategory {
    High,
    District,
}

impl CourtCategory {
    /// Lenient parse for values coming from a selection widget, where
    /// an unrecognized value is an expected state rather than an error.
    pub fn parse(raw: &str) -> Option<CourtCategory> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(CourtCategory::High),
            "district" => Some(CourtCategory::District),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CourtCategory::High => "High",
            CourtCategory::District => "District",
        }
    }
}

impl FromStr for CourtCategory {
    type Err = LookupError;

    fn from_str(raw: &str) -> Result<Self> {
        CourtCategory::parse(raw).ok_or_else(|| LookupError::ValidationError {
            message: "Invalid court type. Use 'high' or 'district'".to_string(),
        })
    }
}

impl fmt::Display for CourtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourtCategory::High => write!(f, "high"),
            CourtCategory::District => write!(f, "district"),
        }
    }
}

/// One court with the code the service uses internally for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtEntry {
    pub name: String,
    pub code: String,
}

impl CourtEntry {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// An entry in a rendered selection list. `value` is empty for the
/// placeholder row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_COURT_PLACEHOLDER.to_string(),
        }
    }

    fn court(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

const HIGH_COURTS: &[(&str, &str)] = &[
    ("Allahabad", "1"),
    ("Bombay", "2"),
    ("Delhi", "3"),
    ("Madras", "4"),
    ("Karnataka", "5"),
    ("Madhya Pradesh", "6"),
    ("Gujarat", "7"),
    ("Calcutta", "8"),
    ("Patna", "9"),
    ("Rajasthan", "10"),
    ("Kerala", "11"),
    ("Punjab and Haryana", "12"),
    ("Telangana", "13"),
    ("Andhra Pradesh", "14"),
    ("Orissa", "15"),
    ("Jharkhand", "16"),
    ("Chhattisgarh", "17"),
    ("Uttarakhand", "18"),
    ("Himachal Pradesh", "19"),
    ("Jammu and Kashmir", "20"),
    ("Sikkim", "21"),
    ("Manipur", "22"),
    ("Meghalaya", "23"),
    ("Tripura", "24"),
    ("Guwahati", "25"),
];

const DISTRICT_COURTS: &[(&str, &str)] = &[
    ("Delhi", "1"),
    ("Mumbai", "2"),
    ("Chennai", "3"),
    ("Bangalore", "4"),
    ("Hyderabad", "5"),
    ("Ahmedabad", "6"),
    ("Kolkata", "7"),
    ("Pune", "8"),
    ("Jaipur", "9"),
    ("Lucknow", "10"),
    ("Chandigarh", "11"),
    ("Bhopal", "12"),
    ("Patna", "13"),
    ("Guwahati", "14"),
    ("Kochi", "15"),
];

const CASE_TYPES: &[(&str, &str)] = &[
    ("CRL.A", "Criminal Appeal"),
    ("CWP", "Civil Writ Petition"),
    ("CRM", "Criminal Miscellaneous"),
    ("WP", "Writ Petition"),
    ("CS", "Civil Suit"),
    ("SA", "Second Appeal"),
    ("CRA", "Criminal Revision Application"),
    ("CRLA", "Criminal Appeal"),
    ("MACA", "Motor Accident Claims Appeal"),
    ("FAO", "First Appeal from Order"),
];

/// The set of courts the service supports, keyed by category. Built
/// once at startup and never mutated afterwards, so it can be shared
/// freely across concurrent submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtDirectory {
    high_courts: Vec<CourtEntry>,
    district_courts: Vec<CourtEntry>,
}

impl Default for CourtDirectory {
    fn default() -> Self {
        Self {
            high_courts: entries_from(HIGH_COURTS),
            district_courts: entries_from(DISTRICT_COURTS),
        }
    }
}

fn entries_from(table: &[(&str, &str)]) -> Vec<CourtEntry> {
    table
        .iter()
        .map(|(name, code)| CourtEntry::new(name, code))
        .collect()
}

impl CourtDirectory {
    pub fn new(high_courts: Vec<CourtEntry>, district_courts: Vec<CourtEntry>) -> Self {
        Self {
            high_courts,
            district_courts,
        }
    }

    pub fn courts(&self, category: CourtCategory) -> &[CourtEntry] {
        match category {
            CourtCategory::High => &self.high_courts,
            CourtCategory::District => &self.district_courts,
        }
    }

    pub fn contains(&self, category: CourtCategory, court_name: &str) -> bool {
        self.courts(category)
            .iter()
            .any(|entry| entry.name == court_name)
    }

    pub fn code(&self, category: CourtCategory, court_name: &str) -> Option<&str> {
        self.courts(category)
            .iter()
            .find(|entry| entry.name == court_name)
            .map(|entry| entry.code.as_str())
    }

    /// Builds the selection list for a category: the placeholder first,
    /// then one option per court in directory order. An unrecognized
    /// category yields only the placeholder.
    pub fn options(&self, category: Option<CourtCategory>) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::placeholder()];
        if let Some(category) = category {
            options.extend(
                self.courts(category)
                    .iter()
                    .map(|entry| SelectOption::court(&entry.name)),
            );
        }
        options
    }

    /// Rejects court names that are not in the directory, with the same
    /// wording the service itself uses.
    pub fn validate_selection(&self, category: CourtCategory, court_name: &str) -> Result<()> {
        if self.contains(category, court_name) {
            return Ok(());
        }
        Err(LookupError::ValidationError {
            message: format!(
                "Court '{}' not found in supported {} Courts",
                court_name,
                category.label()
            ),
        })
    }

    /// Well-known case type abbreviations and their full names.
    pub fn case_types() -> &'static [(&'static str, &'static str)] {
        CASE_TYPES
    }
}
