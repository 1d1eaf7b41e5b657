pub mod controller;
pub mod render;

pub use crate::domain::directory::{CourtCategory, CourtDirectory, CourtEntry, SelectOption};
pub use crate::domain::display::{CaseDisplay, CauseListDisplay, CauseRow, DocumentRow};
pub use crate::domain::ports::{ConfigProvider, LookupView, Storage};
pub use crate::utils::error::Result;
