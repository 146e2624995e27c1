pub mod report;
pub mod types;

pub use report::{CrossReference, Report, ReportRow, NOT_FOUND_LOCATOR};
pub use types::{Field, FieldLabel, FieldType, Language, Obligation};
