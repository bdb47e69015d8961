use crate::domain::beneficiary::FieldIssue;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    /// Login failure. The message is shown to the user verbatim.
    #[error("{0}")]
    Auth(String),
    /// A reference-data lookup the user can correct and retry.
    #[error("{0}")]
    Lookup(String),
    #[error("validation failed: {0}")]
    Validation(String),
    /// Field-level errors from the add-beneficiary form.
    #[error("beneficiary form invalid: {}", format_issues(.0))]
    BeneficiaryForm(Vec<FieldIssue>),
    #[error("reference data error: {0}")]
    ReferenceData(#[from] serde_json::Error),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}
