use thiserror::Error;

/// Everything that can go wrong on the page. None of these are fatal: callers
/// log them and degrade to a static, visible, default-themed page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("unrecognized theme: {0:?}")]
    InvalidThemeSelection(String),
    #[error("no section registered with id {0:?}")]
    UnknownSectionTarget(String),
    #[error("viewport intersection observation is unavailable")]
    ObservationUnavailable,
    #[error("{0} contact form field(s) failed validation")]
    FormValidation(usize),
    #[error("a message is already being sent")]
    SubmissionPending,
    #[error("invalid page config: {0}")]
    Config(String),
}
