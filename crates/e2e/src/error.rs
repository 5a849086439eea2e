//! Error types for the board E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("no element matched selector: {0}")]
    LocatorNotFound(String),

    #[error("{page} page failed validation: no element matched {selector}")]
    Validation { page: &'static str, selector: String },

    #[error("project '{0}' is not selected")]
    ProjectNotSelected(String),

    #[error("no card titled '{title}' in {project} / {column}")]
    CardNotFound {
        title: String,
        project: String,
        column: String,
    },

    #[error("tag mismatch for card '{title}': expected {expected:?}, got {actual:?}")]
    TagMismatch {
        title: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("application not ready after {0} attempts")]
    AppNotReady(usize),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("could not start WebDriver session: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
