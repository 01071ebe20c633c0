use thiserror::Error;

/// Errors raised while turning raw input into a [`crate::Document`].
///
/// Scoring itself is total over a well-formed document and never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is valid JSON but does not have the shape of a document,
    /// e.g. `sections` is missing or `null`.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The input is not JSON.
    #[error("malformed document JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Error::InvalidDocument(err.to_string()),
            Category::Io => Error::Io(err.into()),
            Category::Syntax | Category::Eof => Error::Parse(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
