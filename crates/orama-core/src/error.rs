use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Invalid facets configuration format. Please provide a valid JSON object. ({0})")]
    FacetParse(String),

    #[error("{0}")]
    Search(String),
}

impl Error {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "ConfigurationError",
            Self::IndexNotFound(_) => "IndexNotFoundError",
            Self::FacetParse(_) => "FacetParseError",
            Self::Search(_) => "SearchError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// HTTP response attached to a failed remote call.
///
/// `body` is `None` when the response text could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: u16,
    pub status_text: String,
    pub body: Option<String>,
}

/// Failure reported by a [`crate::traits::SearchClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub message: String,
    pub http: Option<HttpFailure>,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), http: None }
    }

    #[must_use]
    pub fn with_http(mut self, http: HttpFailure) -> Self {
        self.http = Some(http);
        self
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClientError {}
