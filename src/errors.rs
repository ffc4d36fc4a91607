use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Advisory fields whose markers must be present in the bulletin text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pressure,
    Wind,
    Location,
    IssueTime,
    Movement,
    Changes,
    Summary,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Field::Pressure  => write!(f, "pressure"),
            Field::Wind      => write!(f, "wind"),
            Field::Location  => write!(f, "location"),
            Field::IssueTime => write!(f, "issue time"),
            Field::Movement  => write!(f, "movement"),
            Field::Changes   => write!(f, "changes with this advisory"),
            Field::Summary   => write!(f, "summary"),
        }
    }
}

/// Failures while extracting a record from an advisory that was found in the feed
#[derive(Error, Debug, PartialEq)]
pub enum ExtractError {
    #[error("ExtractError::MissingField: no {field} marker in advisory text")]
    MissingField { field: Field },
    #[error("ExtractError::MalformedNumber: {field} token '{token}' is not a number")]
    MalformedNumber { field: Field, token: String },
}

impl ExtractError {
    pub fn missing(field: Field) -> ExtractError {
        ExtractError::MissingField { field }
    }

    pub fn malformed(field: Field, token: &str) -> ExtractError {
        ExtractError::MalformedNumber { field, token: token.to_string() }
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("FeedError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("FeedError::Document: {0}")]
    Document(String),
}

/// Either side of a pipeline run: getting the entries or extracting from them
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::Invalid: {0}")]
    Invalid(String),
}

impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Invalid(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("SnapshotError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("SnapshotError::Document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("SnapshotError::Pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);

impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}
