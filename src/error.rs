use thiserror::Error;

use crate::application::pipeline::PipelineFailure;
use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure to pull a typed JSON object out of free-form model output.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoJson,

    #[error("invalid JSON in response: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// Intent extraction failed; the market cannot be processed.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("inference call failed: {0}")]
    Inference(#[source] Box<Error>),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("expected exactly two teams, got {count}")]
    TeamCount { count: usize },

    #[error("team name at position {index} is empty")]
    EmptyTeam { index: usize },
}

/// Outcome extraction failed; the market must not be settled.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("inference call failed: {0}")]
    Inference(#[source] Box<Error>),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("outcome '{outcome}' is not one of {outcomes:?}")]
    OutcomeNotInVocabulary {
        outcome: String,
        outcomes: Vec<String>,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A single market run ended without a result.
    #[error(transparent)]
    Pipeline(Box<PipelineFailure>),

    #[error("{operation} timed out after {secs}s")]
    Timeout { operation: &'static str, secs: u64 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<PipelineFailure> for Error {
    fn from(failure: PipelineFailure) -> Self {
        Self::Pipeline(Box::new(failure))
    }
}
