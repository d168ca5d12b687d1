use thiserror::Error;

/// Failure to retrieve the bulletin page. Always fatal for a run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("error while getting earthquakes from observatory, url={url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("observatory answered with HTTP {status}, url={url}")]
    Status { url: String, status: u16 },

    #[error("error while reading response from observatory, url={url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure to turn one bulletin line into a record. Contained per line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line does not look like an earthquake record")]
    NoMatch,

    #[error("error while parsing date of the earthquake datetime={value}: {reason}")]
    DateTime { value: String, reason: String },

    #[error("error while parsing {field} of the earthquake value={value}: {reason}")]
    Number {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown time zone {name}: {reason}")]
    Timezone { name: String, reason: String },
}

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuakeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuakeError::Fetch(_) => 1,
            QuakeError::ConfigError { .. }
            | QuakeError::InvalidConfigValueError { .. }
            | QuakeError::Parse(ParseError::Timezone { .. }) => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuakeError::Fetch(e) => format!("error while getting observatory page: {}", e),
            QuakeError::Parse(ParseError::Timezone { name, .. }) => {
                format!("time zone '{}' is not known to the time zone database", name)
            }
            QuakeError::ConfigError { message } => format!("invalid configuration: {}", message),
            QuakeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("invalid value '{}' for {}: {}", value, field, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeError>;
