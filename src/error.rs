use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcrError {
    // Transport errors
    #[error("HTTP request failed: {context}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    // Data processing errors
    #[error("Failed to parse JSON: {context}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode report as JSON")]
    JsonEncode(#[from] serde_json::Error),

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),

    // Configuration errors
    #[error(
        "API key not provided: use --api-key flag or set TEMPORAL_API_KEY environment variable"
    )]
    ApiKeyMissing,

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Invalid {which} date '{input}': use YYYY-MM-DD format")]
    InvalidDate { which: &'static str, input: String },

    #[error("End date cannot be before start date")]
    InvalidDateRange,

    #[error("Invalid address '{address}'")]
    InvalidAddress { address: String },
}

pub type Result<T> = std::result::Result<T, TcrError>;
