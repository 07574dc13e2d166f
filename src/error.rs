/// All errors that can occur while fetching or working with matches.
#[derive(thiserror::Error, Debug)]
pub enum SimulatorError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not match the expected match list shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The background fetch stopped before producing a result.
    #[error("fetch task ended without a result: {0}")]
    FetchTask(String),

    /// A refresh was requested outside a Tokio runtime.
    #[error("no tokio runtime to run the fetch on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// A position outside the collection was requested.
    #[error("index {index} out of range for {len} matches")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SimulatorError {
    /// Whether this error came from fetching the match list.
    ///
    /// Transport, status, body and decode failures all surface the same way
    /// to a user, so callers that only need to show a notification can branch
    /// on this instead of matching every variant.
    pub fn is_fetch_error(&self) -> bool {
        !matches!(self, SimulatorError::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
