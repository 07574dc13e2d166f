pub(crate) mod matches;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SimulatorError};

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching resource");

    let response = client.get(url).send().await.map_err(|e| SimulatorError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SimulatorError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| SimulatorError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    decode_json(url, &body)
}

/// Decode a response body, failing the whole body on any shape mismatch.
pub(crate) fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| SimulatorError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
