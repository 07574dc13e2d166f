use std::future::Future;

use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::MatchList;

/// Where the match list is published.
pub const MATCHES_URL: &str = "https://rafaelkenedy.github.io/matches-simulator-api/matches.json";

/// Anything that can produce the current list of matches.
///
/// [`MatchClient`] is the HTTP implementation. The board only depends on this
/// trait, so a canned or failing source can stand in for the network.
pub trait MatchSource {
    /// Fetch the full match list. Resolves exactly once per call.
    fn fetch_matches(&self) -> impl Future<Output = Result<MatchList>> + Send;
}

/// The main entry point for fetching matches over HTTP.
///
/// `MatchClient` wraps a [`reqwest::Client`] and decodes the published match
/// list into [`Match`](crate::Match) values.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> match_simulator::Result<()> {
/// use match_simulator::{MatchClient, MatchSource};
///
/// let client = MatchClient::new();
/// let matches = client.fetch_matches().await?;
/// println!("Found {} matches", matches.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MatchClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            endpoint: MATCHES_URL.to_string(),
        }
    }

    /// Fetch the match list from `endpoint` instead of [`MATCHES_URL`].
    ///
    /// ```
    /// use match_simulator::MatchClient;
    ///
    /// let client = MatchClient::new().with_endpoint("http://localhost:8080/matches.json");
    /// assert_eq!(client.endpoint(), "http://localhost:8080/matches.json");
    /// ```
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The URL the match list is fetched from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the match list.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn get_matches(&self) -> Result<MatchList> {
        api::matches::get_matches(&self.http, &self.endpoint).await
    }
}

impl Default for MatchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSource for MatchClient {
    async fn fetch_matches(&self) -> Result<MatchList> {
        self.get_matches().await
    }
}
