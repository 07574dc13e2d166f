use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::MatchList;

#[instrument(skip(client))]
pub(crate) async fn get_matches(client: &reqwest::Client, url: &str) -> Result<MatchList> {
    let matches: MatchList = api::get_json(client, url).await?;
    debug!(count = matches.len(), "decoded match list");
    Ok(matches)
}
