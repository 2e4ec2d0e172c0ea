// src/services/standings.rs

//! Standings fetcher.

use crate::error::Result;
use crate::models::Standings;
use crate::services::ApiClient;

/// Fetch standings for one handle in one contest.
///
/// Unofficial rows are requested so virtual participation shows up.
pub async fn fetch_standings(
    client: &ApiClient,
    handle: &str,
    contest_id: i64,
) -> Result<Standings> {
    let query =
        format!("contest.standings?contestId={contest_id}&showUnofficial=true&handles={handle}");
    client.get(&query).await
}
