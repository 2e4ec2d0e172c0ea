// src/services/contests.rs

//! Contest list fetcher.

use crate::error::Result;
use crate::models::Contest;
use crate::services::ApiClient;

/// Fetch the full contest list, newest first as the API returns it.
///
/// No filtering happens here; the aggregation pass decides which
/// contests count.
pub async fn fetch_contests(client: &ApiClient) -> Result<Vec<Contest>> {
    client.get("contest.list").await
}
