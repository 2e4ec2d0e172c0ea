// src/pipeline/analyze.rs

//! Sequential analysis run over a handle's contest history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::pipeline::aggregate::{TagCounters, is_valid_contest};
use crate::services::{self, ApiClient};

/// Summary of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Contests returned by the list endpoint
    pub contest_count: usize,

    /// Contests that passed the validity filter and were fetched
    pub analyzed_count: usize,

    /// Contests the handle participated in
    pub participated_count: usize,
}

/// Result of an analysis run.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub counters: TagCounters,
    pub stats: RunStats,
}

/// Fetch and aggregate every finished contest for `handle`, one contest
/// at a time. The first fatal fetch error aborts the whole run.
pub async fn run_analysis(client: &ApiClient, handle: &str) -> Result<AnalysisOutcome> {
    let start_time = Utc::now();

    let contests = services::fetch_contests(client).await?;
    log::info!("Fetched {} contests", contests.len());

    let mut counters = TagCounters::default();
    let mut analyzed_count = 0;
    let mut participated_count = 0;

    for contest in &contests {
        if !is_valid_contest(contest) {
            continue;
        }

        let standings = services::fetch_standings(client, handle, contest.id).await?;
        let outcome = counters.record_contest(contest.id, &standings);
        analyzed_count += 1;

        if outcome.participated {
            participated_count += 1;
            log::info!(
                "Prepared contest {}: solved {} of {} problems",
                contest.id,
                outcome.solved_count,
                outcome.problem_count
            );
        }
    }

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        contest_count: contests.len(),
        analyzed_count,
        participated_count,
    };

    Ok(AnalysisOutcome { counters, stats })
}
