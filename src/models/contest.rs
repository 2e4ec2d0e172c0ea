//! Contest data structures.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
}

/// A contest snapshot from the contest list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    /// Contest unique identifier
    pub id: i64,

    /// Contest display name
    pub name: String,

    /// Current lifecycle phase
    pub phase: ContestPhase,
}
