//! Standings data structures.
//!
//! The standings payload pairs an ordered problem list with one row per
//! participating party. A row's `problem_results` align with `problems`
//! by ordinal position.

use serde::{Deserialize, Serialize};

/// How a party entered the contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Contestant,
    Practice,
    Virtual,
    Manager,
    OutOfCompetition,
}

/// The party a standings row belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub participant_type: ParticipantType,
}

/// Points gained on a single problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemResult {
    pub points: f64,
}

/// One row of the standings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub party: Party,
    pub problem_results: Vec<ProblemResult>,
}

/// A problem, positioned by index within the contest's problem list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Problem letter within the contest (e.g. "A")
    pub index: String,

    /// Problem title
    pub name: String,

    /// Topic labels (e.g. "dp", "graphs")
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Standings payload for one contest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    pub problems: Vec<Problem>,
    pub rows: Vec<StandingsRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standings_payload() {
        let standings: Standings = serde_json::from_str(
            r#"{
                "contest": {"id": 1, "name": "Round 1", "phase": "FINISHED"},
                "problems": [
                    {"index": "A", "name": "Watermelon", "tags": ["math", "brute force"]},
                    {"index": "B", "name": "Spreadsheets", "tags": ["implementation"]}
                ],
                "rows": [
                    {
                        "party": {"participantType": "CONTESTANT"},
                        "problemResults": [{"points": 500.0}, {"points": 0.0}]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(standings.problems.len(), 2);
        assert_eq!(standings.problems[0].tags, vec!["math", "brute force"]);
        assert_eq!(standings.rows.len(), 1);
        assert_eq!(
            standings.rows[0].party.participant_type,
            ParticipantType::Contestant
        );
        assert_eq!(standings.rows[0].problem_results[0].points, 500.0);
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let problem: Problem =
            serde_json::from_str(r#"{"index": "A", "name": "Untagged"}"#).unwrap();
        assert!(problem.tags.is_empty());
    }
}
