// src/pipeline/aggregate.rs

//! Tag aggregation over contest standings.
//!
//! Every analyzed contest contributes to the global tag frequency. For
//! contests the handle actually entered, solved problems and "barrier"
//! problems additionally charge the participation counters. A barrier is
//! an unsolved problem at or before the participant's difficulty
//! frontier: everything unsolved below the last solved problem, plus the
//! next problem past it.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Contest, ContestPhase, ParticipantType, Standings};

/// Contest name substring marking throwaway test rounds.
const TRIAL_CONTEST_MARKER: &str = "trial contest";

/// A contest is analyzed only once it is finished and is not a trial round.
pub fn is_valid_contest(contest: &Contest) -> bool {
    contest.phase == ContestPhase::Finished && !contest.name.contains(TRIAL_CONTEST_MARKER)
}

/// Only live and virtual entries count as participation.
pub fn is_valid_party(participant_type: ParticipantType) -> bool {
    matches!(
        participant_type,
        ParticipantType::Virtual | ParticipantType::Contestant
    )
}

/// Barrier indices for a solved set.
///
/// Every unsolved index strictly before the last solved one, plus the
/// index just past it. An empty solved set puts the barrier at index 0.
/// The past-the-end index may exceed the problem list, in which case it
/// charges nothing.
pub fn barrier_indices(solved: &BTreeSet<usize>) -> BTreeSet<usize> {
    let mut barriers = BTreeSet::new();
    match solved.iter().next_back() {
        None => {
            barriers.insert(0);
        }
        Some(&last) => {
            for i in 0..last {
                if !solved.contains(&i) {
                    barriers.insert(i);
                }
            }
            barriers.insert(last + 1);
        }
    }
    barriers
}

/// What one contest contributed to the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestOutcome {
    pub participated: bool,
    pub solved_count: usize,
    pub problem_count: usize,
}

/// Per-tag counters accumulated over an analysis run.
///
/// For every tag: `participated_unsolved <= participated <= all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounters {
    all: BTreeMap<String, u64>,
    participated: BTreeMap<String, u64>,
    participated_unsolved: BTreeMap<String, u64>,
}

impl TagCounters {
    /// Record one contest's standings.
    ///
    /// The solved set is the union over all valid rows; duplicate rows
    /// are a data anomaly that is logged and tolerated.
    pub fn record_contest(&mut self, contest_id: i64, standings: &Standings) -> ContestOutcome {
        for problem in &standings.problems {
            for tag in &problem.tags {
                *self.all.entry(tag.clone()).or_default() += 1;
            }
        }

        let mut solved = BTreeSet::new();
        let mut valid_rows = 0usize;
        for row in &standings.rows {
            if !is_valid_party(row.party.participant_type) {
                continue;
            }
            valid_rows += 1;
            for (i, result) in row.problem_results.iter().enumerate() {
                if result.points > 0.0 {
                    solved.insert(i);
                }
            }
        }

        let outcome = ContestOutcome {
            participated: valid_rows > 0,
            solved_count: solved.len(),
            problem_count: standings.problems.len(),
        };

        if valid_rows == 0 {
            return outcome;
        }
        if valid_rows > 1 {
            log::warn!("Participating several times in contest with id = {contest_id}");
        }

        let barriers = barrier_indices(&solved);
        for (i, problem) in standings.problems.iter().enumerate() {
            let is_barrier = barriers.contains(&i);
            let is_solved = solved.contains(&i);
            for tag in &problem.tags {
                if is_barrier {
                    *self.participated_unsolved.entry(tag.clone()).or_default() += 1;
                }
                if is_barrier || is_solved {
                    *self.participated.entry(tag.clone()).or_default() += 1;
                }
            }
        }

        outcome
    }

    /// Global tag frequency over all analyzed contests.
    pub fn all(&self) -> &BTreeMap<String, u64> {
        &self.all
    }

    /// Tags on problems the handle solved or failed at the frontier.
    pub fn participated(&self) -> &BTreeMap<String, u64> {
        &self.participated
    }

    /// Tags on barrier problems only.
    pub fn participated_unsolved(&self) -> &BTreeMap<String, u64> {
        &self.participated_unsolved
    }

    /// Whether any recorded contest had participation.
    pub fn has_participation(&self) -> bool {
        !self.participated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Party, Problem, ProblemResult, StandingsRow};

    fn problem(tags: &[&str]) -> Problem {
        Problem {
            index: "A".to_string(),
            name: "Problem".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn row(participant_type: ParticipantType, points: &[f64]) -> StandingsRow {
        StandingsRow {
            party: Party { participant_type },
            problem_results: points.iter().map(|&points| ProblemResult { points }).collect(),
        }
    }

    fn standings(problems: Vec<Problem>, rows: Vec<StandingsRow>) -> Standings {
        Standings { problems, rows }
    }

    fn contest(phase: ContestPhase, name: &str) -> Contest {
        Contest {
            id: 1,
            name: name.to_string(),
            phase,
        }
    }

    #[test]
    fn barriers_with_nothing_solved() {
        let solved = BTreeSet::new();
        assert_eq!(barrier_indices(&solved), BTreeSet::from([0]));
    }

    #[test]
    fn barriers_skip_solved_and_append_frontier() {
        // solved {2, 4} among 6 problems: 0, 1, 3 unsolved below the
        // last solved index, 5 is the next unattempted one
        let solved = BTreeSet::from([2, 4]);
        assert_eq!(barrier_indices(&solved), BTreeSet::from([0, 1, 3, 5]));
    }

    #[test]
    fn unfinished_contest_is_invalid() {
        assert!(!is_valid_contest(&contest(
            ContestPhase::Coding,
            "Codeforces Round 100"
        )));
        assert!(is_valid_contest(&contest(
            ContestPhase::Finished,
            "Codeforces Round 100"
        )));
    }

    #[test]
    fn trial_contest_is_invalid() {
        assert!(!is_valid_contest(&contest(
            ContestPhase::Finished,
            "Div 2 trial contest Round"
        )));
    }

    #[test]
    fn practice_row_does_not_participate() {
        let mut counters = TagCounters::default();
        let outcome = counters.record_contest(
            1,
            &standings(
                vec![problem(&["dp"]), problem(&["graphs"])],
                vec![row(ParticipantType::Practice, &[500.0, 0.0])],
            ),
        );

        assert!(!outcome.participated);
        assert_eq!(outcome.solved_count, 0);
        assert!(counters.participated().is_empty());
        // Global frequency still counts the problems
        assert_eq!(counters.all().get("dp"), Some(&1));
        assert_eq!(counters.all().get("graphs"), Some(&1));
    }

    #[test]
    fn solved_and_barrier_problems_charge_participation() {
        let mut counters = TagCounters::default();
        // Problems: 0 solved, 1 unsolved barrier; 2 is past the
        // frontier and only counts globally
        let outcome = counters.record_contest(
            1,
            &standings(
                vec![problem(&["dp"]), problem(&["math"]), problem(&["fft"])],
                vec![row(ParticipantType::Contestant, &[500.0, 0.0, 0.0])],
            ),
        );

        assert!(outcome.participated);
        assert_eq!(outcome.solved_count, 1);
        assert_eq!(outcome.problem_count, 3);

        assert_eq!(counters.participated().get("dp"), Some(&1));
        assert_eq!(counters.participated().get("math"), Some(&1));
        assert_eq!(counters.participated().get("fft"), None);

        assert_eq!(counters.participated_unsolved().get("dp"), None);
        assert_eq!(counters.participated_unsolved().get("math"), Some(&1));
    }

    #[test]
    fn duplicate_rows_union_their_solved_sets() {
        let mut counters = TagCounters::default();
        let outcome = counters.record_contest(
            1,
            &standings(
                vec![problem(&["dp"]), problem(&["math"]), problem(&["greedy"])],
                vec![
                    row(ParticipantType::Contestant, &[500.0, 0.0, 0.0]),
                    row(ParticipantType::Virtual, &[0.0, 750.0, 0.0]),
                ],
            ),
        );

        assert!(outcome.participated);
        assert_eq!(outcome.solved_count, 2);
        // Union {0, 1}: barrier is just index 2
        assert_eq!(counters.participated_unsolved().get("greedy"), Some(&1));
        assert_eq!(counters.participated().get("dp"), Some(&1));
        assert_eq!(counters.participated().get("math"), Some(&1));
    }

    #[test]
    fn counters_respect_ordering_invariant() {
        let mut counters = TagCounters::default();
        counters.record_contest(
            1,
            &standings(
                vec![problem(&["dp", "math"]), problem(&["dp"]), problem(&["greedy"])],
                vec![row(ParticipantType::Contestant, &[0.0, 1000.0, 0.0])],
            ),
        );
        counters.record_contest(
            2,
            &standings(
                vec![problem(&["dp"]), problem(&["math"])],
                vec![row(ParticipantType::Practice, &[500.0, 0.0])],
            ),
        );

        for (tag, &all_count) in counters.all() {
            let participated = counters.participated().get(tag).copied().unwrap_or(0);
            let unsolved = counters.participated_unsolved().get(tag).copied().unwrap_or(0);
            assert!(unsolved <= participated, "tag {tag}");
            assert!(participated <= all_count, "tag {tag}");
        }
    }

    #[test]
    fn recording_is_deterministic() {
        let fixture = standings(
            vec![problem(&["dp"]), problem(&["math"]), problem(&["fft"])],
            vec![row(ParticipantType::Virtual, &[0.0, 250.0, 0.0])],
        );

        let mut first = TagCounters::default();
        let mut second = TagCounters::default();
        first.record_contest(1, &fixture);
        second.record_contest(1, &fixture);

        assert_eq!(first, second);
    }
}
