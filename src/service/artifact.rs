//! Artifact rating.
//!
//! An artifact substat's value is the sum of a handful of rolls, each one of a few
//! fixed increments. `ProcEvaluator` recovers how many rolls produced a value by an
//! exhaustive depth-first search over the roll population, treating any remainder
//! within `eps` of zero as explained. `ArtifactService` runs the search for every
//! substat of a rating request and renders the result as text.

use crate::{
    error::rating::RatingError,
    model::artifact::{EvaluationResult, ProcCount, RollPopulation, StatLine, SubstatTable},
    util::format::format_evaluation,
};

/// Tolerance for treating a remaining value as fully explained.
pub const PROC_EPSILON: f64 = 0.05;

/// Deepest recursion level that is still examined for a match.
pub const MAX_PROC_DEPTH: u32 = 9;

/// Default cap on recursive calls for a single search.
pub const DEFAULT_CALL_BUDGET: u64 = 2_000_000;

/// Only fully upgraded artifacts can be rated.
pub const RATED_LEVEL: i64 = 20;

/// Number of substats on a rated artifact.
pub const RATED_STAT_COUNT: usize = 4;

/// Count of rolls taken per population value, indexed like the population.
///
/// Mutated in place by the search and restored on backtrack, so after a search
/// returns it holds exactly what it held before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcAssignment {
    counts: Vec<u32>,
}

impl ProcAssignment {
    /// Zero counts for every value of `population`.
    pub fn zeroed(population: &RollPopulation) -> Self {
        Self {
            counts: vec![0; population.len()],
        }
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Total number of rolls in the assignment.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn increment(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    fn decrement(&mut self, index: usize) {
        self.counts[index] -= 1;
    }
}

/// Running state of one search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAccumulator {
    /// Proc count of the most recently visited match.
    pub result: ProcCount,
    /// Recursive calls made so far.
    pub calls: u64,
    /// Set once the call budget ran out; the search unwinds without visiting more nodes.
    pub exhausted: bool,
}

/// Bounded backtracking search for proc counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcEvaluator {
    pub eps: f64,
    pub max_depth: u32,
    pub call_budget: u64,
}

impl Default for ProcEvaluator {
    fn default() -> Self {
        Self {
            eps: PROC_EPSILON,
            max_depth: MAX_PROC_DEPTH,
            call_budget: DEFAULT_CALL_BUDGET,
        }
    }
}

impl ProcEvaluator {
    pub fn with_call_budget(call_budget: u64) -> Self {
        Self {
            call_budget,
            ..Self::default()
        }
    }

    /// Number of rolls from `population` that sum to `value`.
    ///
    /// # Returns
    /// - `ProcCount(Some(n))` - The last match visited in depth-first, population order
    /// - `ProcCount(None)` - No combination within the depth bound and call budget matched
    pub fn evaluate(&self, value: f64, population: &RollPopulation) -> ProcCount {
        let mut assignment = ProcAssignment::zeroed(population);
        let mut accumulator = SearchAccumulator::default();

        self.evaluate_procs(value, population, 0, &mut assignment, &mut accumulator);

        accumulator.result
    }

    /// One step of the search.
    ///
    /// A remainder within `eps` of zero overwrites `accumulator.result` with the
    /// assignment's total, so the last match visited wins rather than the smallest.
    /// Nodes deeper than `max_depth` are not examined. Every population value is
    /// strictly positive, so a remainder already below `-eps` can never come back
    /// into range and its subtree is skipped.
    pub fn evaluate_procs(
        &self,
        remaining: f64,
        population: &RollPopulation,
        depth: u32,
        assignment: &mut ProcAssignment,
        accumulator: &mut SearchAccumulator,
    ) {
        if accumulator.exhausted {
            return;
        }
        if accumulator.calls >= self.call_budget {
            accumulator.exhausted = true;
            return;
        }
        accumulator.calls += 1;

        if depth > self.max_depth {
            return;
        }

        if remaining.abs() <= self.eps {
            accumulator.result = ProcCount(Some(assignment.total()));
        }

        if remaining < -self.eps {
            return;
        }

        for (index, roll) in population.values().iter().enumerate() {
            assignment.increment(index);
            self.evaluate_procs(
                remaining - roll,
                population,
                depth + 1,
                assignment,
                accumulator,
            );
            assignment.decrement(index);

            if accumulator.exhausted {
                break;
            }
        }
    }
}

/// Rates artifacts against the configured roll populations.
pub struct ArtifactService<'a> {
    table: &'a SubstatTable,
    evaluator: &'a ProcEvaluator,
}

impl<'a> ArtifactService<'a> {
    pub fn new(table: &'a SubstatTable, evaluator: &'a ProcEvaluator) -> Self {
        Self { table, evaluator }
    }

    /// Evaluates the proc count of every substat of a level 20 artifact.
    ///
    /// # Arguments
    /// - `level` - Artifact level, must be 20
    /// - `stats` - Exactly four substat lines
    ///
    /// # Returns
    /// - `Ok(EvaluationResult)` - One entry per stat name, in request order
    /// - `Err(RatingError::InvalidLevel)` - Level other than 20
    /// - `Err(RatingError::WrongStatCount)` - Not exactly four substats
    /// - `Err(RatingError::UnknownStat)` - No population for a (stat, mode) pair
    pub fn rate_artifact(
        &self,
        level: i64,
        stats: &[StatLine],
    ) -> Result<EvaluationResult, RatingError> {
        if level != RATED_LEVEL {
            return Err(RatingError::InvalidLevel(level));
        }
        if stats.len() != RATED_STAT_COUNT {
            return Err(RatingError::WrongStatCount(stats.len()));
        }

        let mut result = EvaluationResult::default();
        for line in stats {
            let population = self.table.population(&line.stat, &line.mode).ok_or_else(|| {
                RatingError::UnknownStat {
                    stat: line.stat.clone(),
                    mode: line.mode.clone(),
                }
            })?;

            let count = self.evaluator.evaluate(line.value, population);
            result.insert(line.stat.clone(), count);
        }

        Ok(result)
    }

    /// Text form of `rate_artifact`: one `"<stat>: <count> rolls"` line per stat.
    ///
    /// Any rejected request yields an empty string.
    pub fn parse_artifact_info(&self, level: i64, stats: &[StatLine]) -> String {
        match self.rate_artifact(level, stats) {
            Ok(result) => format_evaluation(&result),
            Err(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::artifact::RawSubstatTable;

    fn population(values: &[f64]) -> RollPopulation {
        RollPopulation::new("test", "percent", values.to_vec()).unwrap()
    }

    fn table() -> SubstatTable {
        let mut raw = RawSubstatTable::new();
        for (stat, values) in [
            ("crit_rate", vec![2.72, 3.11, 3.5, 3.89]),
            ("crit_dmg", vec![5.44, 6.22, 6.99, 7.77]),
            ("atk", vec![4.08, 4.66, 5.25, 5.83]),
            ("energy_recharge", vec![4.53, 5.18, 5.83, 6.48]),
        ] {
            raw.insert(
                stat.to_string(),
                HashMap::from([("percent".to_string(), values)]),
            );
        }
        SubstatTable::from_raw(raw).unwrap()
    }

    fn request() -> Vec<StatLine> {
        vec![
            StatLine::new("crit_rate", "percent", 7.0),
            StatLine::new("crit_dmg", "percent", 16.32),
            StatLine::new("atk", "percent", 4.66),
            StatLine::new("energy_recharge", "percent", 11.66),
        ]
    }

    #[test]
    fn zero_remainder_is_zero_procs() {
        let evaluator = ProcEvaluator::default();
        assert_eq!(
            evaluator.evaluate(0.0, &population(&[1.0, 2.0])),
            ProcCount(Some(0))
        );
    }

    #[test]
    fn finds_combination_of_mixed_rolls() {
        // 1+1+1, 1+2 and 2+1 all match; 2+1 is visited last.
        let evaluator = ProcEvaluator::default();
        assert_eq!(
            evaluator.evaluate(3.0, &population(&[1.0, 2.0])),
            ProcCount(Some(2))
        );
    }

    #[test]
    fn recovers_roll_count_for_exact_sums() {
        // With rolls of 1.0 and 1.1 every sum of up to 9 rolls identifies its count.
        let evaluator = ProcEvaluator::default();
        let population = population(&[1.0, 1.1]);

        for n in 0..=9u32 {
            for small in 0..=n {
                let value = f64::from(small) * 1.0 + f64::from(n - small) * 1.1;
                assert_eq!(
                    evaluator.evaluate(value, &population),
                    ProcCount(Some(n)),
                    "value {} built from {} rolls",
                    value,
                    n
                );
            }
        }
    }

    #[test]
    fn tolerates_rounding_in_displayed_values() {
        let evaluator = ProcEvaluator::default();
        // 3.89 + 3.11 shown rounded on the artifact
        assert_eq!(
            evaluator.evaluate(7.0, &population(&[2.72, 3.11, 3.5, 3.89])),
            ProcCount(Some(2))
        );
        assert_eq!(
            evaluator.evaluate(10.5, &population(&[2.72, 3.11, 3.5, 3.89])),
            ProcCount(Some(3))
        );
    }

    #[test]
    fn unreachable_value_is_unmatched() {
        let evaluator = ProcEvaluator::default();
        let count = evaluator.evaluate(1.5, &population(&[2.72, 3.11, 3.5, 3.89]));
        assert_eq!(count, ProcCount::unmatched());
        assert_eq!(count.rolls(), 0);
    }

    #[test]
    fn depth_bound_limits_roll_count() {
        let evaluator = ProcEvaluator::default();
        let population = population(&[1.0]);

        assert_eq!(evaluator.evaluate(9.0, &population), ProcCount(Some(9)));
        assert_eq!(evaluator.evaluate(10.0, &population), ProcCount::unmatched());
    }

    #[test]
    fn search_leaves_assignment_unchanged() {
        let evaluator = ProcEvaluator::default();
        let population = population(&[2.72, 3.11, 3.5, 3.89]);

        for value in [0.0, 7.0, 13.3, 1.5, -4.0, 40.0] {
            let mut assignment = ProcAssignment::zeroed(&population);
            let mut accumulator = SearchAccumulator::default();
            evaluator.evaluate_procs(value, &population, 0, &mut assignment, &mut accumulator);
            assert_eq!(assignment.counts(), &[0, 0, 0, 0]);
        }
    }

    #[test]
    fn exhausted_budget_stops_search_and_restores_assignment() {
        let evaluator = ProcEvaluator::with_call_budget(5);
        let population = population(&[2.72, 3.11, 3.5, 3.89]);
        let mut assignment = ProcAssignment::zeroed(&population);
        let mut accumulator = SearchAccumulator::default();

        evaluator.evaluate_procs(20.0, &population, 0, &mut assignment, &mut accumulator);

        assert!(accumulator.exhausted);
        assert_eq!(accumulator.calls, 5);
        assert_eq!(accumulator.result, ProcCount::unmatched());
        assert_eq!(assignment.total(), 0);
    }

    #[test]
    fn rates_level_twenty_artifact() {
        let table = table();
        let evaluator = ProcEvaluator::default();
        let service = ArtifactService::new(&table, &evaluator);

        let result = service.rate_artifact(20, &request()).unwrap();

        assert_eq!(result.get("crit_rate"), Some(ProcCount(Some(2))));
        assert_eq!(result.get("crit_dmg"), Some(ProcCount(Some(3))));
        assert_eq!(result.get("atk"), Some(ProcCount(Some(1))));
        assert_eq!(result.get("energy_recharge"), Some(ProcCount(Some(2))));
    }

    #[test]
    fn formats_one_line_per_stat() {
        let table = table();
        let evaluator = ProcEvaluator::default();
        let service = ArtifactService::new(&table, &evaluator);

        let text = service.parse_artifact_info(20, &request());

        assert_eq!(
            text,
            "crit_rate: 2 rolls\ncrit_dmg: 3 rolls\natk: 1 rolls\nenergy_recharge: 2 rolls"
        );
    }

    #[test]
    fn rejects_wrong_level() {
        let table = table();
        let evaluator = ProcEvaluator::default();
        let service = ArtifactService::new(&table, &evaluator);

        for level in [0, 16, 19, 21] {
            assert_eq!(
                service.rate_artifact(level, &request()),
                Err(RatingError::InvalidLevel(level))
            );
            assert_eq!(service.parse_artifact_info(level, &request()), "");
        }
    }

    #[test]
    fn rejects_wrong_stat_count() {
        let table = table();
        let evaluator = ProcEvaluator::default();
        let service = ArtifactService::new(&table, &evaluator);

        let mut stats = request();
        stats.pop();
        assert_eq!(
            service.rate_artifact(20, &stats),
            Err(RatingError::WrongStatCount(3))
        );
        assert_eq!(service.parse_artifact_info(20, &stats), "");
        assert_eq!(service.parse_artifact_info(20, &[]), "");

        stats.push(StatLine::new("crit_rate", "percent", 3.89));
        stats.push(StatLine::new("atk", "percent", 4.08));
        assert_eq!(service.parse_artifact_info(20, &stats), "");
    }

    #[test]
    fn unknown_stat_yields_empty_text() {
        let table = table();
        let evaluator = ProcEvaluator::default();
        let service = ArtifactService::new(&table, &evaluator);

        let mut stats = request();
        stats[2] = StatLine::new("atk", "flat", 15.56);

        assert_eq!(
            service.rate_artifact(20, &stats),
            Err(RatingError::UnknownStat {
                stat: "atk".to_string(),
                mode: "flat".to_string(),
            })
        );
        assert_eq!(service.parse_artifact_info(20, &stats), "");
    }
}
