//! Artifact substat models.
//!
//! A substat's observed value is the sum of some number of discrete rolls ("procs"),
//! each drawn from a small fixed population of legal increments. These types carry
//! the populations loaded from configuration and the results of a rating request.

use std::collections::{BTreeMap, HashMap};

use crate::error::resource::ResourceError;

/// Mode preferred by `SubstatTable::preferred_mode` when a stat offers it.
pub const PERCENT_MODE: &str = "percent";

/// Ordered set of legal per-roll increments for one (stat, mode) pair.
///
/// Construction rejects empty populations and values that are not strictly
/// positive, so every population handed to the evaluator upholds that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct RollPopulation {
    values: Vec<f64>,
}

impl RollPopulation {
    /// Validates and wraps roll values.
    ///
    /// # Arguments
    /// - `stat` - Stat name, used for error reporting only
    /// - `mode` - Mode name, used for error reporting only
    /// - `values` - Roll values in configuration order
    ///
    /// # Returns
    /// - `Ok(RollPopulation)` - All values are finite and > 0
    /// - `Err(ResourceError::InvalidPopulation)` - Empty population or a value <= 0
    pub fn new(stat: &str, mode: &str, values: Vec<f64>) -> Result<Self, ResourceError> {
        if values.is_empty() {
            return Err(ResourceError::InvalidPopulation {
                stat: stat.to_string(),
                mode: mode.to_string(),
                reason: "population is empty".to_string(),
            });
        }

        if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            return Err(ResourceError::InvalidPopulation {
                stat: stat.to_string(),
                mode: mode.to_string(),
                reason: format!("roll value {} is not strictly positive", bad),
            });
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Raw shape of `artifacts/substats.json`: stat name -> mode name -> roll values.
pub type RawSubstatTable = HashMap<String, HashMap<String, Vec<f64>>>;

/// All roll populations known to the bot, keyed by stat then mode.
#[derive(Debug, Clone, Default)]
pub struct SubstatTable {
    stats: BTreeMap<String, BTreeMap<String, RollPopulation>>,
}

impl SubstatTable {
    /// Builds a validated table from the raw JSON shape.
    ///
    /// # Returns
    /// - `Ok(SubstatTable)` - Every population passed validation
    /// - `Err(ResourceError::InvalidPopulation)` - First population that failed
    pub fn from_raw(raw: RawSubstatTable) -> Result<Self, ResourceError> {
        let mut stats = BTreeMap::new();

        for (stat, modes) in raw {
            let mut populations = BTreeMap::new();
            for (mode, values) in modes {
                let population = RollPopulation::new(&stat, &mode, values)?;
                populations.insert(mode, population);
            }
            stats.insert(stat, populations);
        }

        Ok(Self { stats })
    }

    pub fn population(&self, stat: &str, mode: &str) -> Option<&RollPopulation> {
        self.stats.get(stat).and_then(|modes| modes.get(mode))
    }

    /// Stat names in sorted order.
    pub fn stat_names(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// The mode used when a caller does not pick one.
    ///
    /// `"percent"` when the stat has it, otherwise the stat's first mode by name.
    pub fn preferred_mode(&self, stat: &str) -> Option<&str> {
        let modes = self.stats.get(stat)?;
        if modes.contains_key(PERCENT_MODE) {
            return Some(PERCENT_MODE);
        }
        modes.keys().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// One substat line of a rating request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub stat: String,
    pub mode: String,
    pub value: f64,
}

impl StatLine {
    pub fn new(stat: impl Into<String>, mode: impl Into<String>, value: f64) -> Self {
        Self {
            stat: stat.into(),
            mode: mode.into(),
            value,
        }
    }
}

/// Outcome of one proc search.
///
/// `None` means no combination of rolls within the search bounds explained the
/// value; it renders as zero rolls, but callers can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcCount(pub Option<u32>);

impl ProcCount {
    pub fn unmatched() -> Self {
        Self(None)
    }

    pub fn is_match(&self) -> bool {
        self.0.is_some()
    }

    /// Count shown to users, zero when nothing matched.
    pub fn rolls(&self) -> u32 {
        self.0.unwrap_or(0)
    }
}

/// Proc counts per stat for one artifact, in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationResult {
    entries: Vec<(String, ProcCount)>,
}

impl EvaluationResult {
    /// Records the count for `stat`, replacing an earlier entry with the same name in place.
    pub fn insert(&mut self, stat: String, count: ProcCount) {
        match self.entries.iter_mut().find(|(name, _)| *name == stat) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((stat, count)),
        }
    }

    pub fn get(&self, stat: &str) -> Option<ProcCount> {
        self.entries
            .iter()
            .find(|(name, _)| name == stat)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ProcCount)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
