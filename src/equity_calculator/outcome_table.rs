use std::collections::HashMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use read_write::{LineRecord, RecordIO};

use super::outcome::{Outcome, Tally};
use super::{check_hole, EquityError};
use crate::cards::{get_key, Card, Key};

/// Preflop outcome of every hole, keyed by the hole's key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeTable {
    outcomes: HashMap<Key, Outcome>,
}

impl OutcomeTable {
    pub fn from_tallies(tallies: HashMap<Key, Tally>) -> Self {
        OutcomeTable {
            outcomes: tallies
                .into_iter()
                .map(|(key, tally)| (key, tally.outcome()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn get(&self, key: Key) -> Option<Outcome> {
        self.outcomes.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Outcome)> + '_ {
        self.outcomes.iter().map(|(&key, &outcome)| (key, outcome))
    }

    /// Outcome of a 2 card hole, in either card order
    pub fn lookup(&self, hole: &[Card]) -> Result<Outcome, EquityError> {
        check_hole(hole)?;
        let key = get_key(hole)?;
        self.get(key).ok_or(EquityError::OutcomeNotFound(key))
    }

    /// Reads a table written by `save`
    ///
    /// Every line is `key win tie lose` with the key in `0x` hex. A single
    /// malformed line rejects the whole file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EquityError> {
        let path = path.as_ref();
        let unavailable = |reason: String| EquityError::CacheUnavailable {
            path: path.display().to_string(),
            reason,
        };

        let mut file = File::open(path).map_err(|e| unavailable(e.to_string()))?;
        let records: Vec<OutcomeRecord> = file.read_records_from_file().map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                EquityError::CacheMalformed(e.to_string())
            } else {
                unavailable(e.to_string())
            }
        })?;

        let table = OutcomeTable {
            outcomes: records.into_iter().map(|r| (r.key, r.outcome)).collect(),
        };
        info!("loaded {} initial outcomes from {}", table.len(), path.display());
        Ok(table)
    }

    /// Writes one line per hole sorted by key, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EquityError> {
        let path = path.as_ref();
        let write_error = |e: std::io::Error| EquityError::CacheWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let mut records: Vec<OutcomeRecord> = self
            .iter()
            .map(|(key, outcome)| OutcomeRecord { key, outcome })
            .collect();
        records.sort_by_key(|r| r.key);

        let mut file = File::create(path).map_err(write_error)?;
        file.write_records_to_file(&records).map_err(write_error)?;
        info!("saved {} initial outcomes to {}", records.len(), path.display());
        Ok(())
    }
}

/// One line of the outcome table file
struct OutcomeRecord {
    key: Key,
    outcome: Outcome,
}

impl LineRecord for OutcomeRecord {
    const FIELDS: usize = 4;

    fn to_line(&self) -> String {
        format!(
            "{:#x} {} {} {}",
            self.key.0, self.outcome.win, self.outcome.tie, self.outcome.lose
        )
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let digits = fields[0]
            .strip_prefix("0x")
            .or_else(|| fields[0].strip_prefix("0X"))
            .ok_or_else(|| format!("key {:?} is missing its 0x prefix", fields[0]))?;
        let key = u64::from_str_radix(digits, 16)
            .map_err(|e| format!("key {:?}: {}", fields[0], e))?;
        let probability = |field: &str| {
            field
                .parse::<f64>()
                .map_err(|e| format!("probability {:?}: {}", field, e))
        };
        Ok(OutcomeRecord {
            key: Key(key),
            outcome: Outcome {
                win: probability(fields[1])?,
                tie: probability(fields[2])?,
                lose: probability(fields[3])?,
            },
        })
    }
}
