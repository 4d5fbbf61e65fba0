use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

/// Opponent hole counts split by how they score against one hole
///
/// `better` opponents beat the hole, `worse` ones lose to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub better: u64,
    pub same: u64,
    pub worse: u64,
    pub total: u64,
}

impl Tally {
    /// Adds `count` opponents whose score compares to ours by `ordering`
    pub fn record(&mut self, ordering: Ordering, count: u64) {
        match ordering {
            Ordering::Greater => self.better += count,
            Ordering::Equal => self.same += count,
            Ordering::Less => self.worse += count,
        }
        self.total += count;
    }

    /// Divides by the total, an empty tally has no outcome to report
    pub fn outcome(&self) -> Outcome {
        if self.total == 0 {
            return Outcome::default();
        }
        let total = self.total as f64;
        Outcome {
            win: self.worse as f64 / total,
            tie: self.same as f64 / total,
            lose: self.better as f64 / total,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Tally) {
        self.better += other.better;
        self.same += other.same;
        self.worse += other.worse;
        self.total += other.total;
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(mut self, other: Tally) -> Tally {
        self += other;
        self
    }
}

/// Probability of winning, tying or losing against one random opponent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Outcome {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
}
