//! Ranked, read-only view of the board.

use std::cmp::Ordering;
use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::types::{Match, TeamName};

/// Read-only copy of one match as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    home: TeamName,
    away: TeamName,
    home_score: u32,
    away_score: u32,
}

impl MatchSnapshot {
    pub fn home(&self) -> &TeamName {
        &self.home
    }

    pub fn away(&self) -> &TeamName {
        &self.away
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl From<&Match> for MatchSnapshot {
    fn from(m: &Match) -> Self {
        Self {
            home: m.home.clone(),
            away: m.away.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
        }
    }
}

/// Matches ordered by total score (highest first), ties broken by the most
/// recently started match first.
///
/// Immutable once built; clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    entries: Arc<[MatchSnapshot]>,
}

impl Summary {
    /// Ranks `matches`. Sequence numbers are unique, so the order is total.
    pub fn rank(mut matches: Vec<Match>) -> Self {
        matches.sort_by(ranking);
        Self {
            entries: matches.iter().map(MatchSnapshot::from).collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchSnapshot> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MatchSnapshot> {
        self.entries.get(index)
    }

    pub fn as_slice(&self) -> &[MatchSnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for Summary {
    type Output = MatchSnapshot;

    fn index(&self, index: usize) -> &MatchSnapshot {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a MatchSnapshot;
    type IntoIter = std::slice::Iter<'a, MatchSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

fn ranking(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.sequence.cmp(&a.sequence))
}
