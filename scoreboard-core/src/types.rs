//! Domain types for the scoreboard.
//!
//! Team names are always stored trimmed; build them from raw input with
//! [`TeamName::normalized`].

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed team name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(pub String);

impl TeamName {
    /// Trims surrounding whitespace from raw caller input.
    pub fn normalized(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TeamName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TeamName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Which side of a match a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

// ---------------------------------------------------------------------------
// Match key
// ---------------------------------------------------------------------------

/// Order-independent identity of a pairing.
///
/// The two names are held in ascending order, so `MatchKey::new(a, b)` and
/// `MatchKey::new(b, a)` are equal and hash identically. Keeping both names
/// as separate fields means distinct pairs can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    low: TeamName,
    high: TeamName,
}

impl MatchKey {
    pub fn new(a: &TeamName, b: &TeamName) -> Self {
        if a <= b {
            Self { low: a.clone(), high: b.clone() }
        } else {
            Self { low: b.clone(), high: a.clone() }
        }
    }

    pub fn teams(&self) -> (&TeamName, &TeamName) {
        (&self.low, &self.high)
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Match record
// ---------------------------------------------------------------------------

/// One active match as held by the registry.
///
/// Only the scores ever change after creation; `sequence` records creation
/// order and is never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub(crate) home: TeamName,
    pub(crate) away: TeamName,
    pub(crate) home_score: u32,
    pub(crate) away_score: u32,
    pub(crate) sequence: u64,
}

impl Match {
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

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Combined goals, widened so two `u32::MAX` scores still add up.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.home, &self.away)
    }

    /// Whether `team` plays on either side of this match.
    pub fn involves(&self, team: &TeamName) -> bool {
        self.home == *team || self.away == *team
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
