//! In-memory registry of active matches.
//!
//! # Invariants
//!
//! - At most one active match per team; `active_teams` mirrors the union of
//!   both sides of every stored match.
//! - Matches are keyed by [`MatchKey`], so lookups ignore argument order.
//! - `next_sequence` only moves forward. A removed match's sequence is never
//!   handed out again.
//!
//! Mutators take `&mut self`; callers sharing a registry across threads wrap
//! it in a lock (see [`crate::Scoreboard`]).

use std::collections::{HashMap, HashSet};

use crate::error::ScoreboardError;
use crate::types::{Match, MatchKey, TeamName};

#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: HashMap<MatchKey, Match>,
    active_teams: HashSet<TeamName>,
    next_sequence: u64,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Create
    // -----------------------------------------------------------------------

    /// Registers a new 0-0 match and assigns it the next sequence number.
    ///
    /// Expects names already checked by [`crate::validator::validate_new_match`].
    /// Still refuses anything that would break the occupancy invariant: an
    /// existing key yields `DuplicateKey`, a team busy elsewhere yields
    /// `ParticipantBusy`. The stored state is untouched in both cases.
    pub fn create(&mut self, home: TeamName, away: TeamName) -> Result<Match, ScoreboardError> {
        debug_assert_ne!(home, away, "validator must reject identical sides");

        let key = MatchKey::new(&home, &away);
        if self.matches.contains_key(&key) {
            tracing::warn!(%home, %away, "attempted to register duplicate match");
            return Err(ScoreboardError::DuplicateKey { home, away });
        }
        for team in [&home, &away] {
            if self.active_teams.contains(team) {
                tracing::warn!(%team, "team already in a match");
                return Err(ScoreboardError::ParticipantBusy { team: team.clone() });
            }
        }

        let created = Match {
            home,
            away,
            home_score: 0,
            away_score: 0,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.active_teams.insert(created.home.clone());
        self.active_teams.insert(created.away.clone());
        self.matches.insert(key, created.clone());
        Ok(created)
    }

    // -----------------------------------------------------------------------
    // 2. Update
    // -----------------------------------------------------------------------

    /// Replaces the scores of the match between `home` and `away`.
    ///
    /// The pair is found in either order, but scores are positional: the
    /// first score always lands on the stored home side. Sides and sequence
    /// never change.
    pub fn update(
        &mut self,
        home: &TeamName,
        away: &TeamName,
        home_score: u32,
        away_score: u32,
    ) -> Result<Match, ScoreboardError> {
        let key = MatchKey::new(home, away);
        let Some(existing) = self.matches.get_mut(&key) else {
            tracing::warn!(%home, %away, "attempted to update non-existent match");
            return Err(ScoreboardError::NotFound {
                home: home.clone(),
                away: away.clone(),
            });
        };

        existing.home_score = home_score;
        existing.away_score = away_score;
        Ok(existing.clone())
    }

    // -----------------------------------------------------------------------
    // 3. Remove
    // -----------------------------------------------------------------------

    /// Removes the match between `home` and `away`, returning its last state.
    ///
    /// A missing match is not an error: `None` is returned, a warning is
    /// logged, and nothing changes.
    pub fn remove(&mut self, home: &TeamName, away: &TeamName) -> Option<Match> {
        let key = MatchKey::new(home, away);
        match self.matches.remove(&key) {
            Some(removed) => {
                self.active_teams.remove(&removed.home);
                self.active_teams.remove(&removed.away);
                Some(removed)
            }
            None => {
                tracing::warn!(%home, %away, "attempted to remove non-existent match");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // 4. Queries
    // -----------------------------------------------------------------------

    /// Owned copy of every active match, in no particular order.
    pub fn list_all(&self) -> Vec<Match> {
        self.matches.values().cloned().collect()
    }

    /// Borrowing view of the active set, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    pub fn get(&self, home: &TeamName, away: &TeamName) -> Option<&Match> {
        self.matches.get(&MatchKey::new(home, away))
    }

    pub fn is_team_active(&self, team: &TeamName) -> bool {
        self.active_teams.contains(team)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
