//! Thread-safe façade over the validator and the registry.
//!
//! Every operation takes the registry lock once and does all of its work
//! inside that guard, so a check and the mutation it guards can never be
//! split by another caller.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::ScoreboardError;
use crate::registry::MatchRegistry;
use crate::summary::{MatchSnapshot, Summary};
use crate::types::TeamName;
use crate::validator;

static GLOBAL: Lazy<Scoreboard> = Lazy::new(Scoreboard::new);

/// Live scoreboard. Construct isolated instances with [`Scoreboard::new`], or
/// share the process-wide one through [`Scoreboard::global`].
#[derive(Debug, Default)]
pub struct Scoreboard {
    registry: Mutex<MatchRegistry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance, created on first access.
    pub fn global() -> &'static Scoreboard {
        &GLOBAL
    }

    /// Starts a 0-0 match between `home` and `away`.
    ///
    /// Fails with `EmptyIdentifier`, `IdenticalSides` or `ParticipantBusy`
    /// (checked in that order) without touching the board.
    pub fn start_match(&self, home: &str, away: &str) -> Result<MatchSnapshot, ScoreboardError> {
        let mut registry = self.registry.lock();
        let (home, away) = validator::validate_new_match(home, away, registry.iter())
            .map_err(|err| {
                tracing::debug!(error = %err, "start rejected");
                err
            })?;
        let created = registry.create(home, away)?;
        tracing::debug!(
            home = %created.home(),
            away = %created.away(),
            sequence = created.sequence(),
            "match started"
        );
        Ok(MatchSnapshot::from(&created))
    }

    /// Sets the score of an ongoing match. The pair may be named in either
    /// order; `home_score` always goes to the side that started at home.
    ///
    /// A negative score is rejected before the match is looked up.
    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<MatchSnapshot, ScoreboardError> {
        let mut registry = self.registry.lock();
        let (home_score, away_score) = validator::validate_score(home_score, away_score)
            .map_err(|err| {
                tracing::debug!(error = %err, "update rejected");
                err
            })?;
        let updated = registry.update(
            &TeamName::normalized(home),
            &TeamName::normalized(away),
            home_score,
            away_score,
        )?;
        tracing::debug!(
            home = %updated.home(),
            away = %updated.away(),
            home_score = updated.home_score(),
            away_score = updated.away_score(),
            "score updated"
        );
        Ok(MatchSnapshot::from(&updated))
    }

    /// Ends a match and returns its final state.
    ///
    /// Finishing a match that is not on the board is not an error; `None` is
    /// returned and the board is unchanged.
    pub fn finish_match(&self, home: &str, away: &str) -> Option<MatchSnapshot> {
        let removed = self
            .registry
            .lock()
            .remove(&TeamName::normalized(home), &TeamName::normalized(away))?;
        tracing::debug!(home = %removed.home(), away = %removed.away(), "match finished");
        Some(MatchSnapshot::from(&removed))
    }

    /// Current matches ranked by total score, most recent first on ties.
    pub fn summary(&self) -> Summary {
        let matches = self.registry.lock().list_all();
        Summary::rank(matches)
    }

    /// Whether `team` is playing in any active match.
    pub fn is_playing(&self, team: &str) -> bool {
        self.registry.lock().is_team_active(&TeamName::normalized(team))
    }

    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }
}
