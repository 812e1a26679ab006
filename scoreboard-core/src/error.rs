//! Error types for scoreboard-core.

use thiserror::Error;

use crate::types::{Side, TeamName};

/// Every way a scoreboard request can be rejected.
///
/// All variants are caller input errors: none is transient, and a rejected
/// request leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// A team name was empty or whitespace-only.
    #[error("{side} team name cannot be empty")]
    EmptyIdentifier { side: Side },

    /// Home and away name the same team.
    #[error("home and away teams must be different (got '{team}')")]
    IdenticalSides { team: TeamName },

    /// The team is already playing in an active match.
    #[error("team '{team}' is already in a match")]
    ParticipantBusy { team: TeamName },

    /// At least one of the proposed scores is below zero.
    #[error("scores must be non-negative (got {home}:{away})")]
    NegativeScore { home: i32, away: i32 },

    /// No active match exists for the pair, in either order.
    #[error("no active match between '{home}' and '{away}'")]
    NotFound { home: TeamName, away: TeamName },

    /// The registry already holds a match under the same pair key.
    #[error("a match between '{home}' and '{away}' is already registered")]
    DuplicateKey { home: TeamName, away: TeamName },
}

impl ScoreboardError {
    /// `true` for errors caused by the request itself. Currently every variant;
    /// callers should fix the input rather than retry.
    pub fn is_input_error(&self) -> bool {
        match self {
            ScoreboardError::EmptyIdentifier { .. }
            | ScoreboardError::IdenticalSides { .. }
            | ScoreboardError::ParticipantBusy { .. }
            | ScoreboardError::NegativeScore { .. }
            | ScoreboardError::NotFound { .. }
            | ScoreboardError::DuplicateKey { .. } => true,
        }
    }
}
