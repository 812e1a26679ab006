//! Scoreboard core library — live match registry, validation, ranked summary.
//!
//! Public API surface:
//! - [`types`] — newtypes and the [`Match`] record
//! - [`error`] — [`ScoreboardError`]
//! - [`validator`] — pure checks run before any mutation
//! - [`registry`] — [`MatchRegistry`], the authoritative active set
//! - [`summary`] — [`Summary`], the ranked read-only view
//! - [`scoreboard`] — [`Scoreboard`], the thread-safe façade

pub mod error;
pub mod registry;
pub mod scoreboard;
pub mod summary;
pub mod types;
pub mod validator;

pub use error::ScoreboardError;
pub use registry::MatchRegistry;
pub use scoreboard::Scoreboard;
pub use summary::{MatchSnapshot, Summary};
pub use types::{Match, MatchKey, Side, TeamName};
