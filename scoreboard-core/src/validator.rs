//! Pure request checks, run before the registry is touched.
//!
//! Checks run in a fixed order and stop at the first violation, so the same
//! bad request always yields the same error.

use crate::error::ScoreboardError;
use crate::types::{Match, Side, TeamName};

/// Validates a proposed new match against the current active set.
///
/// Order: empty home, empty away, identical sides, busy home, busy away.
/// Names are compared after trimming. On success returns the normalized
/// `(home, away)` pair to hand to the registry.
pub fn validate_new_match<'a, I>(
    home: &str,
    away: &str,
    active: I,
) -> Result<(TeamName, TeamName), ScoreboardError>
where
    I: IntoIterator<Item = &'a Match>,
{
    let home = TeamName::normalized(home);
    let away = TeamName::normalized(away);

    if home.is_blank() {
        return Err(ScoreboardError::EmptyIdentifier { side: Side::Home });
    }
    if away.is_blank() {
        return Err(ScoreboardError::EmptyIdentifier { side: Side::Away });
    }
    if home == away {
        return Err(ScoreboardError::IdenticalSides { team: home });
    }

    // Home wins over away when both are busy, whatever the iteration order.
    let mut away_busy = false;
    for existing in active {
        if existing.involves(&home) {
            return Err(ScoreboardError::ParticipantBusy { team: home });
        }
        away_busy |= existing.involves(&away);
    }
    if away_busy {
        return Err(ScoreboardError::ParticipantBusy { team: away });
    }

    Ok((home, away))
}

/// Rejects negative scores. No upper bound is enforced.
///
/// Returns the scores converted to the stored representation.
pub fn validate_score(home: i32, away: i32) -> Result<(u32, u32), ScoreboardError> {
    match (u32::try_from(home), u32::try_from(away)) {
        (Ok(h), Ok(a)) => Ok((h, a)),
        _ => Err(ScoreboardError::NegativeScore { home, away }),
    }
}
