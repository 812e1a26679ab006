//! Match feed file format.
//!
//! ```yaml
//! - { action: start,  home: Mexico, away: Canada }
//! - { action: update, home: Mexico, away: Canada, home_score: 0, away_score: 5 }
//! - { action: finish, home: Mexico, away: Canada }
//! ```

use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One line of a match feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum FeedEvent {
    Start {
        home: String,
        away: String,
    },
    /// Scores are signed so that negative values reach the validator.
    Update {
        home: String,
        away: String,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home: String,
        away: String,
    },
}

impl fmt::Display for FeedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedEvent::Start { home, away } => write!(f, "start {home} vs {away}"),
            FeedEvent::Update { home, away, home_score, away_score } => {
                write!(f, "update {home} {home_score} - {away} {away_score}")
            }
            FeedEvent::Finish { home, away } => write!(f, "finish {home} vs {away}"),
        }
    }
}

/// Reads and parses a feed from `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<Vec<FeedEvent>> {
    let (source, contents) = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read feed from stdin")?;
        ("<stdin>".to_string(), buf)
    } else {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read feed at {}", path.display()))?;
        (path.display().to_string(), contents)
    };
    parse(&contents).with_context(|| format!("failed to parse feed at {source}"))
}

/// Parses feed YAML. An empty document is an empty feed.
pub fn parse(contents: &str) -> Result<Vec<FeedEvent>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(contents)?)
}
