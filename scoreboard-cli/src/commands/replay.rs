//! `scoreboard replay <FEED>` — apply a match feed and print the summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use scoreboard_core::{Scoreboard, ScoreboardError, Summary};

use crate::feed::{self, FeedEvent};

/// Arguments for `scoreboard replay`.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to a YAML match feed, or `-` to read from stdin.
    pub feed: PathBuf,

    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Stop at the first rejected event and exit with an error.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "home")]
    home: String,
    #[tabled(rename = "score")]
    score: String,
    #[tabled(rename = "away")]
    away: String,
}

impl ReplayArgs {
    pub fn run(self) -> Result<()> {
        let events = feed::load(&self.feed)?;
        let board = Scoreboard::new();

        let mut rejected = 0usize;
        for (index, event) in events.iter().enumerate() {
            if let Err(err) = apply(&board, event) {
                if self.strict {
                    return Err(err).with_context(|| {
                        format!("event #{} ({event}) was rejected", index + 1)
                    });
                }
                rejected += 1;
                eprintln!(
                    "{} event #{} ({event}): {err}",
                    "rejected".yellow().bold(),
                    index + 1
                );
            }
        }
        eprintln!("applied {} event(s), {rejected} rejected", events.len());

        let summary = board.summary();
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("failed to serialize summary JSON")?
            );
        } else {
            print_table(&summary);
        }
        Ok(())
    }
}

fn apply(board: &Scoreboard, event: &FeedEvent) -> Result<(), ScoreboardError> {
    tracing::debug!(%event, "applying feed event");
    match event {
        FeedEvent::Start { home, away } => board.start_match(home, away).map(|_| ()),
        FeedEvent::Update { home, away, home_score, away_score } => board
            .update_score(home, away, *home_score, *away_score)
            .map(|_| ()),
        FeedEvent::Finish { home, away } => {
            // Finishing an unknown match is a logged no-op, not a rejection.
            board.finish_match(home, away);
            Ok(())
        }
    }
}

fn print_table(summary: &Summary) {
    if summary.is_empty() {
        println!("No matches in progress.");
        return;
    }

    let rows: Vec<SummaryRow> = summary
        .iter()
        .enumerate()
        .map(|(i, m)| SummaryRow {
            rank: i + 1,
            home: m.home().to_string(),
            score: format!("{} - {}", m.home_score(), m.away_score()),
            away: m.away().to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
