use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decompose::column::decompose_columns;
use crate::decompose::row::decompose_row;
use crate::error::Result;
use crate::merge::merge;
use crate::model::{Tournament, TournamentMeta};
use crate::parse::html::parse_leaderboard_html;
use crate::parse::json::parse_scoring_json;

impl Tournament {
    /// Runs the full reconciliation pipeline for one tournament: parse
    /// both documents, validate and merge them, then decompose columns and
    /// rows into the queryable schema. `fetched_round_id` is the round the
    /// JSON payload was fetched for.
    ///
    /// # Errors
    ///
    /// Returns `Err` when either document is blank or malformed, or when
    /// the two documents disagree about the set of players.
    pub fn from_documents(
        tournament_id: i64,
        html: &str,
        json: &str,
        fetched_round_id: i64,
    ) -> Result<Tournament> {
        let parsed_html = parse_leaderboard_html(html)?;
        let payload = parse_scoring_json(json)?;
        let merged = merge(&parsed_html, &payload, fetched_round_id)?;

        let columns = decompose_columns(&parsed_html.columns, &merged.meta.rounds);
        let rows = merged
            .rows
            .iter()
            .map(|row| decompose_row(row, &columns))
            .collect();

        debug!(tournament_id, "assembled tournament");
        Ok(Tournament {
            meta: TournamentMeta {
                tournament_id,
                name: merged.meta.name,
                cut_text: merged.meta.cut_text,
                adjusted: merged.meta.adjusted,
                rounds: merged.meta.rounds,
            },
            columns,
            rows,
        })
    }
}

/// Which event and round a scoreboard was fetched for. Supplied by the
/// caller; neither input document carries it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventMeta {
    pub event_id: i64,
    pub event_name: String,
    pub round_id: i64,
    pub round_name: String,
}

/// The pair of already-fetched documents for one tournament.
#[derive(Clone, Copy, Debug)]
pub struct TournamentDocuments<'a> {
    pub tournament_id: i64,
    pub html: &'a str,
    pub json: &'a str,
}

/// Every tournament of one event/round, reconciled. This is the crate's
/// top-level output shape; it serializes directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub meta: EventMeta,
    pub tournaments: Vec<Tournament>,
}

impl Scoreboard {
    /// Builds a scoreboard from pre-fetched documents. Tournaments are
    /// processed independently; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns `Err` when any tournament's documents fail the pipeline.
    pub fn assemble(meta: EventMeta, documents: &[TournamentDocuments]) -> Result<Scoreboard> {
        let tournaments = documents
            .iter()
            .map(|d| Tournament::from_documents(d.tournament_id, d.html, d.json, meta.round_id))
            .collect::<Result<Vec<_>>>()?;
        Ok(Scoreboard { meta, tournaments })
    }
}
