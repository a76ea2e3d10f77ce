use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeaderboardError, Result};
use crate::model::{Aggregate, AffiliationText, HoleScores, RoundMeta, Scorecard};
use crate::parse::html::ParsedHtml;
use crate::parse::json::ScoringPayload;

/// Tournament metadata after reconciliation. Each source is authoritative
/// for different fields: name/adjusted/rounds from JSON, cut text from HTML.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardMeta {
    pub name: String,
    pub adjusted: bool,
    pub cut_text: Option<String>,
    pub rounds: Vec<RoundMeta>,
}

/// One row with the HTML fields copied verbatim and a scorecard per round
/// the payload had data for. Rounds without data are omitted, never
/// zero-filled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MergedRow {
    pub id: String,
    pub name: String,
    pub player_ids: Vec<String>,
    pub affiliation: Option<AffiliationText>,
    pub cut: bool,
    pub cells: Vec<String>,
    pub scorecards: BTreeMap<i64, Scorecard>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MergedBoard {
    pub meta: BoardMeta,
    pub rows: Vec<MergedRow>,
}

/// Reconciles the two parsed documents for the round the JSON payload was
/// fetched for.
///
/// This is the system's core correctness check: both sources must describe
/// the same leaderboard snapshot.
///
/// # Errors
///
/// Returns `Err` when an HTML row has no matching aggregate, or when a
/// row's player-id set differs from its aggregate's member-id set.
pub fn merge(
    html: &ParsedHtml,
    payload: &ScoringPayload,
    fetched_round_id: i64,
) -> Result<MergedBoard> {
    let mut rows = Vec::with_capacity(html.rows.len());

    for raw in &html.rows {
        let aggregate =
            payload
                .aggregates
                .get(&raw.id)
                .ok_or_else(|| LeaderboardError::UnknownAggregate {
                    id: raw.id.clone(),
                    name: raw.name.clone(),
                })?;

        let html_ids: BTreeSet<&str> = raw.player_ids.iter().map(String::as_str).collect();
        let json_ids: BTreeSet<&str> = aggregate.member_ids.iter().map(String::as_str).collect();
        if html_ids != json_ids {
            return Err(LeaderboardError::MemberMismatch {
                id: raw.id.clone(),
                name: raw.name.clone(),
                html_ids: html_ids.iter().map(|s| (*s).to_string()).collect(),
                json_ids: json_ids.iter().map(|s| (*s).to_string()).collect(),
            });
        }

        rows.push(MergedRow {
            id: raw.id.clone(),
            name: raw.name.clone(),
            player_ids: raw.player_ids.clone(),
            affiliation: raw.affiliation.clone(),
            cut: raw.cut,
            cells: raw.cells.clone(),
            scorecards: build_scorecards(aggregate, &payload.rounds, fetched_round_id),
        });
    }

    debug!(rows = rows.len(), fetched_round_id, "merged leaderboard");
    Ok(MergedBoard {
        meta: BoardMeta {
            name: payload.name.clone(),
            adjusted: payload.adjusted,
            cut_text: html.cut_text.clone(),
            rounds: payload.rounds.clone(),
        },
        rows,
    })
}

fn build_scorecards(
    aggregate: &Aggregate,
    rounds: &[RoundMeta],
    fetched_round_id: i64,
) -> BTreeMap<i64, Scorecard> {
    let mut scorecards = BTreeMap::new();
    for round in rounds {
        let scores: Option<&HoleScores> = if round.id == fetched_round_id {
            Some(&aggregate.current_round_scores)
        } else {
            aggregate.previous_rounds_scores.get(&round.id)
        };
        let Some(scores) = scores else {
            continue;
        };
        let progress = aggregate.rounds.get(&round.id);
        scorecards.insert(
            round.id,
            Scorecard {
                thru: progress.and_then(|p| p.thru.clone()),
                score: progress.and_then(|p| p.score.clone()),
                status: progress.and_then(|p| p.status.clone()),
                scores: scores.clone(),
            },
        );
    }
    scorecards
}
