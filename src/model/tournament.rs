use serde::{Deserialize, Serialize};

use super::column::ColumnSet;
use super::round::RoundMeta;
use super::row::Row;

/// Tournament-level metadata. Name, adjusted flag and the round list come
/// from the scoring payload; the cut text comes from the HTML table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TournamentMeta {
    pub tournament_id: i64,
    pub name: String,
    pub cut_text: Option<String>,
    pub adjusted: bool,
    pub rounds: Vec<RoundMeta>,
}

/// One reconciled leaderboard: metadata, the decomposed column structure,
/// and one row per player or team. Plain data, serializes directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tournament {
    pub meta: TournamentMeta,
    pub columns: ColumnSet,
    pub rows: Vec<Row>,
}
