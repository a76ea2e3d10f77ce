use serde::{Deserialize, Serialize};

/// One header cell as lifted from the HTML table, before round resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawColumn {
    pub format: String,
    pub label: String,
    pub round_name: Option<String>,
}

/// A decomposed leaderboard column. `round_id == None` means a summary
/// column; otherwise the column is scoped to that round and `round_id` is
/// one of the tournament's round ids.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Column {
    pub key: String,
    pub format: String,
    pub label: String,
    pub index: usize,
    pub round_id: Option<i64>,
    pub round_name: Option<String>,
}

/// Broad display taxonomy for a column, keyed off its format string.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Position,
    Player,
    Thru,
    ToPar,
    Strokes,
    Other,
}

const TO_PAR_FORMATS: [&str; 4] = [
    "to-par-gross",
    "to-par-net",
    "total-to-par-gross",
    "total-to-par-net",
];
const STROKES_FORMATS: [&str; 4] = ["round-total", "total-gross", "total-net", "total"];

impl Column {
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        let format = self.format.to_ascii_lowercase();
        match format.as_str() {
            "position" => ColumnType::Position,
            "player" => ColumnType::Player,
            "thru" => ColumnType::Thru,
            f if TO_PAR_FORMATS.contains(&f) => ColumnType::ToPar,
            f if STROKES_FORMATS.contains(&f) => ColumnType::Strokes,
            _ => ColumnType::Other,
        }
    }

    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.round_id.is_none()
    }

    #[must_use]
    pub fn is_round(&self) -> bool {
        self.round_id.is_some()
    }
}

/// The full column structure of a leaderboard: tournament-wide summary
/// columns followed by one group per round, in round order. Every round
/// appears even when no HTML column resolved to it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColumnSet {
    pub summary: Vec<Column>,
    pub rounds: Vec<RoundColumns>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundColumns {
    pub id: i64,
    pub name: String,
    pub in_progress: bool,
    pub columns: Vec<Column>,
}

impl ColumnSet {
    /// All columns in display order: summary first, then each round group.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.summary
            .iter()
            .chain(self.rounds.iter().flat_map(|r| r.columns.iter()))
    }
}
