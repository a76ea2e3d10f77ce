use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scorecard::Scorecard;

/// Affiliation text as rendered in the HTML row: a single string for an
/// individual, a list for a team row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AffiliationText {
    One(String),
    Team(Vec<String>),
}

impl AffiliationText {
    /// The affiliation strings in row order, teams flattened.
    #[must_use]
    pub fn entries(&self) -> Vec<&str> {
        match self {
            AffiliationText::One(s) => vec![s.as_str()],
            AffiliationText::Team(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// One data row as lifted from the HTML table. `cells` is ordered and
/// parallel to the header row; `cut` is true for every row below the cut
/// marker.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawRow {
    pub id: String,
    pub name: String,
    pub player_ids: Vec<String>,
    pub affiliation: Option<AffiliationText>,
    pub cells: Vec<String>,
    pub cut: bool,
}

/// One round's slice of a decomposed row: the mapped column values plus the
/// scorecard merged in from the scoring payload, when the payload had one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RowRound {
    pub values: BTreeMap<String, Option<String>>,
    pub scorecard: Option<Scorecard>,
}

/// One fully decomposed player/team row. Immutable once built; sorting a
/// tournament clones rows rather than mutating them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub player_ids: Vec<String>,
    pub affiliation: Option<AffiliationText>,
    pub cut: bool,
    pub summary: BTreeMap<String, Option<String>>,
    pub rounds: BTreeMap<i64, RowRound>,
}
