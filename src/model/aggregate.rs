use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::scorecard::HoleScores;

/// One round's progress record inside an aggregate, straight from the
/// scoring payload.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AggregateRound {
    pub thru: Option<String>,
    pub score: Option<String>,
    pub total: Option<String>,
    pub status: Option<String>,
}

/// One player-or-team scoring record ("aggregate" in the payload's terms).
/// `current_round_scores` holds the hole arrays for whichever round the
/// payload was fetched for; earlier rounds live in
/// `previous_rounds_scores`, keyed by round id.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Aggregate {
    pub id: String,
    pub member_ids: Vec<String>,
    pub rounds: AHashMap<i64, AggregateRound>,
    pub current_round_scores: HoleScores,
    pub previous_rounds_scores: AHashMap<i64, HoleScores>,
}
