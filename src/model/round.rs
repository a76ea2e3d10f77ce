use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tournament round as described by the scoring payload. At most one
/// round is expected to be `in_progress`, but nothing here enforces that;
/// consumers take the first one they find.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundMeta {
    pub id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub in_progress: bool,
}
