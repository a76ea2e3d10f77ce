use serde::{Deserialize, Serialize};

/// Out/in/total stroke counts for one round. Any of the three can be
/// missing for a round the player never reached.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScoreTotals {
    pub out: Option<i64>,
    #[serde(rename = "in")]
    pub in_: Option<i64>,
    pub total: Option<i64>,
}

/// Hole-by-hole arrays for one round. Index = hole number; `None` marks an
/// unplayed hole. Length follows the course (18 in all observed data) and
/// is never assumed beyond "ordered by hole".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HoleScores {
    #[serde(default)]
    pub gross_scores: Vec<Option<i64>>,
    #[serde(default)]
    pub net_scores: Vec<Option<i64>>,
    #[serde(default)]
    pub to_par_gross: Vec<Option<i64>>,
    #[serde(default)]
    pub to_par_net: Vec<Option<i64>>,
    #[serde(default)]
    pub totals: ScoreTotals,
}

impl HoleScores {
    /// True when at least one gross hole score was recorded, i.e. the
    /// player actually hit a ball in this round.
    #[must_use]
    pub fn has_hole_data(&self) -> bool {
        self.gross_scores.iter().any(Option::is_some)
    }
}

/// Where a player stands in one round.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundProgress {
    NotStarted,
    Playing,
    Finished,
}

/// The normalized scoring detail for one player in one round:
/// progress metadata from the payload's per-round record plus the
/// hole-by-hole arrays and totals.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Scorecard {
    pub thru: Option<String>,
    pub score: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub scores: HoleScores,
}

const FINISHED_STATUSES: [&str; 3] = ["completed", "verified", "complete"];

impl Scorecard {
    /// Three-state round progress. `thru == "F"` or a finished status means
    /// the round is done; a blank `thru` with a recorded round total is a
    /// historical round whose progress metadata was never populated, which
    /// also counts as finished. A plain non-negative integer `thru` means
    /// play is underway.
    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        let thru = self.thru.as_deref().unwrap_or("").trim();
        if thru == "F" {
            return RoundProgress::Finished;
        }
        if let Some(status) = self.status.as_deref() {
            if FINISHED_STATUSES
                .iter()
                .any(|s| status.eq_ignore_ascii_case(s))
            {
                return RoundProgress::Finished;
            }
        }
        if thru.is_empty() {
            if self.scores.totals.total.is_some() {
                return RoundProgress::Finished;
            }
            return RoundProgress::NotStarted;
        }
        if thru.chars().all(|c| c.is_ascii_digit()) {
            return RoundProgress::Playing;
        }
        RoundProgress::NotStarted
    }

    /// Sum of the recorded per-hole to-par-gross entries, or `None` when
    /// nothing has been recorded yet.
    #[must_use]
    pub fn total_to_par(&self) -> Option<i64> {
        let mut saw_any = false;
        let mut sum = 0;
        for entry in self.scores.to_par_gross.iter().flatten() {
            saw_any = true;
            sum += entry;
        }
        if saw_any { Some(sum) } else { None }
    }

    #[must_use]
    pub fn has_hole_data(&self) -> bool {
        self.scores.has_hole_data()
    }
}
