use crate::model::{RoundMeta, RoundProgress, Row, Tournament};

use super::cell::Cell;

impl Tournament {
    /// The first round flagged in-progress, when there is one.
    #[must_use]
    pub fn in_progress_round(&self) -> Option<&RoundMeta> {
        self.meta.rounds.iter().find(|r| r.in_progress)
    }

    /// A row's progress in the currently in-progress round. `None` when no
    /// round is in progress, which makes all three predicates false.
    #[must_use]
    pub fn progress_of(&self, row: &Row) -> Option<RoundProgress> {
        let round = self.in_progress_round()?;
        Some(
            row.scorecard(round.id)
                .map_or(RoundProgress::NotStarted, |sc| sc.progress()),
        )
    }

    #[must_use]
    pub fn playing(&self, row: &Row) -> bool {
        self.progress_of(row) == Some(RoundProgress::Playing)
    }

    #[must_use]
    pub fn finished(&self, row: &Row) -> bool {
        self.progress_of(row) == Some(RoundProgress::Finished)
    }

    #[must_use]
    pub fn not_started(&self, row: &Row) -> bool {
        self.progress_of(row) == Some(RoundProgress::NotStarted)
    }

    /// All cells for a row in this tournament's column order.
    #[must_use]
    pub fn cells<'a>(&'a self, row: &Row) -> Vec<Cell<'a>> {
        row.cells(&self.columns)
    }
}
