use std::collections::BTreeMap;

use crate::merge::MergedRow;
use crate::model::{Column, ColumnSet, Row, RowRound};

/// Position codes that get the duplicate-total/mis-tagged-status cleanup.
/// WD rows are exempt; their round values follow the withdrawal display
/// rule in the entity layer instead.
const CORRECTED_POSITIONS: [&str; 5] = ["CUT", "MC", "DQ", "NS", "NC"];

/// Status-code strings that sometimes leak into a round's total cell.
const STATUS_CODE_VALUES: [&str; 5] = ["CUT", "DQ", "MC", "NS", "NC"];

/// Maps one merged row's cells onto the decomposed column structure and
/// folds in the per-round scorecards.
#[must_use]
pub fn decompose_row(merged: &MergedRow, columns: &ColumnSet) -> Row {
    let summary = map_values(&merged.cells, &columns.summary);

    let mut rounds: BTreeMap<i64, RowRound> = BTreeMap::new();
    for group in &columns.rounds {
        let values = map_values(&merged.cells, &group.columns);
        let scorecard = merged.scorecards.get(&group.id).cloned();
        rounds.insert(group.id, RowRound { values, scorecard });
    }

    let mut row = Row {
        id: merged.id.clone(),
        name: merged.name.clone(),
        player_ids: merged.player_ids.clone(),
        affiliation: merged.affiliation.clone(),
        cut: merged.cut,
        summary,
        rounds,
    };
    correct_round_totals(&mut row);
    // a round that ends up with nothing in it is dropped, not zero-filled
    row.rounds
        .retain(|_, r| r.values.values().any(Option::is_some) || r.scorecard.is_some());
    row
}

fn map_values(cells: &[String], columns: &[Column]) -> BTreeMap<String, Option<String>> {
    columns
        .iter()
        .map(|col| (col.key.clone(), normalize_cell(cells.get(col.index))))
        .collect()
}

/// `"-"` is the HTML renderer's empty-cell sentinel; it and blank text
/// normalize to `None`.
fn normalize_cell(value: Option<&String>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value == "-" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Cleans two known upstream data bugs on eliminated-but-not-withdrawn
/// rows: a round total that duplicates the player's overall gross total
/// (unplayed rounds), and a round total holding a status-code string
/// instead of a score.
fn correct_round_totals(row: &mut Row) {
    let position = row
        .summary
        .get("position")
        .and_then(Option::as_deref)
        .unwrap_or("");
    if !CORRECTED_POSITIONS
        .iter()
        .any(|code| position.eq_ignore_ascii_case(code))
    {
        return;
    }

    let total_gross = row
        .summary
        .get("total_gross")
        .and_then(Option::as_deref)
        .map(str::to_string);

    for round in row.rounds.values_mut() {
        let Some(slot) = round.values.get_mut("total") else {
            continue;
        };
        let Some(total) = slot.as_deref() else {
            continue;
        };
        let duplicates_overall = total_gross.as_deref() == Some(total);
        let is_status_code = STATUS_CODE_VALUES
            .iter()
            .any(|code| total.eq_ignore_ascii_case(code));
        if duplicates_overall || is_status_code {
            *slot = None;
        }
    }
}
