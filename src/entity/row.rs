use crate::model::{Column, ColumnSet, ColumnType, Row, RowRound, Scorecard};
use crate::parse::affiliation::{Affiliation, parse_affiliation};
use crate::parse::name::{Name, parse_names};

use super::cell::{Cell, is_scored_value};

/// Codes that sort into the cut tier; the remaining eliminated codes fall
/// through to the catch-all tier.
pub const CUT_POSITIONS: [&str; 2] = ["CUT", "MC"];

impl Row {
    #[must_use]
    pub fn summary_value(&self, key: &str) -> Option<&str> {
        self.summary.get(key).and_then(Option::as_deref)
    }

    /// The row's leaderboard position: the value of its position-format
    /// column, when the table has one.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.summary_value("position")
    }

    fn position_in(&self, codes: &[&str]) -> bool {
        self.position()
            .is_some_and(|p| codes.iter().any(|code| p.eq_ignore_ascii_case(code)))
    }

    #[must_use]
    pub fn is_cut(&self) -> bool {
        self.position_in(&CUT_POSITIONS)
    }

    #[must_use]
    pub fn withdrew(&self) -> bool {
        self.position_in(&["WD"])
    }

    #[must_use]
    pub fn disqualified(&self) -> bool {
        self.position_in(&["DQ"])
    }

    #[must_use]
    pub fn no_show(&self) -> bool {
        self.position_in(&["NS"])
    }

    #[must_use]
    pub fn no_card(&self) -> bool {
        self.position_in(&["NC"])
    }

    #[must_use]
    pub fn eliminated(&self) -> bool {
        self.is_cut() || self.withdrew() || self.disqualified() || self.no_show() || self.no_card()
    }

    /// A missing position counts as competing.
    #[must_use]
    pub fn competing(&self) -> bool {
        !self.eliminated()
    }

    #[must_use]
    pub fn scorecard(&self, round_id: i64) -> Option<&Scorecard> {
        self.rounds.get(&round_id).and_then(|r| r.scorecard.as_ref())
    }

    #[must_use]
    pub fn round_value(&self, round_id: i64, key: &str) -> Option<&str> {
        self.rounds
            .get(&round_id)
            .and_then(|r| r.values.get(key))
            .and_then(Option::as_deref)
    }

    /// The displayable value for one column of this row, applying the
    /// withdrawal display rule: a withdrawn player shows the round total
    /// where one was recorded, `"WD"` in the round play was abandoned in,
    /// and nothing for rounds never reached. Summary strokes show `"WD"`,
    /// summary to-par shows nothing.
    #[must_use]
    pub fn cell_value(&self, column: &Column) -> Option<String> {
        let withdrawn = self.withdrew();
        if let Some(round_id) = column.round_id {
            if withdrawn && column.column_type() == ColumnType::Strokes {
                if let Some(total) = self
                    .round_value(round_id, "total")
                    .filter(|t| is_scored_value(t))
                {
                    return Some(total.to_string());
                }
                let played = self
                    .scorecard(round_id)
                    .is_some_and(Scorecard::has_hole_data);
                return played.then(|| "WD".to_string());
            }
            return self
                .round_value(round_id, &column.key)
                .map(str::to_string);
        }
        if withdrawn {
            return match column.column_type() {
                ColumnType::ToPar => None,
                ColumnType::Strokes => Some("WD".to_string()),
                _ => self.summary_value(&column.key).map(str::to_string),
            };
        }
        self.summary_value(&column.key).map(str::to_string)
    }

    /// All cells for this row, in tournament column order (summary columns
    /// first, then each round's columns).
    #[must_use]
    pub fn cells<'a>(&self, columns: &'a ColumnSet) -> Vec<Cell<'a>> {
        columns
            .iter()
            .map(|column| Cell {
                value: self.cell_value(column),
                to_par: self.cell_to_par(column),
                column,
            })
            .collect()
    }

    fn cell_to_par(&self, column: &Column) -> Option<i64> {
        match column.column_type() {
            ColumnType::ToPar => self
                .cell_value(column)
                .and_then(|v| v.parse::<i64>().ok()),
            ColumnType::Strokes => column
                .round_id
                .and_then(|id| self.scorecard(id))
                .and_then(Scorecard::total_to_par),
            _ => None,
        }
    }

    /// The round a player's tournament ended in: for a withdrawal, the
    /// round holding hole scores but no recorded total (play was
    /// interrupted there); for other eliminations, the highest-id round
    /// with a non-empty thru. Competing players have none. Relies on round
    /// ids being assigned in chronological order.
    #[must_use]
    pub fn elimination_round_id(&self) -> Option<i64> {
        if self.withdrew() {
            return self
                .rounds
                .iter()
                .find(|(id, r)| {
                    r.scorecard.as_ref().is_some_and(Scorecard::has_hole_data)
                        && !self
                            .round_value(**id, "total")
                            .is_some_and(is_scored_value)
                })
                .map(|(id, _)| *id);
        }
        if self.eliminated() {
            return self
                .rounds
                .iter()
                .filter(|(_, r)| has_thru(r))
                .map(|(id, _)| *id)
                .max();
        }
        None
    }

    /// Structured names for the row, one per team member, each carrying
    /// its parsed affiliation when the counts line up. Recomputed per
    /// call; the parse is pure and cheap.
    #[must_use]
    pub fn names(&self) -> Vec<Name> {
        let mut names = parse_names(&self.name);
        if let Some(affiliation) = &self.affiliation {
            let entries = affiliation.entries();
            if entries.len() == 1 {
                let parsed = parse_affiliation(entries[0]);
                for name in &mut names {
                    name.affiliation = Some(parsed.clone());
                }
            } else if entries.len() == names.len() {
                for (name, entry) in names.iter_mut().zip(entries) {
                    name.affiliation = Some(parse_affiliation(entry));
                }
            }
        }
        names
    }

    #[must_use]
    pub fn affiliations(&self) -> Vec<Affiliation> {
        self.affiliation
            .as_ref()
            .map(|a| a.entries().into_iter().map(parse_affiliation).collect())
            .unwrap_or_default()
    }

    pub(crate) fn last_name_sort_key(&self) -> String {
        self.names()
            .first()
            .map(|n| n.last_name.to_lowercase())
            .unwrap_or_default()
    }
}

fn has_thru(round: &RowRound) -> bool {
    let from_values = round
        .values
        .get("thru")
        .and_then(Option::as_deref)
        .is_some_and(|t| !t.trim().is_empty());
    let from_scorecard = round
        .scorecard
        .as_ref()
        .and_then(|s| s.thru.as_deref())
        .is_some_and(|t| !t.trim().is_empty());
    from_values || from_scorecard
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::HoleScores;

    fn row(position: Option<&str>) -> Row {
        let mut summary = BTreeMap::new();
        summary.insert("position".to_string(), position.map(str::to_string));
        Row {
            id: "1001".to_string(),
            name: "Ann Lee".to_string(),
            player_ids: vec!["11".to_string()],
            affiliation: None,
            cut: false,
            summary,
            rounds: BTreeMap::new(),
        }
    }

    fn played_scorecard() -> Scorecard {
        Scorecard {
            scores: HoleScores {
                gross_scores: vec![Some(4), Some(5), None],
                ..HoleScores::default()
            },
            ..Scorecard::default()
        }
    }

    #[test]
    fn elimination_predicates_are_case_insensitive() {
        assert!(row(Some("cut")).is_cut());
        assert!(row(Some("MC")).is_cut());
        assert!(row(Some("wd")).withdrew());
        assert!(row(Some("DQ")).disqualified());
        assert!(row(Some("ns")).no_show());
        assert!(row(Some("NC")).no_card());
        assert!(row(Some("WD")).eliminated());
        assert!(row(Some("T5")).competing());
        assert!(row(None).competing());
    }

    #[test]
    fn withdrawal_round_is_the_one_with_hole_scores() {
        let mut r = row(Some("WD"));
        r.rounds.insert(
            1,
            RowRound {
                values: BTreeMap::new(),
                scorecard: Some(played_scorecard()),
            },
        );
        r.rounds.insert(
            2,
            RowRound {
                values: BTreeMap::new(),
                scorecard: Some(Scorecard::default()),
            },
        );
        assert_eq!(r.elimination_round_id(), Some(1));
    }

    #[test]
    fn withdrawal_round_skips_completed_rounds_with_totals() {
        let mut r = row(Some("WD"));
        let mut values = BTreeMap::new();
        values.insert("total".to_string(), Some("75".to_string()));
        r.rounds.insert(
            1,
            RowRound {
                values,
                scorecard: Some(played_scorecard()),
            },
        );
        r.rounds.insert(
            2,
            RowRound {
                values: BTreeMap::new(),
                scorecard: Some(played_scorecard()),
            },
        );
        assert_eq!(r.elimination_round_id(), Some(2));
    }

    #[test]
    fn elimination_round_for_cut_rows_is_the_last_round_with_a_thru() {
        let mut r = row(Some("CUT"));
        for id in 1..=2 {
            let mut values = BTreeMap::new();
            values.insert("thru".to_string(), Some("F".to_string()));
            r.rounds.insert(id, RowRound { values, scorecard: None });
        }
        let mut values = BTreeMap::new();
        values.insert("thru".to_string(), None);
        r.rounds.insert(3, RowRound { values, scorecard: None });
        assert_eq!(r.elimination_round_id(), Some(2));
    }

    #[test]
    fn competing_rows_have_no_elimination_round() {
        assert_eq!(row(Some("T5")).elimination_round_id(), None);
    }

    #[test]
    fn wd_summary_cells_show_wd_for_strokes_and_nothing_for_to_par() {
        let mut r = row(Some("WD"));
        r.summary.insert("total_gross".to_string(), Some("158".to_string()));
        r.summary.insert("total_to_par_gross".to_string(), Some("+14".to_string()));

        let strokes = Column {
            key: "total_gross".to_string(),
            format: "total-gross".to_string(),
            label: "Total".to_string(),
            index: 1,
            round_id: None,
            round_name: None,
        };
        let to_par = Column {
            key: "total_to_par_gross".to_string(),
            format: "total-to-par-gross".to_string(),
            label: "To Par".to_string(),
            index: 2,
            round_id: None,
            round_name: None,
        };
        assert_eq!(r.cell_value(&strokes).as_deref(), Some("WD"));
        assert_eq!(r.cell_value(&to_par), None);
    }

    #[test]
    fn wd_round_cells_follow_the_withdrawal_rule() {
        let mut r = row(Some("WD"));
        // round 1: real total recorded
        let mut values = BTreeMap::new();
        values.insert("total".to_string(), Some("75".to_string()));
        r.rounds.insert(1, RowRound { values, scorecard: None });
        // round 2: withdrew mid-round, hole data but no total
        r.rounds.insert(
            2,
            RowRound {
                values: BTreeMap::new(),
                scorecard: Some(played_scorecard()),
            },
        );

        let col = |round_id: i64| Column {
            key: "total".to_string(),
            format: "round-total".to_string(),
            label: format!("Round {round_id}"),
            index: 0,
            round_id: Some(round_id),
            round_name: None,
        };
        assert_eq!(r.cell_value(&col(1)).as_deref(), Some("75"));
        assert_eq!(r.cell_value(&col(2)).as_deref(), Some("WD"));
        // round 3 never reached
        assert_eq!(r.cell_value(&col(3)), None);
    }

    #[test]
    fn names_carry_parsed_affiliations() {
        let mut r = row(None);
        r.name = "Ann Lee + Bo Diaz".to_string();
        r.affiliation = Some(crate::model::AffiliationText::Team(vec![
            "Columbus, OH".to_string(),
            "Austin, TX".to_string(),
        ]));
        let names = r.names();
        assert_eq!(names.len(), 2);
        assert_eq!(
            names[0].affiliation.as_ref().unwrap().state_name.as_deref(),
            Some("Ohio")
        );
        assert_eq!(
            names[1].affiliation.as_ref().unwrap().state_code.as_deref(),
            Some("TX")
        );
    }
}
