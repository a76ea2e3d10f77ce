use std::cmp::Ordering;

use crate::model::{Row, Tournament};

use super::row::CUT_POSITIONS;

/// The closed set of sort keys. Making this an enum moves the "unresolvable
/// sort key" failure from runtime to the type system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Competing,
    Position,
    LastName,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Default ordering: active players first, then by position.
pub const DEFAULT_SORT_KEYS: [SortKey; 2] = [SortKey::Competing, SortKey::Position];

impl Tournament {
    /// Returns a new tournament with the rows reordered by the given keys;
    /// the receiver is unchanged. The sort is stable, and later keys only
    /// break ties left by earlier ones.
    #[must_use]
    pub fn sort(&self, keys: &[SortKey], direction: Direction) -> Tournament {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| compare_rows(a, b, keys, direction));
        Tournament {
            meta: self.meta.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }

    #[must_use]
    pub fn sort_default(&self) -> Tournament {
        self.sort(&DEFAULT_SORT_KEYS, Direction::Asc)
    }
}

fn compare_rows(a: &Row, b: &Row, keys: &[SortKey], direction: Direction) -> Ordering {
    for key in keys {
        let ordering = match key {
            SortKey::Competing => a.eliminated().cmp(&b.eliminated()),
            SortKey::Position => position_rank(a.position()).cmp(&position_rank(b.position())),
            SortKey::LastName => last_name_rank(a).cmp(&last_name_rank(b)),
        };
        let ordering = match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Three position tiers: numeric (and `T`-tied) positions by magnitude,
/// then CUT/MC alphabetically, then everything else - unrecognized codes
/// and missing positions - alphabetically last. WD/DQ/NS/NC deliberately
/// land in the last tier, not the cut tier.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PositionRank {
    Numeric(i64),
    CutCode(String),
    Other(String),
}

fn position_rank(position: Option<&str>) -> PositionRank {
    let position = position.unwrap_or("").trim();
    let digits = position.strip_prefix('T').unwrap_or(position);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(magnitude) = digits.parse::<i64>() {
            return PositionRank::Numeric(magnitude);
        }
    }
    let upper = position.to_ascii_uppercase();
    if CUT_POSITIONS.contains(&upper.as_str()) {
        PositionRank::CutCode(upper)
    } else {
        PositionRank::Other(upper)
    }
}

/// Case-insensitive last name; blank names sort after real ones and
/// compare equal to each other.
fn last_name_rank(row: &Row) -> (bool, String) {
    let key = row.last_name_sort_key();
    (key.is_empty(), key)
}
