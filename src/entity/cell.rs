use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Column, ColumnType};

/// Position codes that mean a player is out of the running.
pub const ELIMINATION_CODES: [&str; 6] = ["CUT", "MC", "WD", "DQ", "NS", "NC"];

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

/// True when the text is an optionally-signed integer.
#[must_use]
pub fn is_scored_value(value: &str) -> bool {
    SCORE_RE.is_match(value)
}

/// One displayable cell: a row value paired with its column, plus the
/// numeric to-par behind it when one exists. Derived on demand, never
/// stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<'a> {
    pub value: Option<String>,
    pub column: &'a Column,
    pub to_par: Option<i64>,
}

impl Cell<'_> {
    #[must_use]
    pub fn scored(&self) -> bool {
        self.value.as_deref().is_some_and(is_scored_value)
    }

    #[must_use]
    pub fn non_scoring(&self) -> bool {
        self.value.as_deref().is_some_and(|v| {
            ELIMINATION_CODES
                .iter()
                .any(|code| v.eq_ignore_ascii_case(code))
        })
    }

    /// Scored to-par cells render golf style: even par as `"E"`, over par
    /// with an explicit `+`. Everything else passes through unchanged.
    #[must_use]
    pub fn display_value(&self) -> Option<String> {
        let value = self.value.as_deref()?;
        if self.column.column_type() == ColumnType::ToPar && is_scored_value(value) {
            let n: i64 = value.parse().unwrap_or(0);
            return Some(match n {
                0 => "E".to_string(),
                n if n > 0 => format!("+{n}"),
                n => n.to_string(),
            });
        }
        Some(value.to_string())
    }

    #[must_use]
    pub fn under_par(&self) -> bool {
        self.to_par.is_some_and(|t| t < 0)
    }

    #[must_use]
    pub fn over_par(&self) -> bool {
        self.to_par.is_some_and(|t| t > 0)
    }

    #[must_use]
    pub fn even_par(&self) -> bool {
        self.to_par == Some(0)
    }
}
