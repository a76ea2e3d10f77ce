use tracing::warn;

use crate::model::{Column, ColumnSet, ColumnType, RawColumn, RoundColumns, RoundMeta};

/// Classifies raw HTML columns as summary or round-scoped.
///
/// Round association, in resolution order: an explicit round-name
/// attribute matched case-exact; failing that (attribute absent or
/// matching no round), the first round (in round order) whose name
/// appears as a substring of the label; else summary. The
/// substring scan is first-match and unguarded — a round name that is a
/// substring of another round's name can attach the wrong round.
#[must_use]
pub fn decompose_columns(raw: &[RawColumn], rounds: &[RoundMeta]) -> ColumnSet {
    let mut set = ColumnSet {
        summary: Vec::new(),
        rounds: rounds
            .iter()
            .map(|r| RoundColumns {
                id: r.id,
                name: r.name.clone(),
                in_progress: r.in_progress,
                columns: Vec::new(),
            })
            .collect(),
    };

    for (index, raw_col) in raw.iter().enumerate() {
        let resolved = resolve_round(raw_col, rounds);
        let column = Column {
            key: canonical_key(&raw_col.format, resolved.is_some()),
            format: raw_col.format.clone(),
            label: raw_col.label.clone(),
            index,
            round_id: resolved.map(|r| r.id),
            round_name: resolved.map(|r| r.name.clone()),
        };

        if column.column_type() == ColumnType::Other && !column.format.trim().is_empty() {
            warn!(
                format = %column.format,
                label = %column.label,
                "unrecognized column format, classifying as other"
            );
        }

        match column.round_id {
            Some(id) => {
                if let Some(group) = set.rounds.iter_mut().find(|g| g.id == id) {
                    group.columns.push(column);
                }
            }
            None => set.summary.push(column),
        }
    }

    set
}

fn resolve_round<'a>(raw: &RawColumn, rounds: &'a [RoundMeta]) -> Option<&'a RoundMeta> {
    raw.round_name
        .as_deref()
        .and_then(|round_name| rounds.iter().find(|r| r.name == round_name))
        .or_else(|| rounds.iter().find(|r| raw.label.contains(&r.name)))
}

/// Canonical schema key for a column format. Round-scoped keys drop the
/// `round_` prefix since the value already lives under a round id.
fn canonical_key(format: &str, round_scoped: bool) -> String {
    let key = format.replace('-', "_");
    if round_scoped {
        if let Some(stripped) = key.strip_prefix("round_") {
            return stripped.to_string();
        }
    }
    key
}
