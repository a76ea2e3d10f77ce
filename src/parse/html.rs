use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeaderboardError, Result};
use crate::model::{AffiliationText, RawColumn, RawRow};

/// The structural half of a leaderboard: header columns, data rows, and the
/// cut-line text when the table renders one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ParsedHtml {
    pub columns: Vec<RawColumn>,
    pub rows: Vec<RawRow>,
    pub cut_text: Option<String>,
}

/// Class-to-format fallbacks for header cells that carry no `data-format`
/// attribute.
const FORMAT_CLASSES: [(&str, &str); 5] = [
    ("position", "position"),
    ("player-name", "player"),
    ("past-round-total", "round-total"),
    ("total", "total"),
    ("thru", "thru"),
];

/// Parses the rendered leaderboard table.
///
/// The header row is the first `<tr>` containing `<th>` cells. Data rows
/// carry the `leaderboard-row` class; hidden or zero-height rows are
/// skipped. A `cut-line` row flips the cut flag for every row after it.
///
/// # Errors
///
/// Returns `Err` on a blank document or a data row without an aggregate id.
pub fn parse_leaderboard_html(html: &str) -> Result<ParsedHtml> {
    if html.trim().is_empty() {
        return Err(LeaderboardError::BlankDocument("html"));
    }

    let document = Html::parse_document(html);
    let tr_sel = sel("tr");
    let th_sel = sel("th");
    let cut_message_sel = sel(".cut-message");

    let mut columns: Vec<RawColumn> = Vec::new();
    let mut rows: Vec<RawRow> = Vec::new();
    let mut cut_text: Option<String> = None;
    let mut cut_encountered = false;

    for tr in document.select(&tr_sel) {
        if is_hidden(tr) {
            continue;
        }
        if has_class(tr, "cut-line") {
            cut_encountered = true;
            if let Some(cell) = tr.select(&cut_message_sel).next() {
                cut_text = Some(collapsed_text(cell));
            }
            continue;
        }
        if columns.is_empty() && tr.select(&th_sel).next().is_some() {
            columns = tr.select(&th_sel).map(parse_header_cell).collect();
            continue;
        }
        if has_class(tr, "leaderboard-row") {
            rows.push(parse_data_row(tr, rows.len(), cut_encountered)?);
        }
    }

    debug!(
        columns = columns.len(),
        rows = rows.len(),
        cut = cut_text.is_some(),
        "parsed leaderboard html"
    );
    Ok(ParsedHtml {
        columns,
        rows,
        cut_text,
    })
}

fn parse_header_cell(th: ElementRef) -> RawColumn {
    let format = th
        .value()
        .attr("data-format")
        .map(str::to_string)
        .or_else(|| {
            FORMAT_CLASSES
                .iter()
                .find(|(class, _)| has_class(th, class))
                .map(|(_, format)| (*format).to_string())
        })
        .unwrap_or_else(|| "text".to_string());

    RawColumn {
        format,
        label: collapsed_text(th),
        round_name: th.value().attr("data-round-name").map(str::to_string),
    }
}

fn parse_data_row(tr: ElementRef, index: usize, cut: bool) -> Result<RawRow> {
    let id = tr
        .value()
        .attr("data-aggregate-id")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(LeaderboardError::MissingRowId { index })?
        .to_string();

    let name = tr
        .value()
        .attr("data-name")
        .unwrap_or_default()
        .trim()
        .to_string();

    let player_ids: Vec<String> = tr
        .value()
        .attr("data-player-ids")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    let affiliation_sel = sel(".affiliation");
    let affiliations: Vec<String> = tr
        .select(&affiliation_sel)
        .map(collapsed_text)
        .filter(|t| !t.is_empty())
        .collect();
    let affiliation = match affiliations.len() {
        0 => None,
        1 => Some(AffiliationText::One(affiliations.into_iter().next().unwrap_or_default())),
        _ => Some(AffiliationText::Team(affiliations)),
    };

    let td_sel = sel("td");
    let cells = tr.select(&td_sel).map(cell_text).collect();

    Ok(RawRow {
        id,
        name,
        player_ids,
        affiliation,
        cells,
        cut,
    })
}

/// The printable value of one data cell: a `score-to-print` sub-element
/// wins outright; otherwise the cell's own text with hidden and
/// affiliation sub-elements stripped.
fn cell_text(td: ElementRef) -> String {
    let stp_sel = sel(".score-to-print");
    if let Some(stp) = td.select(&stp_sel).next() {
        return collapsed_text(stp);
    }
    let mut out = String::new();
    collect_visible_text(td, &mut out);
    collapse_whitespace(&out)
}

fn collect_visible_text(el: ElementRef, out: &mut String) {
    for node in el.children() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child) = ElementRef::wrap(node) {
            if is_hidden(child) || has_class(child, "affiliation") {
                continue;
            }
            collect_visible_text(child, out);
        }
    }
}

/// Element text with line breaks flattened to spaces and runs of
/// whitespace collapsed.
fn collapsed_text(el: ElementRef) -> String {
    let joined = el.text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&joined)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn is_hidden(el: ElementRef) -> bool {
    if has_class(el, "hidden") {
        return true;
    }
    let style: String = el
        .value()
        .attr("style")
        .unwrap_or_default()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect();
    style.split(';').any(|declaration| {
        matches!(
            declaration.split_once(':'),
            Some(("display", "none") | ("height", "0" | "0px"))
        )
    })
}

// Selectors are compiled from literals only.
fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!())
}
