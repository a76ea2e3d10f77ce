use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::affiliation::Affiliation;

/// A structured player name. `metadata` carries display markers stripped
/// from the raw text, currently just the amateur flag `(a)`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Name {
    pub first_name: String,
    pub last_name: String,
    pub suffix: Option<String>,
    pub metadata: Vec<String>,
    pub affiliation: Option<Affiliation>,
}

/// Generational and professional suffixes, with or without a trailing
/// period: Jr/Sr, roman numerals I through X, Esq/MD/PhD/DDS, ordinals.
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:jr|sr|i{1,3}|iv|v|vi{1,3}|ix|x|esq|md|phd|dds|\d+(?:st|nd|rd|th))\.?$")
        .unwrap()
});

const TEAM_SEPARATOR: &str = " + ";
const AMATEUR_MARKER: &str = "(a)";

/// Parses a player-or-team name string. Team names are split on `" + "`
/// and each member is parsed individually.
#[must_use]
pub fn parse_names(text: &str) -> Vec<Name> {
    text.split(TEAM_SEPARATOR).map(parse_name).collect()
}

/// Parses one individual's name.
///
/// With a comma, the text after the (first) comma decides the format: a
/// lone suffix means `"First [Middle] Last, Suffix"`, anything else means
/// `"Last, First [Middle] [Suffix]"`. Without a comma the last token is
/// popped as a suffix when it looks like one, and the token before it is
/// the last name.
#[must_use]
pub fn parse_name(text: &str) -> Name {
    let mut metadata = Vec::new();
    let mut text = text.trim();

    if let Some(stripped) = strip_amateur_marker(text) {
        metadata.push(AMATEUR_MARKER.to_string());
        text = stripped;
    }

    let mut name = match text.split_once(',') {
        Some((before, after)) => {
            let after = after.trim();
            if SUFFIX_RE.is_match(after) {
                // "First [Middle] Last, Suffix"
                let (first_name, last_name) = split_first_last(before.trim());
                Name {
                    first_name,
                    last_name,
                    suffix: Some(normalize_suffix(after)),
                    ..Name::default()
                }
            } else {
                // "Last, First [Middle] [Suffix]"
                let mut tokens: Vec<&str> = after.split_whitespace().collect();
                let suffix = pop_suffix(&mut tokens);
                Name {
                    first_name: tokens.join(" "),
                    last_name: before.trim().to_string(),
                    suffix,
                    ..Name::default()
                }
            }
        }
        None => {
            let mut tokens: Vec<&str> = text.split_whitespace().collect();
            let suffix = pop_suffix(&mut tokens);
            let (first_name, last_name) = match tokens.split_last() {
                Some((last, rest)) => (rest.join(" "), (*last).to_string()),
                None => (String::new(), String::new()),
            };
            Name {
                first_name,
                last_name,
                suffix,
                ..Name::default()
            }
        }
    };

    // single token parses as a bare last name
    if name.last_name.is_empty() && !name.first_name.is_empty() {
        name.last_name = std::mem::take(&mut name.first_name);
    }
    name.metadata = metadata;
    name
}

fn strip_amateur_marker(text: &str) -> Option<&str> {
    let trimmed = text.trim_end();
    let split_at = trimmed.len().checked_sub(AMATEUR_MARKER.len())?;
    // `get` rejects offsets inside a multi-byte character
    let tail = trimmed.get(split_at..)?;
    if tail.eq_ignore_ascii_case(AMATEUR_MARKER) {
        Some(trimmed[..split_at].trim_end())
    } else {
        None
    }
}

/// Splits a comma-free "First [Middle] Last" string. No suffix handling;
/// callers that already consumed a suffix use this directly.
fn split_first_last(text: &str) -> (String, String) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest)) => (rest.join(" "), (*last).to_string()),
        None => (String::new(), String::new()),
    }
}

/// Pops a trailing suffix token when there is one to pop and at least one
/// name token would remain.
fn pop_suffix(tokens: &mut Vec<&str>) -> Option<String> {
    if tokens.len() > 1 && SUFFIX_RE.is_match(tokens[tokens.len() - 1]) {
        tokens.pop().map(normalize_suffix)
    } else {
        None
    }
}

/// Bare Jr/Sr gain their customary period; everything else passes through.
fn normalize_suffix(suffix: &str) -> String {
    if suffix.eq_ignore_ascii_case("jr") || suffix.eq_ignore_ascii_case("sr") {
        format!("{suffix}.")
    } else {
        suffix.to_string()
    }
}
