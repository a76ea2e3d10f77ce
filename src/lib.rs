pub mod error;
pub mod model;
pub mod parse {
    pub mod affiliation;
    pub mod html;
    pub mod json;
    pub mod name;
}
pub mod merge;
pub mod decompose {
    pub mod column;
    pub mod row;
}
pub mod entity;
pub mod scoreboard;

// Re-export the surface most callers use
pub use decompose::column::decompose_columns;
pub use decompose::row::decompose_row;
pub use entity::{Cell, DEFAULT_SORT_KEYS, Direction, SortKey};
pub use error::{LeaderboardError, Result};
pub use merge::merge;
pub use model::{Column, ColumnType, RoundProgress, Row, Scorecard, Tournament};
pub use parse::affiliation::{Affiliation, parse_affiliation};
pub use parse::html::parse_leaderboard_html;
pub use parse::json::parse_scoring_json;
pub use parse::name::{Name, parse_name, parse_names};
pub use scoreboard::{EventMeta, Scoreboard, TournamentDocuments};
