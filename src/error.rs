use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeaderboardError>;

/// Fatal pipeline errors. These mean the two input documents are
/// structurally broken or disagree with each other; none of them are
/// retried or patched inside the crate.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("blank {0} document")]
    BlankDocument(&'static str),
    #[error("malformed scoring json: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("leaderboard row at index {index} has no aggregate id")]
    MissingRowId { index: usize },
    #[error("row {id} ({name}) has no matching aggregate in the scoring payload")]
    UnknownAggregate { id: String, name: String },
    #[error(
        "row {id} ({name}) player ids {html_ids:?} do not match aggregate member ids {json_ids:?}"
    )]
    MemberMismatch {
        id: String,
        name: String,
        html_ids: Vec<String>,
        json_ids: Vec<String>,
    },
}
