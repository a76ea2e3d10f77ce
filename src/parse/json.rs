use ahash::AHashMap;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LeaderboardError, Result};
use crate::model::{Aggregate, AggregateRound, HoleScores, RoundMeta, ScoreTotals};

/// The numeric half of a leaderboard: round metadata plus one scoring
/// record per player/team, keyed by aggregate id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoringPayload {
    pub name: String,
    pub adjusted: bool,
    pub rounds: Vec<RoundMeta>,
    pub aggregates: AHashMap<String, Aggregate>,
}

// Wire shape of the payload. Aggregates arrive nested under scopes and are
// flattened into one id-keyed map.

#[derive(Deserialize)]
struct WirePayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    adjusted: bool,
    #[serde(default)]
    rounds: Vec<WireRound>,
    #[serde(default)]
    scopes: Vec<WireScope>,
}

#[derive(Deserialize)]
struct WireRound {
    id: i64,
    name: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    in_progress: bool,
}

#[derive(Deserialize)]
struct WireScope {
    #[serde(default)]
    aggregates: Vec<WireAggregate>,
}

#[derive(Deserialize)]
struct WireAggregate {
    id: String,
    #[serde(default)]
    member_ids: Vec<String>,
    #[serde(default)]
    rounds: Vec<WireAggregateRound>,
    #[serde(default)]
    gross_scores: Vec<Option<i64>>,
    #[serde(default)]
    net_scores: Vec<Option<i64>>,
    #[serde(default)]
    to_par_gross: Vec<Option<i64>>,
    #[serde(default)]
    to_par_net: Vec<Option<i64>>,
    #[serde(default)]
    totals: ScoreTotals,
    #[serde(default)]
    previous_rounds: Vec<WirePreviousRound>,
}

#[derive(Deserialize)]
struct WireAggregateRound {
    round_id: i64,
    #[serde(default)]
    thru: Option<String>,
    #[serde(default)]
    score: Option<String>,
    #[serde(default)]
    total: Option<String>,
    #[serde(default)]
    statuses: Vec<String>,
}

#[derive(Deserialize)]
struct WirePreviousRound {
    round_id: i64,
    #[serde(default)]
    gross_scores: Vec<Option<i64>>,
    #[serde(default)]
    net_scores: Vec<Option<i64>>,
    #[serde(default)]
    to_par_gross: Vec<Option<i64>>,
    #[serde(default)]
    to_par_net: Vec<Option<i64>>,
    #[serde(default)]
    totals: ScoreTotals,
}

/// Parses the scoring payload.
///
/// # Errors
///
/// Returns `Err` on a blank document or malformed JSON.
pub fn parse_scoring_json(json: &str) -> Result<ScoringPayload> {
    if json.trim().is_empty() {
        return Err(LeaderboardError::BlankDocument("json"));
    }
    let wire: WirePayload = serde_json::from_str(json)?;

    let rounds: Vec<RoundMeta> = wire
        .rounds
        .into_iter()
        .map(|r| RoundMeta {
            id: r.id,
            name: r.name,
            // unparseable dates degrade to None rather than erroring
            date: r
                .date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            in_progress: r.in_progress,
        })
        .collect();

    let mut aggregates: AHashMap<String, Aggregate> = AHashMap::new();
    for scope in wire.scopes {
        for agg in scope.aggregates {
            let flattened = flatten_aggregate(agg);
            aggregates.insert(flattened.id.clone(), flattened);
        }
    }

    debug!(
        rounds = rounds.len(),
        aggregates = aggregates.len(),
        "parsed scoring payload"
    );
    Ok(ScoringPayload {
        name: wire.name,
        adjusted: wire.adjusted,
        rounds,
        aggregates,
    })
}

fn flatten_aggregate(wire: WireAggregate) -> Aggregate {
    let rounds: AHashMap<i64, AggregateRound> = wire
        .rounds
        .into_iter()
        .map(|r| {
            (
                r.round_id,
                AggregateRound {
                    thru: r.thru,
                    score: r.score,
                    total: r.total,
                    // per-round statuses are assumed homogeneous
                    status: r.statuses.into_iter().next(),
                },
            )
        })
        .collect();

    let previous_rounds_scores: AHashMap<i64, HoleScores> = wire
        .previous_rounds
        .into_iter()
        .map(|p| {
            (
                p.round_id,
                HoleScores {
                    gross_scores: p.gross_scores,
                    net_scores: p.net_scores,
                    to_par_gross: p.to_par_gross,
                    to_par_net: p.to_par_net,
                    totals: p.totals,
                },
            )
        })
        .collect();

    Aggregate {
        id: wire.id,
        member_ids: wire.member_ids,
        rounds,
        current_round_scores: HoleScores {
            gross_scores: wire.gross_scores,
            net_scores: wire.net_scores,
            to_par_gross: wire.to_par_gross,
            to_par_net: wire.to_par_net,
            totals: wire.totals,
        },
        previous_rounds_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "name": "Member Invitational",
        "adjusted": true,
        "rounds": [
            {"id": 1, "name": "Round 1", "date": "2026-05-01"},
            {"id": 2, "name": "Round 2", "date": "2026-05-02", "in_progress": true}
        ],
        "scopes": [{"aggregates": [{
            "id": "1001",
            "member_ids": ["11"],
            "rounds": [
                {"round_id": 1, "thru": "F", "total": "70", "statuses": ["completed"]},
                {"round_id": 2, "thru": "9", "score": "-1", "statuses": ["playing", "playing"]}
            ],
            "gross_scores": [4, 3, 5, null],
            "to_par_gross": [0, -1, 0, null],
            "totals": {"out": 35, "in": null, "total": null},
            "previous_rounds": [
                {"round_id": 1, "gross_scores": [4, 4, 4], "totals": {"out": 36, "in": 34, "total": 70}}
            ]
        }]}]
    }"#;

    #[test]
    fn rounds_and_aggregates_flatten() {
        let payload = parse_scoring_json(PAYLOAD).unwrap();
        assert_eq!(payload.name, "Member Invitational");
        assert!(payload.adjusted);
        assert_eq!(payload.rounds.len(), 2);
        assert!(!payload.rounds[0].in_progress);
        assert!(payload.rounds[1].in_progress);
        assert_eq!(
            payload.rounds[0].date,
            NaiveDate::from_ymd_opt(2026, 5, 1)
        );

        let agg = payload.aggregates.get("1001").unwrap();
        assert_eq!(agg.member_ids, vec!["11"]);
        assert_eq!(agg.rounds[&1].status.as_deref(), Some("completed"));
        assert_eq!(agg.rounds[&2].thru.as_deref(), Some("9"));
        assert_eq!(agg.current_round_scores.gross_scores, vec![Some(4), Some(3), Some(5), None]);
        assert_eq!(agg.previous_rounds_scores[&1].totals.total, Some(70));
    }

    #[test]
    fn aggregates_round_trip_through_serde() {
        let payload = parse_scoring_json(PAYLOAD).unwrap();
        let agg = payload.aggregates.get("1001").unwrap();
        let value = serde_json::to_value(agg).unwrap();
        assert_eq!(value["rounds"]["1"]["status"], "completed");
        assert_eq!(value["previous_rounds_scores"]["1"]["totals"]["total"], 70);
        let back: Aggregate = serde_json::from_value(value).unwrap();
        assert_eq!(&back, agg);
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(matches!(
            parse_scoring_json("{not json"),
            Err(LeaderboardError::MalformedJson(_))
        ));
        assert!(matches!(
            parse_scoring_json(""),
            Err(LeaderboardError::BlankDocument("json"))
        ));
    }
}
