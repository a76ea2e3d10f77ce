//! Shared fixture: one three-round tournament, fetched during round 3.
#![allow(dead_code)]
//!
//! Row lineup: a leader mid-round, a finisher, a cut player carrying the
//! duplicate-total data bug, a mid-round withdrawal, and a no-show.

use rusty_leaderboard::Tournament;

pub const FETCHED_ROUND_ID: i64 = 3;

#[must_use]
pub fn leaderboard_html() -> String {
    r#"
    <table>
      <tr>
        <th data-format="position">Pos</th>
        <th data-format="player" class="player-name">Player</th>
        <th data-format="total-gross">Total</th>
        <th data-format="total-to-par-gross">To Par</th>
        <th data-format="round-total" data-round-name="Round 1">R1</th>
        <th data-format="round-total" data-round-name="Round 2">R2</th>
        <th data-format="round-total">Round 3 Total</th>
        <th data-format="thru" data-round-name="Round 3">Thru</th>
      </tr>
      <tr class="leaderboard-row" data-aggregate-id="1001" data-name="Ann Lee" data-player-ids="11">
        <td>1</td>
        <td>Ann Lee <span class="affiliation">Columbus, OH</span></td>
        <td>139</td><td>-4</td><td>69</td><td>70</td><td>-</td><td>9</td>
      </tr>
      <tr class="leaderboard-row" data-aggregate-id="1002" data-name="Bo Diaz" data-player-ids="12">
        <td>2</td>
        <td>Bo Diaz <span class="affiliation">Austin, TX</span></td>
        <td>211</td><td>+1</td><td>70</td><td>71</td><td>70</td><td>F</td>
      </tr>
      <tr class="cut-line"><td class="cut-message" colspan="8">Cut to low 2 scores after Round 2</td></tr>
      <tr class="leaderboard-row" data-aggregate-id="1003" data-name="Cut Player" data-player-ids="13">
        <td>CUT</td><td>Cut Player</td>
        <td>162</td><td>+18</td><td>75</td><td>87</td><td>162</td><td>-</td>
      </tr>
      <tr class="leaderboard-row" data-aggregate-id="1004" data-name="Will Drawn" data-player-ids="14">
        <td>WD</td><td>Will Drawn</td>
        <td>-</td><td>-</td><td>75</td><td>-</td><td>-</td><td>-</td>
      </tr>
      <tr class="leaderboard-row" data-aggregate-id="1005" data-name="No Show">
        <td>NS</td><td>No Show</td>
        <td>-</td><td>-</td><td>-</td><td>-</td><td>-</td><td>-</td>
      </tr>
    </table>"#
        .to_string()
}

#[must_use]
pub fn scoring_json() -> String {
    r#"{
      "name": "Member Invitational",
      "adjusted": false,
      "rounds": [
        {"id": 1, "name": "Round 1", "date": "2026-08-27"},
        {"id": 2, "name": "Round 2", "date": "2026-08-28"},
        {"id": 3, "name": "Round 3", "date": "2026-08-29", "in_progress": true}
      ],
      "scopes": [{"aggregates": [
        {
          "id": "1001", "member_ids": ["11"],
          "rounds": [
            {"round_id": 1, "thru": "F", "total": "69", "statuses": ["completed"]},
            {"round_id": 2, "thru": "F", "total": "70", "statuses": ["completed"]},
            {"round_id": 3, "thru": "9", "score": "-1", "statuses": ["playing"]}
          ],
          "gross_scores": [4, 4, 3, 5, 4, 4, 3, 4, 5, null, null, null, null, null, null, null, null, null],
          "to_par_gross": [0, 0, -1, 1, 0, 0, -1, 0, 0, null, null, null, null, null, null, null, null, null],
          "totals": {"out": 36, "in": null, "total": null},
          "previous_rounds": [
            {"round_id": 1,
             "gross_scores": [4, 4, 4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 4, 4, 3],
             "totals": {"out": 35, "in": 34, "total": 69}},
            {"round_id": 2, "totals": {"out": 35, "in": 35, "total": 70}}
          ]
        },
        {
          "id": "1002", "member_ids": ["12"],
          "rounds": [
            {"round_id": 1, "thru": "F", "total": "70", "statuses": ["completed"]},
            {"round_id": 2, "thru": "F", "total": "71", "statuses": ["completed"]},
            {"round_id": 3, "thru": "F", "total": "70", "statuses": ["completed"]}
          ],
          "gross_scores": [4, 4, 4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 4, 4, 3],
          "to_par_gross": [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 0, 0, -1],
          "totals": {"out": 35, "in": 35, "total": 70},
          "previous_rounds": [
            {"round_id": 1, "totals": {"out": 35, "in": 35, "total": 70}},
            {"round_id": 2, "totals": {"out": 36, "in": 35, "total": 71}}
          ]
        },
        {
          "id": "1003", "member_ids": ["13"],
          "rounds": [
            {"round_id": 1, "thru": "F", "total": "75", "statuses": ["completed"]},
            {"round_id": 2, "thru": "F", "total": "87", "statuses": ["completed"]}
          ],
          "totals": {"out": null, "in": null, "total": null},
          "previous_rounds": [
            {"round_id": 1, "totals": {"out": 37, "in": 38, "total": 75}},
            {"round_id": 2, "totals": {"out": 44, "in": 43, "total": 87}}
          ]
        },
        {
          "id": "1004", "member_ids": ["14"],
          "rounds": [
            {"round_id": 1, "thru": "F", "total": "75", "statuses": ["completed"]},
            {"round_id": 2, "thru": "6", "statuses": ["withdrawn"]}
          ],
          "totals": {"out": null, "in": null, "total": null},
          "previous_rounds": [
            {"round_id": 1,
             "gross_scores": [4, 4, 4, 4, 4, 4, 4, 4, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4],
             "totals": {"out": 37, "in": 38, "total": 75}},
            {"round_id": 2,
             "gross_scores": [4, 5, 6, 4, 5, 6, null, null, null, null, null, null, null, null, null, null, null, null],
             "totals": {"out": null, "in": null, "total": null}}
          ]
        },
        {
          "id": "1005", "member_ids": [],
          "rounds": [],
          "totals": {"out": null, "in": null, "total": null},
          "previous_rounds": []
        }
      ]}]
    }"#
    .to_string()
}

#[must_use]
pub fn tournament() -> Tournament {
    Tournament::from_documents(42, &leaderboard_html(), &scoring_json(), FETCHED_ROUND_ID)
        .expect("fixture documents reconcile")
}

#[must_use]
pub fn row_ids(t: &Tournament) -> Vec<&str> {
    t.rows.iter().map(|r| r.id.as_str()).collect()
}
