use serde::{Deserialize, Serialize};

/// A structured club/location string. `state_code`/`state_name` are both
/// set when the text after the comma resolves against the state table;
/// an unresolved candidate is kept raw in `state_code`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Affiliation {
    pub raw: String,
    pub city: String,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
}

/// The fifty states plus DC. Lookup accepts either side, case-insensitive.
const STATES: [(&str, &str); 51] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Parses a `"City, ST"` / `"City, State"` / `"Club Name"` string.
#[must_use]
pub fn parse_affiliation(text: &str) -> Affiliation {
    let trimmed = text.trim();
    match trimmed.split_once(',') {
        Some((city, state)) => {
            let candidate = state.trim();
            let resolved = STATES.iter().find(|(code, name)| {
                code.eq_ignore_ascii_case(candidate) || name.eq_ignore_ascii_case(candidate)
            });
            match resolved {
                Some((code, name)) => Affiliation {
                    raw: text.to_string(),
                    city: city.trim().to_string(),
                    state_code: Some((*code).to_string()),
                    state_name: Some((*name).to_string()),
                },
                None => Affiliation {
                    raw: text.to_string(),
                    city: city.trim().to_string(),
                    state_code: Some(candidate.to_string()),
                    state_name: None,
                },
            }
        }
        None => Affiliation {
            raw: text.to_string(),
            city: trimmed.to_string(),
            state_code: None,
            state_name: None,
        },
    }
}
