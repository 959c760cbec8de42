//! Parses "match_all" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query::parser::QueryParseError;
use crate::query::parser::utils::parse_float;


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    // Get configuration
    let mut boost = 1.0f64;

    for (key, value) in object.iter() {
        match &key[..] {
            "boost" => {
                boost = parse_float(value)?;
            }
            _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
        }
    }

    Ok(Query::MatchAll {
        boost: boost,
    })
}
