//! Parses "match_none" queries

use serde_json::Value as Json;

use crate::query::Query;
use crate::query::parser::QueryParseError;


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    if let Some(key) = object.keys().next() {
        return Err(QueryParseError::UnrecognisedKey(key.clone()));
    }

    Ok(Query::MatchNone)
}
