//! Parses "bool" queries

use serde_json::Value as Json;

use crate::query::{Query, BoolQuery};
use crate::query::parser::{QueryParseError, parse as parse_query};
use crate::query::parser::utils::{parse_float, parse_integer};


/// Clauses may be given as a single query object or as an array of them
fn parse_clauses(json: &Json) -> Result<Vec<Query>, QueryParseError> {
    match *json {
        Json::Array(ref array) => array.iter().map(parse_query).collect(),
        Json::Object(_) => Ok(vec![parse_query(json)?]),
        _ => Err(QueryParseError::ExpectedObject),
    }
}


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    let mut bool_query = BoolQuery::new();

    for (key, value) in object.iter() {
        match key.as_ref() {
            "must" => {
                bool_query.must = parse_clauses(value)?;
            }
            "should" => {
                bool_query.should = parse_clauses(value)?;
            }
            "must_not" => {
                bool_query.must_not = parse_clauses(value)?;
            }
            "filter" => {
                bool_query.filter = parse_clauses(value)?;
            }
            "minimum_should_match" => {
                bool_query.minimum_should_match = Some(parse_integer(value)?);
            }
            "boost" => {
                bool_query.boost = Some(parse_float(value)?);
            }
            _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
        }
    }

    Ok(Query::Bool(bool_query))
}
