//! Parses "match" queries

use serde_json::Value as Json;

use crate::term::Term;
use crate::query::Query;
use crate::query::parser::QueryParseError;
use crate::query::parser::utils::{get_single_key, parse_float, parse_operator};


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;
    let (field_name, value) = get_single_key(object)?;

    // Get configuration
    let mut query = None;
    let mut boost = None;
    let mut operator = None;

    match *value {
        Json::Object(ref inner_object) => {
            for (key, value) in inner_object.iter() {
                match key.as_ref() {
                    "query" => {
                        query = Some(Term::from_json(value).ok_or(QueryParseError::InvalidValue)?);
                    }
                    "boost" => {
                        boost = Some(parse_float(value)?);
                    }
                    "operator" => {
                        operator = Some(parse_operator(value)?);
                    }
                    _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
                }
            }
        }
        Json::Array(_) | Json::Null => return Err(QueryParseError::ExpectedObjectOrString),
        _ => query = Term::from_json(value),
    }

    match query {
        Some(query) => {
            Ok(Query::Match {
                field: field_name.clone(),
                query: query,
                operator: operator,
                boost: boost,
            })
        }
        None => Err(QueryParseError::ExpectedKey("query"))
    }
}
