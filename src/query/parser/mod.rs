//! Parses Elasticsearch Query DSL

pub mod utils;
pub mod match_query;
pub mod match_all_query;
pub mod match_none_query;
pub mod term_query;
pub mod terms_query;
pub mod bool_query;
pub mod has_child_query;

use serde_json::Value as Json;
use thiserror::Error;

use crate::query::Query;
use self::utils::get_single_key;


#[derive(Debug, PartialEq, Error)]
pub enum QueryParseError {
    #[error("unrecognised query type: {0}")]
    UnrecognisedQueryType(String),
    #[error("unrecognised key: {0}")]
    UnrecognisedKey(String),
    #[error("expected key: {0}")]
    ExpectedKey(&'static str),
    #[error("expected an object")]
    ExpectedObject,
    #[error("expected an array")]
    ExpectedArray,
    #[error("expected a string")]
    ExpectedString,
    #[error("expected a float")]
    ExpectedFloat,
    #[error("expected an integer")]
    ExpectedInteger,
    #[error("expected an object or a string")]
    ExpectedObjectOrString,
    #[error("invalid value")]
    InvalidValue,
    #[error("expected an object with a single key")]
    ExpectedSingleKey,
    #[error("invalid operator")]
    InvalidOperator,
    #[error("invalid score mode")]
    InvalidScoreMode,
}


fn get_query_parser(query_name: &str) -> Option<fn(&Json) -> Result<Query, QueryParseError>> {
    match query_name {
        "match" => Some(match_query::parse),
        "match_all" => Some(match_all_query::parse),
        "match_none" => Some(match_none_query::parse),
        "term" => Some(term_query::parse),
        "terms" => Some(terms_query::parse),
        "bool" => Some(bool_query::parse),
        "has_child" => Some(has_child_query::parse),
        _ => None
    }
}


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;
    let (query_type, inner) = get_single_key(object)?;

    let query = match get_query_parser(query_type) {
        Some(parse) => parse(inner)?,
        None => return Err(QueryParseError::UnrecognisedQueryType(query_type.clone())),
    };

    log::debug!("parsed {} query: {:?}", query_type, query);
    Ok(query)
}
