//! Parses "term" queries

use serde_json::Value as Json;

use crate::term::Term;
use crate::query::Query;
use crate::query::parser::QueryParseError;
use crate::query::parser::utils::{get_single_key, parse_float};


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;
    let (field_name, value) = get_single_key(object)?;

    // Get configuration
    let mut term = None;
    let mut boost = None;

    match *value {
        Json::Object(ref inner_object) => {
            for (key, val) in inner_object.iter() {
                match key.as_ref() {
                    "value" => {
                        term = Some(Term::from_json(val).ok_or(QueryParseError::InvalidValue)?);
                    }
                    "boost" => {
                        boost = Some(parse_float(val)?);
                    }
                    _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
                }
            }
        }
        _ => term = Some(Term::from_json(value).ok_or(QueryParseError::InvalidValue)?),
    }

    match term {
        Some(term) => {
            Ok(Query::Term {
                field: field_name.clone(),
                value: term,
                boost: boost,
            })
        }
        None => Err(QueryParseError::ExpectedKey("value"))
    }
}
