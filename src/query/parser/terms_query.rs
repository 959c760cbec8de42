//! Parses "terms" queries

use serde_json::Value as Json;

use crate::term::Term;
use crate::query::Query;
use crate::query::parser::QueryParseError;
use crate::query::parser::utils::parse_float;


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    let mut field = None;
    let mut boost = None;

    for (key, value) in object.iter() {
        match key.as_ref() {
            "boost" => {
                boost = Some(parse_float(value)?);
            }
            _ => {
                // Anything that isn't an option is the field name, and there can only be one
                if field.is_some() {
                    return Err(QueryParseError::ExpectedSingleKey);
                }

                let values = match *value {
                    Json::Array(ref array) => {
                        array.iter()
                            .map(|value| Term::from_json(value).ok_or(QueryParseError::InvalidValue))
                            .collect::<Result<Vec<Term>, QueryParseError>>()?
                    }
                    _ => return Err(QueryParseError::ExpectedArray),
                };

                field = Some((key.clone(), values));
            }
        }
    }

    match field {
        Some((field, values)) => {
            Ok(Query::Terms {
                field: field,
                values: values,
                boost: boost,
            })
        }
        None => Err(QueryParseError::ExpectedSingleKey),
    }
}
