//! Parses "has_child" queries

use serde_json::Value as Json;

use crate::query::{Query, HasChildQuery, ScoreMode};
use crate::query::parser::{QueryParseError, parse as parse_query};
use crate::query::parser::utils::{parse_string, parse_unsigned};


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    let mut child_type = None;
    let mut query = None;
    let mut score_mode = None;
    let mut min_children = None;
    let mut max_children = None;

    for (key, value) in object.iter() {
        match key.as_ref() {
            "type" => {
                child_type = Some(parse_string(value)?);
            }
            "query" => {
                query = Some(parse_query(value)?);
            }
            "score_mode" => {
                let name = parse_string(value)?;
                score_mode = Some(ScoreMode::from_name(&name).ok_or(QueryParseError::InvalidScoreMode)?);
            }
            "min_children" => {
                min_children = Some(parse_unsigned(value)?);
            }
            "max_children" => {
                max_children = Some(parse_unsigned(value)?);
            }
            _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
        }
    }

    let child_type = child_type.ok_or(QueryParseError::ExpectedKey("type"))?;
    let query = query.ok_or(QueryParseError::ExpectedKey("query"))?;

    Ok(Query::HasChild(HasChildQuery {
        child_type: child_type,
        query: Box::new(query),
        score_mode: score_mode,
        min_children: min_children,
        max_children: max_children,
    }))
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::{Query, HasChildQuery, ScoreMode};
    use crate::query::parser::QueryParseError;

    use super::parse;

    #[test]
    fn test_has_child_query() {
        let query = parse(&json!({
            "type": "product-customer-permission",
            "query": {
                "match": {
                    "id-customer": 42
                }
            }
        }));

        assert_eq!(query, Ok(Query::HasChild(HasChildQuery::new(
            "product-customer-permission",
            Query::new_match("id-customer", 42),
        ))))
    }

    #[test]
    fn test_with_options() {
        let query = parse(&json!({
            "type": "offer",
            "query": {"match_all": {}},
            "score_mode": "sum",
            "min_children": 2,
            "max_children": 5
        }));

        let mut expected = HasChildQuery::new("offer", Query::new_match_all());
        expected.score_mode = Some(ScoreMode::Sum);
        expected.min_children = Some(2);
        expected.max_children = Some(5);

        assert_eq!(query, Ok(Query::HasChild(expected)));
    }

    #[test]
    fn test_gives_error_for_missing_type() {
        assert_eq!(parse(&json!({"query": {"match_all": {}}})), Err(QueryParseError::ExpectedKey("type")));
    }

    #[test]
    fn test_gives_error_for_missing_query() {
        assert_eq!(parse(&json!({"type": "offer"})), Err(QueryParseError::ExpectedKey("query")));
    }

    #[test]
    fn test_gives_error_for_invalid_score_mode() {
        let query = parse(&json!({
            "type": "offer",
            "query": {"match_all": {}},
            "score_mode": "median"
        }));

        assert_eq!(query, Err(QueryParseError::InvalidScoreMode));
    }

    #[test]
    fn test_gives_error_for_negative_min_children() {
        let query = parse(&json!({
            "type": "offer",
            "query": {"match_all": {}},
            "min_children": -1
        }));

        assert_eq!(query, Err(QueryParseError::InvalidValue));
    }
}
