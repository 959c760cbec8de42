use serde_json::{Map, Value as Json};

use crate::query::Operator;
use crate::query::parser::QueryParseError;


/// Returns the only key/value pair of an object, as used by queries of the form `{field: ...}`
pub fn get_single_key(object: &Map<String, Json>) -> Result<(&String, &Json), QueryParseError> {
    if object.len() != 1 {
        return Err(QueryParseError::ExpectedSingleKey);
    }

    object.iter().next().ok_or(QueryParseError::ExpectedSingleKey)
}


pub fn parse_string(json: &Json) -> Result<String, QueryParseError> {
    match *json {
        Json::String(ref string) => Ok(string.clone()),
        _ => Err(QueryParseError::ExpectedString),
    }
}


pub fn parse_float(json: &Json) -> Result<f64, QueryParseError> {
    match *json {
        Json::Number(ref number) => number.as_f64().ok_or(QueryParseError::ExpectedFloat),
        _ => Err(QueryParseError::ExpectedFloat),
    }
}


pub fn parse_integer(json: &Json) -> Result<i64, QueryParseError> {
    match *json {
        Json::Number(ref number) => number.as_i64().ok_or(QueryParseError::ExpectedInteger),
        _ => Err(QueryParseError::ExpectedInteger),
    }
}


pub fn parse_unsigned(json: &Json) -> Result<u64, QueryParseError> {
    match *json {
        Json::Number(ref number) => number.as_u64().ok_or(QueryParseError::InvalidValue),
        _ => Err(QueryParseError::ExpectedInteger),
    }
}


pub fn parse_operator(json: &Json) -> Result<Operator, QueryParseError> {
    match *json {
        Json::String(ref value) => {
            match value.as_ref() {
                "or" => Ok(Operator::Or),
                "and" => Ok(Operator::And),
                _ => Err(QueryParseError::InvalidOperator),
            }
        }
        _ => Err(QueryParseError::InvalidOperator),
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::Operator;
    use crate::query::parser::QueryParseError;

    use super::{parse_float, parse_integer, parse_unsigned, parse_operator};

    #[test]
    fn test_parse_float_accepts_integers() {
        assert_eq!(parse_float(&json!(2)), Ok(2.0f64));
        assert_eq!(parse_float(&json!(2.5)), Ok(2.5f64));
        assert_eq!(parse_float(&json!("2")), Err(QueryParseError::ExpectedFloat));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(&json!(-3)), Ok(-3));
        assert_eq!(parse_integer(&json!(1.5)), Err(QueryParseError::ExpectedInteger));
    }

    #[test]
    fn test_parse_unsigned_rejects_negative() {
        assert_eq!(parse_unsigned(&json!(3)), Ok(3));
        assert_eq!(parse_unsigned(&json!(-3)), Err(QueryParseError::InvalidValue));
        assert_eq!(parse_unsigned(&json!("3")), Err(QueryParseError::ExpectedInteger));
    }

    #[test]
    fn test_parse_operator() {
        assert_eq!(parse_operator(&json!("and")), Ok(Operator::And));
        assert_eq!(parse_operator(&json!("or")), Ok(Operator::Or));
        assert_eq!(parse_operator(&json!("xor")), Err(QueryParseError::InvalidOperator));
        assert_eq!(parse_operator(&json!(1)), Err(QueryParseError::InvalidOperator));
    }
}
