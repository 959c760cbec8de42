use serde_json::Value as Json;


/// A scalar value inside a query, such as the right-hand side of a `match` or `term`
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    String(String),
    Boolean(bool),
    I64(i64),
    F64(f64),
}


impl Term {
    pub fn from_json(json: &Json) -> Option<Term> {
        match *json {
            Json::String(ref string) => Some(Term::String(string.clone())),
            Json::Bool(value) => Some(Term::Boolean(value)),
            Json::Number(ref number) => {
                match number.as_i64() {
                    Some(value) => Some(Term::I64(value)),
                    None => number.as_f64().map(Term::F64),
                }
            }

            // Not scalars
            Json::Null | Json::Array(_) | Json::Object(_) => None,
        }
    }

    pub fn as_json(&self) -> Json {
        match *self {
            Term::String(ref string) => Json::String(string.clone()),
            Term::Boolean(value) => Json::Bool(value),
            Term::I64(value) => Json::from(value),
            Term::F64(value) => Json::from(value),
        }
    }
}


impl From<i64> for Term {
    fn from(value: i64) -> Term {
        Term::I64(value)
    }
}


impl From<i32> for Term {
    fn from(value: i32) -> Term {
        Term::I64(value as i64)
    }
}


impl<'a> From<&'a str> for Term {
    fn from(value: &'a str) -> Term {
        Term::String(value.to_owned())
    }
}


impl From<String> for Term {
    fn from(value: String) -> Term {
        Term::String(value)
    }
}


impl From<bool> for Term {
    fn from(value: bool) -> Term {
        Term::Boolean(value)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Term;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Term::from_json(&json!("foo")), Some(Term::String("foo".to_string())));
        assert_eq!(Term::from_json(&json!(true)), Some(Term::Boolean(true)));
        assert_eq!(Term::from_json(&json!(42)), Some(Term::I64(42)));
        assert_eq!(Term::from_json(&json!(1.5)), Some(Term::F64(1.5)));
    }

    #[test]
    fn test_from_json_rejects_non_scalars() {
        assert_eq!(Term::from_json(&json!(null)), None);
        assert_eq!(Term::from_json(&json!([1, 2])), None);
        assert_eq!(Term::from_json(&json!({"a": 1})), None);
    }

    #[test]
    fn test_as_json() {
        assert_eq!(Term::I64(42).as_json(), json!(42));
        assert_eq!(Term::from("bar").as_json(), json!("bar"));
        assert_eq!(Term::F64(0.5).as_json(), json!(0.5));
    }
}
