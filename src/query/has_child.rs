use serde_json::{Map, Value as Json};

use crate::query::Query;


/// How the scores of matching child documents feed into the parent's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreMode {
    None,
    Avg,
    Sum,
    Max,
    Min,
}


impl ScoreMode {
    pub fn from_name(value: &str) -> Option<ScoreMode> {
        match value {
            "none" => Some(ScoreMode::None),
            "avg" => Some(ScoreMode::Avg),
            "sum" => Some(ScoreMode::Sum),
            "max" => Some(ScoreMode::Max),
            "min" => Some(ScoreMode::Min),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            ScoreMode::None => "none",
            ScoreMode::Avg => "avg",
            ScoreMode::Sum => "sum",
            ScoreMode::Max => "max",
            ScoreMode::Min => "min",
        }
    }
}


/// Matches parent documents that have at least one child document of
/// `child_type` matching `query`
#[derive(Debug, Clone, PartialEq)]
pub struct HasChildQuery {
    pub child_type: String,
    pub query: Box<Query>,
    pub score_mode: Option<ScoreMode>,
    pub min_children: Option<u64>,
    pub max_children: Option<u64>,
}


impl HasChildQuery {
    pub fn new(child_type: &str, query: Query) -> HasChildQuery {
        HasChildQuery {
            child_type: child_type.to_owned(),
            query: Box::new(query),
            score_mode: None,
            min_children: None,
            max_children: None,
        }
    }

    /// Renders the body of the `has_child` object
    pub fn to_json(&self) -> Json {
        let mut inner = Map::new();
        inner.insert("type".to_owned(), Json::from(self.child_type.clone()));
        inner.insert("query".to_owned(), self.query.to_json());

        if let Some(score_mode) = self.score_mode {
            inner.insert("score_mode".to_owned(), Json::from(score_mode.as_str()));
        }

        if let Some(min_children) = self.min_children {
            inner.insert("min_children".to_owned(), Json::from(min_children));
        }

        if let Some(max_children) = self.max_children {
            inner.insert("max_children".to_owned(), Json::from(max_children));
        }

        Json::Object(inner)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::Query;

    use super::{HasChildQuery, ScoreMode};

    #[test]
    fn test_has_child_to_json() {
        let query = Query::HasChild(HasChildQuery::new("product-customer-permission", Query::new_match("id-customer", 42)));

        assert_eq!(query.to_json(), json!({
            "has_child": {
                "type": "product-customer-permission",
                "query": {
                    "match": {
                        "id-customer": 42
                    }
                }
            }
        }));
    }

    #[test]
    fn test_has_child_with_options_to_json() {
        let mut has_child = HasChildQuery::new("offer", Query::new_match_all());
        has_child.score_mode = Some(ScoreMode::Max);
        has_child.min_children = Some(1);
        has_child.max_children = Some(10);

        assert_eq!(has_child.to_json(), json!({
            "type": "offer",
            "query": {"match_all": {}},
            "score_mode": "max",
            "min_children": 1,
            "max_children": 10
        }));
    }

    #[test]
    fn test_score_mode_from_name() {
        assert_eq!(ScoreMode::from_name("avg"), Some(ScoreMode::Avg));
        assert_eq!(ScoreMode::from_name("none"), Some(ScoreMode::None));
        assert_eq!(ScoreMode::from_name("median"), None);
    }
}
