use serde_json::{Map, Value as Json};

use crate::query::Query;


/// The boolean combinator
///
/// Clauses in `must` and `filter` are ANDed together, `must_not` clauses are
/// excluded and `should` clauses are ORed (subject to `minimum_should_match`).
/// Clauses in `filter` do not contribute to the score.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoolQuery {
    pub must: Vec<Query>,
    pub should: Vec<Query>,
    pub must_not: Vec<Query>,
    pub filter: Vec<Query>,
    pub minimum_should_match: Option<i64>,
    pub boost: Option<f64>,
}


impl BoolQuery {
    pub fn new() -> BoolQuery {
        BoolQuery::default()
    }

    pub fn add_must(&mut self, query: Query) -> &mut BoolQuery {
        self.must.push(query);
        self
    }

    pub fn add_should(&mut self, query: Query) -> &mut BoolQuery {
        self.should.push(query);
        self
    }

    pub fn add_must_not(&mut self, query: Query) -> &mut BoolQuery {
        self.must_not.push(query);
        self
    }

    /// Appends a filter clause. Existing clauses are never replaced
    pub fn add_filter(&mut self, query: Query) -> &mut BoolQuery {
        self.filter.push(query);
        self
    }

    pub fn filters(&self) -> &[Query] {
        &self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty() && self.filter.is_empty()
    }

    /// Renders the body of the `bool` object (without the `bool` key itself)
    pub fn to_json(&self) -> Json {
        let mut inner = Map::new();

        for &(key, clauses) in [
            ("must", &self.must),
            ("should", &self.should),
            ("must_not", &self.must_not),
            ("filter", &self.filter),
        ].iter() {
            if !clauses.is_empty() {
                inner.insert(key.to_owned(), Json::Array(clauses.iter().map(|query| query.to_json()).collect()));
            }
        }

        if let Some(minimum_should_match) = self.minimum_should_match {
            inner.insert("minimum_should_match".to_owned(), Json::from(minimum_should_match));
        }

        if let Some(boost) = self.boost {
            inner.insert("boost".to_owned(), Json::from(boost));
        }

        Json::Object(inner)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::Query;

    use super::BoolQuery;

    #[test]
    fn test_empty_bool_to_json() {
        assert_eq!(Query::new_bool().to_json(), json!({"bool": {}}));
    }

    #[test]
    fn test_add_filter_appends() {
        let mut bool_query = BoolQuery::new();
        bool_query.add_filter(Query::new_term("a", 1));
        bool_query.add_filter(Query::new_term("b", 2));

        assert_eq!(bool_query.filters(), &[
            Query::new_term("a", 1),
            Query::new_term("b", 2),
        ]);
    }

    #[test]
    fn test_add_filter_keeps_other_clauses() {
        let mut bool_query = BoolQuery::new();
        bool_query
            .add_must(Query::new_match("name", "shirt"))
            .add_should(Query::new_term("brand", "acme"))
            .add_must_not(Query::new_term("is-hidden", true))
            .add_filter(Query::new_term("store", "DE"));

        assert_eq!(bool_query.must, vec![Query::new_match("name", "shirt")]);
        assert_eq!(bool_query.should, vec![Query::new_term("brand", "acme")]);
        assert_eq!(bool_query.must_not, vec![Query::new_term("is-hidden", true)]);
        assert_eq!(bool_query.filter, vec![Query::new_term("store", "DE")]);
        assert!(!bool_query.is_empty());
    }

    #[test]
    fn test_bool_to_json() {
        let mut bool_query = BoolQuery::new();
        bool_query
            .add_must(Query::new_match("name", "shirt"))
            .add_filter(Query::new_term("store", "DE"));
        bool_query.minimum_should_match = Some(1);

        assert_eq!(Query::Bool(bool_query).to_json(), json!({
            "bool": {
                "must": [
                    {"match": {"name": "shirt"}}
                ],
                "filter": [
                    {"term": {"store": "DE"}}
                ],
                "minimum_should_match": 1
            }
        }));
    }
}
