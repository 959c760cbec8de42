//! The search request body handed to query expanders

use serde_json::{Map, Value as Json};

use crate::query::Query;
use crate::query::parser::{QueryParseError, parse as parse_query};


/// A search request body
///
/// The top-level `query` is held as a typed [`Query`] so expanders can
/// inspect and mutate it. Every other body key (`size`, `from`, `sort`,
/// `aggs`, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    query: Query,
    params: Map<String, Json>,
}


impl SearchQuery {
    pub fn new(query: Query) -> SearchQuery {
        SearchQuery {
            query: query,
            params: Map::new(),
        }
    }

    /// Parses a request body. A body without a `query` key matches all documents
    pub fn from_json(json: &Json) -> Result<SearchQuery, QueryParseError> {
        let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

        let mut query = None;
        let mut params = Map::new();

        for (key, value) in object.iter() {
            match key.as_ref() {
                "query" => {
                    query = Some(parse_query(value)?);
                }
                _ => {
                    params.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(SearchQuery {
            query: query.unwrap_or_else(Query::new_match_all),
            params: params,
        })
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The top-level clause, for expanders that need to modify it in place
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub fn set_query(&mut self, query: Query) {
        self.query = query;
    }

    pub fn param(&self, name: &str) -> Option<&Json> {
        self.params.get(name)
    }

    pub fn set_param(&mut self, name: &str, value: Json) {
        self.params.insert(name.to_owned(), value);
    }

    pub fn to_json(&self) -> Json {
        let mut body = self.params.clone();
        body.insert("query".to_owned(), self.query.to_json());
        Json::Object(body)
    }
}
