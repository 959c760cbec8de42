//! Typed model of the Elasticsearch query DSL subset used by catalog search

pub mod bool_query;
pub mod has_child;
pub mod parser;

use serde_json::{Map, Value as Json};

use crate::term::Term;

pub use self::bool_query::BoolQuery;
pub use self::has_child::{HasChildQuery, ScoreMode};


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Or,
    And,
}


impl Operator {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Operator::Or => "or",
            Operator::And => "and",
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    MatchAll {
        boost: f64,
    },
    MatchNone,
    Match {
        field: String,
        query: Term,
        operator: Option<Operator>,
        boost: Option<f64>,
    },
    Term {
        field: String,
        value: Term,
        boost: Option<f64>,
    },
    Terms {
        field: String,
        values: Vec<Term>,
        boost: Option<f64>,
    },
    Bool(BoolQuery),
    HasChild(HasChildQuery),
}


impl Query {
    pub fn new_match_all() -> Query {
        Query::MatchAll {
            boost: 1.0f64,
        }
    }

    /// A `match` query in its short form: `{"match": {field: value}}`
    pub fn new_match<T: Into<Term>>(field: &str, value: T) -> Query {
        Query::Match {
            field: field.to_owned(),
            query: value.into(),
            operator: None,
            boost: None,
        }
    }

    pub fn new_term<T: Into<Term>>(field: &str, value: T) -> Query {
        Query::Term {
            field: field.to_owned(),
            value: value.into(),
            boost: None,
        }
    }

    pub fn new_bool() -> Query {
        Query::Bool(BoolQuery::new())
    }

    /// The DSL name of this query
    pub fn kind(&self) -> &'static str {
        match *self {
            Query::MatchAll{..} => "match_all",
            Query::MatchNone => "match_none",
            Query::Match{..} => "match",
            Query::Term{..} => "term",
            Query::Terms{..} => "terms",
            Query::Bool(_) => "bool",
            Query::HasChild(_) => "has_child",
        }
    }

    pub fn as_bool(&self) -> Option<&BoolQuery> {
        match *self {
            Query::Bool(ref bool_query) => Some(bool_query),
            _ => None,
        }
    }

    pub fn as_bool_mut(&mut self) -> Option<&mut BoolQuery> {
        match *self {
            Query::Bool(ref mut bool_query) => Some(bool_query),
            _ => None,
        }
    }

    /// Renders the query as Elasticsearch JSON
    pub fn to_json(&self) -> Json {
        let mut body = Map::new();

        match *self {
            Query::MatchAll{boost} => {
                let mut inner = Map::new();
                if boost != 1.0f64 {
                    inner.insert("boost".to_owned(), Json::from(boost));
                }

                body.insert(self.kind().to_owned(), Json::Object(inner));
            }
            Query::MatchNone => {
                body.insert(self.kind().to_owned(), Json::Object(Map::new()));
            }
            Query::Match{ref field, ref query, operator, boost} => {
                let value = if operator.is_none() && boost.is_none() {
                    query.as_json()
                } else {
                    let mut options = Map::new();
                    options.insert("query".to_owned(), query.as_json());

                    if let Some(operator) = operator {
                        options.insert("operator".to_owned(), Json::from(operator.as_str()));
                    }

                    if let Some(boost) = boost {
                        options.insert("boost".to_owned(), Json::from(boost));
                    }

                    Json::Object(options)
                };

                let mut inner = Map::new();
                inner.insert(field.clone(), value);
                body.insert(self.kind().to_owned(), Json::Object(inner));
            }
            Query::Term{ref field, ref value, boost} => {
                let value = match boost {
                    Some(boost) => {
                        let mut options = Map::new();
                        options.insert("value".to_owned(), value.as_json());
                        options.insert("boost".to_owned(), Json::from(boost));
                        Json::Object(options)
                    }
                    None => value.as_json(),
                };

                let mut inner = Map::new();
                inner.insert(field.clone(), value);
                body.insert(self.kind().to_owned(), Json::Object(inner));
            }
            Query::Terms{ref field, ref values, boost} => {
                let mut inner = Map::new();
                inner.insert(field.clone(), Json::Array(values.iter().map(|value| value.as_json()).collect()));

                if let Some(boost) = boost {
                    inner.insert("boost".to_owned(), Json::from(boost));
                }

                body.insert(self.kind().to_owned(), Json::Object(inner));
            }
            Query::Bool(ref bool_query) => {
                body.insert(self.kind().to_owned(), bool_query.to_json());
            }
            Query::HasChild(ref has_child) => {
                body.insert(self.kind().to_owned(), has_child.to_json());
            }
        }

        Json::Object(body)
    }
}


impl From<BoolQuery> for Query {
    fn from(bool_query: BoolQuery) -> Query {
        Query::Bool(bool_query)
    }
}


impl From<HasChildQuery> for Query {
    fn from(has_child: HasChildQuery) -> Query {
        Query::HasChild(has_child)
    }
}
