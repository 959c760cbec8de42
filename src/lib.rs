//! Customer permission scoping for catalog search
//!
//! Catalog search queries are built elsewhere and handed to query expanders
//! before they are executed. [`CustomerPermissionQueryExpander`] narrows a
//! query to the products the logged-in customer is allowed to see.

#[macro_use]
extern crate slog;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod term;
pub mod query;
pub mod search_query;
pub mod customer;
pub mod config;
pub mod expander;

pub use term::Term;
pub use query::{Query, BoolQuery, HasChildQuery, ScoreMode, Operator};
pub use query::parser::QueryParseError;
pub use search_query::SearchQuery;
pub use customer::{Customer, CustomerClient, SessionCustomerClient};
pub use config::{PermissionConfig, ConfigError};
pub use expander::{CustomerPermissionQueryExpander, QueryExpander, ExpandError, RequestParameters};
