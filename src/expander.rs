//! Scopes catalog search queries to the products the logged-in customer may see
//!
//! Products carry one child document per customer that is allowed to see
//! them. When a customer is logged in, the expander adds a `has_child` filter
//! to the top-level `bool` query so that only products with a matching child
//! document are returned. Anonymous searches are left untouched.

use std::collections::HashMap;

use serde_json::Value as Json;
use slog::Logger;
use thiserror::Error;

use crate::config::PermissionConfig;
use crate::customer::CustomerClient;
use crate::query::{Query, BoolQuery, HasChildQuery};
use crate::search_query::SearchQuery;


/// Field of the permission child document holding the customer id
pub const ID_CUSTOMER: &str = "id-customer";


pub type RequestParameters = HashMap<String, Json>;


#[derive(Debug, PartialEq, Error)]
pub enum ExpandError {
    /// The query has a shape the expander cannot add filters to
    #[error("customer permission filter requires a top-level `{expected}` query, got `{actual}`")]
    ConfigurationMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}


pub trait QueryExpander {
    /// Expands `search_query` in place and hands the same query back
    fn expand_query<'a>(&self, search_query: &'a mut SearchQuery, request_parameters: &RequestParameters) -> Result<&'a mut SearchQuery, ExpandError>;
}


pub struct CustomerPermissionQueryExpander<C> {
    log: Logger,
    config: PermissionConfig,
    customer_client: C,
}


impl<C: CustomerClient> CustomerPermissionQueryExpander<C> {
    pub fn new(log: Logger, config: PermissionConfig, customer_client: C) -> CustomerPermissionQueryExpander<C> {
        CustomerPermissionQueryExpander {
            log: log,
            config: config,
            customer_client: customer_client,
        }
    }

    pub fn config(&self) -> &PermissionConfig {
        &self.config
    }

    fn create_customer_query(&self, id_customer: i64) -> Query {
        Query::new_match(ID_CUSTOMER, id_customer)
    }

    /// Builds the filter matching products that have a permission child for this customer
    pub fn create_customer_filter(&self, id_customer: i64) -> Query {
        let customer_query = self.create_customer_query(id_customer);

        Query::HasChild(HasChildQuery::new(&self.config.child_type, customer_query))
    }
}


fn get_bool_query(query: &mut Query) -> Result<&mut BoolQuery, ExpandError> {
    let actual = query.kind();

    match *query {
        Query::Bool(ref mut bool_query) => Ok(bool_query),
        _ => Err(ExpandError::ConfigurationMismatch {
            expected: "bool",
            actual: actual,
        }),
    }
}


impl<C: CustomerClient> QueryExpander for CustomerPermissionQueryExpander<C> {
    fn expand_query<'a>(&self, search_query: &'a mut SearchQuery, _request_parameters: &RequestParameters) -> Result<&'a mut SearchQuery, ExpandError> {
        let customer = match self.customer_client.get_customer() {
            Some(customer) => customer,
            None => {
                debug!(self.log, "[permission] no customer in session, query left unchanged");
                return Ok(search_query);
            }
        };

        let customer_filter = self.create_customer_filter(customer.id_customer);

        match get_bool_query(search_query.query_mut()) {
            Ok(bool_query) => {
                bool_query.add_filter(customer_filter);
            }
            Err(error) => {
                warn!(self.log, "[permission] cannot add customer filter"; "error" => %error);
                return Err(error);
            }
        }

        debug!(self.log, "[permission] added customer filter";
               "id_customer" => customer.id_customer,
               "child_type" => self.config.child_type.as_str());

        Ok(search_query)
    }
}
