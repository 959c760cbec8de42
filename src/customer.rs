//! Customer identity and the session client that provides it

use std::sync::{Arc, RwLock};


/// The logged-in customer, as read from the session
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id_customer: i64,
    pub customer_reference: Option<String>,
}


impl Customer {
    pub fn new(id_customer: i64) -> Customer {
        Customer {
            id_customer: id_customer,
            customer_reference: None,
        }
    }

    pub fn with_reference(mut self, customer_reference: &str) -> Customer {
        self.customer_reference = Some(customer_reference.to_owned());
        self
    }
}


/// Provides the customer of the current request, if one is logged in
pub trait CustomerClient {
    fn get_customer(&self) -> Option<Customer>;
}


impl<F> CustomerClient for F where F: Fn() -> Option<Customer> {
    fn get_customer(&self) -> Option<Customer> {
        self()
    }
}


impl<C: CustomerClient + ?Sized> CustomerClient for Arc<C> {
    fn get_customer(&self) -> Option<Customer> {
        (**self).get_customer()
    }
}


/// A customer client backed by an in-memory session
#[derive(Debug, Default)]
pub struct SessionCustomerClient {
    customer: RwLock<Option<Customer>>,
}


impl SessionCustomerClient {
    pub fn new() -> SessionCustomerClient {
        SessionCustomerClient::default()
    }

    pub fn with_customer(customer: Customer) -> SessionCustomerClient {
        SessionCustomerClient {
            customer: RwLock::new(Some(customer)),
        }
    }

    pub fn set_customer(&self, customer: Customer) {
        let mut session = self.customer.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *session = Some(customer);
    }

    /// Logs the customer out. Returns the customer that was logged in
    pub fn remove_customer(&self) -> Option<Customer> {
        let mut session = self.customer.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        session.take()
    }
}


impl CustomerClient for SessionCustomerClient {
    fn get_customer(&self) -> Option<Customer> {
        let session = self.customer.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        session.clone()
    }
}
