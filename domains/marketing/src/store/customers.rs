//! Customer directory

use uuid::Uuid;

use crate::domain::entities::{Customer, CustomerStatus};

/// Owns the customer records the business console renders and emails
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, customer: Customer) -> Customer {
        tracing::debug!(customer_id = %customer.id, "added customer");
        self.customers.push(customer.clone());
        customer
    }

    /// Customers in insertion order
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.email == email)
    }

    /// Search by name or email, optionally restricted to a status
    pub fn search(&self, query: &str, status: Option<CustomerStatus>) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.matches(query) && status.map_or(true, |s| c.status == s))
            .collect()
    }
}
