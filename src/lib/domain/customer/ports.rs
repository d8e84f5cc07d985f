use std::future::Future;

use crate::domain::customer::models::customer::{
    CreateCustomerError, CreateCustomerRequest, Customer, CustomerId, DeleteCustomerError,
    GetCustomerError, ListCustomersError, UpdateCustomerError, UpdateCustomerRequest,
};

/// `CustomerService` is the public API for the customer domain.
///
/// The lifecycle rules live here: create refuses a taken id, get/delete/
/// update refuse an id that is not in the store.
pub trait CustomerService: Clone + Send + Sync + 'static {
    fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> impl Future<Output = Result<Customer, CreateCustomerError>> + Send;

    fn get_customer(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<Customer, GetCustomerError>> + Send;

    fn list_customers(
        &self,
    ) -> impl Future<Output = Result<Vec<Customer>, ListCustomersError>> + Send;

    fn delete_customer(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<(), DeleteCustomerError>> + Send;

    fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> impl Future<Output = Result<Customer, UpdateCustomerError>> + Send;
}

/// `CustomerRepository` represents a store of customer records.
///
/// The port is deliberately dumb: absence is reported as `None`, never as an
/// error, and the only failure mode is infrastructure.
pub trait CustomerRepository: Send + Sync + Clone + 'static {
    /// Persists a record. When the request carries no id the store assigns
    /// one; when it does, the record under that id is written in full.
    fn save(
        &self,
        req: &CreateCustomerRequest,
    ) -> impl Future<Output = Result<Customer, anyhow::Error>> + Send;

    fn find_by_id(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, anyhow::Error>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Customer>, anyhow::Error>> + Send;

    fn delete_by_id(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
}
