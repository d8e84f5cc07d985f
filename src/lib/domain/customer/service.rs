use crate::domain::customer::models::customer::{
    CreateCustomerError, CreateCustomerRequest, Customer, CustomerId, DeleteCustomerError,
    GetCustomerError, ListCustomersError, UpdateCustomerError, UpdateCustomerRequest,
};
use crate::domain::customer::ports::{CustomerRepository, CustomerService};

/// Canonical implementation of the [CustomerService] port, through which the
/// customer domain API is consumed.
#[derive(Debug, Clone)]
pub struct Service<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: CustomerRepository> CustomerService for Service<R> {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, CreateCustomerError> {
        if let Some(id) = req.id() {
            if self.repo.find_by_id(id).await?.is_some() {
                return Err(CreateCustomerError::AlreadyExists { id: *id });
            }
        }

        let customer = self.repo.save(req).await?;
        Ok(customer)
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Customer, GetCustomerError> {
        let customer = self.repo.find_by_id(id).await?;
        customer.ok_or(GetCustomerError::NotFound { id: *id })
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ListCustomersError> {
        let customers = self.repo.find_all().await?;
        Ok(customers)
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), DeleteCustomerError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DeleteCustomerError::NotFound { id: *id });
        }

        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, UpdateCustomerError> {
        if self.repo.find_by_id(req.id()).await?.is_none() {
            return Err(UpdateCustomerError::NotFound { id: *req.id() });
        }

        let customer = self.repo.save(&req.into()).await?;
        Ok(customer)
    }
}
