use crate::domain::customer::models::customer::Customer;
use crate::domain::order::models::order::{
    CreateServiceOrderError, CreateServiceOrderRequest, DeleteServiceOrderError,
    GetServiceOrderError, ListServiceOrdersError, ServiceOrder, ServiceOrderId, ServiceType,
    UpdateServiceOrderError, UpdateServiceOrderRequest,
};
use crate::domain::order::ports::{ServiceOrderRepository, ServiceOrderService};

/// Canonical implementation of the [ServiceOrderService] port, through which
/// the service order domain API is consumed.
#[derive(Debug, Clone)]
pub struct Service<R: ServiceOrderRepository> {
    repo: R,
}

impl<R: ServiceOrderRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: ServiceOrderRepository> ServiceOrderService for Service<R> {
    async fn create_service_order(
        &self,
        req: &CreateServiceOrderRequest,
    ) -> Result<ServiceOrder, CreateServiceOrderError> {
        if let Some(id) = req.id() {
            if self.repo.find_by_id(id).await?.is_some() {
                return Err(CreateServiceOrderError::AlreadyExists { id: *id });
            }
        }

        let order = self.repo.save(req).await?;
        Ok(order)
    }

    async fn get_service_order(
        &self,
        id: &ServiceOrderId,
    ) -> Result<ServiceOrder, GetServiceOrderError> {
        let order = self.repo.find_by_id(id).await?;
        order.ok_or(GetServiceOrderError::NotFound { id: *id })
    }

    async fn list_service_orders(&self) -> Result<Vec<ServiceOrder>, ListServiceOrdersError> {
        let orders = self.repo.find_all().await?;
        Ok(orders)
    }

    async fn list_service_orders_by_status(
        &self,
        closed: bool,
    ) -> Result<Vec<ServiceOrder>, ListServiceOrdersError> {
        let orders = self.repo.find_by_closed(closed).await?;
        Ok(orders)
    }

    async fn list_service_orders_by_customer(
        &self,
        customer: &Customer,
    ) -> Result<Vec<ServiceOrder>, ListServiceOrdersError> {
        let orders = self.repo.find_by_customer(customer).await?;
        Ok(orders)
    }

    async fn list_service_orders_by_type(
        &self,
        service_type: &ServiceType,
    ) -> Result<Vec<ServiceOrder>, ListServiceOrdersError> {
        let orders = self.repo.find_by_type(service_type).await?;
        Ok(orders)
    }

    async fn delete_service_order(
        &self,
        id: &ServiceOrderId,
    ) -> Result<(), DeleteServiceOrderError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DeleteServiceOrderError::NotFound { id: *id });
        }

        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    async fn update_service_order(
        &self,
        req: &UpdateServiceOrderRequest,
    ) -> Result<ServiceOrder, UpdateServiceOrderError> {
        if self.repo.find_by_id(req.id()).await?.is_none() {
            return Err(UpdateServiceOrderError::NotFound { id: *req.id() });
        }

        let order = self.repo.save(&req.into()).await?;
        Ok(order)
    }
}
