use std::future::Future;

use crate::domain::customer::models::customer::Customer;
use crate::domain::order::models::order::{
    CreateServiceOrderError, CreateServiceOrderRequest, DeleteServiceOrderError,
    GetServiceOrderError, ListServiceOrdersError, ServiceOrder, ServiceOrderId, ServiceType,
    UpdateServiceOrderError, UpdateServiceOrderRequest,
};

/// `ServiceOrderService` is the public API for the service order domain.
pub trait ServiceOrderService: Clone + Send + Sync + 'static {
    fn create_service_order(
        &self,
        req: &CreateServiceOrderRequest,
    ) -> impl Future<Output = Result<ServiceOrder, CreateServiceOrderError>> + Send;

    fn get_service_order(
        &self,
        id: &ServiceOrderId,
    ) -> impl Future<Output = Result<ServiceOrder, GetServiceOrderError>> + Send;

    fn list_service_orders(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, ListServiceOrdersError>> + Send;

    /// Orders with the exact `closed` value: `false` lists open orders,
    /// `true` lists closed ones.
    fn list_service_orders_by_status(
        &self,
        closed: bool,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, ListServiceOrdersError>> + Send;

    /// Orders whose embedded customer equals the given one by value, id and
    /// name both.
    fn list_service_orders_by_customer(
        &self,
        customer: &Customer,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, ListServiceOrdersError>> + Send;

    fn list_service_orders_by_type(
        &self,
        service_type: &ServiceType,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, ListServiceOrdersError>> + Send;

    fn delete_service_order(
        &self,
        id: &ServiceOrderId,
    ) -> impl Future<Output = Result<(), DeleteServiceOrderError>> + Send;

    fn update_service_order(
        &self,
        req: &UpdateServiceOrderRequest,
    ) -> impl Future<Output = Result<ServiceOrder, UpdateServiceOrderError>> + Send;
}

/// `ServiceOrderRepository` represents a store of service order records.
///
/// Same contract as the customer port: absence is `None`, filters return
/// empty collections, failures are infrastructure only.
pub trait ServiceOrderRepository: Send + Sync + Clone + 'static {
    fn save(
        &self,
        req: &CreateServiceOrderRequest,
    ) -> impl Future<Output = Result<ServiceOrder, anyhow::Error>> + Send;

    fn find_by_id(
        &self,
        id: &ServiceOrderId,
    ) -> impl Future<Output = Result<Option<ServiceOrder>, anyhow::Error>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<ServiceOrder>, anyhow::Error>> + Send;

    fn find_by_closed(
        &self,
        closed: bool,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, anyhow::Error>> + Send;

    fn find_by_customer(
        &self,
        customer: &Customer,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, anyhow::Error>> + Send;

    fn find_by_type(
        &self,
        service_type: &ServiceType,
    ) -> impl Future<Output = Result<Vec<ServiceOrder>, anyhow::Error>> + Send;

    fn delete_by_id(
        &self,
        id: &ServiceOrderId,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
}
