use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::customer::models::customer::{
    Customer, CustomerId, CustomerName, CustomerNameError,
};
use crate::domain::customer::ports::CustomerService;
use crate::domain::order::models::order::{
    CreateServiceOrderError, CreateServiceOrderRequest, DeleteServiceOrderError,
    GetServiceOrderError, ListServiceOrdersError, ParseServiceTypeError, ServiceOrder,
    ServiceOrderId, ServiceType, UpdateServiceOrderError, UpdateServiceOrderRequest,
};
use crate::domain::order::ports::ServiceOrderService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::customers::CustomerResponseData;
use crate::inbound::http::responses::{ApiError, ApiSuccess};

impl From<CreateServiceOrderError> for ApiError {
    fn from(e: CreateServiceOrderError) -> Self {
        match e {
            CreateServiceOrderError::AlreadyExists { id } => {
                Self::BadRequest(format!("service order with id {} already exists", id))
            }
            CreateServiceOrderError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<GetServiceOrderError> for ApiError {
    fn from(e: GetServiceOrderError) -> Self {
        match e {
            GetServiceOrderError::NotFound { id } => {
                Self::NotFound(format!("service order with id {} not found", id))
            }
            GetServiceOrderError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ListServiceOrdersError> for ApiError {
    fn from(e: ListServiceOrdersError) -> Self {
        match e {
            ListServiceOrdersError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<DeleteServiceOrderError> for ApiError {
    fn from(e: DeleteServiceOrderError) -> Self {
        match e {
            DeleteServiceOrderError::NotFound { id } => {
                Self::NotFound(format!("service order with id {} not found", id))
            }
            DeleteServiceOrderError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<UpdateServiceOrderError> for ApiError {
    fn from(e: UpdateServiceOrderError) -> Self {
        match e {
            UpdateServiceOrderError::NotFound { id } => {
                Self::NotFound(format!("service order with id {} not found", id))
            }
            UpdateServiceOrderError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ParseServiceOrderHttpRequestError {
    #[error(transparent)]
    CustomerName(#[from] CustomerNameError),
    #[error(transparent)]
    ServiceType(#[from] ParseServiceTypeError),
}

impl From<ParseServiceOrderHttpRequestError> for ApiError {
    fn from(e: ParseServiceOrderHttpRequestError) -> Self {
        let message = match e {
            ParseServiceOrderHttpRequestError::CustomerName(cause) => format!("{cause}"),
            ParseServiceOrderHttpRequestError::ServiceType(cause) => format!("{cause}"),
        };

        Self::BadRequest(message)
    }
}

/// Wire shape of a customer embedded in a service order body. The referenced
/// customer is taken at face value and not checked against the customer store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerHttpBody {
    pub id: i64,
    pub name: String,
}

impl CustomerHttpBody {
    pub fn try_into_domain(self) -> Result<Customer, CustomerNameError> {
        let name = CustomerName::new(&self.name)?;

        Ok(Customer::new(CustomerId::new(self.id), name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateServiceOrderHttpRequestBody {
    id: Option<i64>,
    customer: CustomerHttpBody,
    closed: bool,
    #[serde(rename = "type")]
    service_type: String,
}

impl CreateServiceOrderHttpRequestBody {
    fn try_into_domain(
        self,
    ) -> Result<CreateServiceOrderRequest, ParseServiceOrderHttpRequestError> {
        let customer = self.customer.try_into_domain()?;
        let service_type = ServiceType::new(&self.service_type)?;

        Ok(CreateServiceOrderRequest::new(
            self.id.map(ServiceOrderId::new),
            customer,
            self.closed,
            service_type,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateServiceOrderHttpRequestBody {
    id: i64,
    customer: CustomerHttpBody,
    closed: bool,
    #[serde(rename = "type")]
    service_type: String,
}

impl UpdateServiceOrderHttpRequestBody {
    fn try_into_domain(
        self,
    ) -> Result<UpdateServiceOrderRequest, ParseServiceOrderHttpRequestError> {
        let customer = self.customer.try_into_domain()?;
        let service_type = ServiceType::new(&self.service_type)?;

        Ok(UpdateServiceOrderRequest::new(
            ServiceOrderId::new(self.id),
            customer,
            self.closed,
            service_type,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOrderResponseData {
    id: i64,
    customer: CustomerResponseData,
    closed: bool,
    #[serde(rename = "type")]
    service_type: String,
}

impl From<&ServiceOrder> for ServiceOrderResponseData {
    fn from(order: &ServiceOrder) -> Self {
        Self {
            id: order.id().into_inner(),
            customer: order.customer().into(),
            closed: order.closed(),
            service_type: order.service_type().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllServiceOrdersResponseData {
    service_orders: Vec<ServiceOrderResponseData>,
}

impl From<&Vec<ServiceOrder>> for AllServiceOrdersResponseData {
    fn from(orders: &Vec<ServiceOrder>) -> Self {
        Self {
            service_orders: orders.iter().map(|order| order.into()).collect(),
        }
    }
}

pub async fn create_service_order<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    body: Result<Json<CreateServiceOrderHttpRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ServiceOrderResponseData>, ApiError> {
    let Json(body) = body?;
    let domain_req = body.try_into_domain()?;

    state
        .service_order_service
        .create_service_order(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

pub async fn get_service_order<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<ServiceOrderResponseData>, ApiError> {
    state
        .service_order_service
        .get_service_order(&ServiceOrderId::new(id))
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}

pub async fn list_service_orders<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
) -> Result<ApiSuccess<AllServiceOrdersResponseData>, ApiError> {
    state
        .service_order_service
        .list_service_orders()
        .await
        .map_err(ApiError::from)
        .map(|ref orders| ApiSuccess::new(StatusCode::OK, orders.into()))
}

pub async fn delete_service_order<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .service_order_service
        .delete_service_order(&ServiceOrderId::new(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn patch_service_order<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    body: Result<Json<UpdateServiceOrderHttpRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ServiceOrderResponseData>, ApiError> {
    let Json(body) = body?;
    let domain_req = body.try_into_domain()?;

    state
        .service_order_service
        .update_service_order(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}
