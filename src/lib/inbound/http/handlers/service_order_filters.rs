use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::customer::ports::CustomerService;
use crate::domain::order::models::order::{ParseServiceTypeError, ServiceType};
use crate::domain::order::ports::ServiceOrderService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::service_orders::{
    AllServiceOrdersResponseData, CustomerHttpBody,
};
use crate::inbound::http::responses::{ApiError, ApiSuccess};

impl From<ParseServiceTypeError> for ApiError {
    fn from(e: ParseServiceTypeError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

pub async fn list_open_service_orders<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
) -> Result<ApiSuccess<AllServiceOrdersResponseData>, ApiError> {
    state
        .service_order_service
        .list_service_orders_by_status(false)
        .await
        .map_err(ApiError::from)
        .map(|ref orders| ApiSuccess::new(StatusCode::OK, orders.into()))
}

pub async fn list_closed_service_orders<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
) -> Result<ApiSuccess<AllServiceOrdersResponseData>, ApiError> {
    state
        .service_order_service
        .list_service_orders_by_status(true)
        .await
        .map_err(ApiError::from)
        .map(|ref orders| ApiSuccess::new(StatusCode::OK, orders.into()))
}

/// Takes the customer to filter by as a JSON body, keyed by its full value.
pub async fn list_customer_service_orders<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    body: Result<Json<CustomerHttpBody>, JsonRejection>,
) -> Result<ApiSuccess<AllServiceOrdersResponseData>, ApiError> {
    let Json(body) = body?;
    let customer = body.try_into_domain()?;

    state
        .service_order_service
        .list_service_orders_by_customer(&customer)
        .await
        .map_err(ApiError::from)
        .map(|ref orders| ApiSuccess::new(StatusCode::OK, orders.into()))
}

pub async fn list_service_orders_by_type<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    Path(service_type): Path<String>,
) -> Result<ApiSuccess<AllServiceOrdersResponseData>, ApiError> {
    let service_type = ServiceType::new(&service_type)?;

    state
        .service_order_service
        .list_service_orders_by_type(&service_type)
        .await
        .map_err(ApiError::from)
        .map(|ref orders| ApiSuccess::new(StatusCode::OK, orders.into()))
}
