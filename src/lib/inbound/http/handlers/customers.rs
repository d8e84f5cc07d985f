use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::customer::models::customer::{
    CreateCustomerError, CreateCustomerRequest, Customer, CustomerId, CustomerName,
    CustomerNameError, DeleteCustomerError, GetCustomerError, ListCustomersError,
    UpdateCustomerError, UpdateCustomerRequest,
};
use crate::domain::customer::ports::CustomerService;
use crate::domain::order::ports::ServiceOrderService;
use crate::inbound::http::AppState;
use crate::inbound::http::responses::{ApiError, ApiSuccess};

impl From<CustomerNameError> for ApiError {
    fn from(e: CustomerNameError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<CreateCustomerError> for ApiError {
    fn from(e: CreateCustomerError) -> Self {
        match e {
            CreateCustomerError::AlreadyExists { id } => {
                Self::BadRequest(format!("customer with id {} already exists", id))
            }
            CreateCustomerError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<GetCustomerError> for ApiError {
    fn from(e: GetCustomerError) -> Self {
        match e {
            GetCustomerError::NotFound { id } => {
                Self::NotFound(format!("customer with id {} not found", id))
            }
            GetCustomerError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ListCustomersError> for ApiError {
    fn from(e: ListCustomersError) -> Self {
        match e {
            ListCustomersError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<DeleteCustomerError> for ApiError {
    fn from(e: DeleteCustomerError) -> Self {
        match e {
            DeleteCustomerError::NotFound { id } => {
                Self::NotFound(format!("customer with id {} not found", id))
            }
            DeleteCustomerError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<UpdateCustomerError> for ApiError {
    fn from(e: UpdateCustomerError) -> Self {
        match e {
            UpdateCustomerError::NotFound { id } => {
                Self::NotFound(format!("customer with id {} not found", id))
            }
            UpdateCustomerError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCustomerHttpRequestBody {
    id: Option<i64>,
    name: String,
}

impl CreateCustomerHttpRequestBody {
    fn try_into_domain(self) -> Result<CreateCustomerRequest, CustomerNameError> {
        let name = CustomerName::new(&self.name)?;

        Ok(CreateCustomerRequest::new(self.id.map(CustomerId::new), name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCustomerHttpRequestBody {
    id: i64,
    name: String,
}

impl UpdateCustomerHttpRequestBody {
    fn try_into_domain(self) -> Result<UpdateCustomerRequest, CustomerNameError> {
        let name = CustomerName::new(&self.name)?;

        Ok(UpdateCustomerRequest::new(CustomerId::new(self.id), name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponseData {
    id: i64,
    name: String,
}

impl From<&Customer> for CustomerResponseData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().into_inner(),
            name: customer.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllCustomersResponseData {
    customers: Vec<CustomerResponseData>,
}

impl From<&Vec<Customer>> for AllCustomersResponseData {
    fn from(customers: &Vec<Customer>) -> Self {
        Self {
            customers: customers.iter().map(|customer| customer.into()).collect(),
        }
    }
}

pub async fn create_customer<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    body: Result<Json<CreateCustomerHttpRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CustomerResponseData>, ApiError> {
    let Json(body) = body?;
    let domain_req = body.try_into_domain()?;

    state
        .customer_service
        .create_customer(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::CREATED, customer.into()))
}

pub async fn get_customer<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<CustomerResponseData>, ApiError> {
    state
        .customer_service
        .get_customer(&CustomerId::new(id))
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}

pub async fn list_customers<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
) -> Result<ApiSuccess<AllCustomersResponseData>, ApiError> {
    state
        .customer_service
        .list_customers()
        .await
        .map_err(ApiError::from)
        .map(|ref customers| ApiSuccess::new(StatusCode::OK, customers.into()))
}

pub async fn delete_customer<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .customer_service
        .delete_customer(&CustomerId::new(id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn patch_customer<CS: CustomerService, SOS: ServiceOrderService>(
    State(state): State<AppState<CS, SOS>>,
    body: Result<Json<UpdateCustomerHttpRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CustomerResponseData>, ApiError> {
    let Json(body) = body?;
    let domain_req = body.try_into_domain()?;

    state
        .customer_service
        .update_customer(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use axum::response::IntoResponse;

    use super::*;
    use crate::domain::customer::service::Service as CustomerDomainService;
    use crate::domain::order::service::Service as OrderDomainService;
    use crate::outbound::memory::Memory;

    fn test_state() -> AppState<CustomerDomainService<Memory>, OrderDomainService<Memory>> {
        let memory = Memory::new();

        AppState {
            customer_service: Arc::new(CustomerDomainService::new(memory.clone())),
            service_order_service: Arc::new(OrderDomainService::new(memory)),
        }
    }

    fn create_body(
        id: Option<i64>,
        name: &str,
    ) -> Result<Json<CreateCustomerHttpRequestBody>, JsonRejection> {
        Ok(Json(CreateCustomerHttpRequestBody {
            id,
            name: name.to_string(),
        }))
    }

    async fn rejected_body(raw: &'static str) -> JsonRejection {
        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(raw))
            .unwrap();

        Json::<CreateCustomerHttpRequestBody>::from_request(request, &())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_create_customer_returns_created_customer() {
        let state = test_state();

        let result = create_customer(State(state), create_body(None, "Alfredo")).await;

        let expected = ApiSuccess::new(
            StatusCode::CREATED,
            CustomerResponseData {
                id: 1,
                name: "Alfredo".to_string(),
            },
        );
        assert_eq!(result, Ok(expected));
    }

    #[tokio::test]
    async fn test_create_customer_with_empty_name_is_bad_request() {
        let state = test_state();

        let result = create_customer(State(state), create_body(None, "")).await;

        let expected = ApiError::BadRequest("customer name cannot be empty".to_string());
        assert_eq!(result, Err(expected));
    }

    #[tokio::test]
    async fn test_create_customer_with_malformed_body_is_bad_request() {
        let state = test_state();
        let rejection = rejected_body("{not json").await;

        let result = create_customer(State(state), Err(rejection)).await;

        let error = result.unwrap_err();
        assert!(matches!(&error, ApiError::BadRequest(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_customer_with_taken_id_is_bad_request() {
        let state = test_state();
        create_customer(State(state.clone()), create_body(Some(1), "Alfredo"))
            .await
            .unwrap();

        let result = create_customer(State(state), create_body(Some(1), "Bruno")).await;

        let expected = ApiError::BadRequest("customer with id 1 already exists".to_string());
        assert_eq!(result, Err(expected));
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let state = test_state();

        let result = get_customer(State(state), Path(42)).await;

        let expected = ApiError::NotFound("customer with id 42 not found".to_string());
        assert_eq!(result, Err(expected));
    }

    #[tokio::test]
    async fn test_list_customers_returns_all_in_id_order() {
        let state = test_state();
        create_customer(State(state.clone()), create_body(Some(2), "Bruno"))
            .await
            .unwrap();
        create_customer(State(state.clone()), create_body(Some(1), "Alfredo"))
            .await
            .unwrap();

        let result = list_customers(State(state)).await;

        let expected = ApiSuccess::new(
            StatusCode::OK,
            AllCustomersResponseData {
                customers: vec![
                    CustomerResponseData {
                        id: 1,
                        name: "Alfredo".to_string(),
                    },
                    CustomerResponseData {
                        id: 2,
                        name: "Bruno".to_string(),
                    },
                ],
            },
        );
        assert_eq!(result, Ok(expected));
    }

    #[tokio::test]
    async fn test_delete_customer_returns_no_content() {
        let state = test_state();
        create_customer(State(state.clone()), create_body(Some(1), "Alfredo"))
            .await
            .unwrap();

        let result = delete_customer(State(state.clone()), Path(1)).await;

        assert_eq!(result, Ok(StatusCode::NO_CONTENT));
        assert_eq!(
            get_customer(State(state), Path(1)).await,
            Err(ApiError::NotFound(
                "customer with id 1 not found".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_customer_not_found() {
        let state = test_state();

        let result = delete_customer(State(state), Path(42)).await;

        let expected = ApiError::NotFound("customer with id 42 not found".to_string());
        assert_eq!(result, Err(expected));
    }

    #[tokio::test]
    async fn test_patch_customer_replaces_name() {
        let state = test_state();
        create_customer(State(state.clone()), create_body(Some(1), "Alfredo"))
            .await
            .unwrap();

        let result = patch_customer(
            State(state),
            Ok(Json(UpdateCustomerHttpRequestBody {
                id: 1,
                name: "Bruno".to_string(),
            })),
        )
        .await;

        let expected = ApiSuccess::new(
            StatusCode::OK,
            CustomerResponseData {
                id: 1,
                name: "Bruno".to_string(),
            },
        );
        assert_eq!(result, Ok(expected));
    }

    #[tokio::test]
    async fn test_patch_missing_customer_not_found() {
        let state = test_state();

        let result = patch_customer(
            State(state),
            Ok(Json(UpdateCustomerHttpRequestBody {
                id: 42,
                name: "Alfredo".to_string(),
            })),
        )
        .await;

        let expected = ApiError::NotFound("customer with id 42 not found".to_string());
        assert_eq!(result, Err(expected));
    }
}
