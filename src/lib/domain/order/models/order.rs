use std::fmt;

use derive_more::{Display, From};
use thiserror::Error;

use crate::domain::customer::models::customer::Customer;

/// Represents an always valid service order identifier.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceOrderId(i64);

impl ServiceOrderId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// The kind of work a service order describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Installation,
    Repair,
    Removal,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0} is not a valid service type")]
pub struct ParseServiceTypeError(String);

impl ServiceType {
    /// Parses the wire representation of a service type. The parse is
    /// strict: anything but the three known lowercase names is rejected.
    pub fn new(raw: &str) -> Result<Self, ParseServiceTypeError> {
        match raw {
            "installation" => Ok(Self::Installation),
            "repair" => Ok(Self::Repair),
            "removal" => Ok(Self::Removal),
            _ => Err(ParseServiceTypeError(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Installation => "installation",
            Self::Repair => "repair",
            Self::Removal => "removal",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service order as persisted by the store.
///
/// The customer is embedded by value; whether it exists in the customer
/// store is not checked anywhere in the order lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOrder {
    id: ServiceOrderId,
    customer: Customer,
    closed: bool,
    service_type: ServiceType,
}

impl ServiceOrder {
    pub fn new(
        id: ServiceOrderId,
        customer: Customer,
        closed: bool,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id,
            customer,
            closed,
            service_type,
        }
    }

    pub fn id(&self) -> &ServiceOrderId {
        &self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

/// Data required by the domain to create a [ServiceOrder].
///
/// The id is optional, exactly as for customers. The embedded customer is
/// carried by value and persisted as given.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct CreateServiceOrderRequest {
    id: Option<ServiceOrderId>,
    customer: Customer,
    closed: bool,
    service_type: ServiceType,
}

impl CreateServiceOrderRequest {
    pub fn new(
        id: Option<ServiceOrderId>,
        customer: Customer,
        closed: bool,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id,
            customer,
            closed,
            service_type,
        }
    }

    pub fn id(&self) -> Option<&ServiceOrderId> {
        self.id.as_ref()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

/// Data required by the domain to replace a stored [ServiceOrder] in full.
///
/// There is no dedicated open/close transition: flipping the closed flag, or
/// any other field, goes through this full replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateServiceOrderRequest {
    id: ServiceOrderId,
    customer: Customer,
    closed: bool,
    service_type: ServiceType,
}

impl UpdateServiceOrderRequest {
    pub fn new(
        id: ServiceOrderId,
        customer: Customer,
        closed: bool,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id,
            customer,
            closed,
            service_type,
        }
    }

    pub fn id(&self) -> &ServiceOrderId {
        &self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

impl From<&UpdateServiceOrderRequest> for CreateServiceOrderRequest {
    fn from(req: &UpdateServiceOrderRequest) -> Self {
        Self::new(
            Some(req.id),
            req.customer.clone(),
            req.closed,
            req.service_type,
        )
    }
}

#[derive(Debug, Error)]
pub enum CreateServiceOrderError {
    #[error("service order with id {id} already exists")]
    AlreadyExists { id: ServiceOrderId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GetServiceOrderError {
    #[error("service order with id {id} not found")]
    NotFound { id: ServiceOrderId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ListServiceOrdersError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DeleteServiceOrderError {
    #[error("service order with id {id} not found")]
    NotFound { id: ServiceOrderId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UpdateServiceOrderError {
    #[error("service order with id {id} not found")]
    NotFound { id: ServiceOrderId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[cfg(test)]
mod service_type_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let result = ServiceType::new("installation");
        let expected = Ok(ServiceType::Installation);

        assert_eq!(result, expected);

        let result = ServiceType::new("repair");
        let expected = Ok(ServiceType::Repair);

        assert_eq!(result, expected);

        let result = ServiceType::new("removal");
        let expected = Ok(ServiceType::Removal);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = ServiceType::new("painting");
        let expected = Err(ParseServiceTypeError("painting".to_string()));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = ServiceType::new("Installation");
        let expected = Err(ParseServiceTypeError("Installation".to_string()));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for service_type in [
            ServiceType::Installation,
            ServiceType::Repair,
            ServiceType::Removal,
        ] {
            let result = ServiceType::new(&service_type.to_string());
            let expected = Ok(service_type);

            assert_eq!(result, expected);
        }
    }
}
