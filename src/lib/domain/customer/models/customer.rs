use derive_more::{Display, From};
use thiserror::Error;

/// Represents an always valid customer identifier.
///
/// Identifiers are assigned by the store on first save; a caller may also
/// supply one up front, in which case the create path checks it for a
/// collision before persisting.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// Represents an always valid customer name.
#[derive(Display, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerName(String);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CustomerNameError {
    #[error("customer name cannot be empty")]
    Empty,
    #[error("customer name cannot be longer than {} characters", CustomerName::MAX_LENGTH)]
    TooLong,
}

impl CustomerName {
    /// Upper bound on the name length, in characters.
    pub const MAX_LENGTH: usize = 200;

    /// The raw string is taken as given, without trimming.
    pub fn new(raw_name: &str) -> Result<Self, CustomerNameError> {
        if raw_name.is_empty() {
            return Err(CustomerNameError::Empty);
        }
        if raw_name.chars().count() > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong);
        }

        Ok(Self(raw_name.to_string()))
    }
}

/// A customer as persisted by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
}

impl Customer {
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }
}

/// Data required by the domain to create a [Customer].
///
/// The id is optional: when absent the store assigns one, when present the
/// record is keyed by it and create refuses to overwrite an existing record.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct CreateCustomerRequest {
    id: Option<CustomerId>,
    name: CustomerName,
}

impl CreateCustomerRequest {
    pub fn new(id: Option<CustomerId>, name: CustomerName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> Option<&CustomerId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }
}

/// Data required by the domain to replace a stored [Customer] in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateCustomerRequest {
    id: CustomerId,
    name: CustomerName,
}

impl UpdateCustomerRequest {
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }
}

impl From<&UpdateCustomerRequest> for CreateCustomerRequest {
    /// An update persists through the same save path as a create, keyed by
    /// the request id: a full replacement, no field merge.
    fn from(req: &UpdateCustomerRequest) -> Self {
        Self::new(Some(req.id), req.name.clone())
    }
}

#[derive(Debug, Error)]
pub enum CreateCustomerError {
    #[error("customer with id {id} already exists")]
    AlreadyExists { id: CustomerId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GetCustomerError {
    #[error("customer with id {id} not found")]
    NotFound { id: CustomerId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ListCustomersError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DeleteCustomerError {
    #[error("customer with id {id} not found")]
    NotFound { id: CustomerId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UpdateCustomerError {
    #[error("customer with id {id} not found")]
    NotFound { id: CustomerId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[cfg(test)]
mod customer_name_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let result = CustomerName::new("Alfredo");
        let expected = Ok(CustomerName("Alfredo".to_string()));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_name_is_empty() {
        let result = CustomerName::new("");
        let expected = Err(CustomerNameError::Empty);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_name_at_maximum_length() {
        let raw_name = "a".repeat(CustomerName::MAX_LENGTH);
        let result = CustomerName::new(&raw_name);
        let expected = Ok(CustomerName(raw_name.clone()));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_name_too_long() {
        let raw_name = "a".repeat(CustomerName::MAX_LENGTH + 1);
        let result = CustomerName::new(&raw_name);
        let expected = Err(CustomerNameError::TooLong);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        let raw_name = "é".repeat(CustomerName::MAX_LENGTH);
        let result = CustomerName::new(&raw_name);
        let expected = Ok(CustomerName(raw_name.clone()));

        assert_eq!(result, expected);
    }
}

#[cfg(test)]
mod customer_tests {
    use super::*;

    #[test]
    fn test_update_request_converts_to_full_replacement() {
        let id = CustomerId::new(3);
        let name = CustomerName::new("Alfredo").unwrap();

        let result = CreateCustomerRequest::from(&UpdateCustomerRequest::new(id, name.clone()));
        let expected = CreateCustomerRequest::new(Some(id), name);

        assert_eq!(result, expected);
    }
}
