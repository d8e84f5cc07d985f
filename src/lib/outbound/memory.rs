use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::RwLock;

use crate::domain::customer::models::customer::{CreateCustomerRequest, Customer, CustomerId};
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::order::models::order::{
    CreateServiceOrderRequest, ServiceOrder, ServiceOrderId, ServiceType,
};
use crate::domain::order::ports::ServiceOrderRepository;

/// Non-durable repository backed by process memory. Used by the domain test
/// suites and suitable for local experimentation.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    customers: HashMap<i64, Customer>,
    service_orders: HashMap<i64, ServiceOrder>,
    highest_customer_id: i64,
    highest_service_order_id: i64,
}

/// One past the highest id ever saved in a collection. Deleted ids are never
/// handed out again, and exhausting the id space is a store error, matching
/// an AUTOINCREMENT column in the SQLite adapter.
fn next_id(highest: i64) -> Result<i64, anyhow::Error> {
    highest
        .checked_add(1)
        .ok_or_else(|| anyhow!("id space exhausted after {}", highest))
}

impl Memory {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    async fn filter_orders(&self, keep: impl Fn(&ServiceOrder) -> bool) -> Vec<ServiceOrder> {
        let inner = self.inner.read().await;
        let mut orders: Vec<ServiceOrder> = inner
            .service_orders
            .values()
            .filter(|order| keep(order))
            .cloned()
            .collect();
        orders.sort_by_key(|order| *order.id());
        orders
    }
}

impl CustomerRepository for Memory {
    async fn save(&self, req: &CreateCustomerRequest) -> Result<Customer, anyhow::Error> {
        let mut inner = self.inner.write().await;
        let id = match req.id() {
            Some(id) => *id,
            None => CustomerId::new(next_id(inner.highest_customer_id)?),
        };
        let customer = Customer::new(id, req.name().clone());
        inner.customers.insert(id.into_inner(), customer.clone());
        inner.highest_customer_id = inner.highest_customer_id.max(id.into_inner());
        Ok(customer)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, anyhow::Error> {
        let inner = self.inner.read().await;
        Ok(inner.customers.get(&id.into_inner()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, anyhow::Error> {
        let inner = self.inner.read().await;
        let mut customers: Vec<Customer> = inner.customers.values().cloned().collect();
        customers.sort_by_key(|customer| *customer.id());
        Ok(customers)
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), anyhow::Error> {
        let mut inner = self.inner.write().await;
        inner.customers.remove(&id.into_inner());
        Ok(())
    }
}

impl ServiceOrderRepository for Memory {
    async fn save(&self, req: &CreateServiceOrderRequest) -> Result<ServiceOrder, anyhow::Error> {
        let mut inner = self.inner.write().await;
        let id = match req.id() {
            Some(id) => *id,
            None => ServiceOrderId::new(next_id(inner.highest_service_order_id)?),
        };
        let order = ServiceOrder::new(
            id,
            req.customer().clone(),
            req.closed(),
            *req.service_type(),
        );
        inner.service_orders.insert(id.into_inner(), order.clone());
        inner.highest_service_order_id = inner.highest_service_order_id.max(id.into_inner());
        Ok(order)
    }

    async fn find_by_id(&self, id: &ServiceOrderId) -> Result<Option<ServiceOrder>, anyhow::Error> {
        let inner = self.inner.read().await;
        Ok(inner.service_orders.get(&id.into_inner()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        Ok(self.filter_orders(|_| true).await)
    }

    async fn find_by_closed(&self, closed: bool) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        Ok(self.filter_orders(|order| order.closed() == closed).await)
    }

    async fn find_by_customer(
        &self,
        customer: &Customer,
    ) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        Ok(self.filter_orders(|order| order.customer() == customer).await)
    }

    async fn find_by_type(
        &self,
        service_type: &ServiceType,
    ) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        Ok(self
            .filter_orders(|order| order.service_type() == service_type)
            .await)
    }

    async fn delete_by_id(&self, id: &ServiceOrderId) -> Result<(), anyhow::Error> {
        let mut inner = self.inner.write().await;
        inner.service_orders.remove(&id.into_inner());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::models::customer::CustomerName;

    fn customer_req(id: Option<i64>, name: &str) -> CreateCustomerRequest {
        CreateCustomerRequest::new(id.map(CustomerId::new), CustomerName::new(name).unwrap())
    }

    #[tokio::test]
    async fn test_customer_and_order_ids_are_independent_sequences() {
        let memory = Memory::new();
        let customer = CustomerRepository::save(&memory, &customer_req(None, "Alfredo"))
            .await
            .unwrap();

        let order = ServiceOrderRepository::save(
            &memory,
            &CreateServiceOrderRequest::new(
                None,
                customer.clone(),
                false,
                ServiceType::Installation,
            ),
        )
        .await
        .unwrap();

        assert_eq!(customer.id().into_inner(), 1);
        assert_eq!(order.id().into_inner(), 1);
    }

    #[tokio::test]
    async fn test_next_id_follows_highest_assigned_id() {
        let memory = Memory::new();
        CustomerRepository::save(&memory, &customer_req(Some(7), "Alfredo"))
            .await
            .unwrap();

        let result = CustomerRepository::save(&memory, &customer_req(None, "Bruno"))
            .await
            .unwrap();

        assert_eq!(result.id().into_inner(), 8);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reassigned() {
        let memory = Memory::new();
        for name in ["Alfredo", "Bruno", "Carla"] {
            CustomerRepository::save(&memory, &customer_req(None, name))
                .await
                .unwrap();
        }
        CustomerRepository::delete_by_id(&memory, &CustomerId::new(3))
            .await
            .unwrap();

        let result = CustomerRepository::save(&memory, &customer_req(None, "Dora"))
            .await
            .unwrap();

        assert_eq!(result.id().into_inner(), 4);
    }

    #[tokio::test]
    async fn test_save_fails_cleanly_when_id_space_is_exhausted() {
        let memory = Memory::new();
        CustomerRepository::save(&memory, &customer_req(Some(i64::MAX), "Alfredo"))
            .await
            .unwrap();

        let result = CustomerRepository::save(&memory, &customer_req(None, "Bruno")).await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("id space exhausted"));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let memory = Memory::new();
        CustomerRepository::save(&memory, &customer_req(Some(5), "Bruno"))
            .await
            .unwrap();
        CustomerRepository::save(&memory, &customer_req(Some(2), "Alfredo"))
            .await
            .unwrap();

        let result = CustomerRepository::find_all(&memory).await.unwrap();

        let ids: Vec<i64> = result.iter().map(|c| c.id().into_inner()).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[tokio::test]
    async fn test_save_with_existing_id_overwrites() {
        let memory = Memory::new();
        CustomerRepository::save(&memory, &customer_req(Some(1), "Alfredo"))
            .await
            .unwrap();
        CustomerRepository::save(&memory, &customer_req(Some(1), "Bruno"))
            .await
            .unwrap();

        let result = CustomerRepository::find_by_id(&memory, &CustomerId::new(1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.name().to_string(), "Bruno");
    }
}
