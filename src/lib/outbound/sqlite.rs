use std::str::FromStr;

use anyhow::{Context, anyhow};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::domain::customer::models::customer::{
    CreateCustomerRequest, Customer, CustomerId, CustomerName,
};
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::order::models::order::{
    CreateServiceOrderRequest, ServiceOrder, ServiceOrderId, ServiceType,
};
use crate::domain::order::ports::ServiceOrderRepository;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS service_orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL,
        customer_name TEXT NOT NULL,
        closed INTEGER NOT NULL,
        service_type TEXT NOT NULL
    )",
];

#[derive(Debug, Clone)]
pub struct Sqlite {
    pool: SqlitePool,
}

impl Sqlite {
    pub async fn new(path: &str) -> Result<Sqlite, anyhow::Error> {
        let pool = SqlitePool::connect_with(
            SqliteConnectOptions::from_str(path)
                .with_context(|| format!("invalid database path {}", path))?
                .create_if_missing(true)
                .pragma("foreign_keys", "ON"),
        )
        .await
        .with_context(|| format!("failed to open database at {}", path))?;

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .context("failed to prepare database schema")?;
        }

        Ok(Sqlite { pool })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
}

impl CustomerRow {
    fn try_into_domain(self) -> Result<Customer, anyhow::Error> {
        let name = CustomerName::new(&self.name).map_err(|e| {
            anyhow!(e).context(format!("stored customer name {:?} is invalid", self.name))
        })?;

        Ok(Customer::new(CustomerId::new(self.id), name))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceOrderRow {
    id: i64,
    customer_id: i64,
    customer_name: String,
    closed: bool,
    service_type: String,
}

impl ServiceOrderRow {
    fn try_into_domain(self) -> Result<ServiceOrder, anyhow::Error> {
        let customer_name = CustomerName::new(&self.customer_name).map_err(|e| {
            anyhow!(e).context(format!(
                "stored customer name {:?} is invalid",
                self.customer_name
            ))
        })?;
        let service_type = ServiceType::new(&self.service_type).map_err(|e| {
            anyhow!(e).context(format!(
                "stored service type {:?} is invalid",
                self.service_type
            ))
        })?;

        Ok(ServiceOrder::new(
            ServiceOrderId::new(self.id),
            Customer::new(CustomerId::new(self.customer_id), customer_name),
            self.closed,
            service_type,
        ))
    }
}

impl CustomerRepository for Sqlite {
    async fn save(&self, req: &CreateCustomerRequest) -> Result<Customer, anyhow::Error> {
        let name = req.name().to_string();

        let id = match req.id() {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO customers (id, name) VALUES ($1, $2)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name",
                )
                .bind(id.into_inner())
                .bind(&name)
                .execute(&self.pool)
                .await
                .with_context(|| format!("failed to save customer with id {}", id))?;

                *id
            }
            None => {
                let result = sqlx::query("INSERT INTO customers (name) VALUES ($1)")
                    .bind(&name)
                    .execute(&self.pool)
                    .await
                    .context("failed to save customer")?;

                CustomerId::new(result.last_insert_rowid())
            }
        };

        Ok(Customer::new(id, req.name().clone()))
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, anyhow::Error> {
        let row: Option<CustomerRow> =
            sqlx::query_as("SELECT id, name FROM customers WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("failed to fetch customer with id {}", id))?;

        row.map(CustomerRow::try_into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, anyhow::Error> {
        let rows: Vec<CustomerRow> = sqlx::query_as("SELECT id, name FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("failed to fetch customers")?;

        rows.into_iter().map(CustomerRow::try_into_domain).collect()
    }

    async fn delete_by_id(&self, id: &CustomerId) -> Result<(), anyhow::Error> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete customer with id {}", id))?;

        Ok(())
    }
}

impl ServiceOrderRepository for Sqlite {
    async fn save(&self, req: &CreateServiceOrderRequest) -> Result<ServiceOrder, anyhow::Error> {
        let customer = req.customer();
        let customer_name = customer.name().to_string();
        let service_type = req.service_type().to_string();

        let id = match req.id() {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO service_orders (id, customer_id, customer_name, closed, service_type)
                     VALUES ($1, $2, $3, $4, $5)
                     ON CONFLICT(id) DO UPDATE SET
                         customer_id = excluded.customer_id,
                         customer_name = excluded.customer_name,
                         closed = excluded.closed,
                         service_type = excluded.service_type",
                )
                .bind(id.into_inner())
                .bind(customer.id().into_inner())
                .bind(&customer_name)
                .bind(req.closed())
                .bind(&service_type)
                .execute(&self.pool)
                .await
                .with_context(|| format!("failed to save service order with id {}", id))?;

                *id
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO service_orders (customer_id, customer_name, closed, service_type)
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(customer.id().into_inner())
                .bind(&customer_name)
                .bind(req.closed())
                .bind(&service_type)
                .execute(&self.pool)
                .await
                .context("failed to save service order")?;

                ServiceOrderId::new(result.last_insert_rowid())
            }
        };

        Ok(ServiceOrder::new(
            id,
            customer.clone(),
            req.closed(),
            *req.service_type(),
        ))
    }

    async fn find_by_id(&self, id: &ServiceOrderId) -> Result<Option<ServiceOrder>, anyhow::Error> {
        let row: Option<ServiceOrderRow> = sqlx::query_as(
            "SELECT id, customer_id, customer_name, closed, service_type
             FROM service_orders WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to fetch service order with id {}", id))?;

        row.map(ServiceOrderRow::try_into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        let rows: Vec<ServiceOrderRow> = sqlx::query_as(
            "SELECT id, customer_id, customer_name, closed, service_type
             FROM service_orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to fetch service orders")?;

        order_rows_into_domain(rows)
    }

    async fn find_by_closed(&self, closed: bool) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        let rows: Vec<ServiceOrderRow> = sqlx::query_as(
            "SELECT id, customer_id, customer_name, closed, service_type
             FROM service_orders WHERE closed = $1 ORDER BY id",
        )
        .bind(closed)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("failed to fetch service orders with closed = {}", closed))?;

        order_rows_into_domain(rows)
    }

    async fn find_by_customer(
        &self,
        customer: &Customer,
    ) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        let rows: Vec<ServiceOrderRow> = sqlx::query_as(
            "SELECT id, customer_id, customer_name, closed, service_type
             FROM service_orders WHERE customer_id = $1 AND customer_name = $2 ORDER BY id",
        )
        .bind(customer.id().into_inner())
        .bind(customer.name().to_string())
        .fetch_all(&self.pool)
        .await
        .with_context(|| {
            format!(
                "failed to fetch service orders for customer with id {}",
                customer.id()
            )
        })?;

        order_rows_into_domain(rows)
    }

    async fn find_by_type(
        &self,
        service_type: &ServiceType,
    ) -> Result<Vec<ServiceOrder>, anyhow::Error> {
        let rows: Vec<ServiceOrderRow> = sqlx::query_as(
            "SELECT id, customer_id, customer_name, closed, service_type
             FROM service_orders WHERE service_type = $1 ORDER BY id",
        )
        .bind(service_type.to_string())
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("failed to fetch service orders of type {}", service_type))?;

        order_rows_into_domain(rows)
    }

    async fn delete_by_id(&self, id: &ServiceOrderId) -> Result<(), anyhow::Error> {
        sqlx::query("DELETE FROM service_orders WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete service order with id {}", id))?;

        Ok(())
    }
}

fn order_rows_into_domain(rows: Vec<ServiceOrderRow>) -> Result<Vec<ServiceOrder>, anyhow::Error> {
    rows.into_iter()
        .map(ServiceOrderRow::try_into_domain)
        .collect()
}
