use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{delete, get, patch, post};
use tokio::net;

use crate::domain::customer::ports::CustomerService;
use crate::domain::order::ports::ServiceOrderService;
use crate::inbound::http::handlers::customers::{
    create_customer, delete_customer, get_customer, list_customers, patch_customer,
};
use crate::inbound::http::handlers::service_order_filters::{
    list_closed_service_orders, list_customer_service_orders, list_open_service_orders,
    list_service_orders_by_type,
};
use crate::inbound::http::handlers::service_orders::{
    create_service_order, delete_service_order, get_service_order, list_service_orders,
    patch_service_order,
};

mod handlers;
mod responses;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

#[derive(Debug, Clone)]
struct AppState<CS: CustomerService, SOS: ServiceOrderService> {
    customer_service: Arc<CS>,
    service_order_service: Arc<SOS>,
}

pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(
        customer_service: impl CustomerService,
        service_order_service: impl ServiceOrderService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );

        let state = AppState {
            customer_service: Arc::new(customer_service),
            service_order_service: Arc::new(service_order_service),
        };

        let router = axum::Router::new()
            .nest("/api/v1", api_routes())
            .layer(trace_layer)
            .with_state(state);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr().unwrap());
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

fn api_routes<CS: CustomerService, SOS: ServiceOrderService>() -> Router<AppState<CS, SOS>> {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/customers", get(list_customers))
        .route("/customers", patch(patch_customer))
        .route("/customers/{id}", get(get_customer))
        .route("/customers/{id}", delete(delete_customer))
        .route("/service-order", post(create_service_order))
        .route("/service-order", get(list_service_orders))
        .route("/service-order", patch(patch_service_order))
        .route("/service-order/open", get(list_open_service_orders))
        .route("/service-order/closed", get(list_closed_service_orders))
        .route("/service-order/customer", get(list_customer_service_orders))
        .route(
            "/service-order/type/{service_type}",
            get(list_service_orders_by_type),
        )
        .route("/service-order/{id}", get(get_service_order))
        .route("/service-order/{id}", delete(delete_service_order))
}
