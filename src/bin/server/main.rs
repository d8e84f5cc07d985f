use service_order::config::Config;
use service_order::domain::customer::service::Service as CustomerService;
use service_order::domain::order::service::Service as ServiceOrderService;
use service_order::inbound::http::{HttpServer, HttpServerConfig};
use service_order::outbound::sqlite::Sqlite;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt::init();

    let sqlite = Sqlite::new(&config.database_url).await?;
    let customer_service = CustomerService::new(sqlite.clone());
    let service_order_service = ServiceOrderService::new(sqlite);

    let server_config = HttpServerConfig {
        port: &config.server_port,
    };

    let http_server =
        HttpServer::new(customer_service, service_order_service, server_config).await?;

    http_server.run().await
}
