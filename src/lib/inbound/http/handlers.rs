pub mod customers;
pub mod service_order_filters;
pub mod service_orders;
