//! Customer and service-order management service: REST endpoints over a
//! relational store, with the lifecycle rules enforced in the domain layer.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
