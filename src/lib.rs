//! Customer-facing API: customer profile, vehicles and service history,
//! protected by bearer-token authentication.
//!
//! Built as a library so integration tests can drive the real router; the
//! `customer-service` binary is a thin wrapper around [`app::run`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
