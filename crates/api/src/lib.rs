//! HTTP API: server wiring, routing, and request/response mapping for the
//! cart and checkout services.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod seed;
