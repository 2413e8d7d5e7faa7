//! Flint HTTP API
//!
//! The actix-web boundary: failure translation into problem responses,
//! paging query DTOs and the application wiring.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
