//! Application wiring
//!
//! Registers extractor configuration, so that malformed bodies, query
//! strings and paths are answered with problem responses, and the routes
//! shared by every module.

use actix_web::web;
use flint_shared::config::ServerConfig;

use crate::handlers::problem::{json_error_handler, path_error_handler, query_error_handler};
use crate::routes::{api_index, health_check, not_found};

/// Configure the application; used by the binary and by tests
pub fn configure(cfg: &mut web::ServiceConfig, server: &ServerConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(server.max_payload_size)
            .error_handler(json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    // Health check endpoint
    .route("/health", web::get().to(health_check))
    // API v1 routes
    .service(web::scope("/api/v1").route("/", web::get().to(api_index)))
    // Default 404 handler
    .default_service(web::route().to(not_found));
}
