use std::time::Duration;

use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use log::info;

use flint_api::{app, config};
use flint_shared::config::Environment;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // ENVIRONMENT comes from the process, dotenv files fill in the rest
    let environment = Environment::from_env();
    config::load_env_files(environment).context("failed to read .env files")?;

    let config = config::load_for(environment).context("failed to load configuration")?;
    config::init_logging(&config.logging);

    info!("Starting Flint API Server ({})", config.environment);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let mut server = HttpServer::new(move || {
        let server_config = server_config.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| app::configure(cfg, &server_config))
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive))
    .client_request_timeout(Duration::from_secs(config.server.request_timeout));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
