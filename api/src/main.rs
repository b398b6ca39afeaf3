use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{error, info};

use lk_api::{create_app, telemetry, AppState};
use lk_infra::sms::create_sms_switch;
use lk_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Launchkit API server"
    );

    let switch = match create_sms_switch(&config.sms) {
        Ok(switch) => Arc::new(switch),
        Err(e) => {
            error!(error = %e, "Failed to initialize SMS services");
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };
    info!(mode = %switch.mode(), "SMS service switch ready");

    let state = web::Data::new(AppState::new(switch, config.environment));
    let max_payload_size = config.server.max_payload_size;
    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), max_payload_size));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await
}
