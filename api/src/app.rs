//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::handlers::error::{json_error_handler, not_found, query_error_handler};
use crate::routes::{health::health_check, sms};
use crate::state::AppState;

/// Create and configure the application
pub fn create_app<M, R>(
    app_state: web::Data<AppState<M, R>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PayloadConfig::new(max_payload_size))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<M, R>))
        .service(web::scope("/api/v1/sms").configure(sms::configure::<M, R>))
        .default_service(web::route().to(not_found))
}
