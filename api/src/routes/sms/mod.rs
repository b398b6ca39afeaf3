//! SMS routes, mounted under `/api/v1/sms`

pub mod account;
pub mod audience;
pub mod auto_replies;
pub mod campaigns;
pub mod messages;
pub mod mode;
pub mod sandbox;
pub mod segments;
pub mod webhooks;

use actix_web::web;

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

/// Register every SMS route on a scope
pub fn configure<M, R>(cfg: &mut web::ServiceConfig)
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    cfg.route("/segments", web::post().to(segments::preview_segments))
        .route("/messages", web::post().to(messages::send_message::<M, R>))
        .route("/messages", web::get().to(messages::message_history::<M, R>))
        .route("/lists", web::get().to(audience::get_lists::<M, R>))
        .route(
            "/lists/{list_id}/contacts",
            web::get().to(audience::get_contacts::<M, R>),
        )
        .route(
            "/lists/{list_id}/contacts",
            web::post().to(audience::subscribe_contact::<M, R>),
        )
        .route(
            "/lists/{list_id}/contacts/{subscriber_id}",
            web::delete().to(audience::delete_subscriber::<M, R>),
        )
        .route(
            "/campaigns/{campaign_id}/stats",
            web::get().to(campaigns::campaign_stats::<M, R>),
        )
        .route("/auto-replies", web::get().to(auto_replies::get_auto_replies::<M, R>))
        .route("/auto-replies", web::post().to(auto_replies::create_auto_reply::<M, R>))
        .route("/account/balance", web::get().to(account::account_balance::<M, R>))
        .route("/webhooks", web::post().to(webhooks::receive_webhook::<M, R>))
        .route("/mode", web::get().to(mode::get_mode::<M, R>))
        .route("/mode", web::post().to(mode::set_mode::<M, R>))
        .route(
            "/sandbox/webhook-examples",
            web::get().to(sandbox::webhook_examples::<M, R>),
        )
        .route("/sandbox/errors", web::post().to(sandbox::generate_error::<M, R>));
}
