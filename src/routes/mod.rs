//! HTTP route handlers and shared view helpers.

use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::services::ServiceError;

pub mod agreement;
pub mod auth;
pub mod booking;
pub mod main;
pub mod vehicle;

/// Maps a flash message level to the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Builds the template context shared by every authenticated page.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context
}

/// Renders a Tera template or logs and returns a 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Standard handling for a failed service call: 401 bubbles up so the
/// redirect middleware can send the user to the login page, user-facing
/// errors become flash alerts, everything else is a 500.
pub fn service_failure(err: ServiceError, fallback: &str, redirect_to: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized().finish(),
        ServiceError::NotFound => {
            FlashMessage::error(fallback.to_string()).send();
            redirect(redirect_to)
        }
        ServiceError::Form(msg) => {
            FlashMessage::error(msg).send();
            redirect(redirect_to)
        }
        ServiceError::Internal(_) => {
            FlashMessage::error(fallback.to_string()).send();
            redirect(redirect_to)
        }
    }
}
