use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::forms::auth::LoginForm;
use crate::repository::HttpRepository;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[get("/login")]
pub async fn show_login(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if identity.is_some() {
        return redirect("/");
    }

    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form).await {
        Ok(user) => {
            let payload = match serde_json::to_string(&user) {
                Ok(payload) => payload,
                Err(e) => {
                    log::error!("Failed to serialize session payload: {e}");
                    return HttpResponse::InternalServerError().finish();
                }
            };
            if let Err(e) = Identity::login(&request.extensions(), payload) {
                log::error!("Failed to establish session: {e}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to log in: {err}");
            FlashMessage::error("An unexpected error occurred. Please try again.").send();
            redirect("/login")
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/login")
}
