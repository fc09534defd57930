use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::agreement::{create_agreement, generate_plan, show_agreement_form, show_plan_form};
use crate::routes::auth::{login, logout, show_login};
use crate::routes::booking::{
    cancel_booking, confirm_booking, decline_booking, show_booking, show_bookings,
};
use crate::routes::main::show_index;
use crate::routes::vehicle::{
    add_vehicle, add_vehicle_form, delete_image, delete_vehicle, edit_vehicle_form,
    set_primary_image, show_vehicles, update_vehicle, upload_vehicle_image,
};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = HttpRepository::new(&server_config.api_base_url);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(login)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_vehicles)
                    .service(add_vehicle_form)
                    .service(add_vehicle)
                    .service(edit_vehicle_form)
                    .service(update_vehicle)
                    .service(delete_vehicle)
                    .service(upload_vehicle_image)
                    .service(delete_image)
                    .service(set_primary_image)
                    .service(show_bookings)
                    .service(show_booking)
                    .service(confirm_booking)
                    .service(decline_booking)
                    .service(cancel_booking)
                    .service(show_agreement_form)
                    .service(create_agreement)
                    .service(show_plan_form)
                    .service(generate_plan)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
