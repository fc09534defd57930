use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::vehicle::Vehicle;
use crate::forms::vehicle::{ImageOwnerForm, UploadImageForm, VehicleForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template, service_failure};
use crate::services::vehicles as vehicle_service;

#[get("/vehicles")]
pub async fn show_vehicles(
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let vehicles = match vehicle_service::list_vehicles(repo.get_ref(), &user).await {
        Ok(vehicles) => vehicles,
        Err(err) => {
            log::error!("Failed to list vehicles: {err}");
            return service_failure(err, "Failed to fetch vehicles. Please try again later.", "/");
        }
    };

    let mut context = base_context(&flash_messages, &user, "vehicles");
    context.insert("vehicles", &vehicles);
    render_template(&tera, "vehicles/list.html", &context)
}

#[get("/vehicles/add")]
pub async fn add_vehicle_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &user, "vehicles");
    context.insert("vehicle", &Option::<Vehicle>::None);
    render_template(&tera, "vehicles/form.html", &context)
}

#[post("/vehicles/add")]
pub async fn add_vehicle(
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<VehicleForm>,
) -> impl Responder {
    match vehicle_service::save_vehicle(repo.get_ref(), &user, None, &form).await {
        Ok(()) => {
            FlashMessage::success("Vehicle saved.").send();
            redirect("/vehicles")
        }
        Err(err) => service_failure(
            err,
            "Failed to save vehicle. Please check the details and try again.",
            "/vehicles/add",
        ),
    }
}

#[get("/vehicles/{vehicle_id}/edit")]
pub async fn edit_vehicle_form(
    vehicle_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match vehicle_service::load_vehicle_form(
        repo.get_ref(),
        &user,
        Some(vehicle_id.into_inner()),
    )
    .await
    {
        Ok(page) => page,
        Err(err) => return service_failure(err, "Vehicle not found.", "/vehicles"),
    };

    let mut context = base_context(&flash_messages, &user, "vehicles");
    context.insert("vehicle", &page.vehicle);
    render_template(&tera, "vehicles/form.html", &context)
}

#[post("/vehicles/{vehicle_id}/edit")]
pub async fn update_vehicle(
    vehicle_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<VehicleForm>,
) -> impl Responder {
    let vehicle_id = vehicle_id.into_inner();
    match vehicle_service::save_vehicle(repo.get_ref(), &user, Some(vehicle_id), &form).await {
        Ok(()) => {
            FlashMessage::success("Vehicle updated.").send();
            redirect("/vehicles")
        }
        Err(err) => service_failure(
            err,
            "Failed to save vehicle. Please check the details and try again.",
            &format!("/vehicles/{vehicle_id}/edit"),
        ),
    }
}

#[post("/vehicles/{vehicle_id}/delete")]
pub async fn delete_vehicle(
    vehicle_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    match vehicle_service::remove_vehicle(repo.get_ref(), &user, vehicle_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Vehicle deleted.").send();
            redirect("/vehicles")
        }
        Err(err) => service_failure(
            err,
            "Failed to delete vehicle. It might be part of an active booking.",
            "/vehicles",
        ),
    }
}

#[post("/vehicles/{vehicle_id}/images")]
pub async fn upload_vehicle_image(
    vehicle_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    let vehicle_id = vehicle_id.into_inner();
    let back = format!("/vehicles/{vehicle_id}/edit");
    match vehicle_service::upload_image(repo.get_ref(), &user, vehicle_id, form).await {
        Ok(()) => {
            FlashMessage::success("Image uploaded.").send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to upload image.", &back),
    }
}

#[post("/images/{image_id}/delete")]
pub async fn delete_image(
    image_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<ImageOwnerForm>,
) -> impl Responder {
    let back = format!("/vehicles/{}/edit", form.vehicle_id);
    match vehicle_service::remove_image(repo.get_ref(), &user, image_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Image deleted.").send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to delete image.", &back),
    }
}

#[post("/images/{image_id}/primary")]
pub async fn set_primary_image(
    image_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<ImageOwnerForm>,
) -> impl Responder {
    let back = format!("/vehicles/{}/edit", form.vehicle_id);
    match vehicle_service::make_primary_image(repo.get_ref(), &user, image_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Primary image updated.").send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to set primary image.", &back),
    }
}
