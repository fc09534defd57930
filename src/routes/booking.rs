use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::booking::{ConfirmBookingForm, DeclineBookingForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template, service_failure};
use crate::services::bookings as booking_service;

#[get("/bookings")]
pub async fn show_bookings(
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let bookings = match booking_service::list_bookings(repo.get_ref(), &user).await {
        Ok(bookings) => bookings,
        Err(err) => {
            log::error!("Failed to list bookings: {err}");
            return service_failure(err, "Failed to fetch booking requests.", "/");
        }
    };

    let mut context = base_context(&flash_messages, &user, "bookings");
    context.insert("bookings", &bookings);
    render_template(&tera, "bookings/list.html", &context)
}

#[get("/bookings/{booking_id}")]
pub async fn show_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page =
        match booking_service::load_booking_page(repo.get_ref(), &user, booking_id.into_inner())
            .await
        {
            Ok(page) => page,
            Err(err) => return service_failure(err, "Booking not found.", "/bookings"),
        };

    let mut context = base_context(&flash_messages, &user, "bookings");
    context.insert("booking", &page.booking);
    context.insert("actions", &page.actions);
    render_template(&tera, "bookings/detail.html", &context)
}

#[post("/bookings/{booking_id}/confirm")]
pub async fn confirm_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<ConfirmBookingForm>,
) -> impl Responder {
    let booking_id = booking_id.into_inner();
    let back = format!("/bookings/{booking_id}");
    match booking_service::confirm_booking(repo.get_ref(), &user, booking_id, &form).await {
        Ok(()) => {
            FlashMessage::success("Schedule confirmed. The vehicle is now booked.").send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to confirm schedule.", &back),
    }
}

#[post("/bookings/{booking_id}/decline")]
pub async fn decline_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<DeclineBookingForm>,
) -> impl Responder {
    let booking_id = booking_id.into_inner();
    let back = format!("/bookings/{booking_id}");
    match booking_service::decline_booking(repo.get_ref(), &user, booking_id, &form).await {
        Ok(()) => {
            FlashMessage::success("Booking declined. The customer will be prompted to reschedule.")
                .send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to decline booking.", &back),
    }
}

#[post("/bookings/{booking_id}/cancel")]
pub async fn cancel_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let booking_id = booking_id.into_inner();
    let back = format!("/bookings/{booking_id}");
    match booking_service::cancel_booking(repo.get_ref(), &user, booking_id).await {
        Ok(()) => {
            FlashMessage::success("Booking has been cancelled.").send();
            redirect(&back)
        }
        Err(err) => service_failure(err, "Failed to cancel booking.", &back),
    }
}
