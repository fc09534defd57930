use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::agreement::{AgreementForm, PaymentPlanForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template, service_failure};
use crate::services::agreements as agreement_service;

#[derive(Deserialize)]
struct PlanQueryParams {
    /// Booking that owns the agreement; the API has no agreement read
    /// endpoint, so the detail page passes it along.
    booking: i32,
}

#[get("/bookings/{booking_id}/agreement")]
pub async fn show_agreement_form(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let booking_id = booking_id.into_inner();
    let page =
        match agreement_service::load_agreement_form(repo.get_ref(), &user, booking_id).await {
            Ok(page) => page,
            Err(err) => {
                return service_failure(
                    err,
                    "Failed to load booking data.",
                    &format!("/bookings/{booking_id}"),
                );
            }
        };

    let mut context = base_context(&flash_messages, &user, "bookings");
    context.insert("booking", &page.booking);
    context.insert("suggested_price", &page.suggested_price);
    render_template(&tera, "agreements/form.html", &context)
}

#[post("/bookings/{booking_id}/agreement")]
pub async fn create_agreement(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<AgreementForm>,
) -> impl Responder {
    let booking_id = booking_id.into_inner();
    match agreement_service::create_agreement(repo.get_ref(), &user, booking_id, &form).await {
        Ok(()) => {
            FlashMessage::success("Agreement created.").send();
            redirect(&format!("/bookings/{booking_id}"))
        }
        Err(err) => service_failure(
            err,
            "Failed to create agreement.",
            &format!("/bookings/{booking_id}/agreement"),
        ),
    }
}

#[get("/agreements/{agreement_id}/plan")]
pub async fn show_plan_form(
    agreement_id: web::Path<i32>,
    params: web::Query<PlanQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match agreement_service::load_plan_form(
        repo.get_ref(),
        &user,
        params.booking,
        agreement_id.into_inner(),
    )
    .await
    {
        Ok(page) => page,
        Err(err) => {
            return service_failure(
                err,
                "Failed to load agreement data.",
                &format!("/bookings/{}", params.booking),
            );
        }
    };

    let mut context = base_context(&flash_messages, &user, "bookings");
    context.insert("booking", &page.booking);
    context.insert("agreement", &page.agreement);
    render_template(&tera, "agreements/plan.html", &context)
}

#[post("/agreements/{agreement_id}/plan")]
pub async fn generate_plan(
    agreement_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<PaymentPlanForm>,
) -> impl Responder {
    let agreement_id = agreement_id.into_inner();
    let booking_id = form.booking_id;
    match agreement_service::generate_plan(repo.get_ref(), &user, agreement_id, &form).await {
        Ok(()) => {
            FlashMessage::success("Payment plan generated.").send();
            redirect(&format!("/bookings/{booking_id}"))
        }
        Err(err) => service_failure(
            err,
            "Failed to generate payment plan.",
            &format!("/agreements/{agreement_id}/plan?booking={booking_id}"),
        ),
    }
}
