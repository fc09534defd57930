use validator::Validate;

use crate::domain::agreement::{Agreement, NewAgreement, NewPaymentPlan, PaymentType};
use crate::domain::booking::{Booking, BookingActions};
use crate::dto::agreements::{AgreementPageData, PlanPageData};
use crate::forms::agreement::{AgreementForm, PaymentPlanForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AgreementWriter, BookingReader, PaymentPlanWriter};
use crate::services::bookings::require_booking;
use crate::services::{ServiceError, ServiceResult};

/// Loads the agreement creation form, pre-filling the final price with the
/// booked vehicle's listed price.
pub async fn load_agreement_form<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<AgreementPageData>
where
    R: BookingReader + ?Sized,
{
    let booking = require_booking(repo, user, booking_id).await?;
    ensure_agreement_allowed(&booking)?;

    let suggested_price = booking.vehicle.price;
    Ok(AgreementPageData {
        booking,
        suggested_price,
    })
}

/// Validates and submits a new agreement for a confirmed booking.
pub async fn create_agreement<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
    form: &AgreementForm,
) -> ServiceResult<()>
where
    R: BookingReader + AgreementWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate agreement form: {err}");
        return Err(ServiceError::Form(
            "Failed to create agreement. Please check the details and try again.".to_string(),
        ));
    }

    let booking = require_booking(repo, user, booking_id).await?;
    ensure_agreement_allowed(&booking)?;

    let agreement = NewAgreement {
        booking_id,
        final_price: form.final_price,
        payment_type: form.payment_type,
        terms: form.terms.trim().to_string(),
    };
    repo.create_agreement(&agreement, &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to create agreement for booking {booking_id}: {err}");
            ServiceError::from(err)
        })
}

/// Loads the installment plan form. The agreement travels embedded in the
/// booking because the remote API exposes no agreement read endpoint.
pub async fn load_plan_form<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
    agreement_id: i32,
) -> ServiceResult<PlanPageData>
where
    R: BookingReader + ?Sized,
{
    let booking = require_booking(repo, user, booking_id).await?;
    let agreement = installment_agreement(&booking, agreement_id)?;
    Ok(PlanPageData { booking, agreement })
}

/// Validates plan parameters against the agreement's final price and
/// submits the plan request; the amortization itself runs remotely.
pub async fn generate_plan<R>(
    repo: &R,
    user: &AuthenticatedUser,
    agreement_id: i32,
    form: &PaymentPlanForm,
) -> ServiceResult<()>
where
    R: BookingReader + PaymentPlanWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate payment plan form: {err}");
        return Err(ServiceError::Form(
            "Failed to generate payment plan. Please check the details and try again.".to_string(),
        ));
    }

    let booking = require_booking(repo, user, form.booking_id).await?;
    let agreement = installment_agreement(&booking, agreement_id)?;

    if form.down_payment >= agreement.final_price {
        return Err(ServiceError::Form(
            "The down payment must be less than the total price.".to_string(),
        ));
    }

    let plan = NewPaymentPlan {
        agreement_id,
        total_price: agreement.final_price,
        down_payment: form.down_payment,
        tenor: form.tenor,
        annual_interest_rate: form.annual_interest_rate,
    };
    repo.generate_plan(&plan, &user.token).await.map_err(|err| {
        log::error!("Failed to generate plan for agreement {agreement_id}: {err}");
        ServiceError::from(err)
    })
}

fn ensure_agreement_allowed(booking: &Booking) -> ServiceResult<()> {
    if booking.agreement.is_some() {
        return Err(ServiceError::Form(
            "An agreement already exists for this booking.".to_string(),
        ));
    }
    if !BookingActions::for_booking(booking).can_create_agreement {
        return Err(ServiceError::Form(
            "An agreement can only be created for a confirmed booking.".to_string(),
        ));
    }
    Ok(())
}

fn installment_agreement(booking: &Booking, agreement_id: i32) -> ServiceResult<Agreement> {
    let agreement = booking.agreement.clone().ok_or(ServiceError::NotFound)?;
    if agreement.id != agreement_id {
        return Err(ServiceError::NotFound);
    }
    if agreement.payment_type != PaymentType::Installment {
        return Err(ServiceError::Form(
            "Installment plans are only available for installment agreements.".to_string(),
        ));
    }
    Ok(agreement)
}
