use validator::Validate;

use crate::domain::booking::{Booking, BookingActions, BookingStatus};
use crate::dto::bookings::BookingPageData;
use crate::forms::booking::{ConfirmBookingForm, DeclineBookingForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{BookingReader, BookingWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads all booking requests for the list page.
pub async fn list_bookings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Booking>>
where
    R: BookingReader + ?Sized,
{
    repo.list_bookings(&user.token)
        .await
        .map_err(ServiceError::from)
}

/// Loads a booking and derives the action controls for its current state.
pub async fn load_booking_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<BookingPageData>
where
    R: BookingReader + ?Sized,
{
    let booking = require_booking(repo, user, booking_id).await?;
    let actions = BookingActions::for_booking(&booking);
    Ok(BookingPageData { booking, actions })
}

/// Confirms the proposed meetup. Mirrors the disabled confirm button: a
/// booking without a proposed time or outside `pending` is refused before
/// any remote call.
pub async fn confirm_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
    form: &ConfirmBookingForm,
) -> ServiceResult<()>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    let booking = require_booking(repo, user, booking_id).await?;
    ensure_awaiting_confirmation(&booking)?;

    repo.confirm_booking(booking_id, form.notes(), &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to confirm booking {booking_id}: {err}");
            ServiceError::from(err)
        })
}

/// Declines the proposed meetup with a reason shown to the customer,
/// moving the booking to `reschedule_requested` on the remote side.
pub async fn decline_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
    form: &DeclineBookingForm,
) -> ServiceResult<()>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Form(
            "A reason for declining is required.".to_string(),
        ));
    }

    let booking = require_booking(repo, user, booking_id).await?;
    ensure_awaiting_confirmation(&booking)?;

    repo.decline_booking(booking_id, form.reason.trim(), &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to decline booking {booking_id}: {err}");
            ServiceError::from(err)
        })
}

/// Cancels the booking entirely. Terminal state; only pending or confirmed
/// bookings can be cancelled.
pub async fn cancel_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<()>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    let booking = require_booking(repo, user, booking_id).await?;
    if !BookingActions::for_booking(&booking).can_cancel {
        return Err(ServiceError::Form(
            "This booking can no longer be cancelled.".to_string(),
        ));
    }

    repo.set_booking_status(booking_id, BookingStatus::Cancelled, &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to cancel booking {booking_id}: {err}");
            ServiceError::from(err)
        })
}

pub(crate) async fn require_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<Booking>
where
    R: BookingReader + ?Sized,
{
    repo.get_booking_by_id(booking_id, &user.token)
        .await?
        .ok_or(ServiceError::NotFound)
}

fn ensure_awaiting_confirmation(booking: &Booking) -> ServiceResult<()> {
    if booking.proposed_datetime.is_none() {
        return Err(ServiceError::Form(
            "Customer has not proposed a time yet.".to_string(),
        ));
    }
    if booking.status != BookingStatus::Pending {
        return Err(ServiceError::Form(
            "Only pending bookings can be confirmed or declined.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::booking::Customer;
    use crate::domain::vehicle::{Vehicle, VehicleStatus};
    use crate::repository::mock::MockRepository;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser {
            token: "tok".into(),
            name: "admin".into(),
            email: "admin@mobigo.com".into(),
        }
    }

    fn booking(status: BookingStatus, with_time: bool) -> Booking {
        Booking {
            id: 12,
            user: Customer {
                full_name: "Budi Santoso".into(),
                email: "budi@example.com".into(),
                phone_number: "+62811111111".into(),
            },
            vehicle: Vehicle {
                id: 7,
                make: "Toyota".into(),
                model: "Avanza".into(),
                year: 2022,
                vin: "JTDBT123456789012".into(),
                price: 215_000_000.0,
                description: String::new(),
                status: VehicleStatus::Booked,
                images: vec![],
            },
            status,
            proposed_datetime: with_time
                .then(|| Utc.with_ymd_and_hms(2024, 6, 2, 10, 30, 0).unwrap()),
            decline_reason: None,
            agreement: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 28, 8, 0, 0).unwrap(),
        }
    }

    #[actix_web::test]
    async fn confirm_without_proposed_time_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .with(eq(12), eq("tok"))
            .times(1)
            .returning(|_, _| Ok(Some(booking(BookingStatus::Pending, false))));
        repo.expect_confirm_booking().times(0);

        let form = ConfirmBookingForm {
            notes: String::new(),
        };
        let result = confirm_booking(&repo, &staff(), 12, &form).await;
        assert!(
            matches!(result, Err(ServiceError::Form(msg)) if msg.contains("not proposed a time"))
        );
    }

    #[actix_web::test]
    async fn confirm_sends_default_notes_when_blank() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(booking(BookingStatus::Pending, true))));
        repo.expect_confirm_booking()
            .with(eq(12), eq("Confirmed via Admin Panel"), eq("tok"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let form = ConfirmBookingForm {
            notes: "  ".into(),
        };
        confirm_booking(&repo, &staff(), 12, &form).await.unwrap();
    }

    #[actix_web::test]
    async fn decline_requires_reason_before_any_remote_call() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id().times(0);
        repo.expect_decline_booking().times(0);

        let form = DeclineBookingForm {
            reason: String::new(),
        };
        let result = decline_booking(&repo, &staff(), 12, &form).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn decline_on_confirmed_booking_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(booking(BookingStatus::Confirmed, true))));
        repo.expect_decline_booking().times(0);

        let form = DeclineBookingForm {
            reason: "Showroom closed".into(),
        };
        let result = decline_booking(&repo, &staff(), 12, &form).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn cancel_sets_cancelled_status() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(booking(BookingStatus::Confirmed, true))));
        repo.expect_set_booking_status()
            .with(eq(12), eq(BookingStatus::Cancelled), eq("tok"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        cancel_booking(&repo, &staff(), 12).await.unwrap();
    }

    #[actix_web::test]
    async fn cancel_of_cancelled_booking_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(booking(BookingStatus::Cancelled, true))));
        repo.expect_set_booking_status().times(0);

        let result = cancel_booking(&repo, &staff(), 12).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn missing_booking_maps_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = load_booking_page(&repo, &staff(), 99).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
