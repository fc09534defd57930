use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::agreement::{Agreement, PaymentType};
use crate::domain::vehicle::Vehicle;

/// Lifecycle state of a booking request, owned by the remote API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    RescheduleRequested,
    Cancelled,
}

/// Customer snapshot embedded in a booking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user: Customer,
    pub vehicle: Vehicle,
    pub status: BookingStatus,
    /// Meetup time proposed by the customer, if any.
    pub proposed_datetime: Option<DateTime<Utc>>,
    /// Reason shown to the customer after a staff decline.
    pub decline_reason: Option<String>,
    pub agreement: Option<Agreement>,
    pub created_at: DateTime<Utc>,
}

/// Staff actions available for a booking in its current state. Derived
/// client-side purely to decide which controls to render; the remote API
/// enforces the transitions themselves.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct BookingActions {
    pub can_confirm: bool,
    pub can_decline: bool,
    pub can_create_agreement: bool,
    pub can_generate_plan: bool,
    pub can_cancel: bool,
}

impl BookingActions {
    #[must_use]
    pub fn for_booking(booking: &Booking) -> Self {
        let pending = booking.status == BookingStatus::Pending;
        let confirmed = booking.status == BookingStatus::Confirmed;
        let has_proposed_time = booking.proposed_datetime.is_some();
        let installment = booking
            .agreement
            .as_ref()
            .is_some_and(|a| a.payment_type == PaymentType::Installment);

        Self {
            can_confirm: pending && has_proposed_time,
            can_decline: pending && has_proposed_time,
            can_create_agreement: confirmed && booking.agreement.is_none(),
            can_generate_plan: installment,
            can_cancel: pending || confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::vehicle::VehicleStatus;

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: 1,
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
                status: VehicleStatus::Available,
                images: vec![],
            },
            status,
            proposed_datetime: None,
            decline_reason: None,
            agreement: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        }
    }

    fn agreement(payment_type: PaymentType) -> Agreement {
        Agreement {
            id: 3,
            booking_id: 1,
            final_price: 210_000_000.0,
            payment_type,
            terms: "Full payment required within 7 days.".into(),
        }
    }

    #[test]
    fn pending_without_proposed_time_blocks_confirm_and_decline() {
        let actions = BookingActions::for_booking(&booking(BookingStatus::Pending));
        assert!(!actions.can_confirm);
        assert!(!actions.can_decline);
        assert!(actions.can_cancel);
    }

    #[test]
    fn pending_with_proposed_time_allows_confirm_and_decline() {
        let mut b = booking(BookingStatus::Pending);
        b.proposed_datetime = Some(Utc.with_ymd_and_hms(2024, 5, 3, 14, 0, 0).unwrap());
        let actions = BookingActions::for_booking(&b);
        assert!(actions.can_confirm);
        assert!(actions.can_decline);
        assert!(!actions.can_create_agreement);
    }

    #[test]
    fn confirmed_without_agreement_offers_agreement_creation() {
        let actions = BookingActions::for_booking(&booking(BookingStatus::Confirmed));
        assert!(actions.can_create_agreement);
        assert!(!actions.can_generate_plan);
        assert!(actions.can_cancel);
    }

    #[test]
    fn installment_agreement_enables_plan_generation() {
        let mut b = booking(BookingStatus::Confirmed);
        b.agreement = Some(agreement(PaymentType::Installment));
        let actions = BookingActions::for_booking(&b);
        assert!(!actions.can_create_agreement);
        assert!(actions.can_generate_plan);
    }

    #[test]
    fn full_payment_agreement_does_not_enable_plan_generation() {
        let mut b = booking(BookingStatus::Confirmed);
        b.agreement = Some(agreement(PaymentType::FullPayment));
        let actions = BookingActions::for_booking(&b);
        assert!(!actions.can_generate_plan);
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut b = booking(BookingStatus::Cancelled);
        b.proposed_datetime = Some(Utc.with_ymd_and_hms(2024, 5, 3, 14, 0, 0).unwrap());
        let actions = BookingActions::for_booking(&b);
        assert!(!actions.can_confirm);
        assert!(!actions.can_decline);
        assert!(!actions.can_create_agreement);
        assert!(!actions.can_cancel);
    }

    #[test]
    fn reschedule_requested_waits_on_the_customer() {
        let actions = BookingActions::for_booking(&booking(BookingStatus::RescheduleRequested));
        assert!(!actions.can_confirm);
        assert!(!actions.can_cancel);
    }

    #[test]
    fn booking_deserializes_from_api_payload() {
        let payload = serde_json::json!({
            "id": 12,
            "user": {
                "full_name": "Siti Rahma",
                "email": "siti@example.com",
                "phone_number": "+62822222222"
            },
            "vehicle": {
                "id": 4,
                "make": "Honda",
                "model": "Brio",
                "year": 2023,
                "vin": "MHRGB123456789012",
                "price": 180000000.0,
                "status": "booked"
            },
            "status": "reschedule_requested",
            "proposed_datetime": "2024-06-02T10:30:00Z",
            "decline_reason": "Showroom closed on Sundays",
            "agreement": null,
            "created_at": "2024-05-28T08:00:00Z"
        });

        let booking: Booking = serde_json::from_value(payload).unwrap();
        assert_eq!(booking.status, BookingStatus::RescheduleRequested);
        assert_eq!(booking.vehicle.status, VehicleStatus::Booked);
        assert!(booking.proposed_datetime.is_some());
        assert!(booking.vehicle.images.is_empty());
        assert_eq!(
            booking.decline_reason.as_deref(),
            Some("Showroom closed on Sundays")
        );
    }
}
