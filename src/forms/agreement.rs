use serde::Deserialize;
use validator::Validate;

use crate::domain::agreement::PaymentType;

#[derive(Deserialize, Validate)]
/// Agreement creation form; the final price is pre-filled from the
/// booked vehicle's listed price.
pub struct AgreementForm {
    #[validate(range(exclusive_min = 0.0))]
    pub final_price: f64,
    pub payment_type: PaymentType,
    #[validate(length(min = 1))]
    pub terms: String,
}

#[derive(Deserialize, Validate)]
/// Installment plan parameters; the total price comes from the agreement,
/// not from the form.
pub struct PaymentPlanForm {
    /// Booking the agreement belongs to, used to return to the detail page.
    pub booking_id: i32,
    #[validate(range(min = 0.0))]
    pub down_payment: f64,
    #[validate(range(min = 1, max = 60))]
    pub tenor: u32,
    #[validate(range(min = 0.0, max = 100.0))]
    pub annual_interest_rate: f64,
}
