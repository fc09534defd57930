use serde::{Deserialize, Serialize};

/// How the customer pays under an agreement.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    FullPayment,
    Installment,
}

/// Sales/rental contract created once a booking is confirmed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Agreement {
    pub id: i32,
    pub booking_id: i32,
    pub final_price: f64,
    pub payment_type: PaymentType,
    pub terms: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewAgreement {
    pub booking_id: i32,
    pub final_price: f64,
    pub payment_type: PaymentType,
    pub terms: String,
}

/// Installment plan request. The amortization math runs on the remote API;
/// the plan is submitted, never rendered back.
#[derive(Clone, Debug, Serialize)]
pub struct NewPaymentPlan {
    pub agreement_id: i32,
    pub total_price: f64,
    pub down_payment: f64,
    /// Number of months over which the plan is repaid.
    pub tenor: u32,
    pub annual_interest_rate: f64,
}
