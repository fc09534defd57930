use crate::domain::agreement::Agreement;
use crate::domain::booking::Booking;

/// Data required to render the agreement creation form.
pub struct AgreementPageData {
    pub booking: Booking,
    /// Listed vehicle price, pre-filled as the suggested final price.
    pub suggested_price: f64,
}

/// Data required to render the installment plan form.
pub struct PlanPageData {
    pub booking: Booking,
    pub agreement: Agreement,
}
