use crate::domain::booking::{Booking, BookingActions};

/// Data required to render the booking detail page.
pub struct BookingPageData {
    pub booking: Booking,
    /// Which action controls are rendered for the current state.
    pub actions: BookingActions,
}
