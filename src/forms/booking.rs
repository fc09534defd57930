use serde::Deserialize;
use validator::Validate;

/// Internal note attached when a staff member confirms a schedule.
pub const DEFAULT_CONFIRM_NOTES: &str = "Confirmed via Admin Panel";

#[derive(Deserialize)]
/// Optional internal notes sent with a schedule confirmation.
pub struct ConfirmBookingForm {
    #[serde(default)]
    pub notes: String,
}

impl ConfirmBookingForm {
    /// Trimmed notes, falling back to the default text when left blank.
    #[must_use]
    pub fn notes(&self) -> &str {
        let trimmed = self.notes.trim();
        if trimmed.is_empty() {
            DEFAULT_CONFIRM_NOTES
        } else {
            trimmed
        }
    }
}

#[derive(Deserialize, Validate)]
/// Decline form; the reason is shown to the customer so it is required.
pub struct DeclineBookingForm {
    #[validate(length(min = 1, message = "A reason for declining is required."))]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn blank_confirm_notes_fall_back_to_default() {
        let form = ConfirmBookingForm {
            notes: "   ".into(),
        };
        assert_eq!(form.notes(), DEFAULT_CONFIRM_NOTES);

        let form = ConfirmBookingForm {
            notes: " bring spare key ".into(),
        };
        assert_eq!(form.notes(), "bring spare key");
    }

    #[test]
    fn decline_requires_a_reason() {
        let form = DeclineBookingForm {
            reason: String::new(),
        };
        assert!(form.validate().is_err());

        let form = DeclineBookingForm {
            reason: "Showroom closed that day".into(),
        };
        assert!(form.validate().is_ok());
    }
}
