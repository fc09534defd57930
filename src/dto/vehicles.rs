use crate::domain::vehicle::Vehicle;

/// Data required to render the shared add/edit vehicle form.
pub struct VehicleFormPageData {
    /// Present in edit mode; `None` renders an empty add form.
    pub vehicle: Option<Vehicle>,
}
