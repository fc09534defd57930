use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::vehicle::{NewVehicle, VehicleStatus};

#[derive(Deserialize, Validate)]
/// Form data shared by the add and edit vehicle pages.
pub struct VehicleForm {
    #[validate(length(min = 1))]
    pub make: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1))]
    pub vin: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub status: VehicleStatus,
}

impl From<&VehicleForm> for NewVehicle {
    fn from(form: &VehicleForm) -> Self {
        NewVehicle::new(
            form.make.clone(),
            form.model.clone(),
            form.year,
            form.vin.clone(),
            form.price,
            form.description.clone(),
            form.status,
        )
    }
}

#[derive(MultipartForm)]
/// Image upload posted from the vehicle edit page.
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
}

#[derive(Deserialize)]
/// Hidden fields accompanying image delete/set-primary buttons so the
/// handler can redirect back to the owning vehicle.
pub struct ImageOwnerForm {
    pub vehicle_id: i32,
}
