use serde::{Deserialize, Serialize};

/// Listing status of a vehicle, owned by the remote API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Booked,
    Sold,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub status: VehicleStatus,
    /// Ordered image gallery; the API may omit the field entirely.
    #[serde(default)]
    pub images: Vec<VehicleImage>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VehicleImage {
    pub id: i32,
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Payload for creating or updating a vehicle. Images are managed through
/// their own endpoints and are never part of this payload.
#[derive(Clone, Debug, Serialize)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub price: f64,
    pub description: String,
    pub status: VehicleStatus,
}

impl NewVehicle {
    #[must_use]
    pub fn new(
        make: String,
        model: String,
        year: i32,
        vin: String,
        price: f64,
        description: String,
        status: VehicleStatus,
    ) -> Self {
        Self {
            make: make.trim().to_string(),
            model: model.trim().to_string(),
            year,
            vin: vin.trim().to_uppercase(),
            price,
            description: description.trim().to_string(),
            status,
        }
    }
}
