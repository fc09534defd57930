//! Data access layer. Every trait below is implemented by [`HttpRepository`],
//! a thin client for the remote MobiGO REST API; nothing is persisted
//! locally, so reads always reflect the last server round-trip.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::agreement::{NewAgreement, NewPaymentPlan};
use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::staff::StaffSession;
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod agreement;
pub mod auth;
pub mod booking;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod vehicle;

#[async_trait]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> RepositoryResult<StaffSession>;
}

#[async_trait]
pub trait VehicleReader {
    async fn list_vehicles(&self, token: &str) -> RepositoryResult<Vec<Vehicle>>;
    async fn get_vehicle_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Vehicle>>;
}

#[async_trait]
pub trait VehicleWriter {
    async fn create_vehicle(&self, vehicle: &NewVehicle, token: &str) -> RepositoryResult<()>;
    async fn update_vehicle(
        &self,
        id: i32,
        vehicle: &NewVehicle,
        token: &str,
    ) -> RepositoryResult<()>;
    async fn delete_vehicle(&self, id: i32, token: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait VehicleImageWriter {
    async fn upload_vehicle_image(
        &self,
        vehicle_id: i32,
        file_name: String,
        bytes: Vec<u8>,
        token: &str,
    ) -> RepositoryResult<()>;
    async fn delete_image(&self, image_id: i32, token: &str) -> RepositoryResult<()>;
    async fn set_primary_image(&self, image_id: i32, token: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait BookingReader {
    async fn list_bookings(&self, token: &str) -> RepositoryResult<Vec<Booking>>;
    async fn get_booking_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Booking>>;
}

#[async_trait]
pub trait BookingWriter {
    async fn confirm_booking(&self, id: i32, notes: &str, token: &str) -> RepositoryResult<()>;
    async fn decline_booking(&self, id: i32, reason: &str, token: &str) -> RepositoryResult<()>;
    async fn set_booking_status(
        &self,
        id: i32,
        status: BookingStatus,
        token: &str,
    ) -> RepositoryResult<()>;
}

#[async_trait]
pub trait AgreementWriter {
    async fn create_agreement(
        &self,
        agreement: &NewAgreement,
        token: &str,
    ) -> RepositoryResult<()>;
}

#[async_trait]
pub trait PaymentPlanWriter {
    async fn generate_plan(&self, plan: &NewPaymentPlan, token: &str) -> RepositoryResult<()>;
}

/// Error body returned by the remote API on failed requests.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// reqwest-backed implementation of the repository traits.
#[derive(Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Maps non-success statuses to repository errors, extracting the
    /// `{"error": "..."}` body the API sends when available.
    pub(crate) async fn check(response: reqwest::Response) -> RepositoryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED => Err(RepositoryError::Unauthorized),
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            _ => {
                let message = match response.json::<ApiErrorBody>().await {
                    Ok(body) => body.error,
                    Err(_) => status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string(),
                };
                Err(RepositoryError::RemoteStatus {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
