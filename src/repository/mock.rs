//! Mock repository implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::agreement::{NewAgreement, NewPaymentPlan};
use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::staff::StaffSession;
use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AgreementWriter, AuthApi, BookingReader, BookingWriter, PaymentPlanWriter, VehicleImageWriter,
    VehicleReader, VehicleWriter,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl AuthApi for Repository {
        async fn login(&self, email: &str, password: &str) -> RepositoryResult<StaffSession>;
    }

    #[async_trait]
    impl VehicleReader for Repository {
        async fn list_vehicles(&self, token: &str) -> RepositoryResult<Vec<Vehicle>>;
        async fn get_vehicle_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Vehicle>>;
    }

    #[async_trait]
    impl VehicleWriter for Repository {
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
    impl VehicleImageWriter for Repository {
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
    impl BookingReader for Repository {
        async fn list_bookings(&self, token: &str) -> RepositoryResult<Vec<Booking>>;
        async fn get_booking_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Booking>>;
    }

    #[async_trait]
    impl BookingWriter for Repository {
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
    impl AgreementWriter for Repository {
        async fn create_agreement(
            &self,
            agreement: &NewAgreement,
            token: &str,
        ) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl PaymentPlanWriter for Repository {
        async fn generate_plan(&self, plan: &NewPaymentPlan, token: &str) -> RepositoryResult<()>;
    }
}
