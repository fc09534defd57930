use async_trait::async_trait;
use reqwest::multipart;

use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{HttpRepository, VehicleImageWriter, VehicleReader, VehicleWriter};

#[async_trait]
impl VehicleReader for HttpRepository {
    async fn list_vehicles(&self, token: &str) -> RepositoryResult<Vec<Vehicle>> {
        let response = self
            .client()
            .get(self.url("/vehicles"))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn get_vehicle_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Vehicle>> {
        let response = self
            .client()
            .get(self.url(&format!("/vehicles/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        match Self::check(response).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl VehicleWriter for HttpRepository {
    async fn create_vehicle(&self, vehicle: &NewVehicle, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .post(self.url("/vehicles"))
            .bearer_auth(token)
            .json(vehicle)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update_vehicle(
        &self,
        id: i32,
        vehicle: &NewVehicle,
        token: &str,
    ) -> RepositoryResult<()> {
        let response = self
            .client()
            .put(self.url(&format!("/vehicles/{id}")))
            .bearer_auth(token)
            .json(vehicle)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_vehicle(&self, id: i32, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .delete(self.url(&format!("/vehicles/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl VehicleImageWriter for HttpRepository {
    async fn upload_vehicle_image(
        &self,
        vehicle_id: i32,
        file_name: String,
        bytes: Vec<u8>,
        token: &str,
    ) -> RepositoryResult<()> {
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("image", part);
        let response = self
            .client()
            .post(self.url(&format!("/vehicles/{vehicle_id}/images")))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_image(&self, image_id: i32, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .delete(self.url(&format!("/images/{image_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn set_primary_image(&self, image_id: i32, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .put(self.url(&format!("/images/{image_id}/primary")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
