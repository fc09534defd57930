use async_trait::async_trait;
use serde_json::json;

use crate::domain::booking::{Booking, BookingStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingReader, BookingWriter, HttpRepository};

#[async_trait]
impl BookingReader for HttpRepository {
    async fn list_bookings(&self, token: &str) -> RepositoryResult<Vec<Booking>> {
        let response = self
            .client()
            .get(self.url("/bookings"))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn get_booking_by_id(&self, id: i32, token: &str) -> RepositoryResult<Option<Booking>> {
        let response = self
            .client()
            .get(self.url(&format!("/bookings/{id}")))
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
impl BookingWriter for HttpRepository {
    async fn confirm_booking(&self, id: i32, notes: &str, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .post(self.url(&format!("/bookings/{id}/confirm")))
            .bearer_auth(token)
            .json(&json!({ "notes": notes }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn decline_booking(&self, id: i32, reason: &str, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .put(self.url(&format!("/bookings/{id}/decline")))
            .bearer_auth(token)
            .json(&json!({ "reason": reason }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn set_booking_status(
        &self,
        id: i32,
        status: BookingStatus,
        token: &str,
    ) -> RepositoryResult<()> {
        let response = self
            .client()
            .put(self.url(&format!("/bookings/{id}/status")))
            .bearer_auth(token)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
