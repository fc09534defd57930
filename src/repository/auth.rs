use async_trait::async_trait;
use serde_json::json;

use crate::domain::staff::StaffSession;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AuthApi, HttpRepository};

#[async_trait]
impl AuthApi for HttpRepository {
    async fn login(&self, email: &str, password: &str) -> RepositoryResult<StaffSession> {
        let response = self
            .client()
            .post(self.url("/staff/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}
