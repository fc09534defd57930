use async_trait::async_trait;

use crate::domain::agreement::{NewAgreement, NewPaymentPlan};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AgreementWriter, HttpRepository, PaymentPlanWriter};

#[async_trait]
impl AgreementWriter for HttpRepository {
    async fn create_agreement(
        &self,
        agreement: &NewAgreement,
        token: &str,
    ) -> RepositoryResult<()> {
        let response = self
            .client()
            .post(self.url("/agreements"))
            .bearer_auth(token)
            .json(agreement)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl PaymentPlanWriter for HttpRepository {
    async fn generate_plan(&self, plan: &NewPaymentPlan, token: &str) -> RepositoryResult<()> {
        let response = self
            .client()
            .post(self.url("/payments/generate-plan"))
            .bearer_auth(token)
            .json(plan)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
