use validator::Validate;

use crate::forms::auth::LoginForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::AuthApi;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, ServiceResult};

/// Exchanges staff credentials for a bearer token on the remote API. A
/// remote 401 surfaces as [`ServiceError::Unauthorized`] so the route can
/// show the invalid-credentials message.
pub async fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    R: AuthApi + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Unauthorized);
    }

    let session = repo.login(&form.email, &form.password).await.map_err(|err| {
        if !matches!(err, RepositoryError::Unauthorized) {
            log::error!("Failed to log in: {err}");
        }
        ServiceError::from(err)
    })?;

    // The API may omit the staff name; fall back to the email local part.
    let name = session
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| {
            form.email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        });

    Ok(AuthenticatedUser {
        token: session.token,
        name,
        email: form.email,
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::staff::StaffSession;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn remote_401_maps_to_unauthorized() {
        let mut repo = MockRepository::new();
        repo.expect_login()
            .with(eq("admin@mobigo.com"), eq("wrong"))
            .times(1)
            .returning(|_, _| Err(RepositoryError::Unauthorized));

        let result = login(&repo, form("admin@mobigo.com", "wrong")).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[actix_web::test]
    async fn malformed_email_never_reaches_the_api() {
        let mut repo = MockRepository::new();
        repo.expect_login().times(0);

        let result = login(&repo, form("not-an-email", "secret")).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[actix_web::test]
    async fn missing_name_falls_back_to_email_local_part() {
        let mut repo = MockRepository::new();
        repo.expect_login().times(1).returning(|_, _| {
            Ok(StaffSession {
                token: "tok-123".into(),
                name: None,
            })
        });

        let user = login(&repo, form("admin@mobigo.com", "secret"))
            .await
            .unwrap();
        assert_eq!(user.token, "tok-123");
        assert_eq!(user.name, "admin");
        assert_eq!(user.email, "admin@mobigo.com");
    }
}
