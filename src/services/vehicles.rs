use validator::Validate;

use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::dto::vehicles::VehicleFormPageData;
use crate::forms::vehicle::{UploadImageForm, VehicleForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{VehicleImageWriter, VehicleReader, VehicleWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the full inventory for the vehicle list page.
pub async fn list_vehicles<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    repo.list_vehicles(&user.token)
        .await
        .map_err(ServiceError::from)
}

/// Loads the add/edit form data; `vehicle_id` is `None` in add mode.
pub async fn load_vehicle_form<R>(
    repo: &R,
    user: &AuthenticatedUser,
    vehicle_id: Option<i32>,
) -> ServiceResult<VehicleFormPageData>
where
    R: VehicleReader + ?Sized,
{
    let vehicle = match vehicle_id {
        Some(id) => Some(
            repo.get_vehicle_by_id(id, &user.token)
                .await?
                .ok_or(ServiceError::NotFound)?,
        ),
        None => None,
    };
    Ok(VehicleFormPageData { vehicle })
}

/// Validates the vehicle form and creates or updates the record remotely.
pub async fn save_vehicle<R>(
    repo: &R,
    user: &AuthenticatedUser,
    vehicle_id: Option<i32>,
    form: &VehicleForm,
) -> ServiceResult<()>
where
    R: VehicleWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate vehicle form: {err}");
        return Err(ServiceError::Form(
            "Failed to save vehicle. Please check the details and try again.".to_string(),
        ));
    }

    let payload = NewVehicle::from(form);
    match vehicle_id {
        Some(id) => repo.update_vehicle(id, &payload, &user.token).await?,
        None => repo.create_vehicle(&payload, &user.token).await?,
    }
    Ok(())
}

/// Deletes a vehicle. The list page re-fetches on redirect, so a successful
/// delete is reflected by the vehicle's absence from the next listing.
pub async fn remove_vehicle<R>(repo: &R, user: &AuthenticatedUser, vehicle_id: i32) -> ServiceResult<()>
where
    R: VehicleWriter + ?Sized,
{
    repo.delete_vehicle(vehicle_id, &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to delete vehicle {vehicle_id}: {err}");
            ServiceError::from(err)
        })
}

/// Uploads a new gallery image for the vehicle.
pub async fn upload_image<R>(
    repo: &R,
    user: &AuthenticatedUser,
    vehicle_id: i32,
    form: UploadImageForm,
) -> ServiceResult<()>
where
    R: VehicleImageWriter + ?Sized,
{
    if form.image.size == 0 {
        return Err(ServiceError::Form(
            "Please choose an image to upload.".to_string(),
        ));
    }

    let file_name = form
        .image
        .file_name
        .clone()
        .unwrap_or_else(|| "image".to_string());
    let bytes = std::fs::read(form.image.file.path())
        .map_err(|e| ServiceError::Internal(format!("Failed to read uploaded file: {e}")))?;

    repo.upload_vehicle_image(vehicle_id, file_name, bytes, &user.token)
        .await
        .map_err(|err| {
            log::error!("Failed to upload image for vehicle {vehicle_id}: {err}");
            ServiceError::from(err)
        })
}

/// Removes a gallery image.
pub async fn remove_image<R>(repo: &R, user: &AuthenticatedUser, image_id: i32) -> ServiceResult<()>
where
    R: VehicleImageWriter + ?Sized,
{
    repo.delete_image(image_id, &user.token)
        .await
        .map_err(ServiceError::from)
}

/// Marks an image as the vehicle's primary one.
pub async fn make_primary_image<R>(
    repo: &R,
    user: &AuthenticatedUser,
    image_id: i32,
) -> ServiceResult<()>
where
    R: VehicleImageWriter + ?Sized,
{
    repo.set_primary_image(image_id, &user.token)
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::vehicle::VehicleStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser {
            token: "tok".into(),
            name: "admin".into(),
            email: "admin@mobigo.com".into(),
        }
    }

    fn vehicle_form() -> VehicleForm {
        VehicleForm {
            make: "Toyota".into(),
            model: "Avanza".into(),
            year: 2022,
            vin: "JTDBT123456789012".into(),
            price: 215_000_000.0,
            description: String::new(),
            status: VehicleStatus::Available,
        }
    }

    #[actix_web::test]
    async fn delete_passes_through_to_the_remote_api() {
        let mut repo = MockRepository::new();
        repo.expect_delete_vehicle()
            .with(eq(9), eq("tok"))
            .times(1)
            .returning(|_, _| Ok(()));

        assert!(remove_vehicle(&repo, &staff(), 9).await.is_ok());
    }

    #[actix_web::test]
    async fn delete_failure_surfaces_as_internal_error() {
        let mut repo = MockRepository::new();
        repo.expect_delete_vehicle().times(1).returning(|_, _| {
            Err(RepositoryError::RemoteStatus {
                status: 409,
                message: "vehicle has an active booking".into(),
            })
        });

        let result = remove_vehicle(&repo, &staff(), 9).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[actix_web::test]
    async fn invalid_form_never_reaches_the_api() {
        let mut repo = MockRepository::new();
        repo.expect_create_vehicle().times(0);
        repo.expect_update_vehicle().times(0);

        let mut form = vehicle_form();
        form.vin = String::new();

        let result = save_vehicle(&repo, &staff(), None, &form).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn save_routes_to_create_or_update_by_id() {
        let mut repo = MockRepository::new();
        repo.expect_create_vehicle()
            .times(1)
            .returning(|_, _| Ok(()));
        save_vehicle(&repo, &staff(), None, &vehicle_form())
            .await
            .unwrap();

        let mut repo = MockRepository::new();
        repo.expect_update_vehicle()
            .withf(|id, payload, _| *id == 5 && payload.make == "Toyota")
            .times(1)
            .returning(|_, _, _| Ok(()));
        save_vehicle(&repo, &staff(), Some(5), &vehicle_form())
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn missing_vehicle_maps_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_vehicle_by_id()
            .with(eq(42), eq("tok"))
            .times(1)
            .returning(|_, _| Ok(None));

        let result = load_vehicle_form(&repo, &staff(), Some(42)).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
