//! Photo uploads for schedules and teams.

pub mod storage;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{photo::PhotoRepository, schedule::ScheduleRepository, team::TeamRepository},
    error::{auth::AuthError, AppError},
    model::{
        photo::{CreatePhotoParams, Photo, PhotoUpload},
        user::User,
    },
};

use self::storage::{image_extension, StorageClient};

/// Largest accepted upload, 10 MiB.
pub const MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024;

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a StorageClient,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a StorageClient) -> Self {
        Self { db, storage }
    }

    /// Stores an image in object storage and records it.
    ///
    /// If the row cannot be inserted the stored object is removed again on a best effort
    /// basis.
    ///
    /// # Returns
    /// - `Ok(Photo)` - The recorded photo with its public URL
    /// - `Err(AppError::BadRequest)` - Unsupported content type, empty or oversized file
    /// - `Err(AppError::NotFound)` - Referenced schedule or team does not exist
    /// - `Err(AppError::ReqwestErr)` - The storage API rejected the upload
    pub async fn upload(&self, upload: PhotoUpload) -> Result<Photo, AppError> {
        let extension = validate_upload(&upload.content_type, upload.bytes.len())?;

        if let Some(schedule_id) = upload.schedule_id {
            if ScheduleRepository::new(self.db)
                .find_by_id(schedule_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Schedule not found".to_string()));
            }
        }
        if let Some(team_id) = upload.team_id {
            if TeamRepository::new(self.db)
                .find_active_by_id(team_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Team not found".to_string()));
            }
        }

        let key = StorageClient::generate_key(extension);
        let url = self
            .storage
            .upload(&key, upload.bytes, &upload.content_type)
            .await?;

        let result = PhotoRepository::new(self.db)
            .create(CreatePhotoParams {
                uploader_id: upload.uploader_id,
                schedule_id: upload.schedule_id,
                team_id: upload.team_id,
                object_key: key.clone(),
                url,
                content_type: upload.content_type,
            })
            .await;

        match result {
            Ok(photo) => {
                tracing::info!("User {} uploaded photo {}", photo.uploader_id, photo.id);
                Ok(photo)
            }
            Err(err) => {
                if let Err(cleanup_err) = self.storage.delete(&key).await {
                    tracing::warn!(
                        "Failed to remove object {} after insert failure: {}",
                        key,
                        cleanup_err
                    );
                }
                Err(err.into())
            }
        }
    }

    pub async fn get_by_schedule(&self, schedule_id: i32) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db)
            .get_by_schedule(schedule_id)
            .await?)
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db).get_by_team(team_id).await?)
    }

    /// Removes a photo's object from storage, then its row. Uploader or admin only.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let photo_repo = PhotoRepository::new(self.db);
        let photo = photo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if photo.uploader_id != actor.id && !actor.is_admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("delete photo {} uploaded by user {}", id, photo.uploader_id),
            )
            .into());
        }

        self.storage.delete(&photo.object_key).await?;
        photo_repo.delete(id).await?;

        Ok(())
    }

    /// Removes objects whose rows were already deleted, such as the photos of a deleted
    /// schedule. Failures are logged and skipped.
    pub async fn remove_objects(&self, keys: &[String]) {
        for key in keys {
            if let Err(err) = self.storage.delete(key).await {
                tracing::warn!("Failed to remove orphaned object {}: {}", key, err);
            }
        }
    }
}

/// Checks an upload's content type and size.
///
/// # Returns
/// - `Ok(extension)` - File extension for the object key
/// - `Err(AppError::BadRequest)` - Not an accepted image type, empty, or larger than 10 MiB
pub fn validate_upload(content_type: &str, size: usize) -> Result<&'static str, AppError> {
    let extension = image_extension(content_type).ok_or_else(|| {
        AppError::BadRequest("Only JPEG, PNG, WebP and GIF images are allowed".to_string())
    })?;

    if size == 0 {
        return Err(AppError::BadRequest("The file is empty".to_string()));
    }
    if size > MAX_PHOTO_SIZE {
        return Err(AppError::BadRequest(
            "Photos must be 10 MiB or smaller".to_string(),
        ));
    }

    Ok(extension)
}
