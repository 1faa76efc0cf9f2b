use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{apply_field, MessageResponse, PhotoSavedResponse, UploadFile};
use super::repo::{Photo, PhotoFields};
use super::service;

/// Pulls the `photo` file part and the named scalar fields out of a
/// multipart body.
async fn collect_multipart(
    mp: &mut Multipart,
) -> Result<(PhotoFields, Option<UploadFile>), ApiError> {
    let mut fields = PhotoFields::default();
    let mut file = None;
    while let Ok(Some(field)) = mp.next_field().await {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("photo") => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".into());
                let body = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::Validation("Invalid form data".into()))?;
                file = Some(UploadFile { body, content_type });
            }
            Some(other) => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| ApiError::Validation("Invalid form data".into()))?;
                apply_field(&mut fields, other, value)?;
            }
            None => {}
        }
    }
    Ok((fields, file))
}

#[instrument(skip(state))]
pub async fn list_photos(State(state): State<AppState>) -> Result<Json<Vec<Photo>>, ApiError> {
    let photos = Photo::list_all(&state.db).await?;
    Ok(Json(photos))
}

#[instrument(skip(state))]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Photo>, ApiError> {
    let photo = Photo::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;
    Ok(Json(photo))
}

#[instrument(skip(state, mp))]
pub async fn upload_photo(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    mut mp: Multipart,
) -> Result<(StatusCode, Json<PhotoSavedResponse>), ApiError> {
    let (fields, file) = collect_multipart(&mut mp).await?;
    let file = file.ok_or_else(|| ApiError::Validation("Photo is required".into()))?;

    let (image_path, photo_url) = service::store_file(&state, &file).await?;
    let photo = Photo::insert(&state.db, claims.sub, &fields, &image_path, &photo_url).await?;

    info!(photo_id = %photo.id, user_id = %claims.sub, "photo uploaded");
    Ok((
        StatusCode::CREATED,
        Json(PhotoSavedResponse {
            message: "Photo uploaded successfully".into(),
            photo_url: photo.photo_url,
        }),
    ))
}

#[instrument(skip(state, mp))]
pub async fn update_photo(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
    mut mp: Multipart,
) -> Result<Json<PhotoSavedResponse>, ApiError> {
    let (fields, file) = collect_multipart(&mut mp).await?;

    let photo = Photo::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;
    service::ensure_owner(&photo, &claims)?;

    let image = match &file {
        Some(f) => Some(service::store_file(&state, f).await?),
        None => None,
    };
    let image = image.as_ref().map(|(path, url)| (path.as_str(), url.as_str()));

    let updated = Photo::update(&state.db, id, &fields, image)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;

    info!(photo_id = %updated.id, user_id = %claims.sub, "photo updated");
    Ok(Json(PhotoSavedResponse {
        message: "Photo updated successfully".into(),
        photo_url: updated.photo_url,
    }))
}

#[instrument(skip(state))]
pub async fn delete_photo(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let photo = Photo::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;
    service::ensure_can_delete(&photo, &claims)?;

    service::delete_photo(&state, &photo).await?;
    Ok(Json(MessageResponse {
        message: "Photo deleted successfully".into(),
    }))
}
