use tracing::{info, warn};
use uuid::Uuid;

use crate::{auth::Claims, error::ApiError, state::AppState};

use super::dto::UploadFile;
use super::repo::Photo;

pub fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}

/// Collision-resistant storage name for an uploaded photo.
pub fn storage_name(content_type: &str) -> String {
    let ext = ext_from_mime(content_type).unwrap_or("bin");
    format!("{}.{}", Uuid::new_v4(), ext)
}

/// Only the owner may edit photo fields.
pub fn ensure_owner(photo: &Photo, claims: &Claims) -> Result<(), ApiError> {
    if photo.user_id != claims.sub {
        return Err(ApiError::Forbidden("Forbidden: You cannot edit this photo"));
    }
    Ok(())
}

/// The owner or an admin may delete a photo.
pub fn ensure_can_delete(photo: &Photo, claims: &Claims) -> Result<(), ApiError> {
    if photo.user_id != claims.sub && !claims.admin {
        return Err(ApiError::Forbidden(
            "Forbidden: You cannot delete this photo",
        ));
    }
    Ok(())
}

/// Writes the blob and returns `(image_path, photo_url)` for the record.
pub async fn store_file(st: &AppState, file: &UploadFile) -> Result<(String, String), ApiError> {
    let name = storage_name(&file.content_type);
    st.storage.put(&name, file.body.clone()).await?;
    let image_path = st.storage.local_path(&name).to_string_lossy().into_owned();
    let photo_url = format!(
        "{}/{}",
        st.config.uploads.public_prefix.trim_end_matches('/'),
        name
    );
    Ok((image_path, photo_url))
}

/// Removes the backing file (best-effort, failure logged only), then the
/// row. The row delete is the authoritative one.
pub async fn delete_photo(st: &AppState, photo: &Photo) -> Result<(), ApiError> {
    let name = photo.photo_url.rsplit('/').next().unwrap_or_default();
    if let Err(e) = st.storage.delete(name).await {
        warn!(error = %e, photo_id = %photo.id, "photo file cleanup failed");
    }
    Photo::delete_row(&st.db, photo.id).await?;
    info!(photo_id = %photo.id, user_id = %photo.user_id, "photo deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn photo_owned_by(user_id: Uuid) -> Photo {
        Photo {
            id: Uuid::new_v4(),
            description: None,
            name: Some("pike".into()),
            place: None,
            species_type: None,
            scenic: None,
            length: None,
            weight: None,
            lure: None,
            awards: None,
            image_path: "uploads/x.jpg".into(),
            photo_url: "/uploads/x.jpg".into(),
            user_id,
            approved: false,
            best_photo: false,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn claims(sub: Uuid, admin: bool) -> Claims {
        Claims {
            sub,
            email: "who@example.com".into(),
            admin,
            exp: 0,
            iat: 0,
            iss: "test".into(),
            aud: "test".into(),
        }
    }

    #[test]
    fn owner_may_edit_and_delete() {
        let owner = Uuid::new_v4();
        let photo = photo_owned_by(owner);
        assert!(ensure_owner(&photo, &claims(owner, false)).is_ok());
        assert!(ensure_can_delete(&photo, &claims(owner, false)).is_ok());
    }

    #[test]
    fn stranger_is_forbidden() {
        let photo = photo_owned_by(Uuid::new_v4());
        let other = claims(Uuid::new_v4(), false);
        assert!(matches!(
            ensure_owner(&photo, &other),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            ensure_can_delete(&photo, &other),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_may_delete_but_not_edit() {
        let photo = photo_owned_by(Uuid::new_v4());
        let admin = claims(Uuid::new_v4(), true);
        assert!(ensure_can_delete(&photo, &admin).is_ok());
        assert!(ensure_owner(&photo, &admin).is_err());
    }

    #[test]
    fn test_ext_from_mime() {
        assert_eq!(ext_from_mime("image/jpeg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/jpg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/png"), Some("png"));
        assert_eq!(ext_from_mime("image/webp"), Some("webp"));
        assert_eq!(ext_from_mime("image/heic"), Some("heic"));
        assert_eq!(ext_from_mime("application/octet-stream"), None);
    }

    #[test]
    fn storage_names_are_unique_and_suffixed() {
        let a = storage_name("image/png");
        let b = storage_name("image/png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert!(storage_name("application/pdf").ends_with(".bin"));
    }
}
