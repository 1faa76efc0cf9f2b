use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        services::{hash_password, is_valid_email, verify_password},
        AdminUser, JwtKeys,
    },
    contacts::repo::Contact,
    error::ApiError,
    mailer::notify_later,
    photos::{repo::Photo, service as photo_service},
    state::AppState,
    users::repo::User,
};

use super::dto::{
    AddAdminRequest, AdminLoginRequest, AdminLoginResponse, ApprovalResponse,
    ChangePasswordRequest, MessageResponse, PublicAdmin,
};
use super::repo::Admin;

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    // Unknown email and bad password answer identically.
    let admin = match Admin::find_by_email(&state.db, &payload.email).await? {
        Some(a) => a,
        None => {
            warn!(email = %payload.email, "admin login unknown email");
            return Err(ApiError::Unauthorized("Invalid email or password"));
        }
    };

    if !verify_password(&payload.password, &admin.password_hash)? {
        warn!(email = %payload.email, admin_id = %admin.id, "admin login invalid password");
        return Err(ApiError::Unauthorized("Invalid email or password"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(admin.id, &admin.email, true)?;

    info!(admin_id = %admin.id, email = %admin.email, "admin logged in");
    Ok(Json(AdminLoginResponse {
        token,
        admin: PublicAdmin {
            id: admin.id,
            name: admin.name,
            email: admin.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn add_admin(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Json(mut payload): Json<AddAdminRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.name.trim().is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("All fields are required".into()));
    }
    if !is_valid_email(&payload.email) {
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation("Password too short".into()));
    }
    if Admin::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "admin email already registered");
        return Err(ApiError::Conflict("Email already registered"));
    }

    let hash = hash_password(&payload.password)?;
    let admin = Admin::create(&state.db, payload.name.trim(), &payload.email, &hash).await?;

    info!(admin_id = %admin.id, created_by = %claims.sub, "admin added");
    notify_later(
        state.mailer.clone(),
        admin.email.clone(),
        "Admin account created".into(),
        format!(
            "Hi {}, an administrator account has been created for {}.",
            admin.name, admin.email
        ),
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Admin added successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_photos(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<Vec<Photo>>, ApiError> {
    let photos = Photo::list_all(&state.db).await?;
    Ok(Json(photos))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = Contact::list_all(&state.db).await?;
    Ok(Json(contacts))
}

/// Flips the approval flag and reports the state it landed in.
#[instrument(skip(state))]
pub async fn approve_photo(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let photo = Photo::toggle_approved(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;

    info!(photo_id = %id, admin_id = %claims.sub, approved = photo.approved, "approval toggled");
    Ok(Json(ApprovalResponse {
        message: if photo.approved {
            "Photo approved".into()
        } else {
            "Photo rejected".into()
        },
        approved: photo.approved,
    }))
}

#[instrument(skip(state))]
pub async fn reject_photo(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    Photo::set_approved(&state.db, id, false)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;

    info!(photo_id = %id, admin_id = %claims.sub, "photo rejected");
    Ok(Json(MessageResponse {
        message: "Photo rejected successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn best_photo(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    Photo::mark_best(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;

    info!(photo_id = %id, admin_id = %claims.sub, "photo marked as best");
    Ok(Json(MessageResponse {
        message: "Photo marked as best successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_photo(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let photo = Photo::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Photo not found"))?;

    photo_service::delete_photo(&state, &photo).await?;
    info!(photo_id = %id, admin_id = %claims.sub, "photo deleted by admin");
    Ok(Json(MessageResponse {
        message: "Photo deleted successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if payload.new_password.len() < 8 {
        return Err(ApiError::Validation("Password too short".into()));
    }

    let admin = Admin::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(ApiError::NotFound("Admin not found"))?;

    if !verify_password(&payload.password, &admin.password_hash)? {
        warn!(admin_id = %admin.id, "change password with invalid current password");
        return Err(ApiError::Unauthorized("Invalid password"));
    }

    let hash = hash_password(&payload.new_password)?;
    Admin::update_password(&state.db, admin.id, &hash).await?;

    info!(admin_id = %admin.id, "admin password changed");
    notify_later(
        state.mailer.clone(),
        admin.email.clone(),
        "Password changed".into(),
        "Your administrator password was just changed.".into(),
    );

    Ok(Json(MessageResponse {
        message: "Password changed successfully".into(),
    }))
}
