use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

use super::dto::{validate, ContactRequest, MessageResponse};
use super::repo::Contact;

#[instrument(skip(state, payload))]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    validate(&payload)?;

    let contact = Contact::insert(
        &state.db,
        payload.first_name.trim(),
        payload.last_name.as_deref(),
        payload.email.trim(),
        payload.mobile.as_deref(),
        payload.address.as_deref(),
        payload.message.trim(),
    )
    .await?;

    info!(contact_id = %contact.id, "contact form submitted");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Contact form submitted successfully!".into(),
        }),
    ))
}
