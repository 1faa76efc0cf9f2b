use serde::{Deserialize, Serialize};

use crate::auth::services::is_valid_email;
use crate::error::ApiError;

/// Contact form body. First name, email and message are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Rejects submissions before anything is persisted.
pub fn validate(payload: &ContactRequest) -> Result<(), ApiError> {
    if payload.first_name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.message.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "First name, email, and message are required!".into(),
        ));
    }
    if !is_valid_email(payload.email.trim()) {
        return Err(ApiError::Validation("Invalid email".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ContactRequest {
        ContactRequest {
            first_name: "Ada".into(),
            last_name: Some("Lovelace".into()),
            email: "ada@example.com".into(),
            mobile: None,
            address: None,
            message: "Great photos!".into(),
        }
    }

    #[test]
    fn complete_submission_passes() {
        assert!(validate(&full_payload()).is_ok());
    }

    #[test]
    fn missing_message_is_rejected() {
        let mut payload = full_payload();
        payload.message = "  ".into();
        assert!(matches!(
            validate(&payload),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn missing_first_name_or_email_is_rejected() {
        let mut payload = full_payload();
        payload.first_name = "".into();
        assert!(validate(&payload).is_err());

        let mut payload = full_payload();
        payload.email = "".into();
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut payload = full_payload();
        payload.email = "nope".into();
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn body_fields_are_camel_case() {
        let payload: ContactRequest = serde_json::from_str(
            r#"{"firstName":"Ada","email":"ada@example.com","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(payload.first_name, "Ada");
        assert!(payload.last_name.is_none());
    }
}
