use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for admin login.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for creating another admin.
#[derive(Debug, Deserialize)]
pub struct AddAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for the admin password change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub password: String,
    pub new_password: String,
}

/// Public part of an admin returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicAdmin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Response returned after a successful admin login.
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: PublicAdmin,
}

/// Result of an approval toggle; `approved` is the new state.
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub message: String,
    pub approved: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_body_is_camel_case() {
        let body: ChangePasswordRequest =
            serde_json::from_str(r#"{"password":"old","newPassword":"new-enough"}"#).unwrap();
        assert_eq!(body.password, "old");
        assert_eq!(body.new_password, "new-enough");
    }
}
