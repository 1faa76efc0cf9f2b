use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Contact form submission. Written once, read by admins only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub message: String,
    pub created_at: OffsetDateTime,
}

impl Contact {
    pub async fn insert(
        db: &PgPool,
        first_name: &str,
        last_name: Option<&str>,
        email: &str,
        mobile: Option<&str>,
        address: Option<&str>,
        message: &str,
    ) -> anyhow::Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, mobile, address, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, mobile, address, message, created_at
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(mobile)
        .bind(address)
        .bind(message)
        .fetch_one(db)
        .await?;
        Ok(contact)
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Contact>> {
        let rows = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, mobile, address, message, created_at
            FROM contacts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
