use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Photo record in the database. `user_id` is set at upload and never
/// changes; `approved` and `best_photo` are independent flags.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: Uuid,
    pub description: Option<String>,
    pub name: Option<String>,
    pub place: Option<String>,
    pub species_type: Option<String>,
    pub scenic: Option<String>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub lure: Option<String>,
    pub awards: Option<String>,
    pub image_path: String,
    pub photo_url: String,
    pub user_id: Uuid,
    pub approved: bool,
    pub best_photo: bool,
    pub created_at: OffsetDateTime,
}

/// Scalar photo fields as submitted by the client. `None` means the field
/// was not provided; on update that leaves the stored value untouched.
#[derive(Debug, Default, Clone)]
pub struct PhotoFields {
    pub description: Option<String>,
    pub name: Option<String>,
    pub place: Option<String>,
    pub species_type: Option<String>,
    pub scenic: Option<String>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub lure: Option<String>,
    pub awards: Option<String>,
}

const COLUMNS: &str = "id, description, name, place, species_type, scenic, length, weight, \
                       lure, awards, image_path, photo_url, user_id, approved, best_photo, created_at";

impl Photo {
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Photo>> {
        let rows = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {COLUMNS} FROM photos ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {COLUMNS} FROM photos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(photo)
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        fields: &PhotoFields,
        image_path: &str,
        photo_url: &str,
    ) -> anyhow::Result<Photo> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            r#"
            INSERT INTO photos
                (description, name, place, species_type, scenic, length, weight,
                 lure, awards, image_path, photo_url, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&fields.description)
        .bind(&fields.name)
        .bind(&fields.place)
        .bind(&fields.species_type)
        .bind(&fields.scenic)
        .bind(fields.length)
        .bind(fields.weight)
        .bind(&fields.lure)
        .bind(&fields.awards)
        .bind(image_path)
        .bind(photo_url)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(photo)
    }

    /// Partial update: absent fields keep their stored values. A new image,
    /// when present, replaces both the storage path and the public URL.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        fields: &PhotoFields,
        image: Option<(&str, &str)>,
    ) -> anyhow::Result<Option<Photo>> {
        let (image_path, photo_url) = match image {
            Some((path, url)) => (Some(path), Some(url)),
            None => (None, None),
        };
        let photo = sqlx::query_as::<_, Photo>(&format!(
            r#"
            UPDATE photos SET
                description  = COALESCE($2, description),
                name         = COALESCE($3, name),
                place        = COALESCE($4, place),
                species_type = COALESCE($5, species_type),
                scenic       = COALESCE($6, scenic),
                length       = COALESCE($7, length),
                weight       = COALESCE($8, weight),
                lure         = COALESCE($9, lure),
                awards       = COALESCE($10, awards),
                image_path   = COALESCE($11, image_path),
                photo_url    = COALESCE($12, photo_url)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.description)
        .bind(&fields.name)
        .bind(&fields.place)
        .bind(&fields.species_type)
        .bind(&fields.scenic)
        .bind(fields.length)
        .bind(fields.weight)
        .bind(&fields.lure)
        .bind(&fields.awards)
        .bind(image_path)
        .bind(photo_url)
        .fetch_optional(db)
        .await?;
        Ok(photo)
    }

    /// Atomic flip of the approval flag. A single statement so concurrent
    /// toggles on the same photo cannot interleave a stale read.
    pub async fn toggle_approved(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            "UPDATE photos SET approved = NOT approved WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(photo)
    }

    pub async fn set_approved(
        db: &PgPool,
        id: Uuid,
        approved: bool,
    ) -> anyhow::Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            "UPDATE photos SET approved = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(approved)
        .fetch_optional(db)
        .await?;
        Ok(photo)
    }

    pub async fn mark_best(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(&format!(
            "UPDATE photos SET best_photo = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(photo)
    }

    pub async fn delete_row(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
