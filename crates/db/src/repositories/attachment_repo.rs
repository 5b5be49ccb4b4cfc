//! Repository for the `attachments` table.
//!
//! Attachments have no owner column; callers must resolve the parent diary
//! through an owner-scoped lookup before touching rows here.

use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::attachment::Attachment;

/// Column list for `attachments` queries.
const COLUMNS: &str = "id, diary_id, url, created_at";

/// Provides data access for diary attachments.
pub struct AttachmentRepo;

impl AttachmentRepo {
    /// List a diary's attachments, creation time ascending.
    ///
    /// Rows inserted in one transaction share a timestamp, so the id
    /// breaks ties to keep insertion order.
    pub async fn list_by_diary(
        pool: &PgPool,
        diary_id: DbId,
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attachments
             WHERE diary_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(diary_id)
            .fetch_all(pool)
            .await
    }

    /// Find an attachment by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attachment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attachments WHERE id = $1");
        sqlx::query_as::<_, Attachment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert one attachment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        diary_id: DbId,
        url: &str,
    ) -> Result<Attachment, sqlx::Error> {
        let query = format!(
            "INSERT INTO attachments (diary_id, url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(diary_id)
            .bind(url)
            .fetch_one(pool)
            .await
    }

    /// Insert several attachments for one diary in a single transaction.
    pub async fn batch_create(
        pool: &PgPool,
        diary_id: DbId,
        urls: &[String],
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO attachments (diary_id, url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(urls.len());
        for url in urls {
            let attachment = sqlx::query_as::<_, Attachment>(&query)
                .bind(diary_id)
                .bind(url)
                .fetch_one(&mut *tx)
                .await?;
            created.push(attachment);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Delete one attachment row. Returns `false` when the id was absent.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attachments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Delete all attachment rows of a diary. Returns the number removed.
    pub async fn delete_by_diary(pool: &PgPool, diary_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attachments WHERE diary_id = $1")
            .bind(diary_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
