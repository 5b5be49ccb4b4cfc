//! Repository for the `diaries` table.
//!
//! Lookups come in three scopes: active (`NOT is_deleted`), trashed
//! (`is_deleted`), and any-state. Lifecycle operations pick the scope that
//! encodes their precondition, so e.g. soft-deleting an already-trashed
//! diary simply misses and reads as not-found. All scopes are additionally
//! owner-scoped.

use daybook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::diary::{Diary, UpsertDiary};

/// Column list for `diaries` queries.
const COLUMNS: &str = "\
    id, owner_id, category_id, content, content_html, is_deleted, \
    deleted_at, created_at, updated_at";

/// Provides data access for diary entries.
pub struct DiaryRepo;

impl DiaryRepo {
    /// Insert a new diary in the active state, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &UpsertDiary,
    ) -> Result<Diary, sqlx::Error> {
        let query = format!(
            "INSERT INTO diaries (owner_id, category_id, content, content_html)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(input.category_id)
            .bind(&input.content)
            .bind(&input.content_html)
            .fetch_one(pool)
            .await
    }

    /// Find an active (non-trashed) diary by id, scoped to `owner_id`.
    pub async fn find_active(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a trashed diary by id, scoped to `owner_id`.
    pub async fn find_trashed(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE id = $1 AND owner_id = $2 AND is_deleted"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a diary by id regardless of trash state, scoped to `owner_id`.
    ///
    /// Used by attachment operations, which work on trashed diaries too.
    pub async fn find_any(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diaries WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Update content, rendered content, and category of an active diary.
    ///
    /// Returns `None` when the diary is absent, foreign, or trashed. Trash
    /// state is never touched here.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpsertDiary,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!(
            "UPDATE diaries
             SET category_id = $3, content = $4, content_html = $5, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(input.category_id)
            .bind(&input.content)
            .bind(&input.content_html)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `created_at` directly, for backdating entries.
    pub async fn update_created_at(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        created_at: Timestamp,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!(
            "UPDATE diaries
             SET created_at = $3, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(created_at)
            .fetch_optional(pool)
            .await
    }

    /// Move an active diary to trash. Returns `false` when nothing matched
    /// (absent, foreign, or already trashed).
    pub async fn soft_delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE diaries
             SET is_deleted = TRUE, deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND NOT is_deleted",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Restore a trashed diary to active. Returns `false` when nothing
    /// matched (absent, foreign, or not in trash).
    pub async fn restore(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE diaries
             SET is_deleted = FALSE, deleted_at = NULL, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND is_deleted",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Permanently remove a diary row and its attachment rows, atomically.
    ///
    /// The diary delete re-checks owner and trash state, so a restore
    /// racing in after the caller's lookup misses here instead of purging
    /// a now-active diary; the whole transaction rolls back and `false`
    /// is returned. Object-storage cleanup for the attachments happens
    /// before this call and outside the transaction, so a storage failure
    /// can never roll back the row deletes.
    pub async fn purge_rows(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM attachments WHERE diary_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(
            "DELETE FROM diaries WHERE id = $1 AND owner_id = $2 AND is_deleted",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// List a page of active diaries, newest first, optionally filtered by
    /// category.
    pub async fn list_active(
        pool: &PgPool,
        owner_id: DbId,
        category_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE owner_id = $1 AND NOT is_deleted
               AND ($2::BIGINT IS NULL OR category_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count active diaries, optionally filtered by category.
    pub async fn count_active(
        pool: &PgPool,
        owner_id: DbId,
        category_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM diaries
             WHERE owner_id = $1 AND NOT is_deleted
               AND ($2::BIGINT IS NULL OR category_id = $2)",
        )
        .bind(owner_id)
        .bind(category_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// List a page of trashed diaries, most recently deleted first.
    pub async fn list_trash(
        pool: &PgPool,
        owner_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE owner_id = $1 AND is_deleted
             ORDER BY deleted_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count trashed diaries.
    pub async fn count_trash(pool: &PgPool, owner_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM diaries WHERE owner_id = $1 AND is_deleted")
                .bind(owner_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Every trashed diary of an owner, for clear-trash iteration.
    pub async fn list_trash_all(pool: &PgPool, owner_id: DbId) -> Result<Vec<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE owner_id = $1 AND is_deleted
             ORDER BY deleted_at DESC, id DESC"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Substring search over active diary content, newest first.
    ///
    /// `pattern` is a ready-made `LIKE` pattern with metacharacters already
    /// escaped (see `daybook_core::search::like_pattern`).
    pub async fn search(
        pool: &PgPool,
        owner_id: DbId,
        pattern: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE owner_id = $1 AND NOT is_deleted
               AND content LIKE $2 ESCAPE '\\'
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count matches for [`DiaryRepo::search`].
    pub async fn count_search(
        pool: &PgPool,
        owner_id: DbId,
        pattern: &str,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM diaries
             WHERE owner_id = $1 AND NOT is_deleted
               AND content LIKE $2 ESCAPE '\\'",
        )
        .bind(owner_id)
        .bind(pattern)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
