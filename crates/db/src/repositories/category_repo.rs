//! Repository for the `categories` table.
//!
//! Every lookup is scoped by owner id; a row belonging to another owner is
//! indistinguishable from a missing row.

use daybook_core::category::{
    DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON, DEFAULT_CATEGORY_NAME,
};
use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategorySortItem, RecentDiary, UpsertCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "\
    id, owner_id, name, icon, color, is_default, sort_order, \
    created_at, updated_at";

/// Provides data access for diary categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List an owner's categories, sort order ascending, creation time
    /// breaking ties.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE owner_id = $1
             ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category by id, scoped to `owner_id`.
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Get an owner's default category.
    ///
    /// Returns `None` only if provisioning never ran for this owner, which
    /// is an integrity bug upstream.
    pub async fn find_default(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE owner_id = $1 AND is_default");
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the owner already has a category with this name.
    pub async fn name_exists(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE owner_id = $1 AND name = $2)",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Count the owner's categories (used to assign the next sort order).
    pub async fn count_by_owner(pool: &PgPool, owner_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a new non-default category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &UpsertCategory,
        sort_order: i32,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (owner_id, name, icon, color, is_default, sort_order)
             VALUES ($1, $2, $3, $4, FALSE, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.color)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Materialize the owner's default category.
    ///
    /// Provisioning hook, invoked once per newly-created owner by the
    /// account-creation flow. The partial unique index on
    /// `(owner_id) WHERE is_default` rejects a second call.
    pub async fn create_default(pool: &PgPool, owner_id: DbId) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (owner_id, name, icon, color, is_default, sort_order)
             VALUES ($1, $2, $3, $4, TRUE, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(DEFAULT_CATEGORY_NAME)
            .bind(DEFAULT_CATEGORY_ICON)
            .bind(DEFAULT_CATEGORY_COLOR)
            .fetch_one(pool)
            .await
    }

    /// Update a category's name, icon, and color, returning the new row.
    ///
    /// Returns `None` when the id is absent or foreign. Callers decide the
    /// final `name` (the default category keeps its stored name).
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        name: &str,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories
             SET name = $3, icon = $4, color = $5, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(name)
            .bind(icon)
            .bind(color)
            .fetch_optional(pool)
            .await
    }

    /// Apply a batch of sort-order updates in one transaction.
    ///
    /// All-or-nothing: an id that is absent or foreign rolls the whole
    /// batch back with `RowNotFound`.
    pub async fn update_sort(
        pool: &PgPool,
        owner_id: DbId,
        items: &[CategorySortItem],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for item in items {
            let result = sqlx::query(
                "UPDATE categories SET sort_order = $3, updated_at = NOW()
                 WHERE id = $1 AND owner_id = $2",
            )
            .bind(item.id)
            .bind(owner_id)
            .bind(item.sort_order)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(sqlx::Error::RowNotFound);
            }
        }

        tx.commit().await
    }

    /// Delete a category, atomically reassigning every diary that
    /// references it (regardless of trash state) to the owner's default
    /// category.
    ///
    /// Diaries that were active are moved to trash with a fresh
    /// `deleted_at`; diaries already in trash keep their `deleted_at` and
    /// only change category. Returns the number of diaries rewritten.
    ///
    /// Callers must have verified that the category exists, is owned, and
    /// is not the default.
    pub async fn delete_reassign(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        default_category_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rewritten = sqlx::query(
            "UPDATE diaries
             SET category_id = $3,
                 deleted_at = CASE WHEN is_deleted THEN deleted_at ELSE NOW() END,
                 is_deleted = TRUE,
                 updated_at = NOW()
             WHERE owner_id = $2 AND category_id = $1",
        )
        .bind(id)
        .bind(owner_id)
        .bind(default_category_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM categories WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rewritten)
    }

    /// Count the owner's non-trashed diaries in a category.
    pub async fn count_diaries(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM diaries
             WHERE owner_id = $1 AND category_id = $2 AND NOT is_deleted",
        )
        .bind(owner_id)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// The most recent non-trashed diary in a category, if any.
    pub async fn recent_diary(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<RecentDiary>, sqlx::Error> {
        sqlx::query_as::<_, RecentDiary>(
            "SELECT id, created_at FROM diaries
             WHERE owner_id = $1 AND category_id = $2 AND NOT is_deleted
             ORDER BY created_at DESC, id DESC
             LIMIT 1",
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
