/// Ingredient model and database operations
///
/// Ingredients are owned per user like tags, but additionally participate
/// in a many-to-many association with recipes. The `assigned_only` listing
/// restricts results to ingredients referenced by at least one of the
/// owner's recipes, collapsing duplicates so an ingredient attached to
/// several recipes still appears once.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE ingredients (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     name VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Ingredient record, owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ingredient {
    /// Unique ingredient ID (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Ingredient name; duplicates are allowed, even per owner
    pub name: String,

    /// When the ingredient was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIngredient {
    /// Owning user
    pub user_id: Uuid,

    /// Ingredient name (must be non-empty; validated at the request layer)
    pub name: String,
}

impl Ingredient {
    /// Creates a new ingredient owned by `data.user_id`
    pub async fn create(pool: &PgPool, data: CreateIngredient) -> Result<Self, sqlx::Error> {
        let ingredient = sqlx::query_as::<_, Ingredient>(
            r#"
            INSERT INTO ingredients (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(ingredient)
    }

    /// Lists ingredients owned by `owner`, ordered by name descending
    ///
    /// When `assigned_only` is true, only ingredients referenced by at
    /// least one recipe owned by the same user are returned. DISTINCT
    /// collapses ingredients shared by multiple recipes.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner: Uuid,
        assigned_only: bool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let ingredients = if assigned_only {
            sqlx::query_as::<_, Ingredient>(
                r#"
                SELECT DISTINCT i.id, i.user_id, i.name, i.created_at
                FROM ingredients i
                JOIN recipe_ingredients ri ON ri.ingredient_id = i.id
                JOIN recipes r ON r.id = ri.recipe_id
                WHERE i.user_id = $1 AND r.user_id = $1
                ORDER BY i.name DESC
                "#,
            )
            .bind(owner)
            .fetch_all(pool)
            .await?
        } else {
            sqlx::query_as::<_, Ingredient>(
                r#"
                SELECT id, user_id, name, created_at
                FROM ingredients
                WHERE user_id = $1
                ORDER BY name DESC
                "#,
            )
            .bind(owner)
            .fetch_all(pool)
            .await?
        };

        Ok(ingredients)
    }

    /// Counts how many of the given ingredient ids are owned by `owner`
    ///
    /// Used on the recipe write path to reject references to another
    /// user's ingredients before anything is persisted.
    pub async fn count_owned(
        pool: &PgPool,
        owner: Uuid,
        ids: &[Uuid],
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT id)
            FROM ingredients
            WHERE user_id = $1 AND id = ANY($2)
            "#,
        )
        .bind(owner)
        .bind(ids)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
