/// Recipe model and database operations
///
/// A recipe references zero or more of its owner's ingredients through
/// the `recipe_ingredients` join table. The recipe row and its join rows
/// are written in a single transaction so a failed create leaves no
/// partial state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe record, owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    /// Unique recipe ID (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Recipe title
    pub title: String,

    /// Preparation time in minutes
    pub time_minutes: i32,

    /// Price of the dish
    pub price: f64,

    /// When the recipe was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipe {
    /// Owning user
    pub user_id: Uuid,

    /// Recipe title (must be non-empty; validated at the request layer)
    pub title: String,

    /// Preparation time in minutes
    pub time_minutes: i32,

    /// Price of the dish
    pub price: f64,

    /// Ingredient ids to link; all must belong to `user_id`
    pub ingredient_ids: Vec<Uuid>,
}

impl Recipe {
    /// Creates a recipe and its ingredient links in one transaction
    ///
    /// Ingredient ownership must be checked by the caller before this is
    /// invoked; this function only persists. Duplicate ids in
    /// `ingredient_ids` are collapsed.
    pub async fn create(pool: &PgPool, data: CreateRecipe) -> Result<Self, sqlx::Error> {
        let mut ids = data.ingredient_ids;
        ids.sort_unstable();
        ids.dedup();

        let mut tx = pool.begin().await?;

        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (user_id, title, time_minutes, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, time_minutes, price, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.time_minutes)
        .bind(data.price)
        .fetch_one(&mut *tx)
        .await?;

        for ingredient_id in &ids {
            sqlx::query(
                r#"
                INSERT INTO recipe_ingredients (recipe_id, ingredient_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(recipe.id)
            .bind(ingredient_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(recipe)
    }

    /// Finds a recipe by ID, scoped to its owner
    ///
    /// Returns None when the recipe does not exist or belongs to another
    /// user; callers cannot distinguish the two.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        owner: Uuid,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, user_id, title, time_minutes, price, created_at
            FROM recipes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await?;

        Ok(recipe)
    }

    /// Lists all recipes owned by `owner`, newest first
    pub async fn list_by_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let recipes = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, user_id, title, time_minutes, price, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(pool)
        .await?;

        Ok(recipes)
    }

    /// Gets the ingredient ids linked to a recipe
    pub async fn ingredient_ids(pool: &PgPool, recipe_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT ingredient_id
            FROM recipe_ingredients
            WHERE recipe_id = $1
            "#,
        )
        .bind(recipe_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_recipe_struct() {
        let create_recipe = CreateRecipe {
            user_id: Uuid::new_v4(),
            title: "Avocado toast".to_string(),
            time_minutes: 10,
            price: 5.5,
            ingredient_ids: vec![],
        };

        assert_eq!(create_recipe.title, "Avocado toast");
        assert!(create_recipe.ingredient_ids.is_empty());
    }
}
