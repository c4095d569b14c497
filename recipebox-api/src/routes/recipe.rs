/// Recipe endpoints
///
/// # Endpoints
///
/// - `GET /recipe` - List the caller's recipes, newest first
/// - `POST /recipe` - Create a recipe owned by the caller
///
/// A recipe may reference ingredients; every referenced ingredient must
/// belong to the caller, otherwise the create is rejected before
/// anything is persisted.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    extract::ApiJson,
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use recipebox_shared::{
    auth::middleware::AuthContext,
    models::{
        ingredient::Ingredient,
        recipe::{CreateRecipe, Recipe},
    },
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create recipe request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    /// Recipe title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Preparation time in minutes
    #[validate(range(min = 0, message = "Time must not be negative"))]
    pub time_minutes: i32,

    /// Price of the dish
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    /// Ingredient ids to link; all must belong to the caller
    #[serde(default)]
    pub ingredients: Vec<Uuid>,
}

/// Recipe wire representation
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    /// Recipe ID
    pub id: Uuid,

    /// Recipe title
    pub title: String,

    /// Preparation time in minutes
    pub time_minutes: i32,

    /// Price of the dish
    pub price: f64,

    /// Linked ingredient ids
    pub ingredients: Vec<Uuid>,
}

/// List the caller's recipes
///
/// Newest first; other users' recipes are never visible.
pub async fn list_recipes(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<RecipeResponse>>> {
    let recipes = Recipe::list_by_owner(&state.db, auth.user_id).await?;

    let mut out = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let ingredients = Recipe::ingredient_ids(&state.db, recipe.id).await?;
        out.push(RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            ingredients,
        });
    }

    Ok(Json(out))
}

/// Create a recipe owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty title, negative time or price,
///   or an ingredient id that does not belong to the caller. No partial
///   state is left behind on any failure path.
pub async fn create_recipe(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ApiJson(req): ApiJson<CreateRecipeRequest>,
) -> ApiResult<(StatusCode, Json<RecipeResponse>)> {
    req.validate()?;

    // Ownership check before any write: referencing another user's
    // ingredient (or a nonexistent one) rejects the whole request.
    let mut ids = req.ingredients.clone();
    ids.sort_unstable();
    ids.dedup();

    if !ids.is_empty() {
        let owned = Ingredient::count_owned(&state.db, auth.user_id, &ids).await?;
        if owned != ids.len() as i64 {
            return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
                field: "ingredients".to_string(),
                message: "Unknown ingredient".to_string(),
            }]));
        }
    }

    let recipe = Recipe::create(
        &state.db,
        CreateRecipe {
            user_id: auth.user_id,
            title: req.title,
            time_minutes: req.time_minutes,
            price: req.price,
            ingredient_ids: ids.clone(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            ingredients: ids,
        }),
    ))
}
