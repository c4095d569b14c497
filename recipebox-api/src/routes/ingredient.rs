/// Ingredient endpoints
///
/// # Endpoints
///
/// - `GET /ingredient?assigned_only=1` - List the caller's ingredients
/// - `POST /ingredient` - Create an ingredient owned by the caller
///
/// `assigned_only` restricts the listing to ingredients referenced by at
/// least one of the caller's recipes, each appearing at most once.

use crate::{app::AppState, error::ApiResult, extract::ApiJson};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use recipebox_shared::{
    auth::middleware::AuthContext,
    models::ingredient::{CreateIngredient, Ingredient},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// List query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListIngredientsParams {
    /// Any nonzero value restricts results to assigned ingredients
    pub assigned_only: Option<i32>,
}

/// Create ingredient request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIngredientRequest {
    /// Ingredient name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

/// Ingredient wire representation
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    /// Ingredient ID
    pub id: Uuid,

    /// Ingredient name
    pub name: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

/// List the caller's ingredients
///
/// Ordered by name descending. With `assigned_only` set to a nonzero
/// value, only ingredients attached to at least one of the caller's
/// recipes are returned, duplicates collapsed.
pub async fn list_ingredients(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<ListIngredientsParams>,
) -> ApiResult<Json<Vec<IngredientResponse>>> {
    let assigned_only = params.assigned_only.map(|v| v != 0).unwrap_or(false);

    let ingredients = Ingredient::list_by_owner(&state.db, auth.user_id, assigned_only).await?;

    Ok(Json(
        ingredients
            .into_iter()
            .map(IngredientResponse::from)
            .collect(),
    ))
}

/// Create an ingredient owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: empty or missing name; no record is created
pub async fn create_ingredient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ApiJson(req): ApiJson<CreateIngredientRequest>,
) -> ApiResult<(StatusCode, Json<IngredientResponse>)> {
    req.validate()?;

    let ingredient = Ingredient::create(
        &state.db,
        CreateIngredient {
            user_id: auth.user_id,
            name: req.name,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(IngredientResponse::from(ingredient)),
    ))
}
