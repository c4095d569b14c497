/// Tag endpoints
///
/// # Endpoints
///
/// - `GET /tag` - List the caller's tags, ordered by name descending
/// - `POST /tag` - Create a tag owned by the caller
///
/// Both require bearer authentication; the middleware injects the
/// resolved user as an `AuthContext` extension.

use crate::{app::AppState, error::ApiResult, extract::ApiJson};
use axum::{extract::State, http::StatusCode, Extension, Json};
use recipebox_shared::{
    auth::middleware::AuthContext,
    models::tag::{CreateTag, Tag},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create tag request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    /// Tag name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

/// Tag wire representation
///
/// The owner field is implicit: responses only ever contain the
/// caller's own records.
#[derive(Debug, Serialize)]
pub struct TagResponse {
    /// Tag ID
    pub id: Uuid,

    /// Tag name
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// List the caller's tags
///
/// Returns all tags owned by the authenticated user, ordered by name
/// descending. Other users' tags are never visible.
pub async fn list_tags(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let tags = Tag::list_by_owner(&state.db, auth.user_id).await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Create a tag owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: empty or missing name; no record is created
pub async fn create_tag(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ApiJson(req): ApiJson<CreateTagRequest>,
) -> ApiResult<(StatusCode, Json<TagResponse>)> {
    req.validate()?;

    let tag = Tag::create(
        &state.db,
        CreateTag {
            user_id: auth.user_id,
            name: req.name,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}
