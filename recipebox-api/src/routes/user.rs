/// User endpoints: registration and token issuance
///
/// # Endpoints
///
/// - `POST /user/create` - Register a new user
/// - `POST /user/token` - Exchange email/password for a bearer token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use recipebox_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password; the minimum length is the only strength requirement
    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,

    /// Optional display name
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
}

/// Register response
///
/// The password (and its hash) is never part of any response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Display name, if provided
    pub name: Option<String>,
}

/// Token request
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "testpass",
///   "name": "Test name"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing field, invalid email, password shorter
///   than 5 characters, or email already registered. Nothing is
///   persisted on any failure path.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    // Validation happens before the password is hashed or anything
    // touches the database; a rejected registration leaves no trace.
    req.validate()?;

    let password_hash = password::hash_password(&req.password)?;

    // Duplicate emails surface as a unique violation, mapped to 400
    let user = User::create(
        &state.db,
        CreateUser {
            email: req.email,
            password_hash,
            name: req.name,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
            name: user.name,
        }),
    ))
}

/// Issue a bearer token
///
/// # Endpoint
///
/// ```text
/// POST /user/token
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "testpass"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing field, unknown email, or wrong password.
///   The response never carries a `token` key on failure, and the
///   message does not reveal which part of the credential was wrong.
pub async fn issue_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    // An absent field never reaches deserialization as an empty string,
    // so a rejected body gets the same answer as blank credentials.
    let Json(req) = payload.map_err(|_| {
        ApiError::AuthenticationError("Email and password are required".to_string())
    })?;

    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::AuthenticationError(
            "Email and password are required".to_string(),
        ));
    }

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::AuthenticationError("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::AuthenticationError(
            "Invalid email or password".to_string(),
        ));
    }

    User::update_last_login(&state.db, user.id).await?;

    let claims = jwt::Claims::new(user.id);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(TokenResponse { token }))
}
