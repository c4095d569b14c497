// Each test binary compiles its own copy of this module and uses a
// different subset of the helpers.
#![allow(dead_code)]

/// Common test utilities for integration tests
///
/// Shared infrastructure for the API tests:
/// - Test database setup (migrations) and per-test user creation
/// - Bearer token generation
/// - Request/response helpers
///
/// Each `TestContext` creates its own user, so ownership-scoped
/// listings are isolated even though tests share one database.
/// `cleanup` deletes the user, which cascades to the user's records.

use axum::body::Body;
use axum::http::{Request, Response};
use recipebox_api::app::{build_router, AppState};
use recipebox_api::config::Config;
use recipebox_shared::auth::jwt::{create_token, Claims};
use recipebox_shared::auth::password::hash_password;
use recipebox_shared::models::user::{CreateUser, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub user: User,
    pub token: String,
}

impl TestContext {
    /// Creates a new test context with a fresh user
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to this crate's Cargo.toml
        sqlx::migrate!("../recipebox-shared/migrations").run(&db).await?;

        // Authenticated requests use a directly minted token, so the
        // stored hash is never verified for this user.
        let user = User::create(
            &db,
            CreateUser {
                email: unique_email(),
                password_hash: "test_hash".to_string(),
                name: Some("Test User".to_string()),
            },
        )
        .await?;

        let claims = Claims::new(user.id);
        let token = create_token(&claims, &config.jwt.secret)?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            user,
            token,
        })
    }

    /// Returns authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Cleans up test data
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        // Cascades to the user's tags, ingredients, and recipes
        User::delete(&self.db, self.user.id).await?;
        Ok(())
    }
}

/// Generates an email address no other test run has used
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Creates a second user with a real (verifiable) password hash
pub async fn create_user_with_password(
    db: &PgPool,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    let user = User::create(
        db,
        CreateUser {
            email: email.to_string(),
            password_hash: hash_password(password)?,
            name: Some("Test name".to_string()),
        },
    )
    .await?;

    Ok(user)
}

/// Builds a JSON POST request
pub fn post_json(uri: &str, auth: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(header) = auth {
        builder = builder.header("authorization", header);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Builds a GET request
pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(header) = auth {
        builder = builder.header("authorization", header);
    }

    builder.body(Body::empty()).unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
