/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Router layout
///
/// ```text
/// /
/// ├── /health              # Health check (public)
/// ├── /user/
/// │   ├── POST /create     # Register (public)
/// │   └── POST /token      # Issue token (public)
/// ├── /tag                 # GET list, POST create (bearer auth)
/// ├── /ingredient          # GET list, POST create (bearer auth)
/// └── /recipe              # GET list, POST create (bearer auth)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Request logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Bearer authentication (per-route-group)

use crate::config::Config;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use recipebox_shared::auth::middleware::require_bearer;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the secret used to sign and validate tokens
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Example
///
/// ```no_run
/// use recipebox_api::app::{build_router, AppState};
/// use recipebox_api::config::Config;
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
///
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // User routes (public, no auth required)
    let user_routes = Router::new()
        .route("/create", post(routes::user::register))
        .route("/token", post(routes::user::issue_token));

    // Owned-record routes (require bearer authentication)
    let tag_routes = Router::new()
        .route("/", get(routes::tag::list_tags))
        .route("/", post(routes::tag::create_tag));

    let ingredient_routes = Router::new()
        .route("/", get(routes::ingredient::list_ingredients))
        .route("/", post(routes::ingredient::create_ingredient));

    let recipe_routes = Router::new()
        .route("/", get(routes::recipe::list_recipes))
        .route("/", post(routes::recipe::create_recipe));

    let authed_routes = Router::new()
        .nest("/tag", tag_routes)
        .nest("/ingredient", ingredient_routes)
        .nest("/recipe", recipe_routes)
        .layer(middleware::from_fn(require_bearer(
            state.jwt_secret().to_owned(),
        )));

    Router::new()
        .merge(health_routes)
        .nest("/user", user_routes)
        .merge(authed_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
