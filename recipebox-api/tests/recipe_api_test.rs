/// Integration tests for the recipe endpoints
///
/// Covers `GET /recipe` and `POST /recipe`:
/// - unauthenticated requests are rejected with 401
/// - creation links only the caller's own ingredients
/// - listings are owner-scoped

mod common;

use axum::http::StatusCode;
use common::TestContext;
use recipebox_shared::models::ingredient::{CreateIngredient, Ingredient};
use recipebox_shared::models::recipe::{CreateRecipe, Recipe};
use recipebox_shared::models::user::User;
use serde_json::json;
use tower::Service as _;
use uuid::Uuid;

#[tokio::test]
async fn test_login_required() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/recipe", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_recipe_with_ingredients() {
    let ctx = TestContext::new().await.unwrap();

    let eggs = Ingredient::create(
        &ctx.db,
        CreateIngredient {
            user_id: ctx.user.id,
            name: "Eggs".to_string(),
        },
    )
    .await
    .unwrap();

    let request = common::post_json(
        "/recipe",
        Some(&ctx.auth_header()),
        json!({
            "title": "Eggs benedict",
            "time_minutes": 25,
            "price": 9.5,
            "ingredients": [eggs.id]
        }),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = common::body_json(response).await;
    assert_eq!(body["title"], "Eggs benedict");
    assert_eq!(body["time_minutes"], 25);
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 1);

    // Persisted under the caller's ownership
    let recipe_id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let stored = Recipe::find_by_id_for_owner(&ctx.db, ctx.user.id, recipe_id)
        .await
        .unwrap()
        .expect("recipe should be stored");
    assert_eq!(stored.title, "Eggs benedict");

    // Immediately retrievable by its owner
    let response = ctx
        .app
        .clone()
        .call(common::get("/recipe", Some(&ctx.auth_header())))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Eggs benedict");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_recipe_rejects_foreign_ingredient() {
    let ctx = TestContext::new().await.unwrap();

    let other = common::create_user_with_password(&ctx.db, &common::unique_email(), "Pass_2020")
        .await
        .unwrap();

    let rice = Ingredient::create(
        &ctx.db,
        CreateIngredient {
            user_id: other.id,
            name: "Rice".to_string(),
        },
    )
    .await
    .unwrap();

    let request = common::post_json(
        "/recipe",
        Some(&ctx.auth_header()),
        json!({
            "title": "Fried rice",
            "time_minutes": 15,
            "price": 4.0,
            "ingredients": [rice.id]
        }),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing persisted
    let recipes = Recipe::list_by_owner(&ctx.db, ctx.user.id).await.unwrap();
    assert!(recipes.is_empty());

    User::delete(&ctx.db, other.id).await.unwrap();
    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_recipe_rejects_unknown_ingredient() {
    let ctx = TestContext::new().await.unwrap();

    let request = common::post_json(
        "/recipe",
        Some(&ctx.auth_header()),
        json!({
            "title": "Mystery stew",
            "time_minutes": 60,
            "price": 3.0,
            "ingredients": [Uuid::new_v4()]
        }),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_create_recipe_empty_title_invalid() {
    let ctx = TestContext::new().await.unwrap();

    let request = common::post_json(
        "/recipe",
        Some(&ctx.auth_header()),
        json!({
            "title": "",
            "time_minutes": 5,
            "price": 1.0
        }),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let recipes = Recipe::list_by_owner(&ctx.db, ctx.user.id).await.unwrap();
    assert!(recipes.is_empty());

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_recipes_limited_to_user() {
    let ctx = TestContext::new().await.unwrap();

    let other = common::create_user_with_password(&ctx.db, &common::unique_email(), "Pass_2020")
        .await
        .unwrap();

    Recipe::create(
        &ctx.db,
        CreateRecipe {
            user_id: other.id,
            title: "Someone else's curry".to_string(),
            time_minutes: 40,
            price: 7.0,
            ingredient_ids: vec![],
        },
    )
    .await
    .unwrap();

    Recipe::create(
        &ctx.db,
        CreateRecipe {
            user_id: ctx.user.id,
            title: "My toast".to_string(),
            time_minutes: 5,
            price: 1.0,
            ingredient_ids: vec![],
        },
    )
    .await
    .unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/recipe", Some(&ctx.auth_header())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let recipes = body.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "My toast");

    User::delete(&ctx.db, other.id).await.unwrap();
    ctx.cleanup().await.unwrap();
}
