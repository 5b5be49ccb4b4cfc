mod common;

use axum::http::StatusCode;
use daybook_db::repositories::CategoryRepo;
use serde_json::json;
use sqlx::PgPool;

const OWNER: i64 = 1;
const OTHER_OWNER: i64 = 2;

/// Provision the owner's default category, as the account-creation flow
/// would.
async fn seed_default(pool: &PgPool, owner_id: i64) -> i64 {
    CategoryRepo::create_default(pool, owner_id)
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_rejects_missing_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get_unauthed(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_provisioned_default(pool: PgPool) {
    seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/categories", OWNER).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Journal");
    assert_eq!(list[0]["is_default"], true);
    assert_eq!(list[0]["sort_order"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_one_returns_owned_category(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::get(app, &format!("/api/v1/categories/{default_id}"), OWNER).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["id"].as_i64().unwrap(), default_id);
    assert_eq!(body["data"]["name"], "Journal");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_one_masks_foreign_category(pool: PgPool) {
    let foreign_id = seed_default(&pool, OTHER_OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::get(app, &format!("/api/v1/categories/{foreign_id}"), OWNER).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_appends_after_existing_categories(pool: PgPool) {
    seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app.clone(),
        "/api/v1/categories",
        OWNER,
        json!({"name": "Work", "icon": "💼", "color": "#336699"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["name"], "Work");
    assert_eq!(body["data"]["is_default"], false);
    assert_eq!(body["data"]["sort_order"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_name_conflicts(pool: PgPool) {
    seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let payload = json!({"name": "Work", "icon": null, "color": null});
    let first = common::post_json(app.clone(), "/api/v1/categories", OWNER, payload.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = common::post_json(app, "/api/v1/categories", OWNER, payload).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = common::body_json(second).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_overlong_name(pool: PgPool) {
    seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app,
        "/api/v1/categories",
        OWNER,
        json!({"name": "elevenchars", "icon": null, "color": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_default_is_invalid_operation(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::put_json(
        app,
        &format!("/api/v1/categories/{default_id}"),
        OWNER,
        json!({"name": "Renamed", "icon": null, "color": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["code"], "INVALID_OPERATION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_icon_and_color_stay_updatable(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    // Same name, new cosmetics: allowed even on the default category.
    let response = common::put_json(
        app,
        &format!("/api/v1/categories/{default_id}"),
        OWNER,
        json!({"name": "Journal", "icon": "🌙", "color": "#000000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["icon"], "🌙");
    assert_eq!(body["data"]["color"], "#000000");
    assert_eq!(body["data"]["name"], "Journal");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_default_is_invalid_operation(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let response =
        common::delete(app, &format!("/api/v1/categories/{default_id}"), OWNER).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["code"], "INVALID_OPERATION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_reassigns_diaries_to_default_and_trashes_them(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let created = common::post_json(
        app.clone(),
        "/api/v1/categories",
        OWNER,
        json!({"name": "Work", "icon": null, "color": null}),
    )
    .await;
    let work_id = common::body_json(created).await["data"]["id"].as_i64().unwrap();

    let diary = common::post_json(
        app.clone(),
        "/api/v1/diaries",
        OWNER,
        json!({"category_id": work_id, "content": "standup notes", "content_html": null}),
    )
    .await;
    let diary_id = common::body_json(diary).await["data"]["id"].as_i64().unwrap();

    let response =
        common::delete(app.clone(), &format!("/api/v1/categories/{work_id}"), OWNER).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Only the default category remains.
    let list = common::get(app.clone(), "/api/v1/categories", OWNER).await;
    let categories = common::body_json(list).await;
    let names: Vec<_> = categories["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Journal"]);

    // The diary moved to trash, reassigned to the default category.
    let trash = common::get(app, "/api/v1/trash", OWNER).await;
    let body = common::body_json(trash).await;
    let entry = &body["data"]["list"][0];
    assert_eq!(entry["id"].as_i64().unwrap(), diary_id);
    assert_eq!(entry["category_id"].as_i64().unwrap(), default_id);
    assert_eq!(entry["is_deleted"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_owner_sees_not_found(pool: PgPool) {
    seed_default(&pool, OWNER).await;
    seed_default(&pool, OTHER_OWNER).await;
    let app = common::build_test_app(pool);

    let created = common::post_json(
        app.clone(),
        "/api/v1/categories",
        OWNER,
        json!({"name": "Secret", "icon": null, "color": null}),
    )
    .await;
    let id = common::body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = common::put_json(
        app,
        &format!("/api/v1/categories/{id}"),
        OTHER_OWNER,
        json!({"name": "Stolen", "icon": null, "color": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sort_update_reorders_listing(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let created = common::post_json(
        app.clone(),
        "/api/v1/categories",
        OWNER,
        json!({"name": "Work", "icon": null, "color": null}),
    )
    .await;
    let work_id = common::body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = common::put_json(
        app.clone(),
        "/api/v1/categories/sort",
        OWNER,
        json!({"sort_list": [
            {"id": work_id, "sort_order": 0},
            {"id": default_id, "sort_order": 1},
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = common::get(app, "/api/v1/categories", OWNER).await;
    let body = common::body_json(list).await;
    assert_eq!(body["data"][0]["id"].as_i64().unwrap(), work_id);
    assert_eq!(body["data"][1]["id"].as_i64().unwrap(), default_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sort_update_with_foreign_id_rolls_back(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let other_default_id = seed_default(&pool, OTHER_OWNER).await;
    let app = common::build_test_app(pool);

    let response = common::put_json(
        app.clone(),
        "/api/v1/categories/sort",
        OWNER,
        json!({"sort_list": [
            {"id": default_id, "sort_order": 5},
            {"id": other_default_id, "sort_order": 6},
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The whole batch rolled back: the owner's default keeps sort 0.
    let list = common::get(app, "/api/v1/categories", OWNER).await;
    let body = common::body_json(list).await;
    assert_eq!(body["data"][0]["sort_order"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_count_trashed_diaries_excluded(pool: PgPool) {
    let default_id = seed_default(&pool, OWNER).await;
    let app = common::build_test_app(pool);

    let first = common::post_json(
        app.clone(),
        "/api/v1/diaries",
        OWNER,
        json!({"category_id": default_id, "content": "kept", "content_html": null}),
    )
    .await;
    let kept_id = common::body_json(first).await["data"]["id"].as_i64().unwrap();

    let second = common::post_json(
        app.clone(),
        "/api/v1/diaries",
        OWNER,
        json!({"category_id": default_id, "content": "trashed", "content_html": null}),
    )
    .await;
    let trashed_id = common::body_json(second).await["data"]["id"].as_i64().unwrap();

    let deleted =
        common::delete(app.clone(), &format!("/api/v1/diaries/{trashed_id}"), OWNER).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let response = common::get(
        app,
        &format!("/api/v1/categories/{default_id}/stats"),
        OWNER,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["recent_diary"]["id"].as_i64().unwrap(), kept_id);
}
