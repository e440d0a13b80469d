//! HTTP-level integration tests for the goal area endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_anon, patch_json, patch_json_as, OTHER_USER};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing / provisioning
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn first_access_provisions_the_seven_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/goal-areas").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["success"], true);
    let areas = json["data"].as_array().unwrap();
    assert_eq!(areas.len(), 7);

    // Sorted by sort_order, with the registry defaults applied.
    assert_eq!(areas[0]["id"], "physical_health");
    assert_eq!(areas[0]["displayName"], "Physical Health");
    assert_eq!(areas[0]["weeklyMinWins"], 4);
    assert_eq!(areas[0]["emoji"], "💪");
    assert_eq!(areas[6]["id"], "content_newsletter");
    assert_eq!(areas[6]["weeklyMinWins"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_twice_does_not_duplicate_areas(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    get(app, "/api/goal-areas").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/goal-areas").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_requires_user_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_anon(app, "/api/goal-areas").await;
    common::assert_error_envelope(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_updates_only_the_sent_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    get(app, "/api/goal-areas").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/goal-areas/physical_health",
        serde_json::json!({ "weeklyMinWins": 6, "intentionText": "Ride every morning" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["weeklyMinWins"], 6);
    assert_eq!(json["data"]["intentionText"], "Ride every morning");
    // Untouched fields keep their defaults.
    assert_eq!(json["data"]["displayName"], "Physical Health");
    assert_eq!(json["data"]["emoji"], "💪");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_survives_a_later_listing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    get(app, "/api/goal-areas").await;

    let app = common::build_test_app(pool.clone());
    patch_json(
        app,
        "/api/goal-areas/content_newsletter",
        serde_json::json!({ "weeklyMinWins": 2 }),
    )
    .await;

    // Re-listing re-runs provisioning, which must not clobber the edit.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/goal-areas").await).await;
    let newsletter = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == "content_newsletter")
        .unwrap()
        .clone();
    assert_eq!(newsletter["weeklyMinWins"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_out_of_range_target_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    get(app, "/api/goal-areas").await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/goal-areas/physical_health",
        serde_json::json!({ "weeklyMinWins": 50 }),
    )
    .await;

    common::assert_error_envelope(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_for_unprovisioned_user_is_404(pool: PgPool) {
    // OTHER_USER never listed their goal areas, so there is no row.
    let app = common::build_test_app(pool);
    let response = patch_json_as(
        app,
        "/api/goal-areas/physical_health",
        OTHER_USER,
        serde_json::json!({ "weeklyMinWins": 2 }),
    )
    .await;

    common::assert_error_envelope(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_unknown_area_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/goal-areas/side_quests",
        serde_json::json!({ "weeklyMinWins": 2 }),
    )
    .await;

    // The id is a closed enumeration; an unknown value fails path parsing.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
