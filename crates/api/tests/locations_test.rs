//! Location reference endpoint tests over a mocked database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use nirmaan_db::entities::{cities, countries, states};

mod common;
use common::*;

fn country_row(name: &str, code: &str) -> countries::Model {
    countries::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        code: code.to_string(),
        created_at: Utc::now().into(),
    }
}

fn state_row(name: &str, country_id: Uuid) -> states::Model {
    states::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        country_id,
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_list_countries() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            country_row("India", "IN"),
            country_row("United States", "US"),
        ]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/countries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    let countries = json.as_array().expect("list response should be an array");
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0]["name"], "India");
    assert_eq!(countries[0]["code"], "IN");
}

#[tokio::test]
async fn test_list_states_for_country() {
    let country_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            state_row("Karnataka", country_id),
            state_row("Maharashtra", country_id),
        ]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/states/{country_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json[0]["name"], "Karnataka");
    assert_eq!(json[0]["countryId"], country_id.to_string());
}

#[tokio::test]
async fn test_list_cities_for_unknown_state_is_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<cities::Model>::new()])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/cities/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, Value::Array(vec![]));
}

#[tokio::test]
async fn test_rejects_malformed_uuid_param() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/states/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
