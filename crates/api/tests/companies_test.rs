//! Company registry endpoint tests over a mocked database.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use nirmaan_db::entities::companies;
use nirmaan_db::entities::sea_orm_active_enums::{CompanyType, Designation, TurnoverRange};

mod common;
use common::*;

fn company_row(name: &str, email: &str) -> companies::Model {
    companies::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        company_type: CompanyType::Builder,
        logo_url: None,
        contact_person: "Asha Rao".to_string(),
        designation: Designation::Director,
        mobile: "+91-9876543210".to_string(),
        email: email.to_string(),
        address: "12 MG Road".to_string(),
        pincode: "560001".to_string(),
        city_id: Uuid::new_v4(),
        state_id: Uuid::new_v4(),
        country_id: Uuid::new_v4(),
        num_employees: Some(40),
        avg_annual_turnover: TurnoverRange::From1CrTo10Cr,
        year_established: Some(2015),
        status: "active".to_string(),
        created_by: None,
        created_at: Utc::now().into(),
        updated_by: None,
        updated_at: Utc::now().into(),
    }
}

fn create_payload() -> Value {
    json!({
        "name": "Shakti Constructions",
        "companyType": "builder",
        "contactPerson": "Asha Rao",
        "designation": "director",
        "mobile": "+91-9876543210",
        "email": "contact@shakti.example.com",
        "address": "12 MG Road",
        "pincode": "560001",
        "cityId": Uuid::new_v4(),
        "stateId": Uuid::new_v4(),
        "countryId": Uuid::new_v4(),
        "numEmployees": 40,
        "avgAnnualTurnover": "1cr_to_10cr",
        "yearEstablished": 2015
    })
}

#[tokio::test]
async fn test_list_companies() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            company_row("Aarav Builders", "office@aarav.example.com"),
            company_row("Shakti Constructions", "contact@shakti.example.com"),
        ]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    let companies = json.as_array().expect("list response should be an array");
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0]["name"], "Aarav Builders");
    assert_eq!(companies[0]["companyType"], "builder");
    assert_eq!(companies[0]["avgAnnualTurnover"], "1cr_to_10cr");
}

#[tokio::test]
async fn test_list_companies_database_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Failed to fetch companies");
}

#[tokio::test]
async fn test_get_company() {
    let company = company_row("Shakti Constructions", "contact@shakti.example.com");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[company.clone()]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", company.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], company.id.to_string());
    assert_eq!(json["contactPerson"], "Asha Rao");
}

#[tokio::test]
async fn test_get_company_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Company not found");
}

#[tokio::test]
async fn test_create_company() {
    let company = company_row("Shakti Constructions", "contact@shakti.example.com");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[company.clone()]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .method(Method::POST)
                .header("content-type", "application/json")
                .body(Body::from(create_payload().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Shakti Constructions");
    assert_eq!(json["status"], "active");
}

#[tokio::test]
async fn test_create_company_requires_name() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = app_with(db);

    let mut payload = create_payload();
    payload["name"] = json!("");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .method(Method::POST)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Company name is required");
}

#[tokio::test]
async fn test_create_company_rejects_invalid_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let app = app_with(db);

    let mut payload = create_payload();
    payload["email"] = json!("not-an-email");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .method(Method::POST)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Invalid email address");
}

#[tokio::test]
async fn test_update_company() {
    let existing = company_row("Shakti Constructions", "contact@shakti.example.com");
    let mut updated = existing.clone();
    updated.name = "Shakti Infra".to_string();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing.clone()], vec![updated]])
        .into_connection();
    let app = app_with(db);

    let payload = json!({ "name": "Shakti Infra" });
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", existing.id))
                .method(Method::PATCH)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "Shakti Infra");
    assert_eq!(json["email"], "contact@shakti.example.com");
}

#[tokio::test]
async fn test_update_company_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();
    let app = app_with(db);

    let payload = json!({ "name": "Shakti Infra" });
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", Uuid::new_v4()))
                .method(Method::PATCH)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Company not found");
}

#[tokio::test]
async fn test_delete_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", Uuid::new_v4()))
                .method(Method::DELETE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = extract_body(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_company_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{}", Uuid::new_v4()))
                .method(Method::DELETE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_body(response).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Company not found");
}
