//! Company registry CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use sea_orm::SqlErr;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::error::error_response;
use crate::extractors::ValidatedJson;
use nirmaan_db::{
    CompanyRepository, CreateCompanyInput, UpdateCompanyInput,
    entities::sea_orm_active_enums::{CompanyType, Designation, TurnoverRange},
};
use nirmaan_shared::AppError;

/// Creates the company registry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{id}",
            get(get_company).patch(update_company).delete(delete_company),
        )
}

/// Request body for registering a company.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    /// Company name.
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    /// Business category.
    pub company_type: CompanyType,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Primary contact person.
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,
    /// Contact person designation.
    pub designation: Designation,
    /// Contact mobile number.
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    /// Contact email (unique across companies).
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// Postal code.
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
    /// City reference.
    pub city_id: Uuid,
    /// State reference.
    pub state_id: Uuid,
    /// Country reference.
    pub country_id: Uuid,
    /// Employee head count.
    pub num_employees: Option<i32>,
    /// Average annual turnover bracket.
    pub avg_annual_turnover: TurnoverRange,
    /// Year the company was established.
    pub year_established: Option<i32>,
    /// Registration status (defaults to "active").
    pub status: Option<String>,
    /// User registering the company.
    pub created_by: Option<Uuid>,
    /// User last touching the record.
    pub updated_by: Option<Uuid>,
}

/// Request body for partially updating a company.
///
/// Absent fields stay untouched. Nullable columns cannot be cleared
/// through this endpoint, only overwritten.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    /// Company name.
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: Option<String>,
    /// Business category.
    pub company_type: Option<CompanyType>,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Primary contact person.
    pub contact_person: Option<String>,
    /// Contact person designation.
    pub designation: Option<Designation>,
    /// Contact mobile number.
    pub mobile: Option<String>,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// City reference.
    pub city_id: Option<Uuid>,
    /// State reference.
    pub state_id: Option<Uuid>,
    /// Country reference.
    pub country_id: Option<Uuid>,
    /// Employee head count.
    pub num_employees: Option<i32>,
    /// Average annual turnover bracket.
    pub avg_annual_turnover: Option<TurnoverRange>,
    /// Year the company was established.
    pub year_established: Option<i32>,
    /// Registration status.
    pub status: Option<String>,
    /// User applying the update.
    pub updated_by: Option<Uuid>,
}

/// GET `/companies` - List all companies.
async fn list_companies(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(companies) => (StatusCode::OK, Json(companies)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list companies");
            error_response(&AppError::Database("Failed to fetch companies".to_string()))
                .into_response()
        }
    }
}

/// GET `/companies/{id}` - Fetch a single company.
async fn get_company(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(company)) => (StatusCode::OK, Json(company)).into_response(),
        Ok(None) => error_response(&AppError::NotFound("Company not found".to_string()))
            .into_response(),
        Err(e) => {
            error!(error = %e, company_id = %id, "Failed to fetch company");
            error_response(&AppError::Database("Failed to fetch company".to_string()))
                .into_response()
        }
    }
}

/// POST `/companies` - Register a company.
async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompanyRequest>,
) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    let input = CreateCompanyInput {
        name: payload.name,
        company_type: payload.company_type,
        logo_url: payload.logo_url,
        contact_person: payload.contact_person,
        designation: payload.designation,
        mobile: payload.mobile,
        email: payload.email,
        address: payload.address,
        pincode: payload.pincode,
        city_id: payload.city_id,
        state_id: payload.state_id,
        country_id: payload.country_id,
        num_employees: payload.num_employees,
        avg_annual_turnover: payload.avg_annual_turnover,
        year_established: payload.year_established,
        status: payload.status,
        created_by: payload.created_by,
        updated_by: payload.updated_by,
    };

    match repo.create(input).await {
        Ok(company) => {
            info!(company_id = %company.id, name = %company.name, "Company registered");
            (StatusCode::CREATED, Json(company)).into_response()
        }
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => error_response(&AppError::Conflict(
                "Company email already exists".to_string(),
            ))
            .into_response(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => error_response(
                &AppError::Validation("Unknown location reference".to_string()),
            )
            .into_response(),
            _ => {
                error!(error = %e, "Failed to create company");
                error_response(&AppError::Database("Failed to create company".to_string()))
                    .into_response()
            }
        },
    }
}

/// PATCH `/companies/{id}` - Partially update a company.
async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCompanyRequest>,
) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    let input = UpdateCompanyInput {
        name: payload.name,
        company_type: payload.company_type,
        logo_url: payload.logo_url.map(Some),
        contact_person: payload.contact_person,
        designation: payload.designation,
        mobile: payload.mobile,
        email: payload.email,
        address: payload.address,
        pincode: payload.pincode,
        city_id: payload.city_id,
        state_id: payload.state_id,
        country_id: payload.country_id,
        num_employees: payload.num_employees.map(Some),
        avg_annual_turnover: payload.avg_annual_turnover,
        year_established: payload.year_established.map(Some),
        status: payload.status,
        updated_by: payload.updated_by.map(Some),
    };

    match repo.update(id, input).await {
        Ok(Some(company)) => {
            info!(company_id = %company.id, "Company updated");
            (StatusCode::OK, Json(company)).into_response()
        }
        Ok(None) => error_response(&AppError::NotFound("Company not found".to_string()))
            .into_response(),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => error_response(&AppError::Conflict(
                "Company email already exists".to_string(),
            ))
            .into_response(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => error_response(
                &AppError::Validation("Unknown location reference".to_string()),
            )
            .into_response(),
            _ => {
                error!(error = %e, company_id = %id, "Failed to update company");
                error_response(&AppError::Database("Failed to update company".to_string()))
                    .into_response()
            }
        },
    }
}

/// DELETE `/companies/{id}` - Remove a company.
async fn delete_company(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(true) => {
            info!(company_id = %id, "Company deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error_response(&AppError::NotFound("Company not found".to_string()))
            .into_response(),
        Err(e) => {
            error!(error = %e, company_id = %id, "Failed to delete company");
            error_response(&AppError::Database("Failed to delete company".to_string()))
                .into_response()
        }
    }
}
