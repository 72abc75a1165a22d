//! Company repository for registry CRUD operations.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{
    companies,
    sea_orm_active_enums::{CompanyType, Designation, TurnoverRange},
};

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct CreateCompanyInput {
    /// Company name.
    pub name: String,
    /// Business category.
    pub company_type: CompanyType,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact person designation.
    pub designation: Designation,
    /// Contact mobile number.
    pub mobile: String,
    /// Contact email (unique across companies).
    pub email: String,
    /// Street address.
    pub address: String,
    /// Postal code.
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
    /// User who created the record.
    pub created_by: Option<Uuid>,
    /// User who last updated the record.
    pub updated_by: Option<Uuid>,
}

/// Input for updating a company.
///
/// Outer `None` leaves the column untouched; for nullable columns the
/// inner `Option` carries the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyInput {
    /// Company name.
    pub name: Option<String>,
    /// Business category.
    pub company_type: Option<CompanyType>,
    /// Logo URL.
    pub logo_url: Option<Option<String>>,
    /// Primary contact person.
    pub contact_person: Option<String>,
    /// Contact person designation.
    pub designation: Option<Designation>,
    /// Contact mobile number.
    pub mobile: Option<String>,
    /// Contact email.
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
    pub num_employees: Option<Option<i32>>,
    /// Average annual turnover bracket.
    pub avg_annual_turnover: Option<TurnoverRange>,
    /// Year the company was established.
    pub year_established: Option<Option<i32>>,
    /// Registration status.
    pub status: Option<String>,
    /// User who last updated the record.
    pub updated_by: Option<Option<Uuid>>,
}

/// Company repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<companies::Model>, DbErr> {
        companies::Entity::find()
            .order_by_asc(companies::Column::Name)
            .all(&self.db)
            .await
    }

    /// Finds a company by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<companies::Model>, DbErr> {
        companies::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new company.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the company
    /// email collides with an existing row.
    pub async fn create(&self, input: CreateCompanyInput) -> Result<companies::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let company = companies::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            company_type: Set(input.company_type),
            logo_url: Set(input.logo_url),
            contact_person: Set(input.contact_person),
            designation: Set(input.designation),
            mobile: Set(input.mobile),
            email: Set(input.email),
            address: Set(input.address),
            pincode: Set(input.pincode),
            city_id: Set(input.city_id),
            state_id: Set(input.state_id),
            country_id: Set(input.country_id),
            num_employees: Set(input.num_employees),
            avg_annual_turnover: Set(input.avg_annual_turnover),
            year_established: Set(input.year_established),
            status: Set(input.status.unwrap_or_else(|| "active".to_string())),
            created_by: Set(input.created_by),
            updated_by: Set(input.updated_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        company.insert(&self.db).await
    }

    /// Applies a partial update to a company.
    ///
    /// Returns `Ok(None)` when no company with the given ID exists.
    /// Every successful update refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateCompanyInput,
    ) -> Result<Option<companies::Model>, DbErr> {
        let Some(company) = companies::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: companies::ActiveModel = company.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(company_type) = input.company_type {
            active.company_type = Set(company_type);
        }
        if let Some(logo_url) = input.logo_url {
            active.logo_url = Set(logo_url);
        }
        if let Some(contact_person) = input.contact_person {
            active.contact_person = Set(contact_person);
        }
        if let Some(designation) = input.designation {
            active.designation = Set(designation);
        }
        if let Some(mobile) = input.mobile {
            active.mobile = Set(mobile);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(address) = input.address {
            active.address = Set(address);
        }
        if let Some(pincode) = input.pincode {
            active.pincode = Set(pincode);
        }
        if let Some(city_id) = input.city_id {
            active.city_id = Set(city_id);
        }
        if let Some(state_id) = input.state_id {
            active.state_id = Set(state_id);
        }
        if let Some(country_id) = input.country_id {
            active.country_id = Set(country_id);
        }
        if let Some(num_employees) = input.num_employees {
            active.num_employees = Set(num_employees);
        }
        if let Some(avg_annual_turnover) = input.avg_annual_turnover {
            active.avg_annual_turnover = Set(avg_annual_turnover);
        }
        if let Some(year_established) = input.year_established {
            active.year_established = Set(year_established);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(updated_by) = input.updated_by {
            active.updated_by = Set(updated_by);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes a company by ID.
    ///
    /// Returns `true` if a row was deleted. Profiles pointing at the
    /// company keep their row; the foreign key nulls `company_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = companies::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
