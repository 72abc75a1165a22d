//! Postgres enum types shared by the entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of company registered on the platform.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "company_type_enum")]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    #[sea_orm(string_value = "contractor")]
    Contractor,
    #[sea_orm(string_value = "builder")]
    Builder,
    #[sea_orm(string_value = "developer")]
    Developer,
    #[sea_orm(string_value = "supplier")]
    Supplier,
}

/// Designation of the company contact person.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "designation_enum")]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    #[sea_orm(string_value = "owner")]
    Owner,
    #[sea_orm(string_value = "director")]
    Director,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "engineer")]
    Engineer,
}

/// Average annual turnover bracket, in crore rupees.
///
/// The wire values start with digits, so serde renames are spelled out
/// instead of derived from the variant names.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "turnover_range_enum")]
pub enum TurnoverRange {
    #[sea_orm(string_value = "below_1cr")]
    #[serde(rename = "below_1cr")]
    Below1Cr,
    #[sea_orm(string_value = "1cr_to_10cr")]
    #[serde(rename = "1cr_to_10cr")]
    From1CrTo10Cr,
    #[sea_orm(string_value = "10cr_to_50cr")]
    #[serde(rename = "10cr_to_50cr")]
    From10CrTo50Cr,
    #[sea_orm(string_value = "above_50cr")]
    #[serde(rename = "above_50cr")]
    Above50Cr,
}

/// Role assigned to a user account.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_enum")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "company_user")]
    CompanyUser,
}
