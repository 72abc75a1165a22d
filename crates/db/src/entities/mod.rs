//! `SeaORM` entity definitions.
//!
//! Wire-facing entities (locations, companies, profiles, user roles)
//! serialize with camelCase keys; users and sessions never leave the
//! server as whole rows and carry no serde derives.

pub mod cities;
pub mod companies;
pub mod countries;
pub mod profiles;
pub mod sea_orm_active_enums;
pub mod sessions;
pub mod states;
pub mod user_roles;
pub mod users;
