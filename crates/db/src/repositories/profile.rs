//! Profile repository linking users to companies.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::profiles;

/// Input for updating a profile.
///
/// Outer `None` leaves the column untouched; `company_id: Some(None)`
/// detaches the profile from its company.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    /// Company the user belongs to.
    pub company_id: Option<Option<Uuid>>,
    /// How the account was provisioned.
    pub login_type: Option<String>,
}

/// Profile repository keyed by user.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    db: DatabaseConnection,
}

impl ProfileRepository {
    /// Creates a new profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the profile for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<profiles::Model>, DbErr> {
        profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Creates a profile for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the user
    /// already has a profile.
    pub async fn create(
        &self,
        user_id: Uuid,
        company_id: Option<Uuid>,
        login_type: Option<&str>,
    ) -> Result<profiles::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let profile = profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            company_id: Set(company_id),
            login_type: Set(login_type.unwrap_or("manual").to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        profile.insert(&self.db).await
    }

    /// Applies a partial update to the profile of a user.
    ///
    /// Returns `Ok(None)` when the user has no profile. Every successful
    /// update refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update_by_user(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<Option<profiles::Model>, DbErr> {
        let Some(profile) = self.find_by_user(user_id).await? else {
            return Ok(None);
        };

        let mut active: profiles::ActiveModel = profile.into();

        if let Some(company_id) = input.company_id {
            active.company_id = Set(company_id);
        }
        if let Some(login_type) = input.login_type {
            active.login_type = Set(login_type);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }
}
