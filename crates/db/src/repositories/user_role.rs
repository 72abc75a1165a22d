//! User role repository for access level assignments.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::UserRole, user_roles};

/// User role repository.
#[derive(Debug, Clone)]
pub struct UserRoleRepository {
    db: DatabaseConnection,
}

impl UserRoleRepository {
    /// Creates a new user role repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the role assignment for a user.
    ///
    /// A user may carry several assignments; the first row wins, matching
    /// how the session endpoint reports the effective role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<user_roles::Model>, DbErr> {
        user_roles::Entity::find()
            .filter(user_roles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// Creates a role assignment for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        role: Option<UserRole>,
    ) -> Result<user_roles::Model, DbErr> {
        let assignment = user_roles::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            role: Set(role.unwrap_or(UserRole::CompanyUser)),
            created_at: Set(chrono::Utc::now().into()),
        };

        assignment.insert(&self.db).await
    }
}
