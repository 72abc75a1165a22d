//! Session repository for database operations.
//!
//! Sessions back the `session_token` cookie: the raw token travels only
//! in the cookie, the table stores its SHA-256 hash. A user has at most
//! one live session; sign-in deletes the previous ones.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::entities::sessions;

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates a random session token.
    #[must_use]
    pub fn generate_token() -> String {
        // Generate a URL-safe random token
        let bytes: [u8; 32] = rand::random();
        base64_url::encode(&bytes)
    }

    /// Hashes a session token for storage.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Creates a new session for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<sessions::Model, DbErr> {
        let session = sessions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(Self::hash_token(token)),
            expires_at: Set(expires_at.into()),
            created_at: Set(chrono::Utc::now().into()),
        };

        session.insert(&self.db).await
    }

    /// Finds the unexpired session matching a token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_valid_by_token(
        &self,
        token: &str,
    ) -> Result<Option<sessions::Model>, DbErr> {
        let token_hash = Self::hash_token(token);

        sessions::Entity::find()
            .filter(sessions::Column::TokenHash.eq(token_hash))
            .filter(sessions::Column::ExpiresAt.gt(chrono::Utc::now()))
            .one(&self.db)
            .await
    }

    /// Deletes the session matching a token. Returns whether a row was
    /// removed; a stale or fabricated token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_by_token(&self, token: &str) -> Result<bool, DbErr> {
        let token_hash = Self::hash_token(token);

        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::TokenHash.eq(token_hash))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every session belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_for_user(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes expired sessions (for maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::ExpiresAt.lt(chrono::Utc::now()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_deterministic() {
        let hash1 = SessionRepository::hash_token("test_token");
        let hash2 = SessionRepository::hash_token("test_token");
        assert_eq!(hash1, hash2);

        let hash3 = SessionRepository::hash_token("different_token");
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = SessionRepository::hash_token("anything");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_token_is_unique_and_url_safe() {
        let token1 = SessionRepository::generate_token();
        let token2 = SessionRepository::generate_token();

        assert_ne!(token1, token2);
        assert!(
            token1
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
