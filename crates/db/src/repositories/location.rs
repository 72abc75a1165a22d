//! Location repository for the country/state/city reference tables.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{cities, countries, states};

/// Read-only repository over the location reference tables.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    db: DatabaseConnection,
}

impl LocationRepository {
    /// Creates a new location repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn countries(&self) -> Result<Vec<countries::Model>, DbErr> {
        countries::Entity::find()
            .order_by_asc(countries::Column::Name)
            .all(&self.db)
            .await
    }

    /// Lists the states of a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn states_by_country(&self, country_id: Uuid) -> Result<Vec<states::Model>, DbErr> {
        states::Entity::find()
            .filter(states::Column::CountryId.eq(country_id))
            .order_by_asc(states::Column::Name)
            .all(&self.db)
            .await
    }

    /// Lists the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn cities_by_state(&self, state_id: Uuid) -> Result<Vec<cities::Model>, DbErr> {
        cities::Entity::find()
            .filter(cities::Column::StateId.eq(state_id))
            .order_by_asc(cities::Column::Name)
            .all(&self.db)
            .await
    }
}
