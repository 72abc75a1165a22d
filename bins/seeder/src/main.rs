//! Database seeder for Nirmaan development and testing.
//!
//! Seeds the location reference data (countries, states, cities) that the
//! registration forms depend on. Safe to run repeatedly; rows that already
//! exist are skipped.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use nirmaan_db::entities::{cities, countries, states};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = nirmaan_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding countries...");
    let india = seed_country(&db, "India", "IN").await;
    seed_country(&db, "United States", "US").await;
    seed_country(&db, "United Kingdom", "GB").await;

    let Some(india) = india else {
        eprintln!("Country seed failed, skipping states and cities");
        return;
    };

    println!("Seeding states...");
    let maharashtra = seed_state(&db, "Maharashtra", india.id).await;
    let karnataka = seed_state(&db, "Karnataka", india.id).await;
    let delhi = seed_state(&db, "Delhi", india.id).await;
    let tamil_nadu = seed_state(&db, "Tamil Nadu", india.id).await;

    println!("Seeding cities...");
    if let Some(maharashtra) = maharashtra {
        seed_city(&db, "Mumbai", maharashtra.id).await;
        seed_city(&db, "Pune", maharashtra.id).await;
    }
    if let Some(karnataka) = karnataka {
        seed_city(&db, "Bangalore", karnataka.id).await;
    }
    if let Some(delhi) = delhi {
        seed_city(&db, "New Delhi", delhi.id).await;
    }
    if let Some(tamil_nadu) = tamil_nadu {
        seed_city(&db, "Chennai", tamil_nadu.id).await;
    }

    println!("Seeding complete!");
}

/// Seeds one country, keyed by its ISO code.
async fn seed_country(db: &DatabaseConnection, name: &str, code: &str) -> Option<countries::Model> {
    match countries::Entity::find()
        .filter(countries::Column::Code.eq(code))
        .one(db)
        .await
    {
        Ok(Some(existing)) => {
            println!("  Country {name} already exists, skipping...");
            Some(existing)
        }
        Ok(None) => {
            let country = countries::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                code: Set(code.to_string()),
                created_at: Set(Utc::now().into()),
            };
            match country.insert(db).await {
                Ok(created) => {
                    println!("  Created country: {name}");
                    Some(created)
                }
                Err(e) => {
                    eprintln!("Failed to insert country {name}: {e}");
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to look up country {name}: {e}");
            None
        }
    }
}

/// Seeds one state under a country, keyed by name.
async fn seed_state(db: &DatabaseConnection, name: &str, country_id: Uuid) -> Option<states::Model> {
    match states::Entity::find()
        .filter(states::Column::Name.eq(name))
        .filter(states::Column::CountryId.eq(country_id))
        .one(db)
        .await
    {
        Ok(Some(existing)) => {
            println!("  State {name} already exists, skipping...");
            Some(existing)
        }
        Ok(None) => {
            let state = states::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                country_id: Set(country_id),
                created_at: Set(Utc::now().into()),
            };
            match state.insert(db).await {
                Ok(created) => {
                    println!("  Created state: {name}");
                    Some(created)
                }
                Err(e) => {
                    eprintln!("Failed to insert state {name}: {e}");
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to look up state {name}: {e}");
            None
        }
    }
}

/// Seeds one city under a state, keyed by name.
async fn seed_city(db: &DatabaseConnection, name: &str, state_id: Uuid) {
    match cities::Entity::find()
        .filter(cities::Column::Name.eq(name))
        .filter(cities::Column::StateId.eq(state_id))
        .one(db)
        .await
    {
        Ok(Some(_)) => println!("  City {name} already exists, skipping..."),
        Ok(None) => {
            let city = cities::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                state_id: Set(state_id),
                created_at: Set(Utc::now().into()),
            };
            match city.insert(db).await {
                Ok(_) => println!("  Created city: {name}"),
                Err(e) => eprintln!("Failed to insert city {name}: {e}"),
            }
        }
        Err(e) => eprintln!("Failed to look up city {name}: {e}"),
    }
}
