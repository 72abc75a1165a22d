//! Initial database migration.
//!
//! Creates the enums, location reference tables, users, companies,
//! profiles, and user_roles.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: USERS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: LOCATION REFERENCE DATA
        // ============================================================
        db.execute_unprepared(COUNTRIES_SQL).await?;
        db.execute_unprepared(STATES_SQL).await?;
        db.execute_unprepared(CITIES_SQL).await?;

        // ============================================================
        // PART 4: COMPANY REGISTRY
        // ============================================================
        db.execute_unprepared(COMPANIES_SQL).await?;

        // ============================================================
        // PART 5: PROFILES & ROLES
        // ============================================================
        db.execute_unprepared(PROFILES_SQL).await?;
        db.execute_unprepared(USER_ROLES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Kind of company registered on the platform
CREATE TYPE company_type_enum AS ENUM (
    'contractor',
    'builder',
    'developer',
    'supplier'
);

-- Designation of the company contact person
CREATE TYPE designation_enum AS ENUM (
    'owner',
    'director',
    'manager',
    'engineer'
);

-- Average annual turnover bracket (crore rupees)
CREATE TYPE turnover_range_enum AS ENUM (
    'below_1cr',
    '1cr_to_10cr',
    '10cr_to_50cr',
    'above_50cr'
);

-- User roles
CREATE TYPE user_role_enum AS ENUM (
    'admin',
    'company_user'
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const COUNTRIES_SQL: &str = r"
CREATE TABLE countries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL UNIQUE,
    code VARCHAR(10) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const STATES_SQL: &str = r"
CREATE TABLE states (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL,
    country_id UUID NOT NULL REFERENCES countries(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_states_country ON states(country_id);
";

const CITIES_SQL: &str = r"
CREATE TABLE cities (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL,
    state_id UUID NOT NULL REFERENCES states(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_cities_state ON cities(state_id);
";

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    company_type company_type_enum NOT NULL,
    logo_url TEXT,
    contact_person VARCHAR(255) NOT NULL,
    designation designation_enum NOT NULL,
    mobile VARCHAR(20) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    address TEXT NOT NULL,
    pincode VARCHAR(20) NOT NULL,
    city_id UUID NOT NULL REFERENCES cities(id),
    state_id UUID NOT NULL REFERENCES states(id),
    country_id UUID NOT NULL REFERENCES countries(id),
    num_employees INTEGER,
    avg_annual_turnover turnover_range_enum NOT NULL,
    year_established INTEGER,
    status VARCHAR(20) NOT NULL DEFAULT 'active',
    created_by UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_by UUID,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_companies_city ON companies(city_id);
CREATE INDEX idx_companies_state ON companies(state_id);
CREATE INDEX idx_companies_country ON companies(country_id);
CREATE INDEX idx_companies_type ON companies(company_type);
";

const PROFILES_SQL: &str = r"
CREATE TABLE profiles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
    company_id UUID REFERENCES companies(id) ON DELETE SET NULL,
    login_type VARCHAR(50) NOT NULL DEFAULT 'manual',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_profiles_company ON profiles(company_id) WHERE company_id IS NOT NULL;
";

const USER_ROLES_SQL: &str = r"
CREATE TABLE user_roles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    role user_role_enum NOT NULL DEFAULT 'company_user',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_user_roles_user ON user_roles(user_id);
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL: Rollback migration
-- Order matters due to foreign key constraints
-- ============================================================

DROP TABLE IF EXISTS user_roles CASCADE;
DROP TABLE IF EXISTS profiles CASCADE;
DROP TABLE IF EXISTS companies CASCADE;
DROP TABLE IF EXISTS cities CASCADE;
DROP TABLE IF EXISTS states CASCADE;
DROP TABLE IF EXISTS countries CASCADE;
DROP TABLE IF EXISTS users CASCADE;

DROP TYPE IF EXISTS user_role_enum CASCADE;
DROP TYPE IF EXISTS turnover_range_enum CASCADE;
DROP TYPE IF EXISTS designation_enum CASCADE;
DROP TYPE IF EXISTS company_type_enum CASCADE;
";
