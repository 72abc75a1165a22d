//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod company;
pub mod location;
pub mod profile;
pub mod session;
pub mod user;
pub mod user_role;

pub use company::{CompanyRepository, CreateCompanyInput, UpdateCompanyInput};
pub use location::LocationRepository;
pub use profile::{ProfileRepository, UpdateProfileInput};
pub use session::SessionRepository;
pub use user::UserRepository;
pub use user_role::UserRoleRepository;
