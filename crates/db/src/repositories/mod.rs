//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod destination_repo;

pub use account_repo::AccountRepo;
pub use destination_repo::DestinationRepo;
