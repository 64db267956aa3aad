//! # beautycare-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the datastore port traits defined in `beautycare-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Optionally seed a demo catalog for local development
//!
//! The `bookings` table carries `UNIQUE(booking_date, booking_time)`, so a
//! second booking for the same window fails as a conflict even when two
//! submissions race past the availability check.
//!
//! ## Dependency rule
//! Depends on `beautycare-app` (for port traits) and `beautycare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod booking_repo;
pub mod career_repo;
pub mod error;
pub mod gallery_repo;
pub mod pool;
pub mod seed;
pub mod service_repo;
pub mod slot_repo;

mod row;
