//! # beautycare-adapter-datastore-rest
//!
//! Talks to the hosted datastore the salon site was originally built on:
//! a PostgREST-style API where each table lives at `{url}/{table}` and rows
//! are filtered with query parameters such as `slot_date=eq.2024-06-01`.
//!
//! ## Responsibilities
//! - Implement the datastore port traits defined in `beautycare-app::ports`
//! - Authenticate every request with the project's public API key
//! - Map between the JSON rows the API returns and domain types
//! - Report a unique-constraint rejection on `bookings` as a conflict
//!
//! ## Dependency rule
//! Depends on `beautycare-app` (for port traits) and `beautycare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod careers;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod scheduling;

mod rows;

pub use client::RestClient;
pub use config::RestConfig;
