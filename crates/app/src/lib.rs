//! # beautycare-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that datastore adapters must implement:
//!   - `ServiceRepository`: read the treatment catalog
//!   - `GalleryRepository`: read portfolio images
//!   - `SlotRepository`: read configured bookable windows
//!   - `BookingRepository`: read a day's bookings, insert a booking
//!   - `CareerApplicationRepository`: insert a candidate application
//! - Define **use-case services** driven by the HTTP adapter:
//!   - `CatalogService`, `GalleryService`: load and filter
//!   - `AvailabilityService`: compute free windows, reserve one
//!   - `BookingService`, `CareerService`: validate and persist forms
//! - Make read failures explicit (`ReadOutcome`) and echo the caller's
//!   request sequence on availability lookups
//!
//! ## Dependency rule
//! Depends on `beautycare-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod outcome;
pub mod ports;
pub mod services;
