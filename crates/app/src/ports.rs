//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the remote
//! datastore. They are defined here (in `app`) so that both the use-case
//! layer and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod careers;
pub mod catalog;
pub mod scheduling;

pub use careers::CareerApplicationRepository;
pub use catalog::{GalleryRepository, ServiceRepository};
pub use scheduling::{BookingRepository, SlotRepository};
