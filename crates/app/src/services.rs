//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod availability_service;
pub mod booking_service;
pub mod career_service;
pub mod catalog_service;
pub mod gallery_service;
