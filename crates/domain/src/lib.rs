//! # beautycare-domain
//!
//! Pure domain model for the beautycare salon website.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates and times
//! - Define **Services** (the treatments on offer) and **Gallery images**
//! - Define **Slots** (bookable windows) and **Bookings** (reservations)
//! - Define **Career applications** and their skill tags
//! - Compute availability (slots minus already-booked start times)
//! - Category filtering for catalog-style pages
//! - User-facing notifications for form outcomes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod availability;
pub mod booking;
pub mod career;
pub mod category;
pub mod gallery;
pub mod notification;
pub mod salon;
pub mod service;
pub mod slot;
