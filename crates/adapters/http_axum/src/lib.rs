//! # beautycare-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **salon website** as server-side rendered HTML that works
//!   with **zero JavaScript**: marketing pages, the services catalog, the
//!   gallery, and the booking and careers forms.
//! - Serve a small **JSON API** under `/api` for programmatic access
//!   (`/api/services`, `/api/availability`, `/api/bookings`, …).
//! - Map HTTP requests into application service calls (driving adapter)
//!   and application results into HTTP responses (JSON or HTML).
//!
//! ## No-JS approach
//! - Category chips are plain links carrying `?category=`.
//! - The booking form picks a date with a GET form, which reloads the page
//!   with the open windows for that date.
//! - Forms POST back and redirect on success (PRG pattern); failures
//!   re-render the form with the submitted values and a toast.
//! - The gallery lightbox is a `:target` CSS overlay.
//!
//! ## Dependency rule
//! Depends on `beautycare-app` (ports and services) and `beautycare-domain`
//! (types used in request/response mapping). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod forms;
pub mod pages;
pub mod router;
pub mod state;
