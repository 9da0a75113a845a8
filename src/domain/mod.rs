//! Domain layer containing the URL mapping entity, the store contracts and
//! their error taxonomy.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store capability traits
//! - [`error`] - [`error::StoreError`], returned by every store implementation
//!
//! The domain layer has no dependency on the HTTP or persistence layers.
//! Store implementations translate driver-specific signals (such as a
//! unique-constraint violation) into [`error::StoreError`] at their boundary.

pub mod entities;
pub mod error;
pub mod repositories;
