//! `stockwise-core`: shared building blocks for the stockwise crates.
//!
//! Identifiers, the `Entity` trait and the domain error model. No IO.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, index_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{EstablishmentId, MovementId, ProductId, SupplierId};
