//! Catalog records for a single establishment: products, suppliers and the
//! stock movements recorded against them.
//!
//! Plain data plus the write-side rules that guard it (validation, recording a
//! movement against current stock). No IO, no storage.

pub mod filter;
pub mod movement;
pub mod product;
mod serde_util;
pub mod supplier;

pub use filter::{MovementFilter, ProductFilter};
pub use movement::{MovementKind, MovementRecord, MovementRecorded, RecordMovement};
pub use product::Product;
pub use supplier::Supplier;
