//! `satchel-core` — shared building blocks for the inventory manager.
//!
//! This crate holds the error taxonomy and small value types used by the
//! inventory crate and the command-line driver. No IO happens here.

pub mod error;
pub mod order;

pub use error::{InventoryError, InventoryResult};
pub use order::TableOrder;
