//! Inventory domain module.
//!
//! An [`Inventory`] maps item names to counts. Mutators are total and never
//! touch IO; the listing, table and CSV transfer modules are the only places
//! that write to a stream or the filesystem.

pub mod display;
pub mod inventory;
pub mod table;
pub mod transfer;

pub use display::{display_inventory, write_inventory};
pub use inventory::Inventory;
pub use table::{print_table, render_table, write_table};
pub use transfer::{
    DEFAULT_EXPORT_FILE, DEFAULT_IMPORT_FILE, export_inventory, import_inventory,
    import_inventory_to,
};

pub use satchel_core::{InventoryError, InventoryResult, TableOrder};
