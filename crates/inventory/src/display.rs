//! Plain inventory listing.

use std::io::{self, Write};

use satchel_core::{InventoryError, InventoryResult};

use crate::inventory::Inventory;

/// Write `Inventory:`, one `<count> <name>` line per entry in insertion
/// order, and the total.
pub fn write_inventory<W: Write>(out: &mut W, inventory: &Inventory) -> InventoryResult<()> {
    let mut listing = String::from("Inventory:\n");
    for (name, count) in inventory.iter() {
        listing.push_str(&format!("{count} {name}\n"));
    }
    listing.push_str(&format!("Total number of items: {}\n", inventory.total()));

    out.write_all(listing.as_bytes())
        .map_err(InventoryError::stream)
}

/// Print the listing to standard output.
pub fn display_inventory(inventory: &Inventory) -> InventoryResult<()> {
    write_inventory(&mut io::stdout().lock(), inventory)
}
