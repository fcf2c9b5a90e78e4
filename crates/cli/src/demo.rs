//! Scripted walkthrough exercising every inventory operation.

use std::io::Write;

use anyhow::{Context, Result};

use satchel_core::TableOrder;
use satchel_inventory::{
    Inventory, export_inventory, import_inventory_to, write_inventory, write_table,
};

use crate::config::DemoConfig;

pub const STARTING_INVENTORY: [(&str, i64); 5] = [
    ("rope", 1),
    ("torch", 6),
    ("gold coin", 42),
    ("dagger", 1),
    ("arrow", 12),
];

pub const DRAGON_LOOT: [&str; 5] = ["gold coin", "dagger", "gold coin", "gold coin", "ruby"];

/// Run the walkthrough, writing every listing and table to `out`.
///
/// Returns the inventory that was imported (and exported).
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<Inventory> {
    let desc = Some(TableOrder::DESCENDING_TOKEN);
    let asc = Some(TableOrder::ASCENDING_TOKEN);

    let mut inv: Inventory = STARTING_INVENTORY.into_iter().collect();
    write_table(out, &inv, None)?;

    inv.add(DRAGON_LOOT);
    write_inventory(out, &inv)?;
    write_table(out, &inv, desc)?;

    inv.remove(DRAGON_LOOT);
    write_table(out, &inv, asc)?;

    inv.rename_item("gold coin", "red coin");
    write_table(out, &inv, desc)?;

    inv.set_item_value("red coin", 200);
    write_table(out, &inv, desc)?;
    tracing::debug!(items = inv.len(), total = inv.total(), "walkthrough mutations done");

    let mut imported = Inventory::new();
    import_inventory_to(out, &mut imported, &config.import_path).with_context(|| {
        format!("failed to import {}", config.import_path.display())
    })?;
    write_table(out, &imported, asc)?;

    export_inventory(&imported, &config.export_path).with_context(|| {
        format!("failed to export {}", config.export_path.display())
    })?;

    Ok(imported)
}
