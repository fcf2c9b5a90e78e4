//! Right-justified inventory table.

use std::io::{self, Write};

use satchel_core::{InventoryError, InventoryResult, TableOrder};

use crate::inventory::Inventory;

const TITLE: &str = "Inventory:";
const COUNT_LABEL: &str = "count";
const NAME_LABEL: &str = "item name";
/// Extra left padding of the name column.
const NAME_PADDING: usize = 3;
/// Separator length beyond the two column widths (column gap + name padding).
const RULE_EXTRA: usize = 4;

/// Render the table for an already-validated order.
///
/// Each column is as wide as its label or its longest value, whichever is
/// larger. Sorting works on a snapshot and is stable for equal counts.
pub fn render_table(inventory: &Inventory, order: TableOrder) -> String {
    let mut rows: Vec<(&str, i64)> = inventory.iter().collect();
    match order {
        TableOrder::Unordered => {}
        TableOrder::CountAscending => rows.sort_by_key(|&(_, count)| count),
        TableOrder::CountDescending => rows.sort_by(|a, b| b.1.cmp(&a.1)),
    }

    let rows: Vec<(String, &str)> = rows
        .into_iter()
        .map(|(name, count)| (count.to_string(), name))
        .collect();

    let count_width = rows
        .iter()
        .map(|(count, _)| count.chars().count())
        .fold(COUNT_LABEL.len(), usize::max);
    let name_width = rows
        .iter()
        .map(|(_, name)| name.chars().count())
        .fold(NAME_LABEL.len(), usize::max);
    let padded_name_width = name_width + NAME_PADDING;
    let rule = "-".repeat(name_width + count_width + RULE_EXTRA);

    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&format!(
        "{COUNT_LABEL:>count_width$} {NAME_LABEL:>padded_name_width$}\n"
    ));
    out.push_str(&rule);
    out.push('\n');
    for (count, name) in &rows {
        out.push_str(&format!(
            "{count:>count_width$} {name:>padded_name_width$}\n"
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Total number of items: {}\n", inventory.total()));
    out
}

/// Write the table to `out`.
///
/// `order` is `None` for insertion order, or one of `"count,asc"` /
/// `"count,desc"`. Any other token fails with
/// [`InventoryError::InvalidArgument`] before anything is written.
pub fn write_table<W: Write>(
    out: &mut W,
    inventory: &Inventory,
    order: Option<&str>,
) -> InventoryResult<()> {
    let order = TableOrder::parse(order)?;
    out.write_all(render_table(inventory, order).as_bytes())
        .map_err(InventoryError::stream)
}

/// Print the table to standard output. See [`write_table`].
pub fn print_table(inventory: &Inventory, order: Option<&str>) -> InventoryResult<()> {
    write_table(&mut io::stdout().lock(), inventory, order)
}
