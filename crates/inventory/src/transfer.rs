//! CSV import and export.
//!
//! The format is a flat comma-separated list of item names, one repetition
//! per unit of count. No header, quoting or trailing newline.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use satchel_core::{InventoryError, InventoryResult, TableOrder};

use crate::inventory::Inventory;
use crate::table::render_table;

pub const DEFAULT_IMPORT_FILE: &str = "import_inventory.csv";
pub const DEFAULT_EXPORT_FILE: &str = "export_inventory.csv";

/// Merge the items listed in `path` into `inventory`, then write the
/// resulting table (count descending) to `out`.
///
/// A missing file fails with [`InventoryError::NotFound`]. The inventory is
/// only updated once the table has been written, so any failure leaves it
/// untouched.
pub fn import_inventory_to<'a, W: Write>(
    out: &mut W,
    inventory: &'a mut Inventory,
    path: impl AsRef<Path>,
) -> InventoryResult<&'a mut Inventory> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| InventoryError::read(path, e))?;

    let tokens = content.split(',').count();
    let mut merged = inventory.clone();
    merged.merge_csv(&content);

    out.write_all(render_table(&merged, TableOrder::CountDescending).as_bytes())
        .map_err(InventoryError::stream)?;

    *inventory = merged;
    tracing::info!(path = %path.display(), tokens, "imported inventory");
    Ok(inventory)
}

/// [`import_inventory_to`] with the table printed to standard output.
pub fn import_inventory(
    inventory: &mut Inventory,
    path: impl AsRef<Path>,
) -> InventoryResult<&mut Inventory> {
    import_inventory_to(&mut io::stdout().lock(), inventory, path)
}

/// Overwrite `path` with the CSV expansion of `inventory`.
pub fn export_inventory(inventory: &Inventory, path: impl AsRef<Path>) -> InventoryResult<()> {
    let path = path.as_ref();
    let content = inventory.to_csv();
    fs::write(path, &content).map_err(|e| InventoryError::write(path, e))?;
    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        "exported inventory"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn import_merges_and_prints_descending_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.csv");
        fs::write(&path, "sword,shield,sword,potion,sword").unwrap();

        let mut inv: Inventory = [("potion", 2)].into_iter().collect();
        let mut out = Vec::new();
        import_inventory_to(&mut out, &mut inv, &path).unwrap();

        assert_eq!(inv.get("sword"), Some(3));
        assert_eq!(inv.get("potion"), Some(3));
        assert_eq!(inv.get("shield"), Some(1));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render_table(&inv, TableOrder::CountDescending)
        );
    }

    #[test]
    fn import_keeps_trailing_newline_in_last_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.csv");
        fs::write(&path, "sword,potion\n").unwrap();

        let mut inv = Inventory::new();
        import_inventory_to(&mut io::sink(), &mut inv, &path).unwrap();
        assert_eq!(inv.get("potion\n"), Some(1));
        assert!(!inv.contains("potion"));
    }

    #[test]
    fn import_of_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut inv: Inventory = [("rope", 1)].into_iter().collect();
        let mut out = Vec::new();

        let err = import_inventory_to(&mut out, &mut inv, dir.path().join("absent.csv"))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(out.is_empty());
        assert_eq!(inv.len(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_table_write_leaves_inventory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.csv");
        fs::write(&path, "sword,potion").unwrap();

        let mut inv: Inventory = [("potion", 2)].into_iter().collect();
        let err = import_inventory_to(&mut BrokenPipe, &mut inv, &path).unwrap_err();

        assert!(matches!(err, InventoryError::Io { .. }));
        assert_eq!(inv, [("potion", 2)].into_iter().collect::<Inventory>());
    }

    #[test]
    fn import_inventory_prints_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_IMPORT_FILE);
        fs::write(&path, "sword,shield,sword").unwrap();

        let mut inv = Inventory::new();
        import_inventory(&mut inv, &path).unwrap();
        assert_eq!(inv.get("sword"), Some(2));
        assert_eq!(inv.get("shield"), Some(1));
    }

    #[test]
    fn export_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        fs::write(&path, "stale,content,that,is,longer,than,the,export").unwrap();

        let inv: Inventory = [("sword", 2), ("potion", 1)].into_iter().collect();
        export_inventory(&inv, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "sword,sword,potion");
    }

    #[test]
    fn export_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");

        let err = export_inventory(&Inventory::new(), &path).unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        })]

        /// Property: export followed by import into a fresh inventory
        /// reproduces the original mapping.
        #[test]
        fn export_then_import_round_trips(
            entries in prop::collection::vec(("[a-z][a-z ]{0,9}", 1i64..15), 1..8)
        ) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("round_trip.csv");
            let original: Inventory = entries.into_iter().collect();

            export_inventory(&original, &path).unwrap();
            let mut restored = Inventory::new();
            import_inventory_to(&mut io::sink(), &mut restored, &path).unwrap();

            prop_assert_eq!(restored, original);
        }
    }
}
