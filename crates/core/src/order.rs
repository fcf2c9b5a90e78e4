//! Row ordering for the inventory table.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// How table rows are ordered.
///
/// Textual tokens: `"count,asc"` and `"count,desc"`. The unordered variant has
/// no token; callers express it by passing no order at all.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableOrder {
    /// Insertion order of the inventory.
    #[default]
    Unordered,
    #[serde(rename = "count,asc")]
    CountAscending,
    #[serde(rename = "count,desc")]
    CountDescending,
}

impl TableOrder {
    pub const ASCENDING_TOKEN: &'static str = "count,asc";
    pub const DESCENDING_TOKEN: &'static str = "count,desc";

    /// Parse an optional order token; `None` means unordered.
    pub fn parse(token: Option<&str>) -> Result<Self, InventoryError> {
        match token {
            None => Ok(Self::Unordered),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for TableOrder {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ASCENDING_TOKEN => Ok(Self::CountAscending),
            Self::DESCENDING_TOKEN => Ok(Self::CountDescending),
            other => Err(InventoryError::invalid_argument(format!(
                "wrong order argument {other:?} (expected \"count,asc\" or \"count,desc\")"
            ))),
        }
    }
}
