use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Item name → count, iterated in insertion order.
///
/// A key is only ever dropped by [`Inventory::remove`] (when its count would
/// fall to zero) or by [`Inventory::rename_item`]. [`Inventory::set_item_value`]
/// stores whatever it is given, zero and negative counts included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.items.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Sum of all counts, widened so unvalidated values cannot overflow it.
    pub fn total(&self) -> i128 {
        self.items.values().map(|&count| i128::from(count)).sum()
    }

    /// Add one unit per name, in order. Unknown names start at 1; a count
    /// already at `i64::MAX` stays there.
    pub fn add<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in items {
            let name = name.as_ref();
            match self.items.get_mut(name) {
                Some(count) => *count = count.saturating_add(1),
                None => {
                    self.items.insert(name.to_owned(), 1);
                }
            }
        }
        self
    }

    /// Take one unit per name. A name whose count would reach zero is dropped;
    /// names not in the inventory are ignored.
    pub fn remove<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in items {
            let name = name.as_ref();
            let Some(count) = self.items.get_mut(name) else {
                continue;
            };
            if *count > 1 {
                *count -= 1;
                continue;
            }
            self.items.shift_remove(name);
        }
        self
    }

    /// Move the count stored under `old_name` to `new_name`.
    ///
    /// An existing `new_name` entry is overwritten (not merged) and keeps its
    /// position; otherwise the renamed entry moves to the end.
    pub fn rename_item(&mut self, old_name: &str, new_name: impl Into<String>) -> &mut Self {
        if let Some(count) = self.items.shift_remove(old_name) {
            self.items.insert(new_name.into(), count);
        }
        self
    }

    /// Replace the count of an existing item. The value is not validated.
    pub fn set_item_value(&mut self, item_name: &str, new_value: i64) -> &mut Self {
        if let Some(count) = self.items.get_mut(item_name) {
            *count = new_value;
        }
        self
    }

    /// Add every comma-separated token of `content`, verbatim.
    pub fn merge_csv(&mut self, content: &str) -> &mut Self {
        self.add(content.split(','))
    }

    /// Each name repeated `count` times, joined by commas.
    pub fn to_csv(&self) -> String {
        self.items
            .iter()
            .flat_map(|(name, &count)| {
                std::iter::repeat_n(name.as_str(), usize::try_from(count).unwrap_or(0))
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<K> FromIterator<(K, i64)> for Inventory
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        }
    }
}
