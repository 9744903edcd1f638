//! Grouped benchmark results keyed by category, library and size.

use std::collections::BTreeMap;

/// Known categories in their display order. Anything else sorts after these,
/// alphabetically.
pub const CATEGORY_ORDER: &[&str] = &["FFT", "IFFT", "FFT32", "IFFT32"];

fn category_rank(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

/// Three-level grouping of benchmark results: category → library → size.
///
/// Libraries and sizes iterate in their natural order (alphabetical,
/// ascending numeric). Categories follow [`CATEGORY_ORDER`]. Inserting a
/// duplicate (category, library, size) keeps the last value.
#[derive(Debug, Clone)]
pub struct ReportTable<T> {
    groups: BTreeMap<String, BTreeMap<String, BTreeMap<u64, T>>>,
}

impl<T> ReportTable<T> {
    pub fn new() -> Self {
        ReportTable {
            groups: BTreeMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        library: impl Into<String>,
        size: u64,
        value: T,
    ) {
        self.groups
            .entry(category.into())
            .or_default()
            .entry(library.into())
            .or_default()
            .insert(size, value);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of (category, library, size) entries.
    pub fn len(&self) -> usize {
        self.groups
            .values()
            .flat_map(|libs| libs.values())
            .map(|sizes| sizes.len())
            .sum()
    }

    /// Categories in display order.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_by_key(|name| (category_rank(name), *name));
        names
    }

    /// Libraries of one category, alphabetical with their size maps.
    pub fn libraries(&self, category: &str) -> Option<&BTreeMap<String, BTreeMap<u64, T>>> {
        self.groups.get(category)
    }
}

impl<T> Default for ReportTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
