//! Committed filters of a list view

use std::collections::BTreeMap;

use crate::domain::{Facet, Listable};

/// Value a facet dropdown shows when nothing is selected
pub const ALL: &str = "all";

/// Search text and facet selections the visible rows are computed from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    search: String,
    facets: BTreeMap<Facet, String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn facets(&self) -> &BTreeMap<Facet, String> {
        &self.facets
    }

    pub fn facet(&self, facet: Facet) -> Option<&str> {
        self.facets.get(&facet).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.facets.is_empty()
    }

    /// Returns whether the filter changed
    pub fn set_search(&mut self, search: &str) -> bool {
        if self.search == search {
            return false;
        }
        self.search = search.to_string();
        true
    }

    /// `None`, an empty value or `"all"` clears the facet. Returns whether the
    /// filter changed.
    pub fn set_facet(&mut self, facet: Facet, value: Option<&str>) -> bool {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case(ALL) => {
                if self.facet(facet) == Some(value) {
                    return false;
                }
                self.facets.insert(facet, value.to_string());
                true
            }
            _ => self.facets.remove(&facet).is_some(),
        }
    }

    /// Returns whether the filter changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.search.is_empty() || !self.facets.is_empty();
        self.search.clear();
        self.facets.clear();
        changed
    }

    /// Case-insensitive substring match on the search text, case-insensitive
    /// equality on every active facet. Items lacking an active facet never match.
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !item.search_text().to_lowercase().contains(&needle) {
            return false;
        }

        self.facets.iter().all(|(facet, wanted)| {
            item.facet(*facet)
                .is_some_and(|value| value.eq_ignore_ascii_case(wanted))
        })
    }
}
