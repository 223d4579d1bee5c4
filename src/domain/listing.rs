//! Traits shared by every record that can be shown in a list view

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A filterable attribute of a list item (the dropdowns next to the search box)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Facet {
    Status,
    /// Serialized as `type`, the query parameter name the backend uses
    #[serde(rename = "type")]
    #[strum(serialize = "type")]
    Kind,
    Category,
    Role,
}

/// A record the list engine can search, filter and mutate by id.
///
/// The engine never looks inside an item beyond these accessors, so any record
/// shape can be paginated.
pub trait Listable: std::fmt::Debug + Clone + Send + Sync + 'static {
    /// Stable identifier used by optimistic mutations
    fn id(&self) -> &str;

    /// Text matched by the search box (case-insensitive substring match)
    fn search_text(&self) -> String;

    /// Value of a facet for this item, if the item has that facet
    fn facet(&self, _facet: Facet) -> Option<String> {
        None
    }

    /// Facets this record type supports, in display order
    fn facets() -> &'static [Facet] {
        &[]
    }

    /// Selectable values for a facet
    fn facet_options(_facet: Facet) -> Vec<String> {
        Vec::new()
    }
}

/// Tabular rendering of a record
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_facet_names_match_query_parameters() {
        assert_eq!(Facet::Status.to_string(), "status");
        assert_eq!(Facet::Kind.to_string(), "type");
        assert_eq!(Facet::Category.to_string(), "category");
        assert_eq!(Facet::Role.to_string(), "role");
    }

    #[test]
    fn test_facet_parse() {
        assert_eq!(Facet::from_str("type").ok(), Some(Facet::Kind));
        assert!(Facet::from_str("kind").is_err());
    }

    #[test]
    fn test_facet_serde() {
        let json = serde_json::to_string(&Facet::Kind).expect("serialize facet");
        assert_eq!(json, "\"type\"");
    }
}
