//! Condition-type catalog.
//!
//! The marketplace defines a closed set of product condition values. The catalog is handed
//! to product data construction explicitly, so callers (and tests) decide which set applies.

use crate::config::CatalogConfig;
use crate::constants::DEFAULT_CONDITION_TYPES;
use serde::{Deserialize, Serialize};

/// A closed, ordered set of allowed condition-type values.
///
/// Membership is exact and case-sensitive: `"new"` is not `"New"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ConditionTypeCatalog {
    values: Vec<String>,
}

impl ConditionTypeCatalog {
    /// Builds a catalog from the given values, dropping duplicates while keeping first-seen order.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    /// Whether `value` is an allowed condition type.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for ConditionTypeCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CONDITION_TYPES.iter().copied())
    }
}

impl From<Vec<String>> for ConditionTypeCatalog {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

impl From<ConditionTypeCatalog> for Vec<String> {
    fn from(catalog: ConditionTypeCatalog) -> Self {
        catalog.values
    }
}

impl From<&CatalogConfig> for ConditionTypeCatalog {
    fn from(config: &CatalogConfig) -> Self {
        Self::new(config.condition_types.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_holds_marketplace_values() {
        let catalog = ConditionTypeCatalog::default();
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["New", "Used", "Refurbished"]);
        assert!(catalog.contains("New"));
        assert!(!catalog.contains("new"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let catalog = ConditionTypeCatalog::new(["Used", "New", "Used"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["Used", "New"]);
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let catalog = ConditionTypeCatalog::new(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert!(!catalog.contains("New"));
    }
}
