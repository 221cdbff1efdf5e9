//! Listing filters for the product and movement screens.

use serde::{Deserialize, Serialize};

use crate::movement::{MovementKind, MovementRecord};
use crate::product::Product;

/// Product listing filter: name search plus an optional category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name. Empty matches all.
    #[serde(default)]
    pub search: String,
    /// Exact category; `None` means every category.
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let name_ok = needle.is_empty() || product.name.to_lowercase().contains(&needle);
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category == c);
        name_ok && category_ok
    }
}

/// Movement listing filter by direction. Input order is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFilter {
    #[serde(default)]
    pub kind: Option<MovementKind>,
}

impl MovementFilter {
    pub fn only(kind: MovementKind) -> Self {
        Self { kind: Some(kind) }
    }

    pub fn matches(&self, record: &MovementRecord) -> bool {
        self.kind.is_none_or(|k| record.kind == k)
    }

    pub fn apply<'a>(&self, records: &'a [MovementRecord]) -> Vec<&'a MovementRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_core::{EstablishmentId, MovementId, ProductId};

    fn product(name: &str, category: &str) -> Product {
        let mut p = Product::new(ProductId::new(), EstablishmentId::new(), name);
        p.category = category.to_string();
        p
    }

    fn movement(kind: MovementKind) -> MovementRecord {
        MovementRecord {
            id: MovementId::new(),
            establishment_id: EstablishmentId::new(),
            product_id: ProductId::new(),
            product_name: None,
            kind,
            quantity: 1,
            timestamp: None,
            note: None,
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let f = ProductFilter::default();
        assert!(f.matches(&product("Anything", "Beer")));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let f = ProductFilter::default().search("LAGER");
        assert!(f.matches(&product("Premium Lager 600ml", "Beer")));
        assert!(!f.matches(&product("Stout", "Beer")));
    }

    #[test]
    fn category_must_match_exactly() {
        let f = ProductFilter::default().category("Wine");
        assert!(f.matches(&product("House Red", "Wine")));
        assert!(!f.matches(&product("House Red", "Spirits")));
    }

    #[test]
    fn search_and_category_combine() {
        let f = ProductFilter::default().search("red").category("Wine");
        assert!(f.matches(&product("House Red", "Wine")));
        assert!(!f.matches(&product("Red Ale", "Beer")));
    }

    #[test]
    fn movement_filter_keeps_order() {
        let records = vec![
            movement(MovementKind::Outbound),
            movement(MovementKind::Inbound),
            movement(MovementKind::Outbound),
        ];
        let out = MovementFilter::only(MovementKind::Outbound).apply(&records);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, records[0].id);
        assert_eq!(out[1].id, records[2].id);
        assert_eq!(MovementFilter::default().apply(&records).len(), 3);
    }
}
