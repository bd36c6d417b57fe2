//! Feed filtering.
//!
//! Criteria are raw user input matched by case-sensitive substring
//! containment; an empty value places no constraint. Matching is not
//! tokenized, so a prefix like "Моск" matches "Москва".

use crate::models::ListingItem;

/// User-supplied filter values, kept exactly as typed. Transient UI
/// state; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub location: String,
    pub category: String,
}

impl FilterCriteria {
    /// True when neither field constrains the feed.
    pub fn is_unconstrained(&self) -> bool {
        self.location.is_empty() && self.category.is_empty()
    }

    pub fn matches(&self, item: &ListingItem) -> bool {
        (self.location.is_empty() || item.location.contains(&self.location))
            && (self.category.is_empty() || item.category.contains(&self.category))
    }
}

/// Filter `items` down to those matching `criteria`, preserving order.
/// No matches is a valid result, not an error.
pub fn apply<'a>(items: &'a [ListingItem], criteria: &FilterCriteria) -> Vec<&'a ListingItem> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingCatalog;

    fn ids(items: &[&ListingItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn location_prefix_matches_in_catalog_order() {
        let catalog = ListingCatalog::builtin();
        let criteria = FilterCriteria {
            location: "Моск".to_string(),
            category: String::new(),
        };

        let filtered = apply(catalog.get_all(), &criteria);
        assert_eq!(ids(&filtered), vec!["1", "3"]);
    }

    #[test]
    fn empty_criteria_return_the_feed_unchanged() {
        let catalog = ListingCatalog::builtin();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());

        let filtered = apply(catalog.get_all(), &criteria);
        assert_eq!(ids(&filtered), vec!["1", "2", "3"]);
    }

    #[test]
    fn unmatched_location_yields_an_empty_feed() {
        let catalog = ListingCatalog::builtin();
        let criteria = FilterCriteria {
            location: "Казань".to_string(),
            category: String::new(),
        };

        assert!(apply(catalog.get_all(), &criteria).is_empty());
    }

    #[test]
    fn both_fields_must_match() {
        let catalog = ListingCatalog::builtin();
        let criteria = FilterCriteria {
            location: "Моск".to_string(),
            category: "Театр".to_string(),
        };

        let filtered = apply(catalog.get_all(), &criteria);
        assert_eq!(ids(&filtered), vec!["3"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let catalog = ListingCatalog::builtin();
        let criteria = FilterCriteria {
            location: "москва".to_string(),
            category: String::new(),
        };

        assert!(apply(catalog.get_all(), &criteria).is_empty());
    }
}
