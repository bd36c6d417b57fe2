use serde::{Deserialize, Serialize};

/// A casting call shown in the feed.
///
/// Owned by the catalog and immutable for the session; ids are
/// catalog-assigned and stable. `date` is a display string and is never
/// parsed. Favoriting stores a snapshot of this struct by value, so the
/// favorites blob carries full listings, not references into the catalog.
/// Unknown fields in previously persisted snapshots are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_roundtrips_through_json() {
        let item = ListingItem {
            id: "1".to_string(),
            title: "Главная роль".to_string(),
            location: "Москва".to_string(),
            date: "15.04.2025".to_string(),
            description: "Описание".to_string(),
            category: "Кино".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: ListingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn extra_fields_are_tolerated_on_read() {
        // Snapshots written by a newer build may carry fields this build
        // does not know about.
        let json = r#"{
            "id": "2",
            "title": "t",
            "location": "l",
            "date": "d",
            "description": "desc",
            "category": "c",
            "deadline": "01.05.2025"
        }"#;

        let item: ListingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "2");
        assert_eq!(item.category, "c");
    }
}
