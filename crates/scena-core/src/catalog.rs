use crate::models::ListingItem;

/// The in-session casting catalog.
///
/// A read-only, fixed set of listings: the source of truth for listing
/// content. `get_all` is deterministic and side-effect-free, identical
/// across calls within a session.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    items: Vec<ListingItem>,
}

impl ListingCatalog {
    pub fn new(items: Vec<ListingItem>) -> Self {
        Self { items }
    }

    /// The seeded catalog shipped with the app.
    pub fn builtin() -> Self {
        Self::new(vec![
            ListingItem {
                id: "1".to_string(),
                title: "Главная роль в фильме \"Рассвет\"".to_string(),
                location: "Москва".to_string(),
                date: "15.04.2025".to_string(),
                description: "Ищем актёра на главную роль в новом драматическом фильме.".to_string(),
                category: "Кино".to_string(),
            },
            ListingItem {
                id: "2".to_string(),
                title: "Реклама парфюма".to_string(),
                location: "Санкт-Петербург".to_string(),
                date: "20.04.2025".to_string(),
                description: "Кастинг моделей для рекламной кампании нового парфюма.".to_string(),
                category: "Реклама".to_string(),
            },
            ListingItem {
                id: "3".to_string(),
                title: "Театральная постановка \"Гамлет\"".to_string(),
                location: "Москва".to_string(),
                date: "25.04.2025".to_string(),
                description: "Кастинг актёров на основные роли в классической постановке.".to_string(),
                category: "Театр".to_string(),
            },
        ])
    }

    /// Every listing, in catalog order.
    pub fn get_all(&self) -> &[ListingItem] {
        &self.items
    }

    /// Resolve a listing by id.
    pub fn lookup(&self, id: &str) -> Option<&ListingItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
