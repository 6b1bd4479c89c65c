//! Domain types representing spending categories.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Display metadata for a spending category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryDefinition {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// Ordered, read-only list of categories. Iteration order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<CategoryDefinition>,
}

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        CategoryDefinition::new("purchases", "Compras", "shopping-bag", "#5636D3"),
        CategoryDefinition::new("food", "Alimentação", "coffee", "#FF872C"),
        CategoryDefinition::new("salary", "Salário", "dollar-sign", "#12A454"),
        CategoryDefinition::new("car", "Carro", "crosshair", "#E83F5B"),
        CategoryDefinition::new("leisure", "Lazer", "heart", "#26195C"),
        CategoryDefinition::new("studies", "Estudos", "book", "#9C001A"),
        CategoryDefinition::new("housing", "Moradia", "home", "#3D3D4D"),
    ])
});

impl Catalog {
    pub fn new(entries: Vec<CategoryDefinition>) -> Self {
        Self { entries }
    }

    /// The built-in catalog shipped with the application.
    pub fn builtin() -> &'static Catalog {
        &DEFAULT_CATALOG
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDefinition> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Display name for `key`, falling back to the key itself.
    pub fn name_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|entry| entry.name.as_str()).unwrap_or(key)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_keeps_display_order() {
        let keys: Vec<&str> = Catalog::builtin().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            ["purchases", "food", "salary", "car", "leisure", "studies", "housing"]
        );
    }

    #[test]
    fn name_for_unknown_key_falls_back_to_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.name_for("food"), "Alimentação");
        assert_eq!(catalog.name_for("pets"), "pets");
    }
}
