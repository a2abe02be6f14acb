use serde::{Deserialize, Serialize};

use crate::models::{Ingredient, MenuItem, Recipe};

/// Version stamped on every saved document; loading rejects other values.
pub const SCHEMA_VERSION: u32 = 1;

/// The full persisted document: every ingredient, recipe, and menu item.
///
/// A document missing `schemaVersion` deserializes it as 0, which fails
/// the version check and falls back to the empty default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub menu_items: Vec<MenuItem>,

    #[serde(default)]
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            recipes: Vec::new(),
            menu_items: Vec::new(),
            schema_version: SCHEMA_VERSION,
            exported_at: None,
        }
    }
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.recipes.is_empty() && self.menu_items.is_empty()
    }
}
