use serde::{Deserialize, Serialize};

use crate::models::RecipeLine;

/// A sellable menu item.
///
/// `servings` divides the total line cost into a per-serving cost;
/// `price` is the current selling price (0 when unset). Lines follow the
/// same shape and resolution rules as recipe lines, including recipe
/// references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub servings: f64,
    pub price: f64,
    pub lines: Vec<RecipeLine>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MenuItem {
    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
