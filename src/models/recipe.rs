use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// Reference from a recipe line to the component it consumes.
///
/// Exactly one variant is active; the JSON form is internally tagged so
/// documents carry `{"kind": "ingredient", "ingredientId": ...}` or
/// `{"kind": "recipe", "recipeId": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComponentRef {
    #[serde(rename_all = "camelCase")]
    Ingredient { ingredient_id: String },

    #[serde(rename_all = "camelCase")]
    Recipe { recipe_id: String },
}

impl ComponentRef {
    pub fn kind(&self) -> RefKind {
        match self {
            ComponentRef::Ingredient { .. } => RefKind::Ingredient,
            ComponentRef::Recipe { .. } => RefKind::Recipe,
        }
    }
}

/// Which side of [`ComponentRef`] a resolved line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Ingredient,
    Recipe,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Ingredient => f.write_str("ingredient"),
            RefKind::Recipe => f.write_str("recipe"),
        }
    }
}

/// One component line: a reference plus the quantity consumed.
///
/// The same shape is used inside recipes and menu items, with identical
/// resolution rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub id: String,

    #[serde(rename = "ref")]
    pub component: ComponentRef,

    pub qty: f64,
    pub unit: Unit,
}

/// Descriptive grouping for recipes; does not affect costing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeCategory {
    Base,
    SubRecipe,
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeCategory::Base => f.write_str("base"),
            RecipeCategory::SubRecipe => f.write_str("sub-recipe"),
        }
    }
}

/// A recipe producing `yield_qty` of output in `yield_unit`.
///
/// Lines may reference other recipes by id; the resulting graph may
/// contain cycles and the costing engine tolerates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: RecipeCategory,
    pub yield_qty: f64,
    pub yield_unit: Unit,
    pub lines: Vec<RecipeLine>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
