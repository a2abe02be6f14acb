mod catalog;
mod ingredient;
mod menu;
mod recipe;
mod unit;

pub use catalog::{Catalog, SCHEMA_VERSION};
pub use ingredient::{EPS, Ingredient};
pub use menu::MenuItem;
pub use recipe::{ComponentRef, Recipe, RecipeCategory, RecipeLine, RefKind};
pub use unit::Unit;
