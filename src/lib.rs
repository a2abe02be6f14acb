pub mod cli;
pub mod costing;
pub mod error;
pub mod ids;
pub mod importer;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CostError, Result};
pub use models::{Catalog, ComponentRef, Ingredient, MenuItem, Recipe, RecipeLine, Unit};
