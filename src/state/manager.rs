use std::collections::HashSet;

use crate::models::{Catalog, Ingredient, MenuItem, Recipe};

/// Owns the working catalog and all edits to it.
///
/// The costing engine never sees this type; it consumes the plain slices
/// the manager hands out.
pub struct CatalogManager {
    catalog: Catalog,
}

fn dedup_by_id<T, F: Fn(&T) -> &str>(items: Vec<T>, id_of: F) -> Vec<T> {
    // Last occurrence wins, insertion order otherwise preserved.
    let mut keep: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        keep.retain(|existing| id_of(existing) != id_of(&item));
        keep.push(item);
    }
    keep
}

impl CatalogManager {
    /// Create a manager, deduplicating every collection by id.
    pub fn new(mut catalog: Catalog) -> Self {
        catalog.ingredients = dedup_by_id(catalog.ingredients, |i| &i.id);
        catalog.recipes = dedup_by_id(catalog.recipes, |r| &r.id);
        catalog.menu_items = dedup_by_id(catalog.menu_items, |m| &m.id);
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.catalog.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.catalog.recipes
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.catalog.menu_items
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.catalog.ingredients.iter().find(|i| i.id == id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.catalog.recipes.iter().find(|r| r.id == id)
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.catalog.menu_items.iter().find(|m| m.id == id)
    }

    /// Find an ingredient by name (case-insensitive).
    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        let key = name.to_lowercase();
        self.catalog.ingredients.iter().find(|i| i.key() == key)
    }

    /// Find a recipe by name (case-insensitive).
    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        let key = name.to_lowercase();
        self.catalog.recipes.iter().find(|r| r.key() == key)
    }

    /// Find a menu item by name (case-insensitive).
    pub fn menu_item_by_name(&self, name: &str) -> Option<&MenuItem> {
        let key = name.to_lowercase();
        self.catalog.menu_items.iter().find(|m| m.key() == key)
    }

    /// Insert or replace an ingredient by id.
    pub fn upsert_ingredient(&mut self, ingredient: Ingredient) {
        match self
            .catalog
            .ingredients
            .iter_mut()
            .find(|i| i.id == ingredient.id)
        {
            Some(existing) => *existing = ingredient,
            None => self.catalog.ingredients.push(ingredient),
        }
    }

    /// Insert or replace a recipe by id.
    pub fn upsert_recipe(&mut self, recipe: Recipe) {
        match self.catalog.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => self.catalog.recipes.push(recipe),
        }
    }

    /// Insert or replace a menu item by id.
    pub fn upsert_menu_item(&mut self, item: MenuItem) {
        match self.catalog.menu_items.iter_mut().find(|m| m.id == item.id) {
            Some(existing) => *existing = item,
            None => self.catalog.menu_items.push(item),
        }
    }

    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        let before = self.catalog.ingredients.len();
        self.catalog.ingredients.retain(|i| i.id != id);
        self.catalog.ingredients.len() != before
    }

    pub fn remove_recipe(&mut self, id: &str) -> bool {
        let before = self.catalog.recipes.len();
        self.catalog.recipes.retain(|r| r.id != id);
        self.catalog.recipes.len() != before
    }

    pub fn remove_menu_item(&mut self, id: &str) -> bool {
        let before = self.catalog.menu_items.len();
        self.catalog.menu_items.retain(|m| m.id != id);
        self.catalog.menu_items.len() != before
    }

    /// Apply imported ingredients, either replacing the whole list or
    /// appending (skipping names that already exist).
    pub fn apply_imported_ingredients(&mut self, imported: Vec<Ingredient>, replace: bool) -> usize {
        if replace {
            let count = imported.len();
            self.catalog.ingredients = dedup_by_id(imported, |i| &i.id);
            return count;
        }

        let existing: HashSet<String> =
            self.catalog.ingredients.iter().map(|i| i.key()).collect();
        let mut added = 0;
        for ingredient in imported {
            if existing.contains(&ingredient.key()) {
                continue;
            }
            self.catalog.ingredients.push(ingredient);
            added += 1;
        }
        added
    }

    /// Apply imported menu items, either replacing the whole list or
    /// appending (skipping names that already exist).
    pub fn apply_imported_menu_items(&mut self, imported: Vec<MenuItem>, replace: bool) -> usize {
        if replace {
            let count = imported.len();
            self.catalog.menu_items = dedup_by_id(imported, |m| &m.id);
            return count;
        }

        let existing: HashSet<String> =
            self.catalog.menu_items.iter().map(|m| m.key()).collect();
        let mut added = 0;
        for item in imported {
            if existing.contains(&item.key()) {
                continue;
            }
            self.catalog.menu_items.push(item);
            added += 1;
        }
        added
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
