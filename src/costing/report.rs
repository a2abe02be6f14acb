use crate::costing::engine::CostResolver;
use crate::models::{Ingredient, MenuItem, Recipe, RecipeCategory, Unit};

/// Target food cost ratio used for suggested prices when none is given.
pub const DEFAULT_TARGET_FOOD_COST: f64 = 0.30;

/// One row of the ingredients report.
#[derive(Debug, Clone)]
pub struct IngredientSummary {
    pub name: String,
    pub unit: Unit,
    pub unit_cost: f64,
}

/// One row of the recipes report.
#[derive(Debug, Clone)]
pub struct RecipeSummary {
    pub name: String,
    pub category: RecipeCategory,
    pub yield_qty: f64,
    pub yield_unit: Unit,
    pub total_cost: f64,
    pub unit_cost: f64,
}

/// One row of the menu report.
#[derive(Debug, Clone)]
pub struct MenuSummary {
    pub name: String,
    pub servings: f64,
    pub price: f64,
    pub cost_per_serving: f64,
    pub food_cost_ratio: f64,
    pub suggested_price: f64,
    pub warnings: Vec<String>,
}

/// Cost per serving divided by selling price; 0 when there is no price.
pub fn food_cost_ratio(cost_per_serving: f64, price: f64) -> f64 {
    if price > 0.0 { cost_per_serving / price } else { 0.0 }
}

/// Price that would hit the target food cost ratio; 0 for a degenerate
/// target.
pub fn suggested_price(cost_per_serving: f64, target: f64) -> f64 {
    if target > 0.0 { cost_per_serving / target } else { 0.0 }
}

/// Parse a user-supplied target ratio, falling back to the default when
/// it is missing, non-finite, or not positive.
pub fn effective_target(target: Option<f64>) -> f64 {
    match target {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => DEFAULT_TARGET_FOOD_COST,
    }
}

/// Ingredients report rows, sorted by case-insensitive name.
pub fn ingredient_summaries(ingredients: &[Ingredient]) -> Vec<IngredientSummary> {
    let mut rows: Vec<IngredientSummary> = ingredients
        .iter()
        .map(|ing| IngredientSummary {
            name: ing.name.clone(),
            unit: ing.unit,
            unit_cost: ing.unit_cost(),
        })
        .collect();
    rows.sort_by_key(|row| row.name.to_lowercase());
    rows
}

/// Recipes report rows, sorted by case-insensitive name.
///
/// One resolver is shared across the whole batch so sub-recipes referenced
/// by several others are costed once.
pub fn recipe_summaries(ingredients: &[Ingredient], recipes: &[Recipe]) -> Vec<RecipeSummary> {
    let mut resolver = CostResolver::new(ingredients, recipes);

    let mut rows: Vec<RecipeSummary> = recipes
        .iter()
        .map(|recipe| {
            let summary = resolver.recipe_total_cost(recipe);
            let unit_cost = if recipe.yield_qty > 0.0 {
                summary.total_cost / recipe.yield_qty
            } else {
                0.0
            };
            RecipeSummary {
                name: recipe.name.clone(),
                category: recipe.category,
                yield_qty: recipe.yield_qty,
                yield_unit: recipe.yield_unit,
                total_cost: summary.total_cost,
                unit_cost,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.name.to_lowercase());
    rows
}

/// Menu report rows, sorted by case-insensitive name.
pub fn menu_summaries(
    ingredients: &[Ingredient],
    recipes: &[Recipe],
    menu_items: &[MenuItem],
    target: f64,
) -> Vec<MenuSummary> {
    let mut resolver = CostResolver::new(ingredients, recipes);

    let mut rows: Vec<MenuSummary> = menu_items
        .iter()
        .map(|item| {
            let cost = resolver.menu_item_cost(item);
            MenuSummary {
                name: item.name.clone(),
                servings: item.servings,
                price: item.price,
                cost_per_serving: cost.cost_per_serving,
                food_cost_ratio: food_cost_ratio(cost.cost_per_serving, item.price),
                suggested_price: suggested_price(cost.cost_per_serving, target),
                warnings: cost.errors,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.name.to_lowercase());
    rows
}
