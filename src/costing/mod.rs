pub mod engine;
pub mod report;

pub use engine::{
    CostBreakdownRow, CostResolver, CostSummary, MenuCost, ResolvedLine, menu_item_cost,
    recipe_total_cost, recipe_unit_cost,
};
pub use report::{
    DEFAULT_TARGET_FOOD_COST, IngredientSummary, MenuSummary, RecipeSummary, effective_target,
    food_cost_ratio, ingredient_summaries, menu_summaries, recipe_summaries, suggested_price,
};
