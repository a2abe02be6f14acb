pub mod format;
pub mod prompts;
pub mod render;

pub use prompts::{
    CostTarget, prompt_ingredient, prompt_lines, prompt_menu_item, prompt_name, prompt_number,
    prompt_recipe, prompt_unit, prompt_yes_no, resolve_cost_target,
};
pub use render::{
    display_breakdown, display_ingredient_report, display_menu_item_cost, display_menu_report,
    display_recipe_cost, display_recipe_report, display_warnings,
};
