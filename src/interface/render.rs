use crate::costing::{
    CostBreakdownRow, CostSummary, IngredientSummary, MenuCost, MenuSummary, RecipeSummary,
    food_cost_ratio,
};
use crate::interface::format::{money, money_or_na, num, pct};
use crate::models::{MenuItem, Recipe};

/// Print one breakdown table: a row per component line.
pub fn display_breakdown(rows: &[CostBreakdownRow]) {
    if rows.is_empty() {
        println!("No lines.");
        return;
    }

    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(10);

    for row in rows {
        println!(
            "  {:<label_width$}  [{}]  {:>8} {:<2}  {:>10}  {:>10}",
            row.label,
            row.kind,
            num(row.qty),
            row.unit,
            money_or_na(row.unit_cost),
            money_or_na(row.line_cost),
        );
    }
}

/// Print accumulated warnings, or a short all-clear.
pub fn display_warnings(errors: &[String]) {
    if errors.is_empty() {
        println!("No calculation warnings.");
        return;
    }
    println!("Warnings:");
    for error in errors {
        println!("  - {}", error);
    }
}

/// Full cost view of one recipe.
pub fn display_recipe_cost(recipe: &Recipe, summary: &CostSummary) {
    let unit_cost = if recipe.yield_qty > 0.0 {
        summary.total_cost / recipe.yield_qty
    } else {
        0.0
    };

    println!();
    println!("=== Recipe: {} ===", recipe.name);
    println!();
    println!("Yield: {} {}", num(recipe.yield_qty), recipe.yield_unit);
    println!("Total cost: {}", money(summary.total_cost));
    println!(
        "Unit cost: {} per {}",
        money(unit_cost),
        recipe.yield_unit
    );
    println!();
    display_breakdown(&summary.breakdown);
    println!();
    display_warnings(&summary.errors);
    println!();
}

/// Full cost view of one menu item.
pub fn display_menu_item_cost(item: &MenuItem, cost: &MenuCost) {
    println!();
    println!("=== Menu item: {} ===", item.name);
    println!();
    println!("Servings: {}", num(item.servings));
    println!("Total cost: {}", money(cost.total_cost));
    println!("Cost per serving: {}", money(cost.cost_per_serving));
    println!("Price: {}", money(item.price));
    println!(
        "Food cost: {}%",
        pct(food_cost_ratio(cost.cost_per_serving, item.price))
    );
    println!();
    display_breakdown(&cost.breakdown);
    println!();
    display_warnings(&cost.errors);
    println!();
}

/// Ingredients summary table.
pub fn display_ingredient_report(rows: &[IngredientSummary]) {
    println!();
    println!("=== Ingredients ({}) ===", rows.len());
    println!();
    if rows.is_empty() {
        println!("No ingredients.");
        return;
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "  {:<name_width$}  {:>10} per {}",
            row.name,
            money(row.unit_cost),
            row.unit,
        );
    }
}

/// Recipes summary table.
pub fn display_recipe_report(rows: &[RecipeSummary]) {
    println!();
    println!("=== Recipes ({}) ===", rows.len());
    println!();
    if rows.is_empty() {
        println!("No recipes.");
        return;
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "  {:<name_width$}  [{}]  yield {:>6} {:<2}  total {:>8}  {:>8} per {}",
            row.name,
            row.category,
            num(row.yield_qty),
            row.yield_unit,
            money(row.total_cost),
            money(row.unit_cost),
            row.yield_unit,
        );
    }
}

/// Menu summary table with pricing columns.
pub fn display_menu_report(rows: &[MenuSummary], target: f64) {
    println!();
    println!("=== Menu items ({}) ===", rows.len());
    println!();
    if rows.is_empty() {
        println!("No menu items.");
        return;
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "  {:<name_width$}  price {:>7}  cost/serving {:>7}  food cost {:>5}%  suggested {:>7}",
            row.name,
            money(row.price),
            money(row.cost_per_serving),
            pct(row.food_cost_ratio),
            money(row.suggested_price),
        );
    }

    println!();
    println!(
        "Suggested price is cost per serving at a {}% target food cost.",
        pct(target)
    );

    let warnings: Vec<&String> = rows.iter().flat_map(|r| r.warnings.iter()).collect();
    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in warnings {
            println!("  - {}", warning);
        }
    }
}
