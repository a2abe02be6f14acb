use assert_float_eq::assert_float_absolute_eq;

use menu_coster_rs::costing::{CostResolver, menu_item_cost, recipe_total_cost, recipe_unit_cost};
use menu_coster_rs::models::{
    ComponentRef, Ingredient, MenuItem, Recipe, RecipeCategory, RecipeLine, Unit,
};

fn ingredient(id: &str, name: &str, unit: Unit, pack_size: f64, pack_cost: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        unit,
        pack_size,
        pack_cost,
        supplier: None,
        notes: None,
        updated_at: None,
    }
}

fn ingredient_line(ingredient_id: &str, qty: f64, unit: Unit) -> RecipeLine {
    RecipeLine {
        id: format!("line_{}", ingredient_id),
        component: ComponentRef::Ingredient {
            ingredient_id: ingredient_id.to_string(),
        },
        qty,
        unit,
    }
}

fn recipe_ref_line(recipe_id: &str, qty: f64, unit: Unit) -> RecipeLine {
    RecipeLine {
        id: format!("line_{}", recipe_id),
        component: ComponentRef::Recipe {
            recipe_id: recipe_id.to_string(),
        },
        qty,
        unit,
    }
}

fn recipe(id: &str, name: &str, yield_qty: f64, yield_unit: Unit, lines: Vec<RecipeLine>) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: RecipeCategory::Base,
        yield_qty,
        yield_unit,
        lines,
        notes: None,
        updated_at: None,
    }
}

fn menu_item(id: &str, name: &str, servings: f64, price: f64, lines: Vec<RecipeLine>) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        servings,
        price,
        lines,
        notes: None,
        updated_at: None,
    }
}

/// Flour at 2.00 per 1000 g pack, a 500 g sauce using 100 g of it, and a
/// two-serving plate using 250 g of the sauce.
fn sample_catalog() -> (Vec<Ingredient>, Vec<Recipe>, MenuItem) {
    let ingredients = vec![ingredient("ing_flour", "Flour", Unit::G, 1000.0, 2.0)];
    let recipes = vec![recipe(
        "rec_sauce",
        "Sauce",
        500.0,
        Unit::G,
        vec![ingredient_line("ing_flour", 100.0, Unit::G)],
    )];
    let plate = menu_item(
        "menu_plate",
        "Plate",
        2.0,
        0.0,
        vec![recipe_ref_line("rec_sauce", 250.0, Unit::G)],
    );
    (ingredients, recipes, plate)
}

#[test]
fn test_ingredient_unit_cost() {
    let (ingredients, _, _) = sample_catalog();
    assert_float_absolute_eq!(ingredients[0].unit_cost(), 0.002, 1e-12);

    let unknown = ingredient("ing_x", "Mystery", Unit::G, 0.0, 5.0);
    assert_eq!(unknown.unit_cost(), 0.0);
}

#[test]
fn test_recipe_costing_through_nested_reference() {
    let (ingredients, recipes, plate) = sample_catalog();

    let summary = recipe_total_cost(&recipes[0], &ingredients, &recipes);
    assert_float_absolute_eq!(summary.total_cost, 0.20, 1e-9);

    let unit_cost = recipe_unit_cost(&recipes[0], &ingredients, &recipes);
    assert_float_absolute_eq!(unit_cost, 0.0004, 1e-12);

    let cost = menu_item_cost(&plate, &ingredients, &recipes);
    assert_float_absolute_eq!(cost.total_cost, 0.10, 1e-9);
    assert_float_absolute_eq!(cost.cost_per_serving, 0.05, 1e-9);
}

#[test]
fn test_mutual_recursion_terminates() {
    let ingredients = vec![ingredient("ing_flour", "Flour", Unit::G, 1000.0, 2.0)];
    let recipes = vec![
        recipe(
            "rec_a",
            "A",
            100.0,
            Unit::G,
            vec![
                ingredient_line("ing_flour", 100.0, Unit::G),
                recipe_ref_line("rec_b", 50.0, Unit::G),
            ],
        ),
        recipe(
            "rec_b",
            "B",
            100.0,
            Unit::G,
            vec![recipe_ref_line("rec_a", 50.0, Unit::G)],
        ),
    ];

    for r in &recipes {
        let unit_cost = recipe_unit_cost(r, &ingredients, &recipes);
        assert!(unit_cost.is_finite());
        let summary = recipe_total_cost(r, &ingredients, &recipes);
        assert!(summary.total_cost.is_finite());
        assert!(summary.errors.is_empty());
    }
}

#[test]
fn test_long_chain_does_not_overflow() {
    // rec_0 -> rec_1 -> ... -> rec_199 -> flour; depth is bounded by the
    // number of distinct recipes, not by repeated revisits.
    let ingredients = vec![ingredient("ing_flour", "Flour", Unit::G, 1000.0, 2.0)];

    let mut recipes = Vec::new();
    for i in 0..200 {
        let line = if i == 199 {
            ingredient_line("ing_flour", 100.0, Unit::G)
        } else {
            recipe_ref_line(&format!("rec_{}", i + 1), 100.0, Unit::G)
        };
        recipes.push(recipe(
            &format!("rec_{}", i),
            &format!("Step {}", i),
            100.0,
            Unit::G,
            vec![line],
        ));
    }

    let unit_cost = recipe_unit_cost(&recipes[0], &ingredients, &recipes);
    assert!(unit_cost.is_finite());
}

#[test]
fn test_unit_mismatch_reported_once_per_line() {
    let ingredients = vec![ingredient("ing_milk", "Milk", Unit::Ml, 1000.0, 1.2)];
    let bad = recipe(
        "rec_bad",
        "Bad",
        100.0,
        Unit::G,
        vec![
            ingredient_line("ing_milk", 50.0, Unit::G),
            ingredient_line("ing_milk", 20.0, Unit::Ml),
        ],
    );
    let recipes = vec![bad.clone()];

    let summary = recipe_total_cost(&bad, &ingredients, &recipes);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0], "Unit mismatch in Milk (unit mismatch)");

    // The mismatched row keeps its sentinel, the good row its cost.
    assert!(summary.breakdown[0].unit_cost.is_nan());
    assert!(summary.breakdown[1].unit_cost.is_finite());
    assert_float_absolute_eq!(summary.total_cost, 20.0 * 0.0012, 1e-9);
}

#[test]
fn test_missing_references_do_not_warn() {
    let plate = menu_item(
        "menu_plate",
        "Plate",
        1.0,
        0.0,
        vec![
            ingredient_line("ing_ghost", 100.0, Unit::G),
            recipe_ref_line("rec_ghost", 100.0, Unit::G),
        ],
    );

    let cost = menu_item_cost(&plate, &[], &[]);
    assert_eq!(cost.total_cost, 0.0);
    assert!(cost.errors.is_empty());
    assert_eq!(cost.breakdown[0].label, "Missing ingredient");
    assert_eq!(cost.breakdown[1].label, "Missing recipe");
}

#[test]
fn test_shared_resolver_matches_fresh_resolution() {
    let (ingredients, recipes, plate) = sample_catalog();

    let fresh_recipe = recipe_total_cost(&recipes[0], &ingredients, &recipes);
    let fresh_menu = menu_item_cost(&plate, &ingredients, &recipes);

    let mut shared = CostResolver::new(&ingredients, &recipes);
    let batched_recipe = shared.recipe_total_cost(&recipes[0]);
    let batched_menu = shared.menu_item_cost(&plate);

    assert_eq!(batched_recipe.total_cost, fresh_recipe.total_cost);
    assert_eq!(batched_menu.total_cost, fresh_menu.total_cost);
    assert_eq!(batched_menu.cost_per_serving, fresh_menu.cost_per_serving);
}

#[test]
fn test_menu_item_with_zero_servings() {
    let ingredients = vec![ingredient("ing_flour", "Flour", Unit::G, 1000.0, 2.0)];
    let plate = menu_item(
        "menu_plate",
        "Plate",
        0.0,
        0.0,
        vec![ingredient_line("ing_flour", 100.0, Unit::G)],
    );

    let cost = menu_item_cost(&plate, &ingredients, &[]);
    assert!(cost.cost_per_serving.is_finite());
    assert_float_absolute_eq!(cost.cost_per_serving, 0.20, 1e-9);
}
