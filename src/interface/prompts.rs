use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CostError, Result};
use crate::ids;
use crate::models::{
    ComponentRef, Ingredient, MenuItem, Recipe, RecipeCategory, RecipeLine, Unit,
};
use crate::state::CatalogManager;

/// Minimum Jaro-Winkler score for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// What the `cost` command should resolve, by id.
#[derive(Debug, Clone)]
pub enum CostTarget {
    Recipe(String),
    MenuItem(String),
}

fn parse_num(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse().ok()
}

/// Prompt for a required, non-empty name.
pub fn prompt_name(label: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("A name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for a number with a default shown.
pub fn prompt_number(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()?;

    parse_num(&input).ok_or_else(|| CostError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a number that must be strictly positive.
pub fn prompt_positive_number(label: &str, default: f64) -> Result<f64> {
    let value = prompt_number(label, default)?;
    if value <= 0.0 {
        return Err(CostError::InvalidInput(format!("{} must be > 0", label)));
    }
    Ok(value)
}

/// Prompt for a number that must not be negative.
pub fn prompt_non_negative_number(label: &str, default: f64) -> Result<f64> {
    let value = prompt_number(label, default)?;
    if value < 0.0 {
        return Err(CostError::InvalidInput(format!("{} must be >= 0", label)));
    }
    Ok(value)
}

/// Prompt for a unit, defaulting to the given one.
pub fn prompt_unit(label: &str, default: Unit) -> Result<Unit> {
    let default_idx = Unit::ALL.iter().position(|u| *u == default).unwrap_or(0);
    let options: Vec<&str> = Unit::ALL.iter().map(|u| u.as_str()).collect();

    let selection = Select::new()
        .with_prompt(label)
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Unit::ALL[selection])
}

/// Prompt for optional free text; empty input becomes None.
pub fn prompt_optional_text(label: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Interactive editor for a new ingredient.
pub fn prompt_ingredient() -> Result<Ingredient> {
    let name = prompt_name("Ingredient name")?;
    let unit = prompt_unit("Unit", Unit::G)?;
    let pack_size = prompt_non_negative_number("Pack size", 1000.0)?;
    let pack_cost = prompt_non_negative_number("Pack cost", 0.0)?;
    let supplier = prompt_optional_text("Supplier (optional)")?;
    let notes = prompt_optional_text("Notes (optional)")?;

    Ok(Ingredient {
        id: ids::uid("ing"),
        name,
        unit,
        pack_size,
        pack_cost,
        supplier,
        notes,
        updated_at: Some(ids::now_iso()),
    })
}

/// Interactive editor for a new recipe, including its component lines.
pub fn prompt_recipe(ingredients: &[Ingredient], recipes: &[Recipe]) -> Result<Recipe> {
    let name = prompt_name("Recipe name")?;

    let categories = ["Base", "Sub-recipe"];
    let selection = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(1)
        .interact()?;
    let category = if selection == 0 {
        RecipeCategory::Base
    } else {
        RecipeCategory::SubRecipe
    };

    let yield_qty = prompt_positive_number("Yield quantity", 1000.0)?;
    let yield_unit = prompt_unit("Yield unit", Unit::G)?;
    let notes = prompt_optional_text("Notes (optional)")?;
    let lines = prompt_lines(ingredients, recipes)?;

    Ok(Recipe {
        id: ids::uid("rec"),
        name,
        category,
        yield_qty,
        yield_unit,
        lines,
        notes,
        updated_at: Some(ids::now_iso()),
    })
}

/// Interactive editor for a new menu item, including its component lines.
pub fn prompt_menu_item(ingredients: &[Ingredient], recipes: &[Recipe]) -> Result<MenuItem> {
    let name = prompt_name("Menu item name")?;
    let servings = prompt_positive_number("Servings", 1.0)?;
    let price = prompt_non_negative_number("Selling price", 0.0)?;
    let notes = prompt_optional_text("Notes (optional)")?;
    let lines = prompt_lines(ingredients, recipes)?;

    Ok(MenuItem {
        id: ids::uid("menu"),
        name,
        servings,
        price,
        lines,
        notes,
        updated_at: Some(ids::now_iso()),
    })
}

struct ComponentCandidate<'a> {
    name: &'a str,
    native_unit: Unit,
    component: ComponentRef,
}

fn component_candidates<'a>(
    ingredients: &'a [Ingredient],
    recipes: &'a [Recipe],
) -> Vec<ComponentCandidate<'a>> {
    let mut candidates: Vec<ComponentCandidate<'a>> = ingredients
        .iter()
        .map(|ing| ComponentCandidate {
            name: &ing.name,
            native_unit: ing.unit,
            component: ComponentRef::Ingredient {
                ingredient_id: ing.id.clone(),
            },
        })
        .collect();

    candidates.extend(recipes.iter().map(|recipe| ComponentCandidate {
        name: &recipe.name,
        native_unit: recipe.yield_unit,
        component: ComponentRef::Recipe {
            recipe_id: recipe.id.clone(),
        },
    }));

    candidates
}

fn describe(candidate: &ComponentCandidate<'_>) -> String {
    let kind = candidate.component.kind();
    format!("{} ({}, {})", candidate.name, kind, candidate.native_unit)
}

/// Component line loop: match names exactly, then fuzzily, until the user
/// finishes with an empty input.
///
/// Units must match the referenced component's own unit for the cost to
/// resolve, so the unit prompt defaults to that unit.
pub fn prompt_lines(ingredients: &[Ingredient], recipes: &[Recipe]) -> Result<Vec<RecipeLine>> {
    let mut lines = Vec::new();

    if ingredients.is_empty() && recipes.is_empty() {
        println!("No components in the catalog yet; add ingredients first.");
        return Ok(lines);
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Component name (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let candidates = component_candidates(ingredients, recipes);

        // Exact match first (case-insensitive).
        let chosen = if let Some(exact) = candidates
            .iter()
            .find(|c| c.name.to_lowercase() == input.to_lowercase())
        {
            Some(exact)
        } else {
            let mut scored: Vec<(&ComponentCandidate<'_>, f64)> = candidates
                .iter()
                .map(|c| (c, jaro_winkler(&c.name.to_lowercase(), &input.to_lowercase())))
                .filter(|(_, score)| *score > FUZZY_THRESHOLD)
                .collect();
            scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            if scored.is_empty() {
                println!("No matching component found for '{}'", input);
                None
            } else if scored.len() == 1 {
                let candidate = scored[0].0;
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", candidate.name))
                    .default(true)
                    .interact()?;
                confirm.then_some(candidate)
            } else {
                let mut options: Vec<String> =
                    scored.iter().take(5).map(|(c, _)| describe(c)).collect();
                options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if selection < options.len() - 1 {
                    Some(scored[selection].0)
                } else {
                    None
                }
            }
        };

        let Some(candidate) = chosen else { continue };

        let qty = prompt_number("Quantity", 0.0)?;
        let unit = prompt_unit("Unit", candidate.native_unit)?;

        println!("Added: {} - {} {}", candidate.name, qty, unit);
        lines.push(RecipeLine {
            id: ids::uid("line"),
            component: candidate.component.clone(),
            qty,
            unit,
        });
    }

    Ok(lines)
}

/// Resolve the `cost` command's target by name, prompting when the name
/// is missing or ambiguous.
pub fn resolve_cost_target(manager: &CatalogManager, name: Option<&str>) -> Result<CostTarget> {
    if manager.recipes().is_empty() && manager.menu_items().is_empty() {
        return Err(CostError::NotFound(
            "no recipes or menu items in the catalog".to_string(),
        ));
    }

    if let Some(name) = name {
        if let Some(item) = manager.menu_item_by_name(name) {
            return Ok(CostTarget::MenuItem(item.id.clone()));
        }
        if let Some(recipe) = manager.recipe_by_name(name) {
            return Ok(CostTarget::Recipe(recipe.id.clone()));
        }
        return fuzzy_cost_target(manager, name);
    }

    // No name given: pick from everything.
    let mut options: Vec<(String, CostTarget)> = manager
        .menu_items()
        .iter()
        .map(|m| (format!("{} (menu item)", m.name), CostTarget::MenuItem(m.id.clone())))
        .collect();
    options.extend(
        manager
            .recipes()
            .iter()
            .map(|r| (format!("{} (recipe)", r.name), CostTarget::Recipe(r.id.clone()))),
    );

    let labels: Vec<&String> = options.iter().map(|(label, _)| label).collect();
    let selection = Select::new()
        .with_prompt("Cost which recipe or menu item?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection].1.clone())
}

fn fuzzy_cost_target(manager: &CatalogManager, name: &str) -> Result<CostTarget> {
    let query = name.to_lowercase();

    let mut scored: Vec<(String, CostTarget, f64)> = manager
        .menu_items()
        .iter()
        .map(|m| {
            (
                format!("{} (menu item)", m.name),
                CostTarget::MenuItem(m.id.clone()),
                jaro_winkler(&m.key(), &query),
            )
        })
        .chain(manager.recipes().iter().map(|r| {
            (
                format!("{} (recipe)", r.name),
                CostTarget::Recipe(r.id.clone()),
                jaro_winkler(&r.key(), &query),
            )
        }))
        .filter(|(_, _, score)| *score > FUZZY_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    if scored.is_empty() {
        return Err(CostError::NotFound(name.to_string()));
    }

    let mut options: Vec<&String> = scored.iter().take(5).map(|(label, _, _)| label).collect();
    let none_label = "None of these".to_string();
    options.push(&none_label);

    let selection = Select::new()
        .with_prompt(format!("No exact match for '{}'. Did you mean:", name))
        .items(&options)
        .default(0)
        .interact()?;

    if selection < options.len() - 1 {
        Ok(scored[selection].1.clone())
    } else {
        Err(CostError::NotFound(name.to_string()))
    }
}
