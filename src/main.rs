use std::fs::File;
use std::path::Path;

use clap::Parser;

use menu_coster_rs::cli::{AddKind, Cli, Command};
use menu_coster_rs::costing::{
    effective_target, ingredient_summaries, menu_item_cost, menu_summaries, recipe_summaries,
    recipe_total_cost, recipe_unit_cost,
};
use menu_coster_rs::error::Result;
use menu_coster_rs::interface::format::money;
use menu_coster_rs::interface::{
    CostTarget, display_ingredient_report, display_menu_item_cost, display_menu_report,
    display_recipe_cost, display_recipe_report, prompt_ingredient, prompt_menu_item,
    prompt_recipe, prompt_yes_no, resolve_cost_target,
};
use menu_coster_rs::importer::{import_dishes_csv, import_ingredients_csv};
use menu_coster_rs::state::{CatalogManager, export_json, load_catalog, save_catalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Report { target } => cmd_report(&cli.file, target),
        Command::Cost { name } => cmd_cost(&cli.file, name.as_deref()),
        Command::Add { kind } => cmd_add(&cli.file, kind),
        Command::Import {
            path,
            dishes,
            replace,
        } => cmd_import(&cli.file, &path, dishes, replace),
        Command::Export { out } => cmd_export(&cli.file, out.as_deref()),
    }
}

/// Print the three summary tables: ingredients, recipes, menu items.
fn cmd_report(file_path: &str, target: Option<f64>) -> Result<()> {
    let manager = CatalogManager::new(load_catalog(file_path)?);

    if manager.is_empty() {
        println!("Catalog is empty. Use 'add' or 'import' to get started.");
        return Ok(());
    }

    let target = effective_target(target);

    display_ingredient_report(&ingredient_summaries(manager.ingredients()));
    display_recipe_report(&recipe_summaries(manager.ingredients(), manager.recipes()));
    display_menu_report(
        &menu_summaries(
            manager.ingredients(),
            manager.recipes(),
            manager.menu_items(),
            target,
        ),
        target,
    );

    Ok(())
}

/// Cost one recipe or menu item and show its breakdown.
fn cmd_cost(file_path: &str, name: Option<&str>) -> Result<()> {
    let manager = CatalogManager::new(load_catalog(file_path)?);

    if manager.is_empty() {
        println!("Catalog is empty. Use 'add' or 'import' to get started.");
        return Ok(());
    }

    match resolve_cost_target(&manager, name)? {
        CostTarget::Recipe(id) => {
            if let Some(recipe) = manager.recipe(&id) {
                let summary =
                    recipe_total_cost(recipe, manager.ingredients(), manager.recipes());
                display_recipe_cost(recipe, &summary);
            }
        }
        CostTarget::MenuItem(id) => {
            if let Some(item) = manager.menu_item(&id) {
                let cost = menu_item_cost(item, manager.ingredients(), manager.recipes());
                display_menu_item_cost(item, &cost);
            }
        }
    }

    Ok(())
}

/// Interactively add an ingredient, recipe, or menu item, then save.
fn cmd_add(file_path: &str, kind: AddKind) -> Result<()> {
    let mut manager = CatalogManager::new(load_catalog(file_path)?);

    match kind {
        AddKind::Ingredient => {
            let ingredient = prompt_ingredient()?;
            println!(
                "Added ingredient {} ({} per {})",
                ingredient.name,
                money(ingredient.unit_cost()),
                ingredient.unit
            );
            manager.upsert_ingredient(ingredient);
        }
        AddKind::Recipe => {
            let recipe = prompt_recipe(manager.ingredients(), manager.recipes())?;
            let unit_cost =
                recipe_unit_cost(&recipe, manager.ingredients(), manager.recipes());
            println!(
                "Added recipe {} ({} per {})",
                recipe.name,
                money(unit_cost),
                recipe.yield_unit
            );
            manager.upsert_recipe(recipe);
        }
        AddKind::MenuItem => {
            let item = prompt_menu_item(manager.ingredients(), manager.recipes())?;
            let cost = menu_item_cost(&item, manager.ingredients(), manager.recipes());
            println!(
                "Added menu item {} ({} per serving)",
                item.name,
                money(cost.cost_per_serving)
            );
            manager.upsert_menu_item(item);
        }
    }

    save_catalog(file_path, manager.catalog())?;
    println!("Catalog saved.");

    Ok(())
}

/// Import a CSV sheet, preview it, and apply on confirmation.
fn cmd_import(file_path: &str, csv_path: &str, dishes: bool, replace: bool) -> Result<()> {
    if !Path::new(csv_path).exists() {
        eprintln!("CSV file not found: {}", csv_path);
        return Ok(());
    }

    let mut manager = CatalogManager::new(load_catalog(file_path)?);
    let file = File::open(csv_path)?;

    if dishes {
        let import = import_dishes_csv(file)?;
        println!(
            "Found {} dishes using {} ingredients in {}",
            import.menu_items.len(),
            import.ingredients.len(),
            csv_path
        );
        print_warnings(&import.warnings);

        if !prompt_yes_no("Apply import?", true)? {
            println!("Import cancelled.");
            return Ok(());
        }

        let added_ingredients = manager.apply_imported_ingredients(import.ingredients, false);
        let added_items = manager.apply_imported_menu_items(import.menu_items, replace);
        println!(
            "Imported {} menu items and {} new ingredients.",
            added_items, added_ingredients
        );
    } else {
        let import = import_ingredients_csv(file)?;
        println!(
            "Found {} ingredients in {}",
            import.ingredients.len(),
            csv_path
        );
        print_warnings(&import.warnings);

        if !prompt_yes_no("Apply import?", true)? {
            println!("Import cancelled.");
            return Ok(());
        }

        let added = manager.apply_imported_ingredients(import.ingredients, replace);
        println!("Imported {} ingredients.", added);
    }

    save_catalog(file_path, manager.catalog())?;
    println!("Catalog saved.");

    Ok(())
}

/// Export the catalog as a JSON document.
fn cmd_export(file_path: &str, out: Option<&str>) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    let json = export_json(&catalog)?;

    match out {
        Some(out_path) => {
            std::fs::write(out_path, &json)?;
            println!("Catalog exported to {}", out_path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("  - {}", warning);
    }
}
