use std::collections::HashMap;
use std::io::Read;

use crate::error::{CostError, Result};
use crate::ids;
use crate::models::{ComponentRef, Ingredient, MenuItem, RecipeLine, Unit};

/// Result of parsing an ingredients sheet.
#[derive(Debug)]
pub struct IngredientImport {
    pub ingredients: Vec<Ingredient>,
    pub warnings: Vec<String>,
}

/// Result of parsing a dishes sheet: menu items plus the per-unit-priced
/// ingredients created for them.
#[derive(Debug)]
pub struct DishImport {
    pub ingredients: Vec<Ingredient>,
    pub menu_items: Vec<MenuItem>,
    pub warnings: Vec<String>,
}

/// Parse a spreadsheet number: strips currency symbols and spaces, and
/// accepts a decimal comma. Anything unparseable becomes 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    cleaned.replace(',', ".").parse().unwrap_or(0.0)
}

/// Map free-text unit cells onto a [`Unit`]; unknown text falls back to
/// grams, the dominant unit in practice.
pub fn normalize_unit(raw: &str) -> Unit {
    let normalized = raw.trim().to_lowercase();
    if normalized.contains("ml") {
        return Unit::Ml;
    }
    if normalized.contains("pc") || normalized.contains("piece") {
        return Unit::Pc;
    }
    Unit::G
}

fn header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

fn column(map: &HashMap<String, usize>, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| map.get(*alias).copied())
}

fn cell<'r>(record: &'r csv::StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Parse an ingredients sheet: one row per purchasable ingredient.
///
/// Recognized columns (several aliases each): Name, Unit, Pack Size,
/// Pack Cost, Supplier, Notes. Rows without a name are skipped with a
/// warning; degenerate sizes and costs are recorded as 0, also with a
/// warning.
pub fn import_ingredients_csv<R: Read>(reader: R) -> Result<IngredientImport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let columns = header_map(csv_reader.headers()?);

    let name_col = column(&columns, &["name", "ingredient", "item"]);
    let unit_col = column(&columns, &["unit", "measure"]);
    let size_col = column(&columns, &["pack size", "packsize", "pack qty", "qty", "quantity"]);
    let cost_col = column(&columns, &["pack cost", "packcost", "cost", "price"]);
    let supplier_col = column(&columns, &["supplier", "vendor"]);
    let notes_col = column(&columns, &["notes", "comment"]);

    let mut warnings = Vec::new();
    let mut ingredients = Vec::new();

    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = idx + 2; // 1-based, after the header row

        let name = cell(&record, name_col);
        if name.is_empty() {
            warnings.push(format!("Row {}: missing ingredient name", row));
            continue;
        }

        let unit = normalize_unit(cell(&record, unit_col));
        let pack_size = parse_number(cell(&record, size_col));
        let pack_cost = parse_number(cell(&record, cost_col));
        let supplier = cell(&record, supplier_col);
        let notes = cell(&record, notes_col);

        if pack_size <= 0.0 {
            warnings.push(format!("Row {}: unknown pack size, recorded as 0", row));
        }
        if pack_cost < 0.0 {
            warnings.push(format!("Row {}: negative pack cost, recorded as 0", row));
        }

        ingredients.push(Ingredient {
            id: ids::uid("ing"),
            name: name.to_string(),
            unit,
            pack_size: pack_size.max(0.0),
            pack_cost: pack_cost.max(0.0),
            supplier: (!supplier.is_empty()).then(|| supplier.to_string()),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            updated_at: Some(ids::now_iso()),
        });
    }

    if ingredients.is_empty() {
        return Err(CostError::InvalidInput(
            "no ingredients found in the file".to_string(),
        ));
    }

    Ok(IngredientImport {
        ingredients,
        warnings,
    })
}

/// Parse a dishes sheet: one row per (dish, ingredient) pair.
///
/// Dishes become menu items, grouped by name; ingredients are created on
/// first sight with a pack of 1 unit at the row's unit cost, so the
/// engine prices them per unit directly.
pub fn import_dishes_csv<R: Read>(reader: R) -> Result<DishImport> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let columns = header_map(csv_reader.headers()?);

    let dish_col = column(&columns, &["dish", "menu item", "plate"]);
    let ing_col = column(&columns, &["ingredient", "raw material", "item"]);
    let qty_col = column(&columns, &["qty", "quantity", "grams"]);
    let unit_col = column(&columns, &["unit", "measure"]);
    let unit_cost_col = column(&columns, &["unit cost", "cost per unit", "cost"]);
    let price_col = column(&columns, &["price", "selling price"]);
    let servings_col = column(&columns, &["servings", "portions"]);

    let mut warnings = Vec::new();
    let mut ingredients: Vec<Ingredient> = Vec::new();
    let mut ingredient_index: HashMap<String, usize> = HashMap::new();
    let mut menu_items: Vec<MenuItem> = Vec::new();
    let mut menu_index: HashMap<String, usize> = HashMap::new();

    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = idx + 2;

        let dish_name = cell(&record, dish_col);
        let ing_name = cell(&record, ing_col);

        if dish_name.is_empty() && ing_name.is_empty() {
            continue;
        }
        if dish_name.is_empty() {
            warnings.push(format!("Row {}: missing dish name", row));
            continue;
        }
        if ing_name.is_empty() {
            warnings.push(format!(
                "Row {}: missing ingredient name for dish {}",
                row, dish_name
            ));
            continue;
        }

        let qty = parse_number(cell(&record, qty_col));
        let unit = normalize_unit(cell(&record, unit_col));
        let unit_cost = parse_number(cell(&record, unit_cost_col));
        let price = parse_number(cell(&record, price_col));
        let servings = parse_number(cell(&record, servings_col));

        if qty <= 0.0 {
            warnings.push(format!("Row {}: quantity for {} recorded as 0", row, ing_name));
        }
        if unit_cost < 0.0 {
            warnings.push(format!(
                "Row {}: negative unit cost for {}, recorded as 0",
                row, ing_name
            ));
        }

        let ing_key = ing_name.to_lowercase();
        let ing_idx = match ingredient_index.get(&ing_key) {
            Some(&i) => {
                let existing = &mut ingredients[i];
                if unit_cost > 0.0 && unit_cost != existing.pack_cost {
                    existing.pack_cost = unit_cost;
                }
                i
            }
            None => {
                ingredients.push(Ingredient {
                    id: ids::uid("ing"),
                    name: ing_name.to_string(),
                    unit,
                    pack_size: if unit_cost > 0.0 { 1.0 } else { 0.0 },
                    pack_cost: unit_cost.max(0.0),
                    supplier: None,
                    notes: None,
                    updated_at: Some(ids::now_iso()),
                });
                ingredient_index.insert(ing_key, ingredients.len() - 1);
                ingredients.len() - 1
            }
        };

        let menu_key = dish_name.to_lowercase();
        let menu_idx = match menu_index.get(&menu_key) {
            Some(&i) => {
                let existing = &mut menu_items[i];
                if price > 0.0 {
                    existing.price = price;
                }
                if servings > 0.0 {
                    existing.servings = servings;
                }
                i
            }
            None => {
                menu_items.push(MenuItem {
                    id: ids::uid("menu"),
                    name: dish_name.to_string(),
                    servings: if servings > 0.0 { servings } else { 1.0 },
                    price: price.max(0.0),
                    lines: Vec::new(),
                    notes: None,
                    updated_at: Some(ids::now_iso()),
                });
                menu_index.insert(menu_key, menu_items.len() - 1);
                menu_items.len() - 1
            }
        };

        let ingredient_id = ingredients[ing_idx].id.clone();
        menu_items[menu_idx].lines.push(RecipeLine {
            id: ids::uid("line"),
            component: ComponentRef::Ingredient { ingredient_id },
            qty: qty.max(0.0),
            unit,
        });
    }

    if menu_items.is_empty() {
        return Err(CostError::InvalidInput(
            "no dishes found in the file".to_string(),
        ));
    }

    Ok(DishImport {
        ingredients,
        menu_items,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), 12.0);
        assert_eq!(parse_number("2,5"), 2.5);
        assert_eq!(parse_number("3.40 EUR"), 3.4);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("-4"), -4.0);
    }

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit("g"), Unit::G);
        assert_eq!(normalize_unit("  ML "), Unit::Ml);
        assert_eq!(normalize_unit("pcs"), Unit::Pc);
        assert_eq!(normalize_unit("pieces"), Unit::Pc);
        assert_eq!(normalize_unit("mystery"), Unit::G);
    }

    #[test]
    fn test_import_ingredients_with_warnings() {
        let sheet = "\
Name,Unit,Pack Size,Pack Cost,Supplier
Flour,g,1000,2.00,Mill Co
,g,500,1.00,
Olive Oil,ml,0,8.50,
";
        let import = import_ingredients_csv(sheet.as_bytes()).unwrap();
        assert_eq!(import.ingredients.len(), 2);
        assert_eq!(import.ingredients[0].name, "Flour");
        assert_eq!(import.ingredients[0].supplier.as_deref(), Some("Mill Co"));
        assert_eq!(import.ingredients[1].unit, Unit::Ml);
        assert_eq!(import.ingredients[1].pack_size, 0.0);

        assert_eq!(import.warnings.len(), 2);
        assert!(import.warnings[0].starts_with("Row 3:"));
        assert!(import.warnings[1].contains("unknown pack size"));
    }

    #[test]
    fn test_import_ingredients_header_aliases() {
        let sheet = "Item,Measure,Qty,Cost\nSalt,g,500,0.80\n";
        let import = import_ingredients_csv(sheet.as_bytes()).unwrap();
        assert_eq!(import.ingredients.len(), 1);
        assert_eq!(import.ingredients[0].pack_size, 500.0);
        assert!((import.ingredients[0].pack_cost - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_import_ingredients_empty_is_error() {
        let sheet = "Name,Unit,Pack Size,Pack Cost\n";
        assert!(import_ingredients_csv(sheet.as_bytes()).is_err());
    }

    #[test]
    fn test_import_dishes_groups_by_name() {
        let sheet = "\
Dish,Ingredient,Qty,Unit,Unit Cost,Price,Servings
Pasta,Flour,120,g,0.002,9.50,1
Pasta,Egg,2,pc,0.30,,
Salad,Lettuce,80,g,0.004,6.00,2
";
        let import = import_dishes_csv(sheet.as_bytes()).unwrap();
        assert_eq!(import.menu_items.len(), 2);
        assert_eq!(import.ingredients.len(), 3);

        let pasta = &import.menu_items[0];
        assert_eq!(pasta.name, "Pasta");
        assert_eq!(pasta.lines.len(), 2);
        assert!((pasta.price - 9.5).abs() < 1e-12);

        let salad = &import.menu_items[1];
        assert_eq!(salad.servings, 2.0);

        // Created ingredients price per single unit.
        let egg = import
            .ingredients
            .iter()
            .find(|i| i.name == "Egg")
            .unwrap();
        assert_eq!(egg.pack_size, 1.0);
        assert!((egg.pack_cost - 0.30).abs() < 1e-12);
        assert_eq!(egg.unit, Unit::Pc);
    }

    #[test]
    fn test_import_dishes_shared_ingredient_not_duplicated() {
        let sheet = "\
Dish,Ingredient,Qty,Unit,Unit Cost
Pasta,Flour,120,g,0.002
Bread,Flour,200,g,0.002
";
        let import = import_dishes_csv(sheet.as_bytes()).unwrap();
        assert_eq!(import.ingredients.len(), 1);
        assert_eq!(import.menu_items.len(), 2);

        let flour_id = &import.ingredients[0].id;
        for item in &import.menu_items {
            match &item.lines[0].component {
                ComponentRef::Ingredient { ingredient_id } => {
                    assert_eq!(ingredient_id, flour_id)
                }
                other => panic!("expected ingredient ref, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_import_dishes_row_warnings() {
        let sheet = "\
Dish,Ingredient,Qty,Unit,Unit Cost
Pasta,,120,g,0.002
,Flour,120,g,0.002
Pasta,Flour,0,g,0.002
";
        let import = import_dishes_csv(sheet.as_bytes()).unwrap();
        assert_eq!(import.warnings.len(), 3);
        assert!(import.warnings[0].contains("missing ingredient name"));
        assert!(import.warnings[1].contains("missing dish name"));
        assert!(import.warnings[2].contains("recorded as 0"));
    }
}
