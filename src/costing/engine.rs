use std::collections::{HashMap, HashSet};

use crate::models::{ComponentRef, EPS, Ingredient, MenuItem, Recipe, RecipeLine, RefKind, Unit};

/// One resolved line of a recipe or menu item, for display.
///
/// `unit_cost` and `line_cost` may be NaN when the line's unit does not
/// match the referenced component's unit; totals zero such lines out but
/// the row keeps the sentinel so callers can render "N/A".
#[derive(Debug, Clone)]
pub struct CostBreakdownRow {
    pub label: String,
    pub qty: f64,
    pub unit: Unit,
    pub unit_cost: f64,
    pub line_cost: f64,
    pub kind: RefKind,
}

/// Total cost of a recipe plus its per-line breakdown and warnings.
#[derive(Debug, Clone)]
pub struct CostSummary {
    pub total_cost: f64,
    pub breakdown: Vec<CostBreakdownRow>,
    pub errors: Vec<String>,
}

/// Menu item cost: the recipe-style summary plus a per-serving figure.
#[derive(Debug, Clone)]
pub struct MenuCost {
    pub total_cost: f64,
    pub cost_per_serving: f64,
    pub breakdown: Vec<CostBreakdownRow>,
    pub errors: Vec<String>,
}

/// Outcome of resolving a single line against the catalog.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    pub unit_cost: f64,
    pub kind: RefKind,
    pub label: String,
}

#[inline]
fn safe_mul(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    a * b
}

/// Resolves component costs against a catalog snapshot.
///
/// Owns the memo and visiting set for one resolution pass: the memo caches
/// recipe unit costs by id, and the visiting set holds the recipes
/// currently on the recursion stack so cyclic references short-circuit to
/// a zero contribution instead of recursing forever. A resolver may be
/// reused across many top-level targets to avoid recomputing shared
/// sub-recipes; results are identical either way because costing is pure.
pub struct CostResolver<'a> {
    ingredients: &'a [Ingredient],
    recipes: &'a [Recipe],
    memo: HashMap<String, f64>,
    visiting: HashSet<String>,
}

impl<'a> CostResolver<'a> {
    pub fn new(ingredients: &'a [Ingredient], recipes: &'a [Recipe]) -> Self {
        Self {
            ingredients,
            recipes,
            memo: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    /// Resolve the unit cost, kind, and display label for one line.
    ///
    /// Never fails: dangling references come back as a zero cost with a
    /// "Missing ..." label, and unit mismatches come back as a NaN unit
    /// cost with the label annotated.
    pub fn resolve_line(&mut self, line: &RecipeLine) -> ResolvedLine {
        match &line.component {
            ComponentRef::Ingredient { ingredient_id } => {
                let Some(ing) = self.ingredients.iter().find(|i| &i.id == ingredient_id) else {
                    return ResolvedLine {
                        unit_cost: 0.0,
                        kind: RefKind::Ingredient,
                        label: "Missing ingredient".to_string(),
                    };
                };
                if ing.unit != line.unit {
                    return ResolvedLine {
                        unit_cost: f64::NAN,
                        kind: RefKind::Ingredient,
                        label: format!("{} (unit mismatch)", ing.name),
                    };
                }
                ResolvedLine {
                    unit_cost: ing.unit_cost(),
                    kind: RefKind::Ingredient,
                    label: ing.name.clone(),
                }
            }
            ComponentRef::Recipe { recipe_id } => {
                let Some(recipe) = self.recipes.iter().find(|r| &r.id == recipe_id) else {
                    return ResolvedLine {
                        unit_cost: 0.0,
                        kind: RefKind::Recipe,
                        label: "Missing recipe".to_string(),
                    };
                };
                let recipe = recipe.clone();
                let unit_cost = self.recipe_unit_cost(&recipe);
                if recipe.yield_unit != line.unit {
                    return ResolvedLine {
                        unit_cost: f64::NAN,
                        kind: RefKind::Recipe,
                        label: format!("{} (unit mismatch)", recipe.name),
                    };
                }
                ResolvedLine {
                    unit_cost,
                    kind: RefKind::Recipe,
                    label: recipe.name,
                }
            }
        }
    }

    fn cost_lines(&mut self, lines: &[RecipeLine]) -> CostSummary {
        let mut breakdown = Vec::with_capacity(lines.len());
        let mut errors = Vec::new();

        for line in lines {
            let resolved = self.resolve_line(line);
            if !resolved.unit_cost.is_finite() {
                errors.push(format!("Unit mismatch in {}", resolved.label));
            }
            let line_cost = safe_mul(resolved.unit_cost, line.qty);
            breakdown.push(CostBreakdownRow {
                label: resolved.label,
                qty: line.qty,
                unit: line.unit,
                unit_cost: resolved.unit_cost,
                line_cost,
                kind: resolved.kind,
            });
        }

        let total_cost = breakdown
            .iter()
            .map(|row| if row.line_cost.is_finite() { row.line_cost } else { 0.0 })
            .sum();

        CostSummary {
            total_cost,
            breakdown,
            errors,
        }
    }

    /// Total cost of one recipe batch, with breakdown and warnings.
    pub fn recipe_total_cost(&mut self, recipe: &Recipe) -> CostSummary {
        self.cost_lines(&recipe.lines)
    }

    /// Cost per one `yield_unit` of the recipe's output.
    ///
    /// Memoized per recipe id. A recipe already being resolved higher up
    /// the stack returns 0 without memoizing the placeholder, so a later
    /// non-cyclic call site still computes the real value.
    pub fn recipe_unit_cost(&mut self, recipe: &Recipe) -> f64 {
        if let Some(&cached) = self.memo.get(&recipe.id) {
            return cached;
        }
        if self.visiting.contains(&recipe.id) {
            return 0.0;
        }
        self.visiting.insert(recipe.id.clone());

        let summary = self.recipe_total_cost(recipe);
        let unit_cost = if recipe.yield_qty > EPS {
            summary.total_cost / recipe.yield_qty
        } else {
            0.0
        };
        self.memo.insert(recipe.id.clone(), unit_cost);

        self.visiting.remove(&recipe.id);
        unit_cost
    }

    /// Total and per-serving cost of a menu item.
    ///
    /// Servings at or below epsilon are treated as one serving so the
    /// per-serving figure never divides by zero.
    pub fn menu_item_cost(&mut self, item: &MenuItem) -> MenuCost {
        let summary = self.cost_lines(&item.lines);
        let servings = if item.servings > EPS { item.servings } else { 1.0 };

        MenuCost {
            total_cost: summary.total_cost,
            cost_per_serving: summary.total_cost / servings,
            breakdown: summary.breakdown,
            errors: summary.errors,
        }
    }
}

/// Cost a recipe with a fresh resolver.
pub fn recipe_total_cost(
    recipe: &Recipe,
    ingredients: &[Ingredient],
    recipes: &[Recipe],
) -> CostSummary {
    CostResolver::new(ingredients, recipes).recipe_total_cost(recipe)
}

/// Unit cost of a recipe's yield, with a fresh resolver.
pub fn recipe_unit_cost(recipe: &Recipe, ingredients: &[Ingredient], recipes: &[Recipe]) -> f64 {
    CostResolver::new(ingredients, recipes).recipe_unit_cost(recipe)
}

/// Cost a menu item with a fresh resolver.
///
/// Menu items are resolution roots; they never participate in the recipe
/// cycle graph themselves.
pub fn menu_item_cost(item: &MenuItem, ingredients: &[Ingredient], recipes: &[Recipe]) -> MenuCost {
    CostResolver::new(ingredients, recipes).menu_item_cost(item)
}
