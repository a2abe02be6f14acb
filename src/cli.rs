use clap::{Parser, Subcommand};

/// MenuCoster — a recipe costing CLI that turns ingredients and recipes
/// into menu prices.
#[derive(Parser, Debug)]
#[command(name = "menu_coster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "menu_costing.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print cost summaries for ingredients, recipes, and menu items.
    Report {
        /// Target food cost ratio for suggested prices (eg 0.30).
        #[arg(long)]
        target: Option<f64>,
    },

    /// Show the line-by-line cost breakdown for a recipe or menu item.
    Cost {
        /// Name of the recipe or menu item. Prompts when omitted.
        name: Option<String>,
    },

    /// Interactively add a record to the catalog.
    Add {
        #[command(subcommand)]
        kind: AddKind,
    },

    /// Import ingredients or whole dishes from a CSV spreadsheet export.
    Import {
        /// Path to the CSV file.
        path: String,

        /// Interpret rows as dishes (Dish, Ingredient, Qty, ...) instead
        /// of ingredients.
        #[arg(long)]
        dishes: bool,

        /// Replace the existing records instead of appending.
        #[arg(long)]
        replace: bool,
    },

    /// Export the catalog as a JSON document.
    Export {
        /// Output path. Prints to stdout when omitted.
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddKind {
    /// Add a purchasable ingredient.
    Ingredient,

    /// Add a recipe or sub-recipe.
    Recipe,

    /// Add a sellable menu item.
    MenuItem,
}

impl Default for Command {
    fn default() -> Self {
        Command::Report { target: None }
    }
}
