mod sheet;

pub use sheet::{
    DishImport, IngredientImport, import_dishes_csv, import_ingredients_csv, normalize_unit,
    parse_number,
};
