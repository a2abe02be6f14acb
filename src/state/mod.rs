mod manager;
mod persistence;

pub use manager::CatalogManager;
pub use persistence::{export_json, import_json, load_catalog, save_catalog};
