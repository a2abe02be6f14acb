use std::fs;
use std::path::Path;

use crate::error::{CostError, Result};
use crate::ids;
use crate::models::{Catalog, SCHEMA_VERSION};

/// Load the working catalog from a JSON file.
///
/// A missing file, unparseable content, or an unexpected schema version
/// all fall back to the empty default catalog rather than failing; the
/// working file is never a hard error. Explicit imports go through
/// [`import_json`], which does reject bad documents.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Catalog::default());
        }
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<Catalog>(&content) {
        Ok(catalog) if catalog.schema_version == SCHEMA_VERSION => Ok(catalog),
        _ => Ok(Catalog::default()),
    }
}

/// Save the catalog to a JSON file, stamping the current schema version.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let mut document = catalog.clone();
    document.schema_version = SCHEMA_VERSION;

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize the catalog as an export document stamped with the current
/// time.
pub fn export_json(catalog: &Catalog) -> Result<String> {
    let mut document = catalog.clone();
    document.schema_version = SCHEMA_VERSION;
    document.exported_at = Some(ids::now_iso());

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a previously exported document.
///
/// Unlike [`load_catalog`], a version mismatch here is an error the user
/// should see, since they explicitly picked the file.
pub fn import_json(text: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(text)?;
    if catalog.schema_version != SCHEMA_VERSION {
        return Err(CostError::UnsupportedSchema(catalog.schema_version));
    }
    Ok(catalog)
}
