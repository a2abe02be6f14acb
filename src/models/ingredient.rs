use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// Quantities at or below this are treated as zero when dividing.
pub const EPS: f64 = 1e-9;

/// A purchasable ingredient, priced per pack.
///
/// `pack_size` is the quantity per purchased pack, in `unit`; `pack_cost`
/// is the money paid for one pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: Unit,
    pub pack_size: f64,
    pub pack_cost: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Ingredient {
    /// Cost per one `unit` of this ingredient.
    ///
    /// Returns 0 when the pack size is zero or near-zero; the cost is
    /// unknown rather than free, and callers decide how to render that.
    #[inline]
    pub fn unit_cost(&self) -> f64 {
        if self.pack_size <= EPS {
            return 0.0;
        }
        self.pack_cost / self.pack_size
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            id: "ing_1".to_string(),
            name: "Flour".to_string(),
            unit: Unit::G,
            pack_size: 1000.0,
            pack_cost: 2.0,
            supplier: None,
            notes: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_unit_cost() {
        let ing = sample_ingredient();
        assert!((ing.unit_cost() - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_unit_cost_zero_pack_size() {
        let mut ing = sample_ingredient();
        ing.pack_size = 0.0;
        assert_eq!(ing.unit_cost(), 0.0);

        ing.pack_size = 1e-12;
        assert_eq!(ing.unit_cost(), 0.0);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_string(&sample_ingredient()).unwrap();
        assert!(json.contains("\"packSize\":1000.0"));
        assert!(json.contains("\"packCost\":2.0"));
    }
}
