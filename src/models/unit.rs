use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement unit for ingredients, recipe yields, and line quantities.
///
/// The three units are incompatible: a line's unit must match the unit of
/// the component it references, with no implicit conversion between mass,
/// volume, and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    G,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "pc")]
    Pc,
}

impl Unit {
    /// All units, in display order.
    pub const ALL: [Unit; 3] = [Unit::G, Unit::Ml, Unit::Pc];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Pc => "pc",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tokens() {
        assert_eq!(serde_json::to_string(&Unit::G).unwrap(), "\"g\"");
        let unit: Unit = serde_json::from_str("\"ml\"").unwrap();
        assert_eq!(unit, Unit::Ml);
    }

    #[test]
    fn test_display_matches_serde() {
        for unit in Unit::ALL {
            let token = serde_json::to_string(&unit).unwrap();
            assert_eq!(token, format!("\"{}\"", unit));
        }
    }
}
