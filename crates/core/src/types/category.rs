//! Product category for computer-part listings.

use serde::{Deserialize, Serialize};

/// Category of a computer part.
///
/// Serialized with the display labels the catalog stores on disk
/// (e.g. `"CPU"`, `"Motherboard"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    Motherboard,
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Cooling,
    #[default]
    Other,
}

impl Category {
    /// All categories, in the order they appear in menu surfaces.
    pub const ALL: [Self; 9] = [
        Self::Cpu,
        Self::Gpu,
        Self::Motherboard,
        Self::Ram,
        Self::Storage,
        Self::Psu,
        Self::Case,
        Self::Cooling,
        Self::Other,
    ];

    /// Display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
            Self::Storage => "Storage",
            Self::Psu => "PSU",
            Self::Case => "Case",
            Self::Cooling => "Cooling",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_labels() {
        let json = serde_json::to_string(&Category::Cpu).unwrap();
        assert_eq!(json, "\"CPU\"");

        let back: Category = serde_json::from_str("\"Motherboard\"").unwrap();
        assert_eq!(back, Category::Motherboard);
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("gpu".parse::<Category>().unwrap(), Category::Gpu);
        assert_eq!("Cooling".parse::<Category>().unwrap(), Category::Cooling);
        assert!("Keyboard".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_all_matches_labels() {
        for category in Category::ALL {
            assert_eq!(
                category.label().parse::<Category>().unwrap(),
                category,
                "label round-trip for {category:?}"
            );
        }
    }
}
