//! Physical condition of a secondhand part.

use serde::{Deserialize, Serialize};

/// Condition grade of a listed part.
///
/// Serialized with the human-readable labels the catalog stores on disk
/// (`"Like New"` carries a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    #[default]
    Used,
}

impl Condition {
    /// All conditions, best grade first.
    pub const ALL: [Self; 4] = [Self::New, Self::LikeNew, Self::Good, Self::Used];

    /// Display label for this condition.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Good => "Good",
            Self::Used => "Used",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid condition: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_serde_like_new() {
        let json = serde_json::to_string(&Condition::LikeNew).unwrap();
        assert_eq!(json, "\"Like New\"");

        let back: Condition = serde_json::from_str("\"Like New\"").unwrap();
        assert_eq!(back, Condition::LikeNew);
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!("like new".parse::<Condition>().unwrap(), Condition::LikeNew);
        assert_eq!("Good".parse::<Condition>().unwrap(), Condition::Good);
        assert!("Mint".parse::<Condition>().is_err());
    }
}
