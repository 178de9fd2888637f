use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery category of a technique
///
/// The range decides which stats the damage formula reads and which
/// retaliation conditions react to the hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Range {
    #[default]
    Melee,
    Touch,
    Ranged,
    Reach,
    Reliable,
    Special,
}

impl Range {
    /// Get all range variants
    pub fn all() -> &'static [Range] {
        &[
            Range::Melee,
            Range::Touch,
            Range::Ranged,
            Range::Reach,
            Range::Reliable,
            Range::Special,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::Melee => "melee",
            Range::Touch => "touch",
            Range::Ranged => "ranged",
            Range::Reach => "reach",
            Range::Reliable => "reliable",
            Range::Special => "special",
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Range {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown range '{}'", s))
    }
}

/// Elemental type of a monster or technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    #[default]
    Aether,
    Earth,
    Fire,
    Metal,
    Water,
    Wood,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Aether => write!(f, "Aether"),
            ElementType::Earth => write!(f, "Earth"),
            ElementType::Fire => write!(f, "Fire"),
            ElementType::Metal => write!(f, "Metal"),
            ElementType::Water => write!(f, "Water"),
            ElementType::Wood => write!(f, "Wood"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_str() {
        assert_eq!("special".parse::<Range>(), Ok(Range::Special));
        assert_eq!("reach".parse::<Range>(), Ok(Range::Reach));
        assert!("sideways".parse::<Range>().is_err());
    }

    #[test]
    fn test_range_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            ranges: Vec<Range>,
        }

        let parsed: Wrapper = toml::from_str(r#"ranges = ["melee", "special"]"#).unwrap();
        assert_eq!(parsed.ranges, vec![Range::Melee, Range::Special]);
    }
}
