//! Task categories

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// Category a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Leisure,
    SelfCare,
    Work,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leisure => write!(f, "Leisure"),
            Self::SelfCare => write!(f, "Self Care"),
            Self::Work => write!(f, "Work"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leisure" => Ok(Self::Leisure),
            // "Self Care" is the console vocabulary; accept the common spellings
            "self care" | "selfcare" | "self-care" => Ok(Self::SelfCare),
            "work" => Ok(Self::Work),
            _ => Err(ValidationError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Leisure.to_string(), "Leisure");
        assert_eq!(Category::SelfCare.to_string(), "Self Care");
        assert_eq!(Category::Work.to_string(), "Work");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("leisure".parse::<Category>().unwrap(), Category::Leisure);
        assert_eq!("Self Care".parse::<Category>().unwrap(), Category::SelfCare);
        assert_eq!("SELF-CARE".parse::<Category>().unwrap(), Category::SelfCare);
        assert_eq!("selfcare".parse::<Category>().unwrap(), Category::SelfCare);
        assert_eq!("Work".parse::<Category>().unwrap(), Category::Work);
        assert!("chores".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::SelfCare).unwrap();
        assert_eq!(json, "\"selfcare\"");

        let category: Category = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(category, Category::Work);
    }
}
