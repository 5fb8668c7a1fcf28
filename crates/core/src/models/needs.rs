//! Accessibility-related enums with defaulting boundary parsers
//!
//! The extraction service reports these as free strings; anything
//! unrecognized degrades to the None variant rather than failing.

use serde::{Deserialize, Serialize};

/// Special seating furniture requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecialRequirement {
    #[default]
    None,
    Chair,
    Chauki,
    Backrest,
}

impl SpecialRequirement {
    /// Parse a service-provided label. "CW" is a legacy alias for Chauki.
    pub fn from_label(label: &str) -> Self {
        let l = label.trim().to_ascii_lowercase();
        match l.as_str() {
            "chair" => SpecialRequirement::Chair,
            "chauki" | "cw" => SpecialRequirement::Chauki,
            "backrest" | "back rest" => SpecialRequirement::Backrest,
            _ => SpecialRequirement::None,
        }
    }

    /// Chair and Chauki holders are routed to the special edge column.
    pub fn needs_special_column(&self) -> bool {
        matches!(self, SpecialRequirement::Chair | SpecialRequirement::Chauki)
    }
}

/// Which ear has functional hearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HearingSide {
    #[default]
    None,
    Left,
    Right,
}

impl HearingSide {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "left" => HearingSide::Left,
            "right" => HearingSide::Right,
            _ => HearingSide::None,
        }
    }
}

/// Participant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_labels() {
        assert_eq!(
            SpecialRequirement::from_label("Chauki"),
            SpecialRequirement::Chauki
        );
        assert_eq!(
            SpecialRequirement::from_label("cw"),
            SpecialRequirement::Chauki
        );
        assert_eq!(
            SpecialRequirement::from_label("Back Rest"),
            SpecialRequirement::Backrest
        );
        assert_eq!(
            SpecialRequirement::from_label("wheelchair?"),
            SpecialRequirement::None
        );
    }

    #[test]
    fn test_hearing_labels() {
        assert_eq!(HearingSide::from_label("Left"), HearingSide::Left);
        assert_eq!(HearingSide::from_label("RIGHT"), HearingSide::Right);
        assert_eq!(HearingSide::from_label(""), HearingSide::None);
        assert_eq!(HearingSide::from_label("both"), HearingSide::None);
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("F"), Gender::Female);
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label(""), Gender::Male);
    }
}
