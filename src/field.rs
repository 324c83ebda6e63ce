// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::sync::LazyLock;

use crate::InvalidFieldValue;

/// Smallest year accepted for the `year` field
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted for the `year` field
pub const MAX_YEAR: i32 = 9999;

/// A placeholder a template can ask for.
///
/// The placeholder name maps statically to one of the known kinds.
/// Any other name becomes [`Field::Custom`], which is filled like a
/// plain non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `[fullname]`, the author's name
    FullName,
    /// `[project]`, the project's name
    Project,
    /// `[year]`, the distribution year
    Year,
    /// Any other placeholder
    Custom(String),
}

impl Field {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fullname" => Self::FullName,
            "project" => Self::Project,
            "year" => Self::Year,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The placeholder name, without brackets
    pub fn name(&self) -> &str {
        match self {
            Self::FullName => "fullname",
            Self::Project => "project",
            Self::Year => "year",
            Self::Custom(name) => name,
        }
    }

    /// Validate a raw value for this field.
    ///
    /// Returns the value in the form it should be rendered in
    /// (trimmed, and years in canonical integer form).
    pub fn validate(&self, value: &str) -> Result<String, InvalidFieldValue> {
        let trimmed = value.trim();
        match self {
            Self::Year => match parse_year(trimmed) {
                Some(year) => Ok(year.to_string()),
                None => Err(self.invalid(value, "not a valid calendar year")),
            },
            _ => {
                if trimmed.is_empty() {
                    return Err(self.invalid(value, "must not be empty"));
                }
                Ok(trimmed.to_string())
            }
        }
    }

    /// Question shown when asking for this field interactively
    pub fn prompt_message(&self) -> String {
        match self {
            Self::FullName => "Author name (non-empty string): ".to_string(),
            Self::Project => "Project name (non-empty string)? ".to_string(),
            Self::Year => format!("Distribution year ({MIN_YEAR}-{MAX_YEAR} integer)? "),
            Self::Custom(name) => format!("{name} (non-empty string)? "),
        }
    }

    fn invalid(&self, value: &str, reason: &'static str) -> InvalidFieldValue {
        InvalidFieldValue {
            field: self.name().to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The year must be a decimal integer that makes a valid January 1st
fn parse_year(value: &str) -> Option<i32> {
    // not cu::parse, which also takes 0x/0o/0b prefixes
    let year = value.parse::<i32>().ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    chrono::NaiveDate::from_ymd_opt(year, 1, 1)?;
    Some(year)
}

/// The current calendar year in local time
pub fn current_year() -> i32 {
    static YEAR: LazyLock<i32> = LazyLock::new(|| {
        use chrono::Datelike;
        let y = chrono::Local::now().year();
        cu::debug!("current year is {y}");
        y
    });
    *YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_known_fields() {
        for name in ["fullname", "project", "year", "email"] {
            assert_eq!(Field::from_name(name).name(), name);
        }
        assert_eq!(Field::from_name("email"), Field::Custom("email".to_string()));
    }

    #[test]
    fn test_year_validation() {
        assert!(Field::Year.validate("abcd").is_err());
        assert_eq!(Field::Year.validate("1066"), Ok("1066".to_string()));
        assert_eq!(Field::Year.validate(" 0042 "), Ok("42".to_string()));
        assert!(Field::Year.validate("").is_err());
        assert!(Field::Year.validate("0").is_err());
        assert!(Field::Year.validate("10000").is_err());
        assert!(Field::Year.validate("-5").is_err());
        assert!(Field::Year.validate("2025.5").is_err());
        assert!(Field::Year.validate("0x7E3").is_err());
        assert!(Field::Year.validate("0o3743").is_err());
        assert!(Field::Year.validate("0b11111100011").is_err());
    }

    #[test]
    fn test_string_validation() {
        assert_eq!(
            Field::FullName.validate("  Ada Lovelace\t"),
            Ok("Ada Lovelace".to_string())
        );
        let err = Field::Project.validate("   ").unwrap_err();
        assert_eq!(err.field, "project");
        assert_eq!(err.reason, "must not be empty");
        assert!(Field::Custom("email".to_string()).validate("").is_err());
    }

    #[test]
    fn test_prompt_messages() {
        assert_eq!(
            Field::FullName.prompt_message(),
            "Author name (non-empty string): "
        );
        assert_eq!(
            Field::Year.prompt_message(),
            "Distribution year (1-9999 integer)? "
        );
        assert_eq!(
            Field::Custom("email".to_string()).prompt_message(),
            "email (non-empty string)? "
        );
    }
}
