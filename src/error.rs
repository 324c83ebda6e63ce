// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

/// The requested license is not in the template store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLicense {
    pub name: String,
    /// All valid license names, sorted
    pub choices: Vec<String>,
}

impl std::fmt::Display for UnknownLicense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown license '{}' (choose from {})",
            self.name,
            self.choices.join(", ")
        )
    }
}

impl std::error::Error for UnknownLicense {}

/// One or more required fields could not be resolved.
///
/// Always carries every unresolved field, never just the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields {
    pub license: String,
    pub fields: Vec<String>,
}

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.fields.len() == 1 { "is" } else { "are" };
        write!(
            f,
            "{} {verb} required by license '{}', but could not be resolved",
            self.fields.join(", "),
            self.license
        )
    }
}

impl std::error::Error for MissingFields {}

/// A value rejected by a field's validator.
///
/// Only used inside resolution and prompting, where it causes a retry
/// or a fall-through to the next source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldValue {
    pub field: String,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for InvalidFieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value '{}' for {}: {}",
            self.value, self.field, self.reason
        )
    }
}

impl std::error::Error for InvalidFieldValue {}

/// Reportable failure of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No license was given, and none was chosen interactively
    NoLicense,
    UnknownLicense(UnknownLicense),
    MissingFields(MissingFields),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLicense => write!(f, "no license provided"),
            Self::UnknownLicense(e) => write!(f, "{e}"),
            Self::MissingFields(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Failure {}

impl From<UnknownLicense> for Failure {
    fn from(e: UnknownLicense) -> Self {
        Self::UnknownLicense(e)
    }
}

impl From<MissingFields> for Failure {
    fn from(e: MissingFields) -> Self {
        Self::MissingFields(e)
    }
}
