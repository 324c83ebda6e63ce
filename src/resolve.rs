// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::collections::BTreeMap;

use crate::{Defaults, Field, License, MissingFields, Prompt};

/// Number of attempts each interactive prompt gets.
///
/// One budget is used by every prompt in an invocation, and every
/// prompt gets the full [`attempts`](Self::attempts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    attempts: u32,
}

impl RetryBudget {
    pub const DEFAULT: Self = Self::new(3);

    pub const fn new(attempts: u32) -> Self {
        Self { attempts }
    }

    pub const fn attempts(self) -> u32 {
        self.attempts
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolved field values for one invocation.
///
/// Only holds values that passed their field's validator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    values: BTreeMap<String, String>,
}

impl ResolutionContext {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Validate `value` and store it. Rejected values are not stored.
    pub fn insert(&mut self, field: &Field, value: &str) -> Result<(), crate::InvalidFieldValue> {
        let value = field.validate(value)?;
        self.values.insert(field.name().to_string(), value);
        Ok(())
    }
}

/// Where a field's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Explicit,
    Default,
    Prompt,
}

/// Fills in the fields a license requires.
///
/// For each field, in name order: the explicit value, then the default
/// source, then an interactive prompt. Fields left over are reported
/// together.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    defaults: &'a Defaults,
    budget: RetryBudget,
}

impl<'a> Resolver<'a> {
    pub fn new(defaults: &'a Defaults, budget: RetryBudget) -> Self {
        Self { defaults, budget }
    }

    /// Resolve every field `license` requires.
    ///
    /// `explicit` maps field names to values given on the command line.
    /// `prompter` is `None` when interactive mode is disabled.
    ///
    /// - `Ok(Ok(context))` when every field is resolved.
    /// - `Ok(Err(missing))` lists all fields that could not be resolved.
    /// - `Err(e)` when prompting itself failed.
    pub fn resolve(
        &self,
        license: &License,
        explicit: &BTreeMap<String, String>,
        mut prompter: Option<&mut dyn Prompt>,
    ) -> cu::Result<Result<ResolutionContext, MissingFields>> {
        let mut context = ResolutionContext::default();
        let mut missing = Vec::new();

        for name in license.fields() {
            let field = Field::from_name(name);
            match self.resolve_field(&field, explicit, prompter.as_deref_mut())? {
                Some((value, source)) => {
                    cu::debug!("{field} = '{value}' ({source:?})");
                    context.values.insert(name.clone(), value);
                }
                None => {
                    cu::debug!("{field} is unresolved");
                    missing.push(name.clone());
                }
            }
        }

        if !missing.is_empty() {
            let missing = MissingFields {
                license: license.name().to_string(),
                fields: missing,
            };
            cu::error!("{missing}");
            return Ok(Err(missing));
        }

        Ok(Ok(context))
    }

    fn resolve_field(
        &self,
        field: &Field,
        explicit: &BTreeMap<String, String>,
        prompter: Option<&mut (dyn Prompt + '_)>,
    ) -> cu::Result<Option<(String, Source)>> {
        if let Some(value) = explicit.get(field.name()) {
            match field.validate(value) {
                Ok(value) => return Ok(Some((value, Source::Explicit))),
                Err(e) => cu::warn!("ignoring given value: {e}"),
            }
        }
        if let Some(value) = self.defaults.lookup(field) {
            match field.validate(value) {
                Ok(value) => return Ok(Some((value, Source::Default))),
                Err(e) => cu::warn!("ignoring default value: {e}"),
            }
        }
        let Some(prompter) = prompter else {
            return Ok(None);
        };
        let value = prompter.prompt_field(field, self.budget)?;
        Ok(value.map(|value| (value, Source::Prompt)))
    }
}
