// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::path::Path;

use crate::Field;

/// Default values found outside the command line.
///
/// Currently only the author name, taken from `user.name` in the
/// user's git config.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub author_name: Option<String>,
}

impl Defaults {
    /// Look up the defaults from the git config files git itself would read
    /// (global, XDG and system). Never fails: any error just gives no default.
    pub fn discover() -> Self {
        let author_name = match git2::Config::open_default() {
            Ok(config) => user_name(&config),
            Err(e) => {
                cu::debug!("cannot open git config: {e}");
                None
            }
        };
        match &author_name {
            Some(name) => cu::debug!("found user.name '{name}' in git config"),
            None => cu::debug!("no user.name found in git config"),
        }
        Self { author_name }
    }

    /// The default value for a field, if the field has a default source
    pub fn lookup(&self, field: &Field) -> Option<&str> {
        match field {
            Field::FullName => self.author_name.as_deref(),
            _ => None,
        }
    }
}

/// Read `user.name` from one git config file (and the files it includes),
/// best-effort
pub fn read_user_name(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match git2::Config::open(path) {
        Ok(config) => user_name(&config),
        Err(e) => {
            cu::debug!("cannot read '{}': {e}", path.display());
            None
        }
    }
}

fn user_name(config: &git2::Config) -> Option<String> {
    match config.get_string("user.name") {
        Ok(name) => Some(name),
        Err(e) => {
            cu::trace!("user.name: {e}");
            None
        }
    }
}
