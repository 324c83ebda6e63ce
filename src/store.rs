// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use cu::pre::*;

use crate::{UnknownLicense, scan};

/// Templates built into the binary, sorted by name
static BUILTIN_LICENSES: &[(&str, &str)] = &[
    ("0bsd", include_str!("../licenses/0bsd.txt")),
    ("bsd-2-clause", include_str!("../licenses/bsd-2-clause.txt")),
    ("bsd-3-clause", include_str!("../licenses/bsd-3-clause.txt")),
    ("gpl-3.0", include_str!("../licenses/gpl-3.0.txt")),
    ("isc", include_str!("../licenses/isc.txt")),
    ("mit", include_str!("../licenses/mit.txt")),
    ("unlicense", include_str!("../licenses/unlicense.txt")),
    ("zlib", include_str!("../licenses/zlib.txt")),
];

/// One license template, with the fields it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    name: String,
    text: String,
    fields: BTreeSet<String>,
}

impl License {
    /// Create a license from its template text. The required fields
    /// are scanned once here.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let text = text.into();
        let fields = scan(&text);
        cu::trace!("license '{name}' requires {fields:?}");
        Self { name, text, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Names of the placeholders in the template, sorted
    pub fn fields(&self) -> &BTreeSet<String> {
        &self.fields
    }
}

/// Read-only collection of license templates, keyed by name.
///
/// Built once at startup and not changed afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    licenses: BTreeMap<String, License>,
}

impl TemplateStore {
    /// The templates shipped with the crate, embedded at compile time
    pub fn builtin() -> Self {
        let licenses = BUILTIN_LICENSES
            .iter()
            .map(|(name, text)| (name.to_string(), License::new(*name, *text)))
            .collect::<BTreeMap<_, _>>();
        cu::debug!("using {} built-in license templates", licenses.len());
        Self { licenses }
    }

    /// Load every template file in `dir`. The license name is the file stem.
    ///
    /// Errors if two files have the same stem.
    pub fn load(dir: &str) -> cu::Result<Self> {
        let mut licenses = BTreeMap::new();
        let pattern = Path::new(dir).join("*").into_utf8()?;
        for path in cu::fs::glob(&pattern)? {
            let path = path?;
            if !path.is_file() {
                continue;
            }
            let stem = path.file_stem().and_then(|x| x.to_str());
            let name = cu::check!(stem, "invalid template file name '{}'", path.display())?;
            if name.starts_with('.') {
                continue;
            }
            let text = cu::fs::read_string(&path)?;
            use std::collections::btree_map::Entry;
            match licenses.entry(name.to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(License::new(name, text));
                }
                Entry::Occupied(entry) => {
                    cu::bail!(
                        "multiple templates named '{}' in '{dir}', the second one is '{}'",
                        entry.key(),
                        path.display()
                    );
                }
            }
        }
        if licenses.is_empty() {
            cu::warn!("no license templates found in '{dir}'");
        }
        cu::debug!("loaded {} license templates from '{dir}'", licenses.len());
        Ok(Self { licenses })
    }

    /// Build a store from licenses already in memory.
    ///
    /// Errors if two licenses share a name.
    pub fn from_licenses(list: impl IntoIterator<Item = License>) -> cu::Result<Self> {
        let mut licenses = BTreeMap::new();
        for license in list {
            if licenses.contains_key(license.name()) {
                cu::bail!("license '{}' is defined multiple times", license.name());
            }
            licenses.insert(license.name().to_string(), license);
        }
        Ok(Self { licenses })
    }

    /// The license names, sorted
    pub fn list_licenses(&self) -> impl Iterator<Item = &str> {
        self.licenses.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&License, UnknownLicense> {
        self.licenses.get(name).ok_or_else(|| UnknownLicense {
            name: name.to_string(),
            choices: self.list_licenses().map(str::to_string).collect(),
        })
    }

    pub fn get_template_text(&self, name: &str) -> Result<&str, UnknownLicense> {
        Ok(self.get(name)?.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_licenses_sorted_and_unique() {
        let names = BUILTIN_LICENSES.iter().map(|(n, _)| *n).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted, "BUILTIN_LICENSES must be sorted and unique");
    }

    #[test]
    fn test_builtin_matches_licenses_dir() -> cu::Result<()> {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/licenses");
        assert_eq!(TemplateStore::builtin(), TemplateStore::load(dir)?);
        Ok(())
    }

    #[test]
    fn test_builtin_templates() -> cu::Result<()> {
        let store = TemplateStore::builtin();
        let names = store.list_licenses().collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "0bsd",
                "bsd-2-clause",
                "bsd-3-clause",
                "gpl-3.0",
                "isc",
                "mit",
                "unlicense",
                "zlib"
            ]
        );
        let mit = store.get("mit")?;
        assert_eq!(
            mit.fields().iter().map(String::as_str).collect::<Vec<_>>(),
            ["fullname", "year"]
        );
        assert!(store.get("unlicense")?.fields().is_empty());
        assert!(store.get("gpl-3.0")?.fields().contains("project"));
        Ok(())
    }

    #[test]
    fn test_unknown_license() {
        let store = TemplateStore::from_licenses([
            License::new("b", "[x]"),
            License::new("a", "text"),
        ])
        .unwrap();
        let err = store.get_template_text("c").unwrap_err();
        assert_eq!(err.name, "c");
        assert_eq!(err.choices, ["a", "b"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = TemplateStore::from_licenses([License::new("a", ""), License::new("a", "x")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_duplicate_stem() -> cu::Result<()> {
        let dir = tempfile::tempdir()?;
        cu::fs::write(dir.path().join("mit.txt"), "[fullname]")?;
        cu::fs::write(dir.path().join("mit.md"), "[year]")?;
        let dir = dir.path().to_path_buf().into_utf8()?;
        assert!(TemplateStore::load(&dir).is_err());
        Ok(())
    }

    #[test]
    fn test_load_skips_hidden_and_dirs() -> cu::Result<()> {
        let dir = tempfile::tempdir()?;
        cu::fs::write(dir.path().join("isc.txt"), "[year]")?;
        cu::fs::write(dir.path().join(".hidden"), "[x]")?;
        std::fs::create_dir(dir.path().join("nested"))?;
        let dir = dir.path().to_path_buf().into_utf8()?;
        let store = TemplateStore::load(&dir)?;
        assert_eq!(store.list_licenses().collect::<Vec<_>>(), ["isc"]);
        Ok(())
    }
}
