// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a bracket-delimited placeholder like `[fullname]`,
/// capturing the name inside the brackets
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("placeholder regex is valid"));

/// Find the distinct placeholder names in a template
pub fn scan(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_scan_distinct() {
        let text = "Copyright [year] [fullname]\n[fullname] wrote [project] in [year]";
        assert_eq!(scan(text), set(&["fullname", "project", "year"]));
    }

    #[test]
    fn test_scan_order_independent() {
        assert_eq!(scan("[b] [a]"), scan("[a] [b] [a]"));
    }

    #[test]
    fn test_scan_no_placeholder() {
        assert!(scan("This is free and unencumbered software.").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_edge_brackets() {
        // empty brackets are not placeholders
        assert!(scan("[] and ]oops[").is_empty());
        // an unclosed bracket swallows up to the next closing one
        assert_eq!(scan("[a [b]"), set(&["a [b"]));
        assert_eq!(scan("[multi\nline]"), set(&["multi\nline"]));
    }
}
