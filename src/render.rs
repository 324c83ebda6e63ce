// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use crate::scan::PLACEHOLDER;
use crate::{MissingFields, ResolutionContext};

/// Substitute every placeholder in `text` with its resolved value.
///
/// Values are inserted as-is and not scanned again. Fails with every
/// placeholder the context has no value for.
pub fn render(
    license: &str,
    text: &str,
    context: &ResolutionContext,
) -> Result<String, MissingFields> {
    let missing = crate::scan(text)
        .into_iter()
        .filter(|name| context.get(name).is_none())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(MissingFields {
            license: license.to_string(),
            fields: missing,
        });
    }
    let rendered = PLACEHOLDER.replace_all(text, |caps: &regex::Captures| {
        // checked above
        context.get(&caps[1]).unwrap_or_default().to_string()
    });
    Ok(rendered.into_owned())
}
