// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::collections::BTreeMap;
use std::io::Write as _;

use crate::{Defaults, Failure, Prompt, Resolver, RetryBudget, TemplateStore, render};

/// What to generate, after the command line is parsed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// The license to generate. When `None`, the user is asked to
    /// pick one in interactive mode.
    pub license: Option<String>,
    /// Field values given explicitly, by placeholder name
    pub fields: BTreeMap<String, String>,
    pub interactive: bool,
    pub budget: RetryBudget,
}

/// Generate the license text for one invocation.
///
/// - `Ok(Ok(text))` is the rendered license.
/// - `Ok(Err(failure))` means the license or its fields could not be determined.
/// - `Err(e)` means the run itself was not successful.
///
/// Nothing is written here, so a failure never leaves partial output.
pub fn run(
    store: &TemplateStore,
    defaults: &Defaults,
    options: Options,
    prompter: &mut dyn Prompt,
) -> cu::Result<Result<String, Failure>> {
    let name = match options.license {
        Some(name) => name,
        None => {
            if !options.interactive {
                cu::error!("no license provided, and interactive prompt is disabled");
                return Ok(Err(Failure::NoLicense));
            }
            let names = store.list_licenses().collect::<Vec<_>>();
            match prompter.prompt_license_choice(&names, options.budget)? {
                Some(name) => name,
                None => {
                    cu::error!("no license provided");
                    return Ok(Err(Failure::NoLicense));
                }
            }
        }
    };

    let license = match store.get(&name) {
        Ok(license) => license,
        Err(e) => {
            cu::error!("{e}");
            return Ok(Err(e.into()));
        }
    };

    let resolver = Resolver::new(defaults, options.budget);
    let prompter = if options.interactive {
        Some(prompter)
    } else {
        None
    };
    let context = match resolver.resolve(license, &options.fields, prompter)? {
        Ok(context) => context,
        Err(missing) => return Ok(Err(missing.into())),
    };

    Ok(render(license.name(), license.text(), &context).map_err(Failure::from))
}

/// Generate the license and write it to `outfile`.
///
/// The output is only opened once generation succeeded, so on
/// `Ok(Err(failure))` nothing is created or overwritten.
pub fn run_to_output(
    store: &TemplateStore,
    defaults: &Defaults,
    options: Options,
    prompter: &mut dyn Prompt,
    outfile: &str,
) -> cu::Result<Result<(), Failure>> {
    let text = match run(store, defaults, options, prompter)? {
        Ok(text) => text,
        Err(failure) => return Ok(Err(failure)),
    };
    write_output(outfile, &text)?;
    Ok(Ok(()))
}

/// Write the rendered license to `outfile`, or to stdout if it's `-`
pub fn write_output(outfile: &str, text: &str) -> cu::Result<()> {
    if outfile == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    cu::fs::write(outfile, text)?;
    cu::info!("license written to '{outfile}'");
    Ok(())
}
