// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::collections::BTreeMap;

use cu::pre::*;

use crate::{Options, RetryBudget, TemplateStore, current_year};

/// Generate a license for your open source project
#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct Cli {
    /// The author's name; if not specified, user.name from the git config is used
    #[clap(short = 'n', long, value_name = "STRING")]
    pub author_name: Option<String>,
    /// The project's name
    #[clap(short = 'p', long, value_name = "STRING")]
    pub project_name: Option<String>,
    /// Year to distribute the software [default: current year]
    #[clap(short = 'y', long, value_name = "INTEGER")]
    pub year: Option<String>,
    /// Output file; "-" writes to stdout
    #[clap(short = 'o', long, value_name = "PATH", default_value = "-")]
    pub outfile: String,
    /// Disable interactive prompts for fields not given on the command line
    #[clap(short = 'I')]
    pub no_interactive: bool,
    /// Number of attempts for each interactive prompt
    #[clap(long, value_name = "INTEGER", default_value_t = RetryBudget::DEFAULT.attempts())]
    pub prompt_retry: u32,
    /// Value for any other field in the template, can be repeated
    #[clap(short = 'f', long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,
    /// Directory to load license templates from, instead of the built-in ones
    #[clap(long, value_name = "DIR")]
    pub template_dir: Option<String>,
    /// List the available licenses and exit
    #[clap(short, long)]
    pub list: bool,

    #[clap(flatten)]
    pub common: cu::cli::Flags,

    /// The license to generate; if not specified, choose one interactively
    pub license: Option<String>,
}

impl Cli {
    /// Load the templates from --template-dir, or use the built-in ones
    pub fn template_store(&self) -> cu::Result<TemplateStore> {
        match &self.template_dir {
            Some(dir) => TemplateStore::load(dir),
            None => Ok(TemplateStore::builtin()),
        }
    }
}

/// Convert the CLI args into the options for one run
pub fn options_from_cli(args: &mut Cli) -> cu::Result<Options> {
    let mut fields = BTreeMap::new();
    for field in std::mem::take(&mut args.fields) {
        let (name, value) = cu::check!(
            field.split_once('='),
            "invalid --field '{field}', expected NAME=VALUE"
        )?;
        let name = name.trim();
        if name.is_empty() {
            cu::bail!("invalid --field '{field}', the name is empty");
        }
        if fields.insert(name.to_string(), value.to_string()).is_some() {
            cu::warn!("field '{name}' is specified multiple times, using the last one");
        }
    }
    // the dedicated flags win over --field
    if let Some(name) = args.author_name.take() {
        fields.insert("fullname".to_string(), name);
    }
    if let Some(project) = args.project_name.take() {
        fields.insert("project".to_string(), project);
    }
    let year = args
        .year
        .take()
        .unwrap_or_else(|| current_year().to_string());
    fields.insert("year".to_string(), year);

    Ok(Options {
        license: args.license.take(),
        fields,
        interactive: !args.no_interactive,
        budget: RetryBudget::new(args.prompt_retry),
    })
}
