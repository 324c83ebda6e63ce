// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use licgen::{Cli, ConsolePrompter, Defaults, options_from_cli, run_to_output};

#[cu::cli(flags = "common")]
async fn main(mut args: Cli) -> cu::Result<()> {
    let store = args.template_store()?;
    if args.list {
        for name in store.list_licenses() {
            println!("{name}");
        }
        return Ok(());
    }

    let outfile = std::mem::take(&mut args.outfile);
    let options = options_from_cli(&mut args)?;
    let defaults = Defaults::discover();
    let mut prompter = ConsolePrompter::stdio();

    if let Err(failure) = run_to_output(&store, &defaults, options, &mut prompter, &outfile)? {
        cu::bailfyi!("{failure}");
    }
    Ok(())
}
