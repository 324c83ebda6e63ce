// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

//! Generate a license file from a template, filling in the author,
//! project and year from flags, the git config, or interactive prompts.

mod error;
pub use error::*;
mod field;
pub use field::*;
mod gitconfig;
pub use gitconfig::*;

mod scan;
pub use scan::scan;
mod store;
pub use store::*;
mod resolve;
pub use resolve::*;
mod prompt;
pub use prompt::*;
mod render;
pub use render::*;

mod runner;
pub use runner::*;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
