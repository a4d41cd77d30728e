//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "mathq-setup",
    bin_name = "mathq-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Prepare the directory layout for the Math Question Processor",
    long_about = "Creates the folder configuration (if missing), one image folder \
                  per configured name, the output directory, a .gitignore and the \
                  CI workflow directory, then prints what to do next. Safe to re-run.",
    after_help = "EXAMPLES:\n\
        \x20 mathq-setup\n\
        \x20 mathq-setup -v\n\
        \x20 MATHQ_LAYOUT__IMAGES_ROOT=Scans mathq-setup",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}
