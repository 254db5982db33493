//! maya-modfile - generate a Maya module description file.
//!
//! # Usage
//!
//! ```bash
//! # Minimal module file: writes build/modules/shaders.mod
//! maya-modfile --module_name shaders --dst_dirpath build/modules
//!
//! # With version, module root and Arnold plugin path
//! maya-modfile --module_name shaders --module_version 2.1.0 \
//!     --module_path /opt/shaders --dst_dirpath build/modules \
//!     --arnold_plugin_path /opt/shaders/bin
//!
//! # Values from a TOML descriptor, destination overridden on the command line
//! maya-modfile --descriptor shaders.toml --dst_dirpath /tmp/modules
//! ```

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use maya_modfile::cli::Cli;
use maya_modfile::{ModfileResult, ModuleFileWriter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let quiet = cli.quiet;
    match run(cli) {
        Ok(path) => {
            if !quiet {
                println!("{} Created {}", "✓".green(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ModfileResult<PathBuf> {
    let descriptor = cli.into_descriptor()?;
    ModuleFileWriter::new().write(&descriptor)
}

/// Logger with an explicit level; the environment is not consulted.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
