//! CLI logic for the C4Stack diagram tool.
//!
//! This module contains the core CLI logic: loading configuration, applying
//! command-line overrides, and writing the composite document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::info;

use c4stack::{StackBuilder, StackError, navigation::NavigationMode};

/// Run the C4Stack CLI application
///
/// This function loads every per-level diagram in the input directory,
/// composes them, and writes the resulting SVG to the output file or to
/// standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StackError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - An input directory without any C4 diagrams
pub fn run(args: &Args) -> Result<(), StackError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Stacking diagrams"
    );

    // Load configuration, then apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(title) = &args.title {
        app_config = app_config.with_title(title.clone());
    }
    if args.css_only {
        app_config = app_config.with_navigation_mode(NavigationMode::CssOnly);
    }

    let builder = StackBuilder::new(app_config);
    let diagrams = builder.load_directory(Path::new(&args.input))?;
    let svg = builder.render_svg(&diagrams)?;

    match &args.output {
        Some(output) => {
            fs::write(output, svg)?;
            info!(output_file = output; "SVG exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
