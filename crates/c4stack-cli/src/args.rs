//! Command-line argument definitions for the C4Stack CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input directory, the output
//! destination, configuration file selection, a few configuration overrides,
//! and logging verbosity.

use clap::Parser;

/// Command-line arguments for the C4Stack diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the per-level SVG diagrams
    #[arg(help = "Directory containing context/container/component/code SVG files")]
    pub input: String,

    /// Path to the output SVG file; the document is written to stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Document title, overriding the configuration file
    #[arg(short, long)]
    pub title: Option<String>,

    /// Navigate with CSS `:target` rules instead of an embedded script
    #[arg(long)]
    pub css_only: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("c4stack").chain(args.iter().copied()))
    }

    #[test]
    fn test_directory_only() {
        let args = parse(&["./diagrams"]).unwrap();
        assert_eq!(args.input, "./diagrams");
        assert_eq!(args.output, None);
        assert_eq!(args.title, None);
        assert!(!args.css_only);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "./diagrams",
            "--output",
            "out.svg",
            "-t",
            "My Title",
            "--css-only",
            "-c",
            "c4stack.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.output.as_deref(), Some("out.svg"));
        assert_eq!(args.title.as_deref(), Some("My Title"));
        assert!(args.css_only);
        assert_eq!(args.config.as_deref(), Some("c4stack.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_invalid_invocations() {
        let invalid: [&[&str]; 5] = [
            &[],
            &["./diagrams", "--output"],
            &["./diagrams", "--title"],
            &["./diagrams", "--unknown"],
            &["./diagrams", "--help"],
        ];
        for args in invalid {
            assert!(parse(args).is_err(), "expected failure for {args:?}");
        }
    }
}
