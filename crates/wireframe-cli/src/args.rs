//! Command-line argument definitions for the wireframe CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output paths, configuration file
//! selection, reproducibility, and logging verbosity.

use clap::Parser;

/// Default location of the generated document.
pub const DEFAULT_OUTPUT: &str = "docs/diagrams/wireframe-expensestracker.excalidraw";

/// Command-line arguments for the wireframe generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output Excalidraw file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Also write a static SVG preview to this path
    #[arg(long)]
    pub svg: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for identities, timestamps and chart values; makes output reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wireframe"]);
        assert_eq!(args.output, DEFAULT_OUTPUT);
        assert!(args.svg.is_none());
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "wireframe",
            "-o",
            "out.excalidraw",
            "--svg",
            "out.svg",
            "-c",
            "wireframe.toml",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "out.excalidraw");
        assert_eq!(args.svg.as_deref(), Some("out.svg"));
        assert_eq!(args.config.as_deref(), Some("wireframe.toml"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        assert!(Args::try_parse_from(["wireframe", "--seed", "-3"]).is_err());
    }
}
