//! Wireframe CLI library
//!
//! This module contains the core CLI logic for the wireframe generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, DEFAULT_OUTPUT};

use std::path::Path;

use log::info;

use wireframe::{WireframeBuilder, WireframeError};

/// Run the wireframe CLI application
///
/// This function builds the storyboard, writes the Excalidraw document to the
/// output path and, when requested, the SVG preview.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WireframeError` for:
/// - Configuration loading errors
/// - Invalid configuration values
/// - Serialization errors
/// - File write errors, including a missing output directory
pub fn run(args: &Args) -> Result<(), WireframeError> {
    info!(
        output_path = args.output,
        svg_path:? = args.svg,
        seed:? = args.seed;
        "Generating wireframe"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let mut builder = WireframeBuilder::new(app_config);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }

    let document = builder.build()?;
    builder.write_json(&document, Path::new(&args.output))?;

    if let Some(svg_path) = &args.svg {
        builder.write_svg(&document, Path::new(svg_path))?;
    }

    println!("Generated {} elements to {}", document.len(), args.output);
    info!(output_file = args.output; "Wireframe exported successfully");

    Ok(())
}
