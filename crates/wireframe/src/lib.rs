//! Wireframe - procedural UI mockups for the expenses-tracker web app.
//!
//! Builds a storyboard of six screens (login, dashboard, add-expense,
//! transaction history, create-account, insights) out of rectangles,
//! ellipses, lines and text labels, and writes it as a single Excalidraw
//! document, with an optional flat SVG preview.

pub mod config;
pub mod document;
pub mod sample;
pub mod screen;
pub mod storyboard;

mod error;
mod export;

pub use wireframe_core::{color, element, geometry, noise, shape, theme};

pub use error::WireframeError;

use std::path::Path;

use log::{debug, info, trace};

use wireframe_core::{element::Element, noise::Noise, shape::Pen};

use config::AppConfig;
use document::{AppState, Document};
use export::Exporter;
use sample::BarSeries;
use storyboard::Storyboard;

/// Builder for generating wireframe documents.
///
/// Generation is a single pass: the theme and grid come from the
/// configuration, the storyboard draws every screen, and each shape is
/// stamped with identity noise to become an element.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use wireframe::{WireframeBuilder, config::AppConfig};
///
/// let builder = WireframeBuilder::new(AppConfig::default()).with_seed(42);
///
/// let document = builder.build().expect("Failed to build");
/// builder
///     .write_json(&document, Path::new("wireframe.excalidraw"))
///     .expect("Failed to write");
///
/// // Or use the default config with fresh randomness
/// let builder = WireframeBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct WireframeBuilder {
    config: AppConfig,
    seed: Option<u64>,
}

impl WireframeBuilder {
    /// Create a new wireframe builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Canvas and theme settings
    pub fn new(config: AppConfig) -> Self {
        Self { config, seed: None }
    }

    /// Makes every random field reproducible: identities, timestamps and
    /// the chart bar heights.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn noise(&self) -> Noise {
        match self.seed {
            Some(seed) => Noise::seeded(seed),
            None => Noise::from_entropy(),
        }
    }

    /// Lay out the storyboard and stamp every shape into an element.
    ///
    /// # Errors
    ///
    /// Returns `WireframeError::Config` if the configuration holds an
    /// invalid color, font family or grid spacing.
    pub fn build(&self) -> Result<Document, WireframeError> {
        let canvas = self.config.canvas();
        let theme = self.config.theme().build().map_err(WireframeError::Config)?;
        let spacing = canvas.spacing().map_err(WireframeError::Config)?;
        let background = canvas
            .background_color()
            .map_err(WireframeError::Config)?;
        trace!(theme:?, spacing:?; "Configuration resolved");

        let mut noise = self.noise();
        info!(seeded = self.seed.is_some(); "Building wireframe");

        let bars = BarSeries::random(&mut noise);
        debug!(months = bars.len(); "Chart bars drawn");

        let storyboard = Storyboard::expenses_tracker(spacing, bars);
        let shapes = storyboard.draw(&Pen::new(&theme));

        let elements: Vec<Element> = shapes
            .into_iter()
            .map(|shape| Element::stamp(shape, &mut noise))
            .collect();
        info!(elements = elements.len(); "Elements stamped");

        Ok(Document::new(
            elements,
            AppState::new(canvas.grid_size(), background),
        ))
    }

    /// Serialize a document as pretty JSON.
    pub fn render_json(&self, document: &Document) -> Result<String, WireframeError> {
        document.to_json_pretty()
    }

    /// Write a document as JSON to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `WireframeError::Write` if the file cannot be written, for
    /// example because its directory does not exist.
    pub fn write_json(&self, document: &Document, path: &Path) -> Result<(), WireframeError> {
        document.write_to(path)
    }

    /// Render a flat SVG preview of a document.
    pub fn render_svg(&self, document: &Document) -> String {
        export::svg::Svg::render(document).to_string()
    }

    /// Write the SVG preview of a document to `path`.
    ///
    /// # Errors
    ///
    /// Returns `WireframeError::Export` if the document is empty or the file
    /// cannot be written.
    pub fn write_svg(&self, document: &Document, path: &Path) -> Result<(), WireframeError> {
        export::svg::Svg::new(path).export_document(document)?;
        info!(path:?; "SVG preview written");
        Ok(())
    }
}
