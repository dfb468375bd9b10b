//! Configuration types for wireframe generation.
//!
//! This module provides configuration structures that control how the
//! storyboard is arranged on the canvas and how it is colored. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and theme settings.
//! - [`CanvasConfig`] - Grid spacing between screens and document view settings.
//! - [`ThemeConfig`] - Palette overrides and the label font family.
//!
//! # Example
//!
//! ```
//! # use wireframe::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.canvas().background_color().is_ok());
//! assert!(config.theme().build().is_ok());
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use wireframe_core::{color::Color, shape::FontFamily, theme::Theme};

use crate::storyboard::Spacing;

const DEFAULT_BACKGROUND: Color = Color::rgb(0xf0, 0xf0, 0xf0);

/// Top-level application configuration combining canvas and theme settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Theme configuration section.
    #[serde(default)]
    theme: ThemeConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(canvas: CanvasConfig, theme: ThemeConfig) -> Self {
        Self { canvas, theme }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the theme configuration.
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }
}

/// Placement of screens on the canvas and the document view settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Horizontal distance between the origins of adjacent grid columns.
    column_spacing: f32,

    /// Vertical distance between the origins of adjacent grid rows.
    row_spacing: f32,

    /// Grid size recorded in the document view state.
    grid_size: u32,

    /// View background color, as a color string.
    background_color: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let spacing = Spacing::default();
        Self {
            column_spacing: spacing.column(),
            row_spacing: spacing.row(),
            grid_size: 20,
            background_color: None,
        }
    }
}

impl CanvasConfig {
    /// Creates a canvas configuration with the given spacings and defaults elsewhere.
    pub fn new(column_spacing: f32, row_spacing: f32) -> Self {
        Self {
            column_spacing,
            row_spacing,
            ..Self::default()
        }
    }

    /// Returns the validated grid spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if a spacing is smaller than the screen it separates,
    /// which would make neighbouring screens overlap.
    pub fn spacing(&self) -> Result<Spacing, String> {
        Spacing::new(self.column_spacing, self.row_spacing)
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Returns the parsed view background [`Color`], `#f0f0f0` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map(|color| color.unwrap_or(DEFAULT_BACKGROUND))
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Palette overrides and font selection.
///
/// Any palette entry can be overridden by name (`brand = "#0ea5e9"`);
/// entries that are not set keep their default color.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Font family name for every label.
    #[serde(default)]
    font_family: Option<String>,

    /// Palette entry name to color string.
    #[serde(flatten)]
    colors: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Sets a palette override, e.g. `("brand", "#0ea5e9")`.
    pub fn with_color(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(name.into(), color.into());
        self
    }

    /// Sets the label font family by name.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Builds the [`Theme`] from the defaults and the configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown palette entry, an unparsable color,
    /// or an unknown font family.
    pub fn build(&self) -> Result<Theme, String> {
        let mut theme = Theme::default();

        for (name, value) in &self.colors {
            let slot = theme
                .palette
                .color_mut(name)
                .ok_or_else(|| format!("Unknown palette entry `{name}` in config"))?;
            *slot = Color::new(value)
                .map_err(|err| format!("Invalid color for `{name}` in config: {err}"))?;
        }

        if let Some(family) = &self.font_family {
            let family = family.parse::<FontFamily>()?;
            theme = theme.with_font_family(family);
        }

        Ok(theme)
    }
}
