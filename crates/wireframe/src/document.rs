//! The Excalidraw document written to disk.

use std::{fs, path::Path};

use log::{debug, info};
use serde::Serialize;
use serde_json::{Map, Value};
use wireframe_core::{color::Color, element::Element};

use crate::WireframeError;

/// Fixed document type tag.
pub const DOCUMENT_TYPE: &str = "excalidraw";

/// Fixed document schema version.
pub const DOCUMENT_VERSION: u32 = 2;

/// Fixed source URL recorded in the document.
pub const DOCUMENT_SOURCE: &str = "https://excalidraw.com";

/// View settings stored alongside the elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    grid_size: u32,
    view_background_color: Color,
}

impl AppState {
    pub fn new(grid_size: u32, view_background_color: Color) -> Self {
        Self {
            grid_size,
            view_background_color,
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn view_background_color(&self) -> Color {
        self.view_background_color
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(20, Color::rgb(0xf0, 0xf0, 0xf0))
    }
}

/// A complete document: fixed metadata, the ordered elements and view state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    source: &'static str,
    elements: Vec<Element>,
    app_state: AppState,
    files: Map<String, Value>,
}

impl Document {
    pub fn new(elements: Vec<Element>, app_state: AppState) -> Self {
        Self {
            kind: DOCUMENT_TYPE,
            version: DOCUMENT_VERSION,
            source: DOCUMENT_SOURCE,
            elements,
            app_state,
            files: Map::new(),
        }
    }

    /// Elements in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Serializes the document as JSON indented by two spaces.
    pub fn to_json_pretty(&self) -> Result<String, WireframeError> {
        let json = serde_json::to_string_pretty(self)?;
        debug!(bytes = json.len(); "Document serialized");
        Ok(json)
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// The parent directory must exist.
    pub fn write_to(&self, path: &Path) -> Result<(), WireframeError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|err| WireframeError::new_write_error(path, err))?;
        info!(path:? = path, elements = self.elements.len(); "Document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wireframe_core::{
        geometry::{Bounds, Point},
        noise::Noise,
        shape::Pen,
        theme::Theme,
    };

    use super::*;

    fn sample_document() -> Document {
        let theme = Theme::default();
        let pen = Pen::new(&theme);
        let mut noise = Noise::seeded(1);
        let elements = vec![
            Element::stamp(pen.rect(Bounds::rect(0.0, 0.0, 10.0, 10.0)), &mut noise),
            Element::stamp(pen.text(Point::new(5.0, 5.0), "Hi", 20.0), &mut noise),
        ];
        Document::new(elements, AppState::default())
    }

    #[test]
    fn test_top_level_fields() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(value["type"], "excalidraw");
        assert_eq!(value["version"], 2);
        assert_eq!(value["source"], "https://excalidraw.com");
        assert_eq!(value["appState"]["gridSize"], 20);
        assert_eq!(value["appState"]["viewBackgroundColor"], "#f0f0f0");
        assert_eq!(value["files"], serde_json::json!({}));
        assert_eq!(value["elements"].as_array().unwrap().len(), 2);
        assert_eq!(value["elements"][1]["type"], "text");
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let json = sample_document().to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"type\": \"excalidraw\""));
    }

    #[test]
    fn test_write_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.excalidraw");
        fs::write(&path, "stale").unwrap();

        sample_document().write_to(&path).unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["elements"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.excalidraw");

        let err = sample_document().write_to(&path).unwrap_err();
        assert!(matches!(err, WireframeError::Write { .. }));
        assert!(err.to_string().contains("out.excalidraw"));
        assert!(!path.exists());
    }
}
