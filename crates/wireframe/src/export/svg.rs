//! Static SVG preview of a document.
//!
//! The preview is a flat rendering: no hand-drawn jitter, no fill patterns.
//! It exists so the storyboard can be eyeballed in a browser without opening
//! the diagramming tool.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document as SvgDocument, node::element as svg_element};
use wireframe_core::{
    color::Color,
    element::Element,
    geometry::Bounds,
    shape::{LINE_HEIGHT_FACTOR, Shape, ShapeKind, TextContent},
};

use crate::{document::Document, export};

/// Margin around the content in the preview.
const MARGIN: f32 = 40.0;

/// Largest corner radius of rounded rectangles.
const MAX_CORNER_RADIUS: f32 = 32.0;

/// SVG preview exporter writing to a file.
#[derive(Debug, Clone)]
pub struct Svg {
    path: PathBuf,
}

impl Svg {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders `document` to an SVG tree.
    pub fn render(document: &Document) -> SvgDocument {
        let view = content_bounds(document.elements());
        debug!(
            min_x = view.min_x(),
            min_y = view.min_y(),
            width = view.width(),
            height = view.height();
            "Preview viewport"
        );

        let mut doc = SvgDocument::new()
            .set(
                "viewBox",
                (view.min_x(), view.min_y(), view.width(), view.height()),
            )
            .set("width", view.width())
            .set("height", view.height());

        let background = document.app_state().view_background_color();
        if !background.is_transparent() {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", view.min_x())
                    .set("y", view.min_y())
                    .set("width", view.width())
                    .set("height", view.height())
                    .set("fill", background.to_hex_rgb())
                    .set("fill-opacity", unit_alpha(background)),
            );
        }

        for element in document.elements() {
            doc = doc.add(render_shape(element.shape()));
        }
        doc
    }

    /// Writes an SVG document to the exporter's file.
    pub fn write_document(&self, doc: &SvgDocument) -> Result<(), export::Error> {
        info!(path:? = self.path; "Creating SVG file");
        let mut f = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = self.path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(path:? = self.path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_document(&self, document: &Document) -> Result<(), export::Error> {
        if document.is_empty() {
            return Err(export::Error::Render(
                "document has no elements to preview".to_string(),
            ));
        }
        let doc = Self::render(document);
        debug!("SVG document rendered");

        self.write_document(&doc)
    }
}

/// Bounds of all elements plus a margin; a default page when there are none.
fn content_bounds(elements: &[Element]) -> Bounds {
    let content = elements
        .iter()
        .map(|element| element.shape().bounds())
        .reduce(|acc, bounds| acc.merge(&bounds))
        .unwrap_or_else(|| Bounds::rect(0.0, 0.0, 800.0, 600.0));

    Bounds::rect(
        content.min_x() - MARGIN,
        content.min_y() - MARGIN,
        content.width() + 2.0 * MARGIN,
        content.height() + 2.0 * MARGIN,
    )
}

fn render_shape(shape: &Shape) -> Box<dyn svg::Node> {
    let bounds = shape.bounds();
    let style = shape.style();
    let opacity = f32::from(style.opacity()) / 100.0;

    match shape.kind() {
        ShapeKind::Rectangle => {
            let mut rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height());
            if style.roundness().is_some() {
                rect = rect.set("rx", corner_radius(bounds));
            }
            outline(fill(rect, style.background_color()), shape).set("opacity", opacity).into()
        }
        ShapeKind::Ellipse => {
            let center = bounds.center();
            let ellipse = svg_element::Ellipse::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("rx", bounds.width() / 2.0)
                .set("ry", bounds.height() / 2.0);
            outline(fill(ellipse, style.background_color()), shape)
                .set("opacity", opacity)
                .into()
        }
        ShapeKind::Line(points) => {
            let origin = bounds.min_point();
            let path = points
                .iter()
                .map(|p| format!("{},{}", origin.x() + p.x(), origin.y() + p.y()))
                .collect::<Vec<_>>()
                .join(" ");
            let polyline = svg_element::Polyline::new()
                .set("points", path)
                .set("fill", "none");
            outline(polyline, shape).set("opacity", opacity).into()
        }
        ShapeKind::Text(content) => render_text(bounds, content, style.stroke_color(), opacity),
    }
}

/// One `<text>` per line, stacked at the label's line height.
fn render_text(bounds: Bounds, content: &TextContent, color: Color, opacity: f32) -> Box<dyn svg::Node> {
    let size = content.font_size();
    let mut group = svg_element::Group::new()
        .set("font-family", content.font_family().css_family())
        .set("font-size", size)
        .set("fill", paint(color))
        .set("fill-opacity", unit_alpha(color))
        .set("opacity", opacity);

    for (i, line) in content.text().lines().enumerate() {
        // Baseline sits three quarters of the font size below the line top.
        let baseline = bounds.min_y() + size * (0.75 + LINE_HEIGHT_FACTOR * i as f32);
        group = group.add(
            svg_element::Text::new(line)
                .set("x", bounds.min_x())
                .set("y", baseline),
        );
    }
    group.into()
}

fn fill<T: svg::Node>(mut node: T, color: Color) -> T {
    node.assign("fill", paint(color));
    if !color.is_transparent() {
        node.assign("fill-opacity", unit_alpha(color));
    }
    node
}

fn outline<T: svg::Node>(mut node: T, shape: &Shape) -> T {
    let style = shape.style();
    let color = style.stroke_color();
    node.assign("stroke", paint(color));
    if color.is_transparent() {
        return node;
    }
    node.assign("stroke-opacity", unit_alpha(color));
    node.assign("stroke-width", style.stroke_width());
    node
}

fn paint(color: Color) -> String {
    if color.is_transparent() {
        "none".to_string()
    } else {
        color.to_hex_rgb()
    }
}

fn unit_alpha(color: Color) -> f32 {
    f32::from(color.alpha()) / 255.0
}

/// Adaptive corner radius: a quarter of the shorter side, capped.
fn corner_radius(bounds: Bounds) -> f32 {
    let side = bounds.width().min(bounds.height());
    (side * 0.25).min(MAX_CORNER_RADIUS)
}
