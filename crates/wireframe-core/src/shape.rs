//! The pure layout record behind every drawing element.
//!
//! A [`Shape`] carries everything that determines where and how an element
//! is drawn: its kind, bounds, style and kind-specific payload. It carries
//! nothing random, so layout code can be tested by comparing shapes
//! directly. Identity tokens and jitter seeds are attached later, when a
//! shape is stamped into an [`Element`](crate::element::Element).
//!
//! # Overview
//!
//! - [`Pen`] - The element factory: builds shapes with theme defaults
//! - [`Shape`] - Kind, bounds, style and optional group tag
//! - [`ShapeKind`] - Rectangle, ellipse, line (with points) or text (with [`TextContent`])
//! - [`Style`] - Stroke, fill, opacity and roundness
//!
//! # Quick Start
//!
//! ```
//! use wireframe_core::{geometry::{Bounds, Point}, shape::Pen, theme::Theme};
//!
//! let theme = Theme::default();
//! let pen = Pen::new(&theme);
//!
//! let button = pen
//!     .rect(Bounds::rect(40.0, 280.0, 320.0, 50.0))
//!     .fill(theme.palette.brand)
//!     .no_stroke()
//!     .rounded();
//! let label = pen.text(Point::new(160.0, 295.0), "Sign In", 16.0);
//!
//! assert!(button.style().roundness().is_some());
//! assert_eq!(label.bounds().width(), 67.0); // round(7 * 16 * 0.6)
//! ```

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{
    color::Color,
    geometry::{Bounds, Point, Size},
    theme::Theme,
};

/// Width of one character relative to the font size, used to estimate text width.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height relative to the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Style Types
// =============================================================================

/// How the interior of a closed shape is filled. Mockups are always solid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    Solid,
}

/// Outline pattern. Mockups are always solid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    #[default]
    Solid,
}

/// Corner rounding marker understood by the diagramming tool.
///
/// Serialises as `{"type": 3}` (adaptive radius).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roundness {
    #[serde(rename = "type")]
    kind: u8,
}

impl Roundness {
    /// Corner radius that adapts to the shape size.
    pub const ADAPTIVE: Roundness = Roundness { kind: 3 };
}

/// Font family selector, serialised as the tool's numeric font id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    /// Hand-drawn font (id 1).
    #[default]
    Hand,
    /// Sans-serif font (id 2).
    Normal,
    /// Monospace font (id 3).
    Code,
}

impl FontFamily {
    /// Returns the numeric id used in the document.
    pub fn id(self) -> u8 {
        match self {
            Self::Hand => 1,
            Self::Normal => 2,
            Self::Code => 3,
        }
    }

    /// Returns a CSS font family for previews.
    pub fn css_family(self) -> &'static str {
        match self {
            Self::Hand => "Virgil, Segoe UI Emoji, cursive",
            Self::Normal => "Helvetica, Segoe UI Emoji, sans-serif",
            Self::Code => "Cascadia, Segoe UI Emoji, monospace",
        }
    }
}

impl FromStr for FontFamily {
    type Err = String;

    /// Parses a family name (`hand`, `normal`, `code`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hand" | "virgil" => Ok(Self::Hand),
            "normal" | "helvetica" => Ok(Self::Normal),
            "code" | "cascadia" => Ok(Self::Code),
            _ => Err(format!(
                "unknown font family `{s}` (expected hand, normal or code)"
            )),
        }
    }
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

/// Horizontal text alignment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Stroke, fill and corner style of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    stroke_color: Color,
    background_color: Color,
    stroke_width: f32,
    roughness: u8,
    opacity: u8,
    roundness: Option<Roundness>,
}

impl Style {
    /// Creates the default style with the given outline color: transparent
    /// background, solid 1px outline, no roughness, fully opaque, square corners.
    pub fn new(stroke_color: Color) -> Self {
        Self {
            stroke_color,
            background_color: Color::TRANSPARENT,
            stroke_width: 1.0,
            roughness: 0,
            opacity: 100,
            roundness: None,
        }
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn roughness(&self) -> u8 {
        self.roughness
    }

    /// Opacity in percent (0-100).
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn roundness(&self) -> Option<Roundness> {
        self.roundness
    }
}

/// Payload of a text shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    text: String,
    font_size: f32,
    font_family: FontFamily,
    text_align: TextAlign,
    vertical_align: VerticalAlign,
}

impl TextContent {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }
}

/// The kind of a shape together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    /// Polyline; points are relative to the shape's anchor (its x, y).
    Line(Vec<Point>),
    Text(TextContent),
}

impl ShapeKind {
    /// Returns the type name used in the document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Line(_) => "line",
            Self::Text(_) => "text",
        }
    }
}

/// Tag shared by shapes that belong to the same group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupTag(String);

impl GroupTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Shape
// =============================================================================

/// A positioned, styled drawing primitive with no random state.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    bounds: Bounds,
    angle: f32,
    style: Style,
    group: Option<GroupTag>,
}

impl Shape {
    fn new(kind: ShapeKind, bounds: Bounds, style: Style) -> Self {
        Self {
            kind,
            bounds,
            angle: 0.0,
            style,
            group: None,
        }
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Rotation in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn group(&self) -> Option<&GroupTag> {
        self.group.as_ref()
    }

    /// Returns the text payload if this is a text shape.
    pub fn text(&self) -> Option<&TextContent> {
        match &self.kind {
            ShapeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Returns the relative points if this is a line.
    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            ShapeKind::Line(points) => Some(points),
            _ => None,
        }
    }

    /// Sets the background color.
    pub fn fill(mut self, color: Color) -> Self {
        self.style.background_color = color;
        self
    }

    /// Sets the outline color. For text this is the glyph color.
    pub fn stroke(mut self, color: Color) -> Self {
        self.style.stroke_color = color;
        self
    }

    /// Removes the outline.
    pub fn no_stroke(self) -> Self {
        self.stroke(Color::TRANSPARENT)
    }

    /// Marks the corners as rounded.
    pub fn rounded(mut self) -> Self {
        self.style.roundness = Some(Roundness::ADAPTIVE);
        self
    }

    /// Sets the opacity in percent; values above 100 are clamped.
    pub fn opacity(mut self, opacity: u8) -> Self {
        self.style.opacity = opacity.min(100);
        self
    }

    /// Assigns the shape to a group.
    pub fn group_with(mut self, tag: GroupTag) -> Self {
        self.group = Some(tag);
        self
    }

    /// Overrides the estimated width of a text shape. Other kinds are
    /// resized the same way.
    pub fn with_width(mut self, width: f32) -> Self {
        let top_left = self.bounds.min_point();
        self.bounds = top_left.to_bounds(Size::new(width, self.bounds.height()));
        self
    }

    /// Sets the horizontal alignment of a text shape; no-op for other kinds.
    pub fn align(mut self, text_align: TextAlign) -> Self {
        if let ShapeKind::Text(content) = &mut self.kind {
            content.text_align = text_align;
        }
        self
    }
}

// =============================================================================
// Pen (element factory)
// =============================================================================

/// Builds shapes populated with the theme's defaults.
///
/// Every constructor returns a [`Shape`] that callers refine with the
/// builder-style setters ([`Shape::fill`], [`Shape::stroke`],
/// [`Shape::rounded`], ...). Geometry is taken as given: negative or zero
/// sizes are not rejected.
#[derive(Debug, Clone, Copy)]
pub struct Pen<'a> {
    theme: &'a Theme,
}

impl<'a> Pen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Returns the theme this pen draws with.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// A rectangle outlined in the theme stroke color with a transparent fill.
    pub fn rect(&self, bounds: Bounds) -> Shape {
        Shape::new(
            ShapeKind::Rectangle,
            bounds,
            Style::new(self.theme.palette.stroke),
        )
    }

    /// An ellipse inscribed in `bounds`, styled like [`Pen::rect`].
    pub fn ellipse(&self, bounds: Bounds) -> Shape {
        Shape::new(
            ShapeKind::Ellipse,
            bounds,
            Style::new(self.theme.palette.stroke),
        )
    }

    /// A text label whose top-left corner is `origin`.
    ///
    /// The width is estimated as `round(chars * size * 0.6)` and the height is
    /// `size * 1.2`; use [`Shape::with_width`] for an explicit width.
    pub fn text(&self, origin: Point, text: impl Into<String>, font_size: f32) -> Shape {
        let text = text.into();
        let size = estimate_text_size(&text, font_size);
        let content = TextContent {
            text,
            font_size,
            font_family: self.theme.font_family,
            text_align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
        };
        Shape::new(
            ShapeKind::Text(content),
            origin.to_bounds(size),
            Style::new(self.theme.palette.text),
        )
    }

    /// A polyline anchored at `origin` through `points` (relative to `origin`).
    ///
    /// The bounds span the extent of the points, so a horizontal separator has
    /// zero height.
    pub fn line(&self, origin: Point, points: &[Point]) -> Shape {
        let size = points_extent(points);
        Shape::new(
            ShapeKind::Line(points.to_vec()),
            origin.to_bounds(size),
            Style::new(self.theme.palette.stroke),
        )
    }

    /// A straight horizontal line of the given length starting at `origin`.
    pub fn hline(&self, origin: Point, length: f32) -> Shape {
        self.line(origin, &[Point::default(), Point::new(length, 0.0)])
    }
}

/// Estimates the size of a label: `round(chars * size * 0.6)` by `size * 1.2`.
///
/// This is an approximation, not a font-metrics calculation: every character,
/// including line breaks, counts as one glyph.
pub fn estimate_text_size(text: &str, font_size: f32) -> Size {
    let chars = text.chars().count() as f32;
    Size::new(
        (chars * font_size * CHAR_WIDTH_FACTOR).round(),
        font_size * LINE_HEIGHT_FACTOR,
    )
}

fn points_extent(points: &[Point]) -> Size {
    let Some(first) = points.first() else {
        return Size::default();
    };
    let extent = points
        .iter()
        .skip(1)
        .map(|p| Bounds::new_from_top_left(*p, Size::default()))
        .fold(Bounds::new_from_top_left(*first, Size::default()), |acc, b| {
            acc.merge(&b)
        });
    extent.to_size()
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_font_family_from_str() {
        assert_eq!("Code".parse::<FontFamily>(), Ok(FontFamily::Code));
        assert_eq!("helvetica".parse::<FontFamily>(), Ok(FontFamily::Normal));
        assert_eq!("hand".parse::<FontFamily>().map(FontFamily::id), Ok(1));
        assert!("comic".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_rect_defaults() {
        let theme = Theme::default();
        let rect = Pen::new(&theme).rect(Bounds::rect(0.0, 0.0, 1440.0, 900.0));

        assert_eq!(rect.kind(), &ShapeKind::Rectangle);
        assert_eq!(rect.style().stroke_color(), theme.palette.stroke);
        assert!(rect.style().background_color().is_transparent());
        assert_eq!(rect.style().opacity(), 100);
        assert_eq!(rect.style().roundness(), None);
        assert_approx_eq!(f32, rect.angle(), 0.0);
        assert!(rect.group().is_none());
    }

    #[test]
    fn test_rect_overrides() {
        let theme = Theme::default();
        let overlay = Pen::new(&theme)
            .rect(Bounds::rect(280.0, 60.0, 1160.0, 840.0))
            .fill(theme.palette.overlay)
            .no_stroke()
            .opacity(50)
            .rounded();

        assert_eq!(overlay.style().background_color(), theme.palette.overlay);
        assert!(overlay.style().stroke_color().is_transparent());
        assert_eq!(overlay.style().opacity(), 50);
        assert_eq!(overlay.style().roundness(), Some(Roundness::ADAPTIVE));
    }

    #[test]
    fn test_opacity_is_clamped() {
        let theme = Theme::default();
        let rect = Pen::new(&theme).rect(Bounds::default()).opacity(250);
        assert_eq!(rect.style().opacity(), 100);
    }

    #[test]
    fn test_text_estimated_size() {
        let theme = Theme::default();
        let label = Pen::new(&theme).text(Point::new(10.0, 20.0), "Welcome Back", 24.0);

        // 12 chars * 24 * 0.6 = 172.8
        assert_approx_eq!(f32, label.bounds().width(), 173.0);
        assert_approx_eq!(f32, label.bounds().height(), 28.8);
        assert_eq!(label.bounds().min_point(), Point::new(10.0, 20.0));
        assert_eq!(label.style().stroke_color(), theme.palette.text);

        let content = label.text().unwrap();
        assert_eq!(content.text(), "Welcome Back");
        assert_eq!(content.text_align(), TextAlign::Left);
        assert_eq!(content.vertical_align(), VerticalAlign::Top);
        assert_eq!(content.font_family(), FontFamily::Hand);
    }

    #[test]
    fn test_text_counts_chars_not_bytes() {
        // The glyph is four bytes but a single char: 14 chars in total.
        let size = estimate_text_size("💸 Transactions", 10.0);
        assert_approx_eq!(f32, size.width(), 84.0);
    }

    #[test]
    fn test_text_explicit_width() {
        let theme = Theme::default();
        let label = Pen::new(&theme)
            .text(Point::default(), "Amount", 14.0)
            .with_width(200.0)
            .align(TextAlign::Right);
        assert_approx_eq!(f32, label.bounds().width(), 200.0);
        assert_approx_eq!(f32, label.bounds().height(), 16.8);
        assert_eq!(label.text().unwrap().text_align(), TextAlign::Right);
    }

    #[test]
    fn test_horizontal_line_has_zero_height() {
        let theme = Theme::default();
        let line = Pen::new(&theme).hline(Point::new(320.0, 250.0), 1080.0);
        assert_approx_eq!(f32, line.bounds().width(), 1080.0);
        assert_approx_eq!(f32, line.bounds().height(), 0.0);
        assert_eq!(line.points().unwrap().len(), 2);
    }

    #[test]
    fn test_line_extent_with_negative_points() {
        let theme = Theme::default();
        let line = Pen::new(&theme).line(
            Point::new(100.0, 100.0),
            &[Point::default(), Point::new(-130.0, 75.0)],
        );
        assert_approx_eq!(f32, line.bounds().width(), 130.0);
        assert_approx_eq!(f32, line.bounds().height(), 75.0);
        assert_eq!(line.bounds().min_point(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_empty_line() {
        let theme = Theme::default();
        let line = Pen::new(&theme).line(Point::default(), &[]);
        assert!(line.bounds().to_size().is_zero());
    }

    #[test]
    fn test_align_is_noop_for_rectangles() {
        let theme = Theme::default();
        let rect = Pen::new(&theme).rect(Bounds::default());
        assert_eq!(rect.clone().align(TextAlign::Center), rect);
    }

    #[test]
    fn test_group_with() {
        let theme = Theme::default();
        let rect = Pen::new(&theme)
            .rect(Bounds::default())
            .group_with(GroupTag::new("card"));
        assert_eq!(rect.group().map(GroupTag::as_str), Some("card"));
    }

    #[test]
    fn test_font_family_ids() {
        assert_eq!(FontFamily::Hand.id(), 1);
        assert_eq!(FontFamily::Normal.id(), 2);
        assert_eq!(FontFamily::Code.id(), 3);
    }

    proptest! {
        #[test]
        fn prop_text_size_formula(text in "[a-zA-Z0-9 $.,]{0,40}", size in 8u8..64) {
            let size = f32::from(size);
            let estimate = estimate_text_size(&text, size);
            let expected = (text.chars().count() as f32 * size * 0.6).round();
            prop_assert!(approx_eq!(f32, estimate.width(), expected));
            prop_assert!(approx_eq!(f32, estimate.height(), size * 1.2));
            prop_assert!(estimate.width() >= 0.0);
        }
    }
}
