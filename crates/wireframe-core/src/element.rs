//! Stamped drawing elements, as serialised into the document.
//!
//! An [`Element`] is a [`Shape`] plus the [`Identity`] drawn for it from
//! [`Noise`]. Serialisation flattens both into the single camelCase object
//! the diagramming tool reads:
//!
//! ```json
//! {
//!   "type": "rectangle", "version": 1, "versionNonce": 4812, "isDeleted": false,
//!   "id": "3f2a9c1e", "fillStyle": "solid", "strokeWidth": 1.0, "strokeStyle": "solid",
//!   "roughness": 0, "opacity": 100, "angle": 0.0, "x": 0.0, "y": 0.0,
//!   "width": 1440.0, "height": 900.0, "strokeColor": "#212121",
//!   "backgroundColor": "#ffffff", "groupIds": [], "roundness": null, "seed": 9051,
//!   "boundElements": [], "updated": 1733270400000, "link": null, "locked": false
//! }
//! ```

use log::trace;
use serde::{Serialize, Serializer};

use crate::{
    color::Color,
    noise::{ElementId, Identity, Noise},
    shape::{
        FillStyle, FontFamily, GroupTag, Roundness, Shape, ShapeKind, StrokeStyle, TextAlign,
        VerticalAlign,
    },
};

/// A shape with its identity; immutable once stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    identity: Identity,
    shape: Shape,
}

impl Element {
    /// Attaches a freshly drawn identity to `shape`.
    pub fn stamp(shape: Shape, noise: &mut Noise) -> Self {
        let identity = noise.identity();
        trace!(id:% = identity.id(), kind = shape.kind().name(); "Stamped element");
        Self { identity, shape }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn id(&self) -> &ElementId {
        self.identity.id()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Payload<'a> {
    Rectangle,
    Ellipse,
    Line {
        points: Vec<[f32; 2]>,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        text: &'a str,
        font_size: f32,
        font_family: FontFamily,
        text_align: TextAlign,
        vertical_align: VerticalAlign,
    },
}

impl<'a> From<&'a ShapeKind> for Payload<'a> {
    fn from(kind: &'a ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle,
            ShapeKind::Ellipse => Self::Ellipse,
            ShapeKind::Line(points) => Self::Line {
                points: points.iter().map(|p| [p.x(), p.y()]).collect(),
            },
            ShapeKind::Text(content) => Self::Text {
                text: content.text(),
                font_size: content.font_size(),
                font_family: content.font_family(),
                text_align: content.text_align(),
                vertical_align: content.vertical_align(),
            },
        }
    }
}

/// Flat wire view of an [`Element`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Record<'a> {
    #[serde(flatten)]
    payload: Payload<'a>,
    version: u32,
    version_nonce: u32,
    is_deleted: bool,
    id: &'a ElementId,
    fill_style: FillStyle,
    stroke_width: f32,
    stroke_style: StrokeStyle,
    roughness: u8,
    opacity: u8,
    angle: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    stroke_color: Color,
    background_color: Color,
    group_ids: Vec<&'a GroupTag>,
    roundness: Option<Roundness>,
    seed: u32,
    bound_elements: [(); 0],
    updated: u64,
    link: Option<&'a str>,
    locked: bool,
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shape = &self.shape;
        let style = shape.style();
        let bounds = shape.bounds();
        Record {
            payload: Payload::from(shape.kind()),
            version: self.identity.version(),
            version_nonce: self.identity.version_nonce(),
            is_deleted: false,
            id: self.identity.id(),
            fill_style: FillStyle::Solid,
            stroke_width: style.stroke_width(),
            stroke_style: StrokeStyle::Solid,
            roughness: style.roughness(),
            opacity: style.opacity(),
            angle: shape.angle(),
            x: bounds.min_x(),
            y: bounds.min_y(),
            width: bounds.width(),
            height: bounds.height(),
            stroke_color: style.stroke_color(),
            background_color: style.background_color(),
            group_ids: shape.group().into_iter().collect(),
            roundness: style.roundness(),
            seed: self.identity.seed(),
            bound_elements: [],
            updated: self.identity.updated(),
            link: None,
            locked: false,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        geometry::{Bounds, Point},
        shape::Pen,
        theme::Theme,
    };

    fn to_json(shape: Shape) -> Value {
        let element = Element::stamp(shape, &mut Noise::seeded(9));
        serde_json::to_value(&element).unwrap()
    }

    #[test]
    fn test_rectangle_record() {
        let theme = Theme::default();
        let value = to_json(
            Pen::new(&theme)
                .rect(Bounds::rect(100.0, 10.0, 1200.0, 40.0))
                .fill(theme.palette.background)
                .rounded(),
        );

        assert_eq!(value["type"], "rectangle");
        assert_eq!(value["x"], 100.0);
        assert_eq!(value["y"], 10.0);
        assert_eq!(value["width"], 1200.0);
        assert_eq!(value["height"], 40.0);
        assert_eq!(value["strokeColor"], "#212121");
        assert_eq!(value["backgroundColor"], "#ffffff");
        assert_eq!(value["fillStyle"], "solid");
        assert_eq!(value["strokeStyle"], "solid");
        assert_eq!(value["roughness"], 0);
        assert_eq!(value["opacity"], 100);
        assert_eq!(value["roundness"], json!({"type": 3}));
        assert_eq!(value["groupIds"], json!([]));
        assert_eq!(value["boundElements"], json!([]));
        assert_eq!(value["isDeleted"], false);
        assert_eq!(value["locked"], false);
        assert_eq!(value["link"], Value::Null);
        assert_eq!(value["version"], 1);
        assert_eq!(value["updated"], 0);
        assert!(value.get("text").is_none());
        assert!(value.get("points").is_none());
    }

    #[test]
    fn test_text_record() {
        let theme = Theme::default();
        let value = to_json(
            Pen::new(&theme)
                .text(Point::new(120.0, 20.0), "Sign In", 16.0)
                .stroke(theme.palette.on_brand),
        );

        assert_eq!(value["type"], "text");
        assert_eq!(value["text"], "Sign In");
        assert_eq!(value["fontSize"], 16.0);
        assert_eq!(value["fontFamily"], 1);
        assert_eq!(value["textAlign"], "left");
        assert_eq!(value["verticalAlign"], "top");
        assert_eq!(value["strokeColor"], "#ffffff");
        assert_eq!(value["backgroundColor"], "transparent");
        assert_eq!(value["width"], 67.0);
        assert_eq!(value["roundness"], Value::Null);
    }

    #[test]
    fn test_text_size_is_exact_far_from_origin() {
        let theme = Theme::default();
        let value = to_json(Pen::new(&theme).text(Point::new(4800.0, 1390.0), "Welcome Back", 24.0));

        assert_eq!(value["x"], 4800.0);
        assert_eq!(value["y"], 1390.0);
        assert_eq!(value["width"], 173.0);
        assert_eq!(value["height"].as_f64().unwrap() as f32, 24.0 * 1.2);
    }

    #[test]
    fn test_line_record() {
        let theme = Theme::default();
        let value = to_json(Pen::new(&theme).hline(Point::new(320.0, 260.0), 1080.0));

        assert_eq!(value["type"], "line");
        assert_eq!(value["points"], json!([[0.0, 0.0], [1080.0, 0.0]]));
        assert_eq!(value["height"], 0.0);
    }

    #[test]
    fn test_group_ids_record() {
        let theme = Theme::default();
        let value = to_json(
            Pen::new(&theme)
                .ellipse(Bounds::rect(0.0, 0.0, 12.0, 12.0))
                .group_with(GroupTag::new("controls")),
        );
        assert_eq!(value["type"], "ellipse");
        assert_eq!(value["groupIds"], json!(["controls"]));
    }

    #[test]
    fn test_stamp_keeps_shape() {
        let theme = Theme::default();
        let shape = Pen::new(&theme).rect(Bounds::rect(1.0, 2.0, 3.0, 4.0));
        let element = Element::stamp(shape.clone(), &mut Noise::seeded(1));
        assert_eq!(element.shape(), &shape);
        assert_eq!(element.id().as_str().len(), 8);
    }
}
