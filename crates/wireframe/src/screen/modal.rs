//! Modal dialogs drawn over a dimmed screen.
//!
//! A modal screen renders its background screen first, covers the page area
//! right of the side navigation with a translucent [`overlay`], then draws a
//! card centered in that area. Cards are filled with [`Field`]s and closed
//! by a row of [`actions`].

use wireframe_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    shape::{Pen, Shape},
    theme::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, SIDEBAR_WIDTH},
};

/// Width of every modal card.
pub const MODAL_WIDTH: f32 = 500.0;

/// Opacity of the dimming overlay, in percent.
pub const OVERLAY_OPACITY: u8 = 50;

/// Width of input boxes inside a modal.
pub const INPUT_WIDTH: f32 = 420.0;

const PADDING: f32 = 40.0;

/// Area dimmed behind a modal: everything right of the navigation, below the header.
pub fn dimmed_area(origin: Point) -> Bounds {
    Bounds::rect(
        origin.x() + SIDEBAR_WIDTH,
        origin.y() + HEADER_HEIGHT,
        SCREEN_WIDTH - SIDEBAR_WIDTH,
        SCREEN_HEIGHT - HEADER_HEIGHT,
    )
}

/// The translucent overlay covering [`dimmed_area`].
pub fn overlay(pen: &Pen<'_>, origin: Point) -> Shape {
    pen.rect(dimmed_area(origin))
        .fill(pen.theme().palette.overlay)
        .no_stroke()
        .opacity(OVERLAY_OPACITY)
}

/// Bounds of a modal card of `height`, centered in the dimmed area.
pub fn card_bounds(origin: Point, height: f32) -> Bounds {
    let area = dimmed_area(origin);
    let x = area.min_x() + (area.width() - MODAL_WIDTH) / 2.0;
    let y = area.min_y() + (area.height() - height) / 2.0;
    Point::new(x, y).to_bounds(Size::new(MODAL_WIDTH, height))
}

/// Draws the overlay, the card and its title. Content is positioned
/// relative to the returned card bounds.
pub fn open(pen: &Pen<'_>, origin: Point, height: f32, title: &str) -> (Bounds, Vec<Shape>) {
    let card = card_bounds(origin, height);
    let shapes = vec![
        overlay(pen, origin),
        pen.rect(card).fill(pen.theme().palette.background).rounded(),
        pen.text(
            Point::new(card.min_x() + PADDING, card.min_y() + PADDING),
            title,
            24.0,
        ),
    ];
    (card, shapes)
}

/// Cancel and primary buttons, side by side, `top` pixels below the card top.
pub fn actions(
    pen: &Pen<'_>,
    card: Bounds,
    top: f32,
    primary_label: &str,
    primary_color: Color,
) -> Vec<Shape> {
    let palette = &pen.theme().palette;
    let x = card.min_x();
    let y = card.min_y() + top;

    vec![
        pen.rect(Bounds::rect(x + 40.0, y, 200.0, 50.0))
            .fill(palette.background)
            .stroke(palette.input_border)
            .rounded(),
        pen.text(Point::new(x + 110.0, y + 15.0), "Cancel", 16.0),
        pen.rect(Bounds::rect(x + 260.0, y, 200.0, 50.0))
            .fill(primary_color)
            .no_stroke()
            .rounded(),
        pen.text(Point::new(x + 330.0, y + 15.0), primary_label, 16.0)
            .stroke(palette.on_brand),
    ]
}

/// Trailing text drawn inside an input, right of the value.
#[derive(Debug, Clone, PartialEq)]
struct Hint {
    offset: f32,
    text: String,
    size: f32,
    color: Color,
}

/// A labelled input box with a pre-filled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    label: String,
    value: String,
    value_size: f32,
    value_color: Option<Color>,
    height: f32,
    hint: Option<Hint>,
}

impl Field {
    /// A regular 50px input.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            value_size: 16.0,
            value_color: None,
            height: 50.0,
            hint: None,
        }
    }

    /// A 60px input with a large value, used for amounts.
    pub fn prominent(mut self) -> Self {
        self.value_size = 32.0;
        self.height = 60.0;
        self
    }

    /// Colors the value, e.g. for placeholder text.
    pub fn value_color(mut self, color: Color) -> Self {
        self.value_color = Some(color);
        self
    }

    /// Adds trailing text `offset` pixels right of the input's left edge.
    pub fn hint(mut self, offset: f32, text: impl Into<String>, size: f32, color: Color) -> Self {
        self.hint = Some(Hint {
            offset,
            text: text.into(),
            size,
            color,
        });
        self
    }

    /// Draws the field `top` pixels below the card top.
    pub fn draw(&self, pen: &Pen<'_>, card: Bounds, top: f32) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let left = card.min_x() + PADDING;
        let y = card.min_y() + top;

        let mut value = pen.text(Point::new(left + 20.0, y + 40.0), self.value.as_str(), self.value_size);
        if let Some(color) = self.value_color {
            value = value.stroke(color);
        }

        let mut shapes = vec![
            pen.text(Point::new(left, y), self.label.as_str(), 14.0)
                .stroke(palette.label),
            pen.rect(Bounds::rect(left, y + 25.0, INPUT_WIDTH, self.height))
                .fill(palette.background)
                .stroke(palette.input_border)
                .rounded(),
            value,
        ];

        if let Some(hint) = &self.hint {
            shapes.push(
                pen.text(
                    Point::new(left + hint.offset, y + 40.0),
                    hint.text.as_str(),
                    hint.size,
                )
                .stroke(hint.color),
            );
        }
        shapes
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use wireframe_core::theme::Theme;

    use super::*;
    use crate::screen::test_support::texts;

    #[test]
    fn test_card_is_centered_in_dimmed_area() {
        let origin = Point::new(3200.0, 0.0);
        let card = card_bounds(origin, 700.0);
        assert_eq!(card, Bounds::rect(3810.0, 130.0, 500.0, 700.0));

        let area = dimmed_area(origin);
        assert!(area.contains(&card));
        assert_approx_eq!(f32, card.center().x(), area.center().x());
        assert_approx_eq!(f32, card.center().y(), area.center().y());
    }

    #[test]
    fn test_overlay_style() {
        let theme = Theme::default();
        let shape = overlay(&Pen::new(&theme), Point::default());
        assert_eq!(shape.bounds(), Bounds::rect(280.0, 60.0, 1160.0, 840.0));
        assert_eq!(shape.style().opacity(), 50);
        assert_eq!(shape.style().background_color(), theme.palette.overlay);
        assert!(shape.style().stroke_color().is_transparent());
    }

    #[test]
    fn test_open_draws_overlay_card_and_title() {
        let theme = Theme::default();
        let (card, shapes) = open(&Pen::new(&theme), Point::default(), 500.0, "Create New Account");
        assert_eq!(card, Bounds::rect(610.0, 230.0, 500.0, 500.0));
        assert_eq!(shapes.len(), 3);
        assert_eq!(texts(&shapes), vec!["Create New Account"]);
        assert_eq!(shapes[2].bounds().min_point(), Point::new(650.0, 270.0));
    }

    #[test]
    fn test_field_layout() {
        let theme = Theme::default();
        let card = Bounds::rect(610.0, 130.0, 500.0, 700.0);
        let shapes = Field::new("Description", "Lunch with team").draw(&Pen::new(&theme), card, 400.0);

        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].bounds().min_point(), Point::new(650.0, 530.0));
        assert_eq!(shapes[1].bounds(), Bounds::rect(650.0, 555.0, 420.0, 50.0));
        assert_eq!(shapes[2].bounds().min_point(), Point::new(670.0, 570.0));
        assert_eq!(shapes[2].text().unwrap().font_size(), 16.0);
    }

    #[test]
    fn test_prominent_field_with_hint() {
        let theme = Theme::default();
        let card = Bounds::rect(0.0, 0.0, 500.0, 700.0);
        let shapes = Field::new("Amount", "$ 45.00")
            .prominent()
            .hint(260.0, "USD", 14.0, theme.palette.label)
            .draw(&Pen::new(&theme), card, 90.0);

        assert_eq!(shapes.len(), 4);
        assert_approx_eq!(f32, shapes[1].bounds().height(), 60.0);
        assert_eq!(shapes[2].text().unwrap().font_size(), 32.0);
        assert_eq!(shapes[3].bounds().min_point(), Point::new(300.0, 130.0));
        assert_eq!(shapes[3].style().stroke_color(), theme.palette.label);
    }

    #[test]
    fn test_actions_row() {
        let theme = Theme::default();
        let card = Bounds::rect(610.0, 130.0, 500.0, 700.0);
        let shapes = actions(&Pen::new(&theme), card, 620.0, "Save Expense", theme.palette.danger);

        assert_eq!(texts(&shapes), vec!["Cancel", "Save Expense"]);
        assert_eq!(shapes[0].bounds(), Bounds::rect(650.0, 750.0, 200.0, 50.0));
        assert_eq!(shapes[2].bounds(), Bounds::rect(870.0, 750.0, 200.0, 50.0));
        assert_eq!(shapes[2].style().background_color(), theme.palette.danger);
    }
}
