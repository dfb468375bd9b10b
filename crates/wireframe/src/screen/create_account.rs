//! New sub-account form over the dimmed dashboard.

use wireframe_core::{
    geometry::Point,
    shape::{Pen, Shape},
};

use super::{
    Dashboard, Screen,
    modal::{self, Field},
};

const MODAL_HEIGHT: f32 = 500.0;

/// The dashboard with the "Create New Account" modal open.
#[derive(Debug, Clone, Default)]
pub struct CreateAccount {
    background: Dashboard,
}

impl CreateAccount {
    pub fn new(background: Dashboard) -> Self {
        Self { background }
    }
}

impl Screen for CreateAccount {
    fn name(&self) -> &'static str {
        "create-account"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let mut shapes = self.background.draw(pen, origin);

        let (card, header) = modal::open(pen, origin, MODAL_HEIGHT, "Create New Account");
        shapes.extend(header);

        let fields = [
            (
                100.0,
                Field::new("Account Name", "e.g. Holiday Fund").value_color(palette.placeholder),
            ),
            (
                200.0,
                Field::new("Income Allocation %", "10").hint(340.0, "%", 16.0, palette.label),
            ),
            (300.0, Field::new("Initial Balance (Optional)", "$ 0.00")),
        ];
        for (top, field) in fields {
            shapes.extend(field.draw(pen, card, top));
        }

        shapes.extend(modal::actions(pen, card, 410.0, "Create Account", palette.brand));
        shapes
    }
}

#[cfg(test)]
mod tests {
    use wireframe_core::{geometry::Bounds, theme::Theme};

    use super::*;
    use crate::screen::test_support::{draw, find_text, texts};

    #[test]
    fn test_create_account_element_count() {
        let shapes = draw(&CreateAccount::default(), Point::default());
        assert_eq!(shapes.len(), 80);
    }

    #[test]
    fn test_modal_is_vertically_centered() {
        let shapes = draw(&CreateAccount::default(), Point::default());
        let card = shapes[64].bounds();
        assert_eq!(card, Bounds::rect(610.0, 230.0, 500.0, 500.0));
    }

    #[test]
    fn test_form_labels_and_placeholder() {
        let theme = Theme::default();
        let shapes = draw(&CreateAccount::default(), Point::default());
        assert_eq!(
            texts(&shapes[63..]),
            vec![
                "Create New Account",
                "Account Name",
                "e.g. Holiday Fund",
                "Income Allocation %",
                "10",
                "%",
                "Initial Balance (Optional)",
                "$ 0.00",
                "Cancel",
                "Create Account",
            ]
        );
        assert_eq!(
            find_text(&shapes, "e.g. Holiday Fund").style().stroke_color(),
            theme.palette.placeholder
        );
    }

    #[test]
    fn test_create_button_uses_brand() {
        let theme = Theme::default();
        let shapes = draw(&CreateAccount::default(), Point::default());
        let button = &shapes[shapes.len() - 2];
        assert_eq!(button.bounds(), Bounds::rect(870.0, 640.0, 200.0, 50.0));
        assert_eq!(button.style().background_color(), theme.palette.brand);
    }
}
