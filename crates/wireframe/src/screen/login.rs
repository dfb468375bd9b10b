//! Sign-in screen.

use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
};

use super::{Screen, chrome};

/// Frame with a centered sign-in card.
#[derive(Debug, Clone, Default)]
pub struct Login;

impl Screen for Login {
    fn name(&self) -> &'static str {
        "login"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let cx = origin.x() + 520.0;
        let cy = origin.y() + 250.0;

        let input = |top: f32| {
            pen.rect(Bounds::rect(cx + 40.0, cy + top, 320.0, 40.0))
                .fill(palette.background)
                .stroke(palette.input_border)
                .rounded()
        };

        let mut shapes = chrome::frame(pen, origin, self.name());
        shapes.extend([
            pen.rect(Bounds::rect(cx, cy, 400.0, 400.0))
                .fill(palette.background)
                .rounded(),
            pen.text(Point::new(cx + 130.0, cy + 40.0), "Welcome Back", 24.0),
            pen.text(Point::new(cx + 40.0, cy + 100.0), "Email", 14.0)
                .stroke(palette.label),
            input(125.0),
            pen.text(Point::new(cx + 40.0, cy + 180.0), "Password", 14.0)
                .stroke(palette.label),
            input(205.0),
            pen.rect(Bounds::rect(cx + 40.0, cy + 280.0, 320.0, 50.0))
                .fill(palette.brand)
                .no_stroke()
                .rounded(),
            pen.text(Point::new(cx + 160.0, cy + 295.0), "Sign In", 16.0)
                .stroke(palette.on_brand),
            pen.text(
                Point::new(cx + 120.0, cy + 350.0),
                "Don't have an account? Sign up",
                12.0,
            )
            .stroke(palette.brand),
        ]);
        shapes
    }
}
