//! Screen builders.
//!
//! Each mockup screen is a [`Screen`]: a pure function from an origin on
//! the canvas to the shapes that draw it, in back-to-front order. Screens
//! that share structure compose by concatenating the shape lists of their
//! parts (the browser [`chrome`], the side navigation, a dimmed dashboard
//! under a [`modal`]).
//!
//! No screen touches randomness. The only varying input, the bar heights of
//! the insights chart, is drawn before the screen is constructed.

pub mod chrome;
pub mod modal;

mod add_expense;
mod create_account;
mod dashboard;
mod history;
mod insights;
mod login;

pub use add_expense::AddExpense;
pub use create_account::CreateAccount;
pub use dashboard::Dashboard;
pub use history::History;
pub use insights::Insights;
pub use login::Login;

use std::fmt;

use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme,
};

/// One mockup screen.
pub trait Screen: fmt::Debug {
    /// Short name of the screen, used in logs.
    fn name(&self) -> &'static str;

    /// Draws the screen with its top-left corner at `origin`.
    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape>;

    /// The area the screen occupies when drawn at `origin`.
    fn footprint(&self, origin: Point) -> Bounds {
        origin.to_bounds(theme::screen_size())
    }
}

/// Left edge of the page content next to the side navigation.
pub(crate) fn content_left(origin: Point) -> f32 {
    origin.x() + theme::SIDEBAR_WIDTH + theme::CONTENT_INSET
}

/// Width available to page content right of the side navigation.
pub(crate) fn content_width() -> f32 {
    theme::SCREEN_WIDTH - theme::SIDEBAR_WIDTH - 2.0 * theme::CONTENT_INSET
}
