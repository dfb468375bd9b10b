//! Browser frame and side navigation shared by the screens.

use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, SIDEBAR_WIDTH},
};

/// Host shown in the faux address bar.
pub const APP_URL: &str = "https://expensestracker.app";

/// Product name shown at the top of the side navigation.
pub const BRAND_NAME: &str = "ExpensesTracker";

/// Name shown next to the avatar in the navigation footer.
pub const USER_NAME: &str = "A. User";

/// Entries of the side navigation, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Dashboard,
    Transactions,
    Accounts,
    Categories,
    Visualizations,
    Settings,
}

impl NavEntry {
    pub const ALL: [NavEntry; 6] = [
        Self::Dashboard,
        Self::Transactions,
        Self::Accounts,
        Self::Categories,
        Self::Visualizations,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Accounts => "Accounts",
            Self::Categories => "Categories",
            Self::Visualizations => "Visualizations",
            Self::Settings => "Settings",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::Transactions => "💸",
            Self::Accounts => "💳",
            Self::Categories => "🏷️",
            Self::Visualizations => "📊",
            Self::Settings => "⚙️",
        }
    }

    /// Path segment of the page, as shown in the address bar.
    pub fn route(self) -> String {
        self.label().to_lowercase()
    }
}

/// Builds the address shown for `route`.
pub fn url_for(route: &str) -> String {
    format!("{APP_URL}/{}", route.to_lowercase())
}

/// Draws the browser window: page background, header strip, the three
/// window controls, and the address bar showing `route`.
pub fn frame(pen: &Pen<'_>, origin: Point, route: &str) -> Vec<Shape> {
    let palette = &pen.theme().palette;
    let (x, y) = (origin.x(), origin.y());

    let mut shapes = vec![
        pen.rect(Bounds::rect(x, y, SCREEN_WIDTH, SCREEN_HEIGHT))
            .fill(palette.background),
        pen.rect(Bounds::rect(x, y, SCREEN_WIDTH, HEADER_HEIGHT))
            .fill(palette.muted)
            .no_stroke(),
    ];

    shapes.extend(palette.window_controls.iter().enumerate().map(|(i, &color)| {
        pen.ellipse(Bounds::rect(x + 20.0 + 20.0 * i as f32, y + 20.0, 12.0, 12.0))
            .fill(color)
            .no_stroke()
    }));

    shapes.push(
        pen.rect(Bounds::rect(x + 100.0, y + 10.0, 1200.0, 40.0))
            .fill(palette.background)
            .rounded(),
    );
    shapes.push(
        pen.text(Point::new(x + 120.0, y + 20.0), url_for(route), 16.0)
            .stroke(palette.placeholder),
    );
    shapes
}

/// Draws the side navigation below the header with `active` highlighted.
pub fn sidebar(pen: &Pen<'_>, origin: Point, active: NavEntry) -> Vec<Shape> {
    let palette = &pen.theme().palette;
    let x = origin.x();
    let top = origin.y() + HEADER_HEIGHT;

    let mut shapes = vec![
        pen.rect(Bounds::rect(
            x,
            top,
            SIDEBAR_WIDTH,
            SCREEN_HEIGHT - HEADER_HEIGHT,
        ))
        .fill(palette.background)
        .stroke(palette.border),
        pen.text(Point::new(x + 40.0, top + 30.0), BRAND_NAME, 24.0)
            .stroke(palette.brand),
    ];

    shapes.extend(NavEntry::ALL.iter().enumerate().map(|(i, &entry)| {
        let color = if entry == active {
            palette.brand
        } else {
            palette.nav_text
        };
        let label = format!("{} {}", entry.glyph(), entry.label());
        pen.text(Point::new(x + 40.0, top + 120.0 + 60.0 * i as f32), label, 18.0)
            .stroke(color)
    }));

    shapes.push(
        pen.ellipse(Bounds::rect(x + 40.0, top + 750.0, 40.0, 40.0))
            .fill(palette.input_border),
    );
    shapes.push(
        pen.text(Point::new(x + 90.0, top + 760.0), USER_NAME, 16.0)
            .stroke(palette.nav_text),
    );
    shapes
}

/// Frame plus side navigation, the base of every signed-in screen.
pub fn app_shell(pen: &Pen<'_>, origin: Point, active: NavEntry) -> Vec<Shape> {
    let mut shapes = frame(pen, origin, &active.route());
    shapes.extend(sidebar(pen, origin, active));
    shapes
}
