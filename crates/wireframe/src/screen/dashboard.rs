//! Dashboard: balance overview, monthly figures and the sub-account grid.

use log::trace;
use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme::CONTENT_TOP,
};

use super::{
    Screen,
    chrome::{self, NavEntry},
    content_left,
};
use crate::sample::{self, Account, Summary};

/// Number of columns of the account grid.
pub const GRID_COLUMNS: usize = 3;

/// Width of an account card's progress track.
pub const TRACK_WIDTH: f32 = 360.0;

const CARD_WIDTH: f32 = 400.0;
const CARD_HEIGHT: f32 = 150.0;
const COLUMN_PITCH: f32 = 440.0;
const ROW_PITCH: f32 = 180.0;

/// Filled width of a progress track for an allocation percentage.
///
/// Percentages above 100 are clamped, so the fill never exceeds the track.
pub fn progress_fill_width(pct: u8) -> f32 {
    TRACK_WIDTH * (f32::from(pct.min(100)) / 100.0)
}

/// The signed-in home screen.
#[derive(Debug, Clone)]
pub struct Dashboard {
    summary: Summary,
    accounts: Vec<Account>,
}

impl Dashboard {
    pub fn new(summary: Summary, accounts: Vec<Account>) -> Self {
        Self { summary, accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Finds an account by name.
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// Top-left corner of the account card at `index` in the grid.
    pub fn card_origin(origin: Point, index: usize) -> Point {
        let column = (index % GRID_COLUMNS) as f32;
        let row = (index / GRID_COLUMNS) as f32;
        Point::new(
            content_left(origin) + column * COLUMN_PITCH,
            origin.y() + CONTENT_TOP + 330.0 + row * ROW_PITCH,
        )
    }

    fn draw_overview(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let left = content_left(origin);
        let top = origin.y() + CONTENT_TOP;
        let hero_top = top + 60.0;

        let mut shapes = vec![
            pen.text(Point::new(left, top), "Dashboard", 32.0),
            pen.rect(Bounds::rect(left, hero_top, 400.0, 180.0))
                .fill(palette.brand)
                .no_stroke()
                .rounded(),
            pen.text(Point::new(left + 30.0, hero_top + 30.0), "Safe to Spend", 16.0)
                .stroke(palette.on_brand_muted),
            pen.text(
                Point::new(left + 30.0, hero_top + 70.0),
                self.summary.safe_to_spend.to_string(),
                48.0,
            )
            .stroke(palette.on_brand),
            pen.text(
                Point::new(left + 30.0, hero_top + 130.0),
                "Available across Spending Accounts",
                14.0,
            )
            .stroke(palette.on_brand_muted),
        ];

        let metrics = [
            ("Income (Month)", self.summary.income, palette.success),
            ("Spent (Month)", self.summary.spent, palette.danger),
        ];
        for (i, (caption, amount, color)) in metrics.into_iter().enumerate() {
            let x = left + 440.0 + 300.0 * i as f32;
            shapes.extend([
                pen.rect(Bounds::rect(x, hero_top, 280.0, 180.0))
                    .fill(palette.background)
                    .stroke(palette.border)
                    .rounded(),
                pen.text(Point::new(x + 30.0, hero_top + 30.0), caption, 14.0)
                    .stroke(palette.label),
                pen.text(Point::new(x + 30.0, hero_top + 60.0), amount.to_string(), 28.0)
                    .stroke(color),
            ]);
        }

        shapes.push(pen.text(Point::new(left, hero_top + 220.0), "Your Accounts", 24.0));
        shapes
    }

    fn draw_account(pen: &Pen<'_>, card: Point, account: &Account) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let (x, y) = (card.x(), card.y());
        let track = Bounds::rect(x + 20.0, y + 110.0, TRACK_WIDTH, 10.0);

        let mut shapes = vec![
            pen.rect(Bounds::rect(x, y, CARD_WIDTH, CARD_HEIGHT))
                .fill(palette.background)
                .stroke(palette.border)
                .rounded(),
            pen.text(Point::new(x + 20.0, y + 20.0), account.name, 18.0),
            pen.text(Point::new(x + 20.0, y + 50.0), account.balance.to_string(), 32.0),
            pen.rect(track).fill(palette.muted).no_stroke().rounded(),
        ];

        let fill_width = progress_fill_width(account.pct);
        if fill_width > 0.0 {
            let color = if account.is_low() {
                palette.warning
            } else {
                palette.success
            };
            shapes.push(
                pen.rect(Bounds::rect(track.min_x(), track.min_y(), fill_width, 10.0))
                    .fill(color)
                    .no_stroke()
                    .rounded(),
            );
        }
        trace!(account = account.name, fill_width; "Account card drawn");
        shapes
    }

    fn draw_actions(pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let x = origin.x() + 1300.0;
        let y = origin.y() + 800.0;

        vec![
            pen.ellipse(Bounds::rect(x, y, 60.0, 60.0))
                .fill(palette.danger)
                .no_stroke(),
            pen.text(Point::new(x + 18.0, y + 10.0), "-", 40.0)
                .stroke(palette.on_brand),
            pen.ellipse(Bounds::rect(x, y - 80.0, 60.0, 60.0))
                .fill(palette.success)
                .no_stroke(),
            pen.text(Point::new(x + 15.0, y - 90.0), "+", 40.0)
                .stroke(palette.on_brand),
        ]
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Summary::default(), sample::accounts())
    }
}

impl Screen for Dashboard {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let mut shapes = chrome::app_shell(pen, origin, NavEntry::Dashboard);
        shapes.extend(self.draw_overview(pen, origin));
        for (index, account) in self.accounts.iter().enumerate() {
            let card = Self::card_origin(origin, index);
            shapes.extend(Self::draw_account(pen, card, account));
        }
        shapes.extend(Self::draw_actions(pen, origin));
        shapes
    }
}
