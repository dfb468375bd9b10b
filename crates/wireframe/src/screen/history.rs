//! Transaction history table.

use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme::CONTENT_TOP,
};

use super::{
    Screen,
    chrome::{self, NavEntry},
    content_left, content_width,
};
use crate::sample::{self, Transaction};

/// Column offsets from the content edge: date, description, category, account, amount.
pub const COLUMNS: [f32; 5] = [0.0, 150.0, 500.0, 800.0, 1050.0];

/// Vertical distance between consecutive table rows.
pub const ROW_PITCH: f32 = 60.0;

const HEADERS: [&str; 5] = ["Date", "Description", "Category", "Account", "Amount"];
const FILTERS: [&str; 2] = ["This Month", "All Accounts"];

/// The "Recent Transactions" page.
#[derive(Debug, Clone)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn draw_row(pen: &Pen<'_>, left: f32, y: f32, row: &Transaction) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let width = content_width();
        let column = |i: usize| left + COLUMNS[i];
        let amount_color = if row.amount.is_negative() {
            palette.danger
        } else {
            palette.success
        };

        vec![
            pen.rect(Bounds::rect(left, y - 15.0, width, ROW_PITCH))
                .fill(palette.background)
                .no_stroke(),
            pen.text(Point::new(column(0), y), row.date, 16.0),
            pen.text(Point::new(column(1), y), row.description, 16.0),
            pen.rect(Bounds::rect(column(2), y - 5.0, 180.0, 30.0))
                .fill(palette.muted)
                .no_stroke()
                .rounded(),
            pen.text(Point::new(column(2) + 15.0, y), row.category, 14.0),
            pen.text(Point::new(column(3), y), row.account, 14.0),
            pen.text(Point::new(column(4), y), row.amount.signed(), 16.0).stroke(amount_color),
            pen.hline(Point::new(left, y + 45.0), width)
                .stroke(palette.muted),
        ]
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(sample::transactions())
    }
}

impl Screen for History {
    fn name(&self) -> &'static str {
        "history"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let left = content_left(origin);
        let top = origin.y() + CONTENT_TOP;

        let mut shapes = chrome::app_shell(pen, origin, NavEntry::Transactions);
        shapes.push(pen.text(Point::new(left, top), "Recent Transactions", 32.0));

        let filter_top = top + 60.0;
        for (i, label) in FILTERS.into_iter().enumerate() {
            let x = left + 220.0 * i as f32;
            shapes.push(
                pen.rect(Bounds::rect(x, filter_top, 200.0, 40.0))
                    .fill(palette.background)
                    .stroke(palette.input_border)
                    .rounded(),
            );
            shapes.push(pen.text(Point::new(x + 20.0, filter_top + 10.0), label, 14.0));
        }

        let header_top = filter_top + 60.0;
        shapes.extend(HEADERS.iter().zip(COLUMNS).map(|(&header, dx)| {
            pen.text(Point::new(left + dx, header_top), header, 14.0)
                .stroke(palette.label)
        }));
        shapes.push(pen.hline(Point::new(left, header_top + 30.0), content_width()));

        let first_row = header_top + 50.0;
        for (i, row) in self.transactions.iter().enumerate() {
            let y = first_row + ROW_PITCH * i as f32;
            shapes.extend(Self::draw_row(pen, left, y, row));
        }
        shapes
    }
}
