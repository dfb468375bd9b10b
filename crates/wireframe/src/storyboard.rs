//! Arranges the screens on the canvas grid.
//!
//! The storyboard is the only place that knows where screens go. It assigns
//! each screen a grid slot, turns slots into origins using the configured
//! [`Spacing`], and concatenates the shapes of every screen in a fixed order.
//! That order is also the z-order of the final document.

use log::{debug, info};
use wireframe_core::{
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme::{SCREEN_HEIGHT, SCREEN_WIDTH},
};

use crate::{
    sample::BarSeries,
    screen::{AddExpense, CreateAccount, Dashboard, History, Insights, Login, Screen},
};

/// Distance between the origins of adjacent grid cells.
///
/// Always at least the screen size, so screens in different cells never
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    column: f32,
    row: f32,
}

impl Spacing {
    /// Creates a spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` is below the screen width or `row` is
    /// below the screen height, or either is not finite.
    pub fn new(column: f32, row: f32) -> Result<Self, String> {
        if !column.is_finite() {
            return Err(format!("column spacing {column} is not a finite number"));
        }
        if !row.is_finite() {
            return Err(format!("row spacing {row} is not a finite number"));
        }
        if column < SCREEN_WIDTH {
            return Err(format!(
                "column spacing {column} is smaller than the screen width {SCREEN_WIDTH}"
            ));
        }
        if row < SCREEN_HEIGHT {
            return Err(format!(
                "row spacing {row} is smaller than the screen height {SCREEN_HEIGHT}"
            ));
        }
        Ok(Self { column, row })
    }

    pub fn column(self) -> f32 {
        self.column
    }

    pub fn row(self) -> f32 {
        self.row
    }

    /// Origin of the cell at `slot`.
    pub fn origin(self, slot: Slot) -> Point {
        Point::new(
            slot.column as f32 * self.column,
            slot.row as f32 * self.row,
        )
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            column: 1600.0,
            row: 1100.0,
        }
    }
}

/// A cell of the canvas grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub column: u32,
    pub row: u32,
}

impl Slot {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// A screen positioned on the canvas.
#[derive(Debug)]
pub struct Placement {
    screen: Box<dyn Screen>,
    slot: Slot,
    origin: Point,
}

impl Placement {
    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Area covered by the screen.
    pub fn footprint(&self) -> Bounds {
        self.screen.footprint(self.origin)
    }
}

/// The ordered set of placed screens.
#[derive(Debug)]
pub struct Storyboard {
    placements: Vec<Placement>,
}

impl Storyboard {
    /// Creates an empty storyboard.
    pub fn empty() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// The expenses-tracker storyboard: login, dashboard, add-expense,
    /// history, create-account, insights, in that order.
    pub fn expenses_tracker(spacing: Spacing, bars: BarSeries) -> Self {
        Self::empty()
            .place(Login, Slot::new(0, 0), spacing)
            .place(Dashboard::default(), Slot::new(1, 0), spacing)
            .place(AddExpense::default(), Slot::new(2, 0), spacing)
            .place(History::default(), Slot::new(1, 1), spacing)
            .place(CreateAccount::default(), Slot::new(2, 1), spacing)
            .place(Insights::with_bars(bars), Slot::new(3, 0), spacing)
    }

    /// Appends `screen` at `slot`. Screens are drawn in placement order.
    pub fn place(mut self, screen: impl Screen + 'static, slot: Slot, spacing: Spacing) -> Self {
        self.placements.push(Placement {
            screen: Box::new(screen),
            slot,
            origin: spacing.origin(slot),
        });
        self
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Area covered by all screens, or `None` for an empty storyboard.
    pub fn bounds(&self) -> Option<Bounds> {
        self.placements
            .iter()
            .map(Placement::footprint)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Draws every screen and concatenates the shapes in placement order.
    pub fn draw(&self, pen: &Pen<'_>) -> Vec<Shape> {
        info!(screens = self.placements.len(); "Laying out storyboard");

        let mut shapes = Vec::new();
        for placement in &self.placements {
            let drawn = placement.screen.draw(pen, placement.origin);
            debug!(
                screen = placement.screen.name(),
                column = placement.slot.column,
                row = placement.slot.row,
                elements = drawn.len();
                "Screen drawn"
            );
            shapes.extend(drawn);
        }

        info!(elements = shapes.len(); "Storyboard laid out");
        shapes
    }
}
