//! Financial insights: spending pie and income-vs-expenses bars.

use wireframe_core::{
    color::Color,
    geometry::{Bounds, Point},
    shape::{Pen, Shape},
    theme::CONTENT_TOP,
};

use super::{
    Screen,
    chrome::{self, NavEntry},
    content_left,
};
use crate::sample::{self, BarSeries, PIE_SLICES, PieSlice};

/// Radius of the spending pie.
pub const PIE_RADIUS: f32 = 150.0;

/// Width of a single bar.
pub const BAR_WIDTH: f32 = 20.0;

/// Horizontal distance between the income bars of consecutive months.
pub const MONTH_PITCH: f32 = 70.0;

const CARD_WIDTH: f32 = 480.0;
const CARD_HEIGHT: f32 = 500.0;

// Slice boundaries drawn as radii from the pie center.
const SLICE_EDGES: [(f32, f32); PIE_SLICES] = [(0.0, -150.0), (130.0, 75.0), (-130.0, 75.0)];

// Label positions relative to the pie center, one per slice.
const LABEL_OFFSETS: [(f32, f32); PIE_SLICES] = [(80.0, -80.0), (-100.0, 80.0), (-100.0, -80.0)];

/// The "Financial Insights" page.
///
/// Bar heights are supplied by the caller; the screen itself is
/// deterministic.
#[derive(Debug, Clone)]
pub struct Insights {
    split: [PieSlice; PIE_SLICES],
    bars: BarSeries,
}

impl Insights {
    /// The pie is drawn with fixed slice edges, so the split has exactly
    /// one entry per edge.
    pub fn new(split: [PieSlice; PIE_SLICES], bars: BarSeries) -> Self {
        Self { split, bars }
    }

    /// Insights with the sample spending split and the given bars.
    pub fn with_bars(bars: BarSeries) -> Self {
        Self::new(sample::spending_split(), bars)
    }

    pub fn bars(&self) -> &BarSeries {
        &self.bars
    }

    fn card(pen: &Pen<'_>, x: f32, y: f32, title: &str) -> [Shape; 2] {
        let palette = &pen.theme().palette;
        [
            pen.rect(Bounds::rect(x, y, CARD_WIDTH, CARD_HEIGHT))
                .fill(palette.background)
                .stroke(palette.border)
                .rounded(),
            pen.text(Point::new(x + 30.0, y + 30.0), title, 20.0),
        ]
    }

    fn draw_pie(&self, pen: &Pen<'_>, x: f32, y: f32) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let center = Point::new(x + CARD_WIDTH / 2.0, y + 280.0);
        let disc = Bounds::rect(
            center.x() - PIE_RADIUS,
            center.y() - PIE_RADIUS,
            2.0 * PIE_RADIUS,
            2.0 * PIE_RADIUS,
        );

        let mut shapes = Vec::from(Self::card(pen, x, y, "Spending by Category"));
        shapes.push(
            pen.ellipse(disc)
                .fill(Color::TRANSPARENT)
                .stroke(palette.border),
        );
        shapes.push(pen.ellipse(disc).stroke(palette.brand));
        shapes.extend(SLICE_EDGES.iter().map(|&(dx, dy)| {
            pen.line(center, &[Point::default(), Point::new(dx, dy)])
        }));
        shapes.extend(self.split.iter().zip(LABEL_OFFSETS).map(|(slice, (dx, dy))| {
            pen.text(
                center.offset(dx, dy),
                format!("{}\n{}%", slice.category, slice.percent),
                14.0,
            )
        }));
        shapes
    }

    fn draw_bars(&self, pen: &Pen<'_>, x: f32, y: f32) -> Vec<Shape> {
        let palette = &pen.theme().palette;
        let base = y + 400.0;

        let mut shapes = Vec::from(Self::card(pen, x, y, "Income vs Expenses (6 Months)"));
        for (i, month) in self.bars.iter().enumerate() {
            let bar_x = x + 40.0 + MONTH_PITCH * i as f32;
            shapes.extend([
                pen.rect(Bounds::rect(bar_x, base - month.income, BAR_WIDTH, month.income))
                    .fill(palette.success)
                    .no_stroke(),
                pen.rect(Bounds::rect(
                    bar_x + 25.0,
                    base - month.expense,
                    BAR_WIDTH,
                    month.expense,
                ))
                .fill(palette.danger)
                .no_stroke(),
                pen.text(Point::new(bar_x + 10.0, base + 10.0), month.month, 12.0),
            ]);
        }
        shapes
    }
}

impl Screen for Insights {
    fn name(&self) -> &'static str {
        "insights"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let left = content_left(origin);
        let top = origin.y() + CONTENT_TOP;
        let cards_top = top + 80.0;

        let mut shapes = chrome::app_shell(pen, origin, NavEntry::Visualizations);
        shapes.push(pen.text(Point::new(left, top), "Financial Insights", 32.0));
        shapes.extend(self.draw_pie(pen, left, cards_top));
        shapes.extend(self.draw_bars(pen, left + CARD_WIDTH + 40.0, cards_top));
        shapes
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use wireframe_core::{noise::Noise, shape::ShapeKind, theme::Theme};

    use super::*;
    use crate::{
        sample::{EXPENSE_BAR_RANGE, INCOME_BAR_RANGE, MONTHS, MonthBars},
        screen::test_support::{draw, find_text, kind_counts},
    };

    fn fixed_bars() -> BarSeries {
        BarSeries::new(
            MONTHS
                .iter()
                .map(|&month| MonthBars {
                    month,
                    income: 150.0,
                    expense: 100.0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_insights_element_count() {
        let shapes = draw(&Insights::with_bars(fixed_bars()), Point::default());
        assert_eq!(shapes.len(), 48);
        assert_eq!(kind_counts(&shapes), (18, 6, 3, 21));
    }

    #[test]
    fn test_pie_geometry() {
        let theme = Theme::default();
        let shapes = draw(&Insights::with_bars(fixed_bars()), Point::default());
        let discs: Vec<_> = shapes
            .iter()
            .filter(|s| matches!(s.kind(), ShapeKind::Ellipse))
            .skip(4)
            .collect();
        assert_eq!(discs.len(), 2);
        assert_eq!(discs[0].bounds(), Bounds::rect(410.0, 310.0, 300.0, 300.0));
        assert!(discs[0].style().background_color().is_transparent());
        assert_eq!(discs[0].style().stroke_color(), theme.palette.border);
        assert_eq!(discs[1].style().stroke_color(), theme.palette.brand);

        let center = discs[0].bounds().center();
        for line in shapes.iter().filter(|s| matches!(s.kind(), ShapeKind::Line(_))) {
            assert_eq!(line.bounds().min_point(), center);
            let end = line.points().unwrap()[1];
            let radius = (end.x().powi(2) + end.y().powi(2)).sqrt();
            assert!((radius - PIE_RADIUS).abs() < 1.0, "radius {radius}");
        }
    }

    #[test]
    fn test_pie_labels() {
        let shapes = draw(&Insights::with_bars(fixed_bars()), Point::default());
        let groceries = find_text(&shapes, "Groceries\n40%");
        assert_eq!(groceries.bounds().min_point(), Point::new(640.0, 380.0));
        find_text(&shapes, "Rent\n35%");
        find_text(&shapes, "Others\n25%");
    }

    #[test]
    fn test_custom_split_labels_every_slice() {
        let split = [
            PieSlice {
                category: "Travel",
                percent: 50,
            },
            PieSlice {
                category: "Food",
                percent: 30,
            },
            PieSlice {
                category: "Misc",
                percent: 20,
            },
        ];
        let shapes = draw(&Insights::new(split, fixed_bars()), Point::default());
        assert_eq!(shapes.len(), 48);
        let travel = find_text(&shapes, "Travel\n50%");
        assert_eq!(travel.bounds().min_point(), Point::new(640.0, 380.0));
        find_text(&shapes, "Food\n30%");
        find_text(&shapes, "Misc\n20%");
    }

    #[test]
    fn test_bars_stand_on_baseline() {
        let shapes = draw(&Insights::with_bars(fixed_bars()), Point::default());
        let bars: Vec<_> = shapes
            .iter()
            .filter(|s| matches!(s.kind(), ShapeKind::Rectangle) && s.bounds().width() == BAR_WIDTH)
            .collect();
        assert_eq!(bars.len(), 12);
        for bar in &bars {
            assert_approx_eq!(f32, bar.bounds().max_y(), 580.0);
        }
        assert_eq!(bars[0].bounds().min_x(), 880.0);
        assert_eq!(bars[1].bounds().min_x(), 905.0);
        assert_eq!(bars[2].bounds().min_x(), 950.0);
        assert_eq!(find_text(&shapes, "Dec").bounds().min_point(), Point::new(1240.0, 590.0));
    }

    #[test]
    fn test_random_bars_within_ranges() {
        let mut noise = Noise::seeded(7);
        let insights = Insights::with_bars(BarSeries::random(&mut noise));
        assert_eq!(insights.bars().len(), 6);
        for month in insights.bars().iter() {
            assert!(INCOME_BAR_RANGE.contains(&(month.income as u32)));
            assert!(EXPENSE_BAR_RANGE.contains(&(month.expense as u32)));
        }
        let shapes = draw(&insights, Point::default());
        assert_eq!(shapes.len(), 48);
    }
}
