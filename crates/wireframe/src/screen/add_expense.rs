//! Add-expense form over the dimmed dashboard.

use log::warn;
use wireframe_core::{
    geometry::Point,
    shape::{Pen, Shape},
};

use super::{
    Dashboard, Screen,
    modal::{self, Field},
};
use crate::sample::ExpenseDraft;

const MODAL_HEIGHT: f32 = 700.0;

/// The dashboard with the "Log Expense" modal open.
#[derive(Debug, Clone, Default)]
pub struct AddExpense {
    background: Dashboard,
    draft: ExpenseDraft,
}

impl AddExpense {
    pub fn new(background: Dashboard, draft: ExpenseDraft) -> Self {
        Self { background, draft }
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    fn fields(&self, pen: &Pen<'_>) -> Vec<(f32, Field)> {
        let palette = &pen.theme().palette;
        let draft = &self.draft;

        let mut account = Field::new("Payment Account", draft.account);
        match self.background.account(draft.account) {
            Some(paying) => {
                account = account.hint(
                    260.0,
                    format!("Avail: {}", paying.balance),
                    14.0,
                    palette.success,
                );
            }
            None => warn!(account = draft.account; "Paying account not on dashboard, no balance hint"),
        }

        vec![
            (
                90.0,
                Field::new("Amount", format!("$ {}", draft.amount.plain())).prominent(),
            ),
            (200.0, account),
            (300.0, Field::new("Expense Category", draft.category)),
            (400.0, Field::new("Description", draft.description)),
            (500.0, Field::new("Date", draft.date)),
        ]
    }
}

impl Screen for AddExpense {
    fn name(&self) -> &'static str {
        "add-expense"
    }

    fn draw(&self, pen: &Pen<'_>, origin: Point) -> Vec<Shape> {
        let mut shapes = self.background.draw(pen, origin);

        let (card, header) = modal::open(pen, origin, MODAL_HEIGHT, "Log Expense");
        shapes.extend(header);
        for (top, field) in self.fields(pen) {
            shapes.extend(field.draw(pen, card, top));
        }
        shapes.extend(modal::actions(
            pen,
            card,
            620.0,
            "Save Expense",
            pen.theme().palette.danger,
        ));
        shapes
    }
}
