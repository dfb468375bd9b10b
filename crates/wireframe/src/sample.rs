//! Illustrative data shown on the mockup screens.
//!
//! Nothing here is computed from anything else except where noted: the
//! figures exist to make the screens look populated.

use std::fmt;

use wireframe_core::noise::Noise;

/// Allocation percentage below which an account's progress bar is drawn
/// in the warning color.
pub const LOW_ALLOCATION_PCT: u8 = 50;

/// Inclusive range of income bar heights in the insights chart.
pub const INCOME_BAR_RANGE: std::ops::RangeInclusive<u32> = 100..=200;

/// Inclusive range of expense bar heights in the insights chart.
pub const EXPENSE_BAR_RANGE: std::ops::RangeInclusive<u32> = 80..=150;

/// An amount of US dollars, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Formats the magnitude without the currency symbol, e.g. `2,250.00`.
    pub fn plain(self) -> String {
        let cents = self.0.unsigned_abs();
        let digits = (cents / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("{grouped}.{:02}", cents % 100)
    }

    /// Formats with an explicit sign, e.g. `+ $2,250.00` or `- $45.00`.
    pub fn signed(self) -> String {
        let sign = if self.is_negative() { '-' } else { '+' };
        format!("{sign} ${}", self.plain())
    }
}

impl fmt::Display for Money {
    /// Formats as `$1,250.00`; negative amounts get a leading `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "${}", self.plain())
    }
}

/// A sub-account card on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: &'static str,
    pub balance: Money,
    /// Share of the allocation target reached, 0-100.
    pub pct: u8,
}

impl Account {
    /// True when the progress bar should use the warning color.
    pub fn is_low(&self) -> bool {
        self.pct < LOW_ALLOCATION_PCT
    }
}

/// The six sub-accounts shown on the dashboard.
pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            name: "Daily Spending",
            balance: Money::from_dollars(320),
            pct: 60,
        },
        Account {
            name: "Bills Account",
            balance: Money::from_dollars(1_100),
            pct: 90,
        },
        Account {
            name: "Savings",
            balance: Money::from_dollars(5_000),
            pct: 100,
        },
        Account {
            name: "Emergency Fund",
            balance: Money::from_dollars(2_000),
            pct: 100,
        },
        Account {
            name: "Travel Fund",
            balance: Money::from_dollars(450),
            pct: 30,
        },
        Account {
            name: "Tech Upgrade",
            balance: Money::from_dollars(1_200),
            pct: 80,
        },
    ]
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub safe_to_spend: Money,
    pub income: Money,
    pub spent: Money,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            safe_to_spend: Money::from_dollars(1_250),
            income: Money::from_dollars(4_500),
            spent: Money::from_dollars(2_150),
        }
    }
}

/// One row of the transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub account: &'static str,
    /// Positive for income, negative for expenses.
    pub amount: Money,
}

/// The recent transactions listed on the history screen.
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            date: "Dec 4",
            description: "Lunch with team",
            category: "Dining Out",
            account: "Daily Spending",
            amount: Money::from_cents(-4_500),
        },
        Transaction {
            date: "Dec 3",
            description: "Weekly Groceries",
            category: "Groceries",
            account: "Daily Spending",
            amount: Money::from_cents(-12_050),
        },
        Transaction {
            date: "Dec 1",
            description: "Paycheck",
            category: "Salary",
            account: "Savings",
            amount: Money::from_cents(225_000),
        },
        Transaction {
            date: "Nov 28",
            description: "Netflix",
            category: "Entertainment",
            account: "Daily Spending",
            amount: Money::from_cents(-1_500),
        },
        Transaction {
            date: "Nov 25",
            description: "Electric Bill",
            category: "Utilities",
            account: "Bills Account",
            amount: Money::from_cents(-8_500),
        },
    ]
}

/// Pre-filled values of the add-expense form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Money,
    /// Name of the paying account; its balance is shown as the available hint.
    pub account: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub date: &'static str,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            amount: Money::from_dollars(45),
            account: "Daily Spending",
            category: "Dining Out",
            description: "Lunch with team",
            date: "Today, Dec 4",
        }
    }
}

/// One labelled slice of the spending pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: &'static str,
    pub percent: u8,
}

/// Number of slices in the spending pie.
pub const PIE_SLICES: usize = 3;

/// Hardcoded spending split; not derived from [`transactions`].
pub fn spending_split() -> [PieSlice; PIE_SLICES] {
    [
        PieSlice {
            category: "Groceries",
            percent: 40,
        },
        PieSlice {
            category: "Rent",
            percent: 35,
        },
        PieSlice {
            category: "Others",
            percent: 25,
        },
    ]
}

/// Months covered by the income-vs-expenses chart.
pub const MONTHS: [&str; 6] = ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Bar heights of one month in the income-vs-expenses chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBars {
    pub month: &'static str,
    pub income: f32,
    pub expense: f32,
}

/// Bar heights for the six charted months.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries(Vec<MonthBars>);

impl BarSeries {
    pub fn new(bars: Vec<MonthBars>) -> Self {
        Self(bars)
    }

    /// Draws illustrative heights from `noise` within the chart's ranges.
    pub fn random(noise: &mut Noise) -> Self {
        let bars = MONTHS
            .iter()
            .map(|&month| MonthBars {
                month,
                income: noise.int_in(INCOME_BAR_RANGE) as f32,
                expense: noise.int_in(EXPENSE_BAR_RANGE) as f32,
            })
            .collect();
        Self(bars)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthBars> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_dollars(320).to_string(), "$320.00");
        assert_eq!(Money::from_dollars(1_250).to_string(), "$1,250.00");
        assert_eq!(Money::from_dollars(1_234_567).to_string(), "$1,234,567.00");
        assert_eq!(Money::from_cents(-12_050).to_string(), "-$120.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_money_signed() {
        assert_eq!(Money::from_cents(-4_500).signed(), "- $45.00");
        assert_eq!(Money::from_cents(225_000).signed(), "+ $2,250.00");
        assert_eq!(Money::from_cents(0).signed(), "+ $0.00");
    }

    #[test]
    fn test_accounts_percentages_in_range() {
        let accounts = accounts();
        assert_eq!(accounts.len(), 6);
        assert!(accounts.iter().all(|a| a.pct <= 100));
        let low: Vec<_> = accounts.iter().filter(|a| a.is_low()).map(|a| a.name).collect();
        assert_eq!(low, vec!["Travel Fund"]);
    }

    #[test]
    fn test_draft_account_exists() {
        let draft = ExpenseDraft::default();
        assert!(accounts().iter().any(|a| a.name == draft.account));
    }

    #[test]
    fn test_spending_split_sums_to_hundred() {
        let total: u32 = spending_split().iter().map(|s| u32::from(s.percent)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_random_bars_within_ranges() {
        let mut noise = Noise::seeded(11);
        for _ in 0..50 {
            let series = BarSeries::random(&mut noise);
            assert_eq!(series.len(), MONTHS.len());
            for bars in series.iter() {
                assert!((100.0..=200.0).contains(&bars.income));
                assert!((80.0..=150.0).contains(&bars.expense));
            }
        }
    }

    #[test]
    fn test_random_bars_reproducible_with_seed() {
        let a = BarSeries::random(&mut Noise::seeded(5));
        let b = BarSeries::random(&mut Noise::seeded(5));
        assert_eq!(a, b);
    }
}
