//! Working state for a snowball simulation

use chrono::NaiveDate;

use super::schedule::add_months;
use crate::debt::Debt;
use crate::money::round2;

/// Private working copy of one debt during simulation
#[derive(Debug, Clone)]
pub struct DebtState {
    pub id: String,
    pub name: String,

    /// Current balance (rounded to cents after the first booked month)
    pub balance: f64,

    pub minimum_payment: f64,

    /// Monthly interest rate as a decimal
    pub monthly_rate: f64,
}

impl DebtState {
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            balance: debt.balance,
            minimum_payment: debt.minimum_payment,
            monthly_rate: debt.monthly_rate(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}

/// State of the whole basket at a point in the simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current month (1-indexed once advanced, 0 before the first month)
    pub month: u32,

    /// Calendar date of the current month
    pub date: NaiveDate,

    /// Nominal start of the simulation
    pub start_date: NaiveDate,

    /// Working copies in fixed attack order
    pub debts: Vec<DebtState>,
}

impl SimulationState {
    /// Initialize from debts already in attack order
    pub fn from_debts(ordered: &[Debt], start_date: NaiveDate) -> Self {
        Self {
            month: 0,
            date: start_date,
            start_date,
            debts: ordered.iter().map(DebtState::from_debt).collect(),
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.date = add_months(self.start_date, self.month - 1);
    }

    /// Debts still carrying a balance
    pub fn open_count(&self) -> usize {
        self.debts.iter().filter(|d| d.is_open()).count()
    }

    /// Sum of minimum payments over open debts, in cents
    pub fn minimum_total(&self) -> f64 {
        round2(
            self.debts
                .iter()
                .filter(|d| d.is_open())
                .map(|d| d.minimum_payment)
                .sum(),
        )
    }

    pub fn all_paid(&self) -> bool {
        self.debts.iter().all(|d| !d.is_open())
    }
}
