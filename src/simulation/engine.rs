//! Snowball simulation engine for month-by-month debt payoff

use chrono::{Local, NaiveDate};

use super::schedule::{DebtPayment, PaymentMonth, SimulationResult};
use super::state::{DebtState, SimulationState};
use crate::debt::Debt;
use crate::error::SimulationError;
use crate::money::round2;
use crate::strategy::PayoffStrategy;

/// Hard ceiling on simulated months (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Balance below which the minimum-only baseline treats a debt as paid off
pub const PAYOFF_EPSILON: f64 = 0.01;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Nominal start date; month 1 falls on this date
    pub start_date: NaiveDate,

    /// Stop after this many months even if debts remain
    pub max_months: u32,

    /// Balance treated as zero by the baseline
    pub payoff_epsilon: f64,
}

impl SimulationConfig {
    /// Default limits with an explicit start date
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            max_months: DEFAULT_MAX_MONTHS,
            payoff_epsilon: PAYOFF_EPSILON,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::starting(Local::now().date_naive())
    }
}

/// Snowball payoff simulator
///
/// Debts are ranked once by ascending balance at the start of the run. That
/// order is kept for the whole simulation even if balances later cross.
#[derive(Debug, Clone, Default)]
pub struct SnowballSimulator {
    config: SimulationConfig,
}

impl SnowballSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the snowball simulation
    ///
    /// Returns an empty plan for an empty debt list or a non-positive budget.
    /// Fails with [`SimulationError::InsufficientBudget`] as soon as any month's
    /// minimums exceed the budget; no partial plan is returned in that case.
    pub fn simulate(
        &self,
        debts: &[Debt],
        monthly_budget: f64,
    ) -> Result<SimulationResult, SimulationError> {
        let start_date = self.config.start_date;

        if debts.is_empty() || !monthly_budget.is_finite() || monthly_budget <= 0.0 {
            return Ok(SimulationResult::empty(start_date));
        }

        let ordered = PayoffStrategy::Snowball.order(debts);
        let mut state = SimulationState::from_debts(&ordered, start_date);
        let mut plan = Vec::new();

        while !state.all_paid() && state.month < self.config.max_months {
            state.advance_month();
            let month = self.calculate_month(&mut state, monthly_budget)?;
            plan.push(month);
        }

        if !state.all_paid() {
            log::warn!(
                "Stopped at {} month ceiling with {} debts still open",
                self.config.max_months,
                state.open_count()
            );
        }

        let result = SimulationResult::from_plan(plan, start_date);
        log::debug!(
            "Snowball plan: {} months, interest {:.2}, paid {:.2}",
            result.total_months,
            result.total_interest,
            result.total_paid
        );
        Ok(result)
    }

    /// Book one month of payments across all debts
    fn calculate_month(
        &self,
        state: &mut SimulationState,
        monthly_budget: f64,
    ) -> Result<PaymentMonth, SimulationError> {
        let remaining_debts = state.open_count();
        let minimum_total = state.minimum_total();

        if minimum_total > monthly_budget {
            log::warn!(
                "Month {}: minimums {:.2} exceed budget {:.2}",
                state.month,
                minimum_total,
                monthly_budget
            );
            return Err(SimulationError::InsufficientBudget {
                month: state.month,
                required: minimum_total,
                budget: monthly_budget,
            });
        }

        // Budget left after every open debt gets its minimum
        let mut extra = round2(monthly_budget - minimum_total);
        let month = state.month;

        let rows: Vec<DebtPayment> = state
            .debts
            .iter_mut()
            .map(|debt| {
                if !debt.is_open() {
                    return DebtPayment::completed(&debt.id, &debt.name);
                }
                let row = book_payment(debt, &mut extra);
                if row.is_completed {
                    log::debug!("{} paid off in month {}", debt.name, month);
                }
                row
            })
            .collect();

        Ok(PaymentMonth {
            month,
            date: state.date,
            total_payment: round2(rows.iter().map(|r| r.payment).sum()),
            total_interest: round2(rows.iter().map(|r| r.interest_paid).sum()),
            remaining_debts,
            debts: rows,
        })
    }
}

/// Apply the minimum plus any available extra to one open debt
///
/// Whatever would overpay the debt is handed back through `extra` for the
/// next debt in the same month.
fn book_payment(debt: &mut DebtState, extra: &mut f64) -> DebtPayment {
    let starting_balance = debt.balance;
    let monthly_interest = starting_balance * debt.monthly_rate;
    let payoff_amount = starting_balance + monthly_interest;

    let mut payment = debt.minimum_payment + *extra;
    *extra = 0.0;
    if payment > payoff_amount {
        *extra = round2(payment - payoff_amount);
        payment = payoff_amount;
    }

    let interest_paid = round2(monthly_interest);
    let principal_paid = round2(payment - interest_paid).min(starting_balance);
    let ending_balance = round2((starting_balance - principal_paid).max(0.0));
    debt.balance = ending_balance;

    DebtPayment {
        id: debt.id.clone(),
        name: debt.name.clone(),
        starting_balance,
        payment: round2(interest_paid + principal_paid),
        interest_paid,
        principal_paid,
        ending_balance,
        is_completed: ending_balance == 0.0,
    }
}

/// Run the snowball simulation with default configuration
pub fn simulate(debts: &[Debt], monthly_budget: f64) -> Result<SimulationResult, SimulationError> {
    SnowballSimulator::default().simulate(debts, monthly_budget)
}
