//! Minimum-payments-only baseline
//!
//! Each debt is amortized on its own minimum with no shared budget. The
//! loop keeps full precision (no cent rounding) since it produces totals
//! only, never ledger rows.

use serde::{Deserialize, Serialize};

use super::engine::SimulationConfig;
use crate::debt::Debt;

/// How a debt ends up under minimum-only payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineOutcome {
    PaidOff,
    /// Minimum never covers the monthly interest; months pinned at the ceiling
    NonConvergent,
}

/// Baseline figures for a single debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBaseline {
    pub id: String,
    pub name: String,
    pub months: u32,
    pub interest: f64,
    pub paid: f64,
    pub outcome: BaselineOutcome,
}

/// Aggregate minimum-only result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumOnlyResult {
    /// Months until the slowest debt is done
    pub total_months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub debts: Vec<DebtBaseline>,
}

impl MinimumOnlyResult {
    /// True if any debt never pays off on its minimum
    pub fn never_pays_off(&self) -> bool {
        self.debts
            .iter()
            .any(|d| d.outcome == BaselineOutcome::NonConvergent)
    }

    pub fn non_convergent(&self) -> impl Iterator<Item = &DebtBaseline> {
        self.debts
            .iter()
            .filter(|d| d.outcome == BaselineOutcome::NonConvergent)
    }
}

/// Minimum-only amortization runner
#[derive(Debug, Clone, Default)]
pub struct MinimumOnlyBaseline {
    config: SimulationConfig,
}

impl MinimumOnlyBaseline {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Amortize every debt independently and aggregate
    pub fn simulate(&self, debts: &[Debt]) -> MinimumOnlyResult {
        let per_debt: Vec<DebtBaseline> = debts
            .iter()
            .filter(|d| d.balance > 0.0 && d.minimum_payment > 0.0)
            .map(|d| self.amortize(d))
            .collect();

        MinimumOnlyResult {
            total_months: per_debt.iter().map(|d| d.months).max().unwrap_or(0),
            total_interest: per_debt.iter().map(|d| d.interest).sum(),
            total_paid: per_debt.iter().map(|d| d.paid).sum(),
            debts: per_debt,
        }
    }

    /// Amortize one debt on its minimum payment
    fn amortize(&self, debt: &Debt) -> DebtBaseline {
        let monthly_rate = debt.monthly_rate();
        let max_months = self.config.max_months;

        let mut baseline = DebtBaseline {
            id: debt.id.clone(),
            name: debt.name.clone(),
            months: 0,
            interest: 0.0,
            paid: 0.0,
            outcome: BaselineOutcome::PaidOff,
        };

        if monthly_rate == 0.0 {
            baseline.months = (debt.balance / debt.minimum_payment).ceil() as u32;
            baseline.paid = debt.balance;
            return baseline;
        }

        let mut balance = debt.balance;
        while balance > self.config.payoff_epsilon && baseline.months < max_months {
            let interest_payment = balance * monthly_rate;
            let principal_payment = (debt.minimum_payment - interest_payment).max(0.0);

            if principal_payment <= 0.0 {
                log::debug!(
                    "{}: minimum {:.2} never covers interest {:.2}",
                    debt.name,
                    debt.minimum_payment,
                    interest_payment
                );
                baseline.months = max_months;
                baseline.outcome = BaselineOutcome::NonConvergent;
                return baseline;
            }

            let principal_payment = principal_payment.min(balance);
            balance -= principal_payment;
            baseline.interest += interest_payment;
            baseline.paid += interest_payment + principal_payment;
            baseline.months += 1;
        }

        if balance > self.config.payoff_epsilon {
            baseline.outcome = BaselineOutcome::NonConvergent;
        }
        baseline
    }
}

/// Minimum-only baseline with default limits
pub fn simulate_minimum_only(debts: &[Debt]) -> MinimumOnlyResult {
    MinimumOnlyBaseline::default().simulate(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::DEFAULT_MAX_MONTHS;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn debt(id: &str, balance: f64, rate: f64, minimum: f64) -> Debt {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Debt::new(id, id, balance, rate, minimum, date).unwrap()
    }

    #[test]
    fn test_zero_rate_uses_ceiling_division() {
        let result = simulate_minimum_only(&[debt("a", 1010.0, 0.0, 100.0)]);
        assert_eq!(result.total_months, 11);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_paid, 1010.0);
    }

    #[test]
    fn test_slowest_debt_sets_total_months() {
        let result = simulate_minimum_only(&[debt("1", 500.0, 0.0, 50.0), debt("2", 1000.0, 0.0, 50.0)]);
        assert_eq!(result.debts[0].months, 10);
        assert_eq!(result.debts[1].months, 20);
        assert_eq!(result.total_months, 20);
        assert_eq!(result.total_paid, 1500.0);
        assert!(!result.never_pays_off());
    }

    #[test]
    fn test_interest_bearing_debt() {
        let result = simulate_minimum_only(&[debt("a", 1000.0, 12.0, 100.0)]);
        let a = &result.debts[0];

        assert_eq!(a.months, 11);
        assert_eq!(a.outcome, BaselineOutcome::PaidOff);
        // 58.40 left after ten payments, cleared in month 11
        assert_relative_eq!(a.interest, 58.98, epsilon = 0.02);
        assert_relative_eq!(a.paid, 1000.0 + a.interest, epsilon = 1e-6);
    }

    #[test]
    fn test_minimum_below_interest_is_non_convergent() {
        let result = simulate_minimum_only(&[
            debt("ok", 600.0, 0.0, 100.0),
            debt("stuck", 10_000.0, 24.0, 100.0),
        ]);

        assert_eq!(result.total_months, DEFAULT_MAX_MONTHS);
        assert!(result.never_pays_off());
        let stuck: Vec<_> = result.non_convergent().collect();
        assert_eq!(stuck.len(), 1);
        assert_eq!(stuck[0].id, "stuck");
        assert_eq!(stuck[0].months, 600);
    }

    #[test]
    fn test_ceiling_reached_while_still_owing() {
        let config = SimulationConfig {
            max_months: 12,
            ..SimulationConfig::starting(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        };
        let result = MinimumOnlyBaseline::new(config).simulate(&[debt("slow", 5000.0, 10.0, 50.0)]);

        assert_eq!(result.total_months, 12);
        assert_eq!(result.debts[0].outcome, BaselineOutcome::NonConvergent);
    }

    #[test]
    fn test_skips_settled_debts() {
        let mut settled = debt("done", 100.0, 5.0, 10.0);
        settled.balance = 0.0;
        let result = simulate_minimum_only(&[settled]);
        assert!(result.debts.is_empty());
        assert_eq!(result.total_months, 0);
        assert_eq!(result.total_paid, 0.0);
    }
}
