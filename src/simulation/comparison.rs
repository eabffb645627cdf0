//! Snowball plan versus minimum-only baseline

use serde::{Deserialize, Serialize};

use super::baseline::MinimumOnlyResult;
use super::schedule::SimulationResult;
use crate::money::round2;

/// Savings of the snowball plan over paying minimums only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComparison {
    pub snowball_months: u32,
    pub baseline_months: u32,

    /// Positive when the snowball plan finishes sooner
    pub months_saved: i64,

    pub interest_saved: f64,
    pub amount_saved: f64,

    /// Baseline months are pinned at the ceiling; render as "50+ years"
    pub baseline_never_pays_off: bool,
}

impl PlanComparison {
    pub fn between(plan: &SimulationResult, baseline: &MinimumOnlyResult) -> Self {
        Self {
            snowball_months: plan.total_months,
            baseline_months: baseline.total_months,
            months_saved: i64::from(baseline.total_months) - i64::from(plan.total_months),
            interest_saved: round2(baseline.total_interest - plan.total_interest),
            amount_saved: round2(baseline.total_paid - plan.total_paid),
            baseline_never_pays_off: baseline.never_pays_off(),
        }
    }

    /// Months saved as whole years and leftover months
    pub fn time_saved(&self) -> (i64, i64) {
        (self.months_saved / 12, self.months_saved % 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Debt;
    use crate::simulation::{MinimumOnlyBaseline, SimulationConfig, SnowballSimulator};
    use chrono::NaiveDate;

    fn config() -> SimulationConfig {
        SimulationConfig::starting(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn debt(id: &str, balance: f64, rate: f64, minimum: f64) -> Debt {
        Debt::new(id, id, balance, rate, minimum, config().start_date).unwrap()
    }

    #[test]
    fn test_zero_rate_saves_time_only() {
        let debts = vec![debt("1", 500.0, 0.0, 50.0), debt("2", 1000.0, 0.0, 50.0)];
        let plan = SnowballSimulator::new(config()).simulate(&debts, 150.0).unwrap();
        let baseline = MinimumOnlyBaseline::new(config()).simulate(&debts);

        let cmp = PlanComparison::between(&plan, &baseline);
        assert_eq!(cmp.snowball_months, 10);
        assert_eq!(cmp.baseline_months, 20);
        assert_eq!(cmp.months_saved, 10);
        assert_eq!(cmp.time_saved(), (0, 10));
        assert_eq!(cmp.interest_saved, 0.0);
        assert_eq!(cmp.amount_saved, 0.0);
        assert!(!cmp.baseline_never_pays_off);
    }

    #[test]
    fn test_extra_budget_saves_interest() {
        let debts = vec![
            debt("card", 3_000.0, 21.0, 90.0),
            debt("loan", 6_000.0, 8.0, 150.0),
        ];
        let plan = SnowballSimulator::new(config()).simulate(&debts, 600.0).unwrap();
        let baseline = MinimumOnlyBaseline::new(config()).simulate(&debts);

        let cmp = PlanComparison::between(&plan, &baseline);
        assert!(cmp.months_saved > 12);
        assert!(cmp.interest_saved > 0.0);
        assert!(cmp.amount_saved > 0.0);
        assert_eq!(cmp.time_saved().0, cmp.months_saved / 12);
    }

    #[test]
    fn test_flags_non_convergent_baseline() {
        let debts = vec![debt("stuck", 10_000.0, 24.0, 100.0)];
        let plan = SnowballSimulator::new(config()).simulate(&debts, 500.0).unwrap();
        let baseline = MinimumOnlyBaseline::new(config()).simulate(&debts);

        let cmp = PlanComparison::between(&plan, &baseline);
        assert!(cmp.baseline_never_pays_off);
        assert_eq!(cmp.baseline_months, 600);
        assert!(cmp.months_saved > 0);
    }
}
