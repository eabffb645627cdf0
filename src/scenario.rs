//! Scenario runner for comparing many budgets over one set of debts
//!
//! Holds a debt snapshot and configuration once, then evaluates budgets
//! independently. Batches run in parallel; each call shares no state.

use rayon::prelude::*;

use crate::debt::Debt;
use crate::error::SimulationError;
use crate::simulation::{
    MinimumOnlyBaseline, MinimumOnlyResult, PlanComparison, SimulationConfig, SimulationResult,
    SnowballSimulator,
};

/// Outcome of one budget in a batch
#[derive(Debug, Clone)]
pub struct BudgetScenario {
    pub monthly_budget: f64,
    pub result: Result<SimulationResult, SimulationError>,
}

impl BudgetScenario {
    /// Compare against a baseline; `None` if the budget was insufficient
    pub fn compare(&self, baseline: &MinimumOnlyResult) -> Option<PlanComparison> {
        self.result
            .as_ref()
            .ok()
            .map(|plan| PlanComparison::between(plan, baseline))
    }
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(debts, SimulationConfig::default());
/// for scenario in runner.run_budgets(&[400.0, 500.0, 600.0]) {
///     println!("{}: {:?}", scenario.monthly_budget, scenario.result.map(|r| r.total_months));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    debts: Vec<Debt>,
    config: SimulationConfig,
}

impl ScenarioRunner {
    pub fn new(debts: Vec<Debt>, config: SimulationConfig) -> Self {
        Self { debts, config }
    }

    /// Run the snowball simulation for one budget
    pub fn run(&self, monthly_budget: f64) -> Result<SimulationResult, SimulationError> {
        SnowballSimulator::new(self.config.clone()).simulate(&self.debts, monthly_budget)
    }

    /// Run many budgets in parallel; output order matches input order
    pub fn run_budgets(&self, budgets: &[f64]) -> Vec<BudgetScenario> {
        let simulator = SnowballSimulator::new(self.config.clone());
        budgets
            .par_iter()
            .map(|&monthly_budget| BudgetScenario {
                monthly_budget,
                result: simulator.simulate(&self.debts, monthly_budget),
            })
            .collect()
    }

    /// Minimum-only baseline for the loaded debts
    pub fn baseline(&self) -> MinimumOnlyResult {
        MinimumOnlyBaseline::new(self.config.clone()).simulate(&self.debts)
    }

    /// Sum of all minimum payments; the smallest budget that can succeed
    pub fn minimum_budget(&self) -> f64 {
        self.debts
            .iter()
            .filter(|d| d.is_open())
            .map(|d| d.minimum_payment)
            .sum()
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn runner() -> ScenarioRunner {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let debts = vec![
            Debt::new("card", "Card", 2_400.0, 19.5, 70.0, start).unwrap(),
            Debt::new("loan", "Loan", 5_000.0, 7.0, 140.0, start).unwrap(),
            Debt::new("med", "Medical", 600.0, 0.0, 30.0, start).unwrap(),
        ];
        ScenarioRunner::new(debts, SimulationConfig::starting(start))
    }

    #[test]
    fn test_run_budgets_keeps_order() {
        let runner = runner();
        assert_eq!(runner.minimum_budget(), 240.0);

        let budgets = [200.0, 300.0, 450.0, 600.0];
        let scenarios = runner.run_budgets(&budgets);
        assert_eq!(scenarios.len(), 4);
        for (scenario, budget) in scenarios.iter().zip(budgets) {
            assert_eq!(scenario.monthly_budget, budget);
        }

        assert!(matches!(
            scenarios[0].result,
            Err(SimulationError::InsufficientBudget { .. })
        ));

        // More budget should never take longer
        let months: Vec<u32> = scenarios[1..]
            .iter()
            .map(|s| s.result.as_ref().unwrap().total_months)
            .collect();
        assert!(months[0] > months[1] && months[1] > months[2]);
    }

    #[test]
    fn test_parallel_matches_single_run() {
        let runner = runner();
        let batch = runner.run_budgets(&[450.0]);
        let single = runner.run(450.0).unwrap();
        assert_eq!(batch[0].result.as_ref().unwrap(), &single);
    }

    #[test]
    fn test_compare_against_baseline() {
        let runner = runner();
        let baseline = runner.baseline();
        let scenarios = runner.run_budgets(&[100.0, 500.0]);

        assert!(scenarios[0].compare(&baseline).is_none());
        let cmp = scenarios[1].compare(&baseline).unwrap();
        assert!(cmp.months_saved > 0);
        assert!(cmp.interest_saved > 0.0);
    }
}
