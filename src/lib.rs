//! Snowball Planner - Debt payoff simulation using the snowball method
//!
//! This library provides:
//! - Month-by-month snowball payoff schedules with extra-payment rollover
//! - A minimum-payments-only baseline for comparison
//! - Interchangeable attack-order strategies (snowball, avalanche)
//! - Strictly validated debt records and CSV/JSON input loading
//! - Parallel evaluation of many monthly budgets

pub mod debt;
pub mod error;
pub mod money;
pub mod scenario;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use debt::{Debt, PlanDocument};
pub use error::{DebtError, LoadError, SimulationError};
pub use scenario::ScenarioRunner;
pub use simulation::{
    simulate, simulate_minimum_only, MinimumOnlyResult, PaymentMonth, PlanComparison,
    SimulationConfig, SimulationResult, SnowballSimulator,
};
pub use strategy::PayoffStrategy;
