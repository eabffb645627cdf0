//! Snowball simulator, minimum-only baseline and their comparison

mod state;
mod engine;
mod schedule;
mod baseline;
mod comparison;

pub use state::{DebtState, SimulationState};
pub use engine::{simulate, SimulationConfig, SnowballSimulator, DEFAULT_MAX_MONTHS, PAYOFF_EPSILON};
pub use schedule::{DebtPayment, DebtPayoff, PaymentMonth, PlanSummary, SimulationResult};
pub use baseline::{simulate_minimum_only, BaselineOutcome, DebtBaseline, MinimumOnlyBaseline, MinimumOnlyResult};
pub use comparison::PlanComparison;
