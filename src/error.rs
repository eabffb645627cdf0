//! Error types for debt validation, loading and simulation

use thiserror::Error;

/// Rejection reasons from the strict `Debt` constructor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebtError {
    #[error("Debt id must not be empty")]
    EmptyId,

    #[error("Debt name must be 1-{max} characters, got {len}")]
    InvalidName { len: usize, max: usize },

    #[error("Balance must be a positive amount, got {0}")]
    InvalidBalance(f64),

    #[error("Interest rate must be between 0 and 100, got {0}")]
    InvalidInterestRate(f64),

    #[error("Minimum payment must be a positive amount, got {0}")]
    InvalidMinimumPayment(f64),

    #[error("Minimum payment {minimum} exceeds balance {balance}")]
    MinimumExceedsBalance { minimum: f64, balance: f64 },
}

/// Failures of the snowball simulator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Minimum payments due in a month exceed the monthly budget
    #[error("Insufficient budget in month {month}: minimum payments total {required:.2}, budget is {budget:.2}")]
    InsufficientBudget {
        month: u32,
        required: f64,
        budget: f64,
    },
}

impl SimulationError {
    /// Shortfall between the minimums due and the budget
    pub fn shortfall(&self) -> f64 {
        match self {
            Self::InsufficientBudget { required, budget, .. } => required - budget,
        }
    }
}

/// Failures while reading debts from CSV or the JSON plan document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{value}' on record {line}, expected YYYY-MM-DD")]
    InvalidDate { line: usize, value: String },

    #[error("Invalid debt on record {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: DebtError,
    },

    #[error("Unsupported plan document version: {0}")]
    UnsupportedVersion(String),
}
