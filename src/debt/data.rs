//! Debt records as supplied by the input layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DebtError;

/// Maximum display name length in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// A single debt entering the payoff simulation
///
/// Fields are public for read access by renderers; new records should come
/// through [`Debt::new`] (or deserialization, which runs the same checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDebt")]
pub struct Debt {
    /// Opaque unique identifier
    pub id: String,

    /// Display label
    pub name: String,

    /// Outstanding balance in currency units
    pub balance: f64,

    /// Annual interest rate as a percentage (24.0 = 24% APR)
    pub interest_rate: f64,

    /// Required monthly minimum payment
    pub minimum_payment: f64,

    /// Date the debt was entered; informational, not used by the simulation clock
    pub start_date: NaiveDate,
}

/// Unvalidated wire shape of a debt
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDebt {
    id: String,
    name: String,
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
    start_date: NaiveDate,
}

impl TryFrom<RawDebt> for Debt {
    type Error = DebtError;

    fn try_from(raw: RawDebt) -> Result<Self, Self::Error> {
        Debt::new(
            raw.id,
            raw.name,
            raw.balance,
            raw.interest_rate,
            raw.minimum_payment,
            raw.start_date,
        )
    }
}

impl Debt {
    /// Create a validated debt
    ///
    /// Rejects empty ids, blank or overlong names, non-positive balances,
    /// rates outside 0-100, non-positive minimums and minimums above the
    /// balance. Names are trimmed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
        start_date: NaiveDate,
    ) -> Result<Self, DebtError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DebtError::EmptyId);
        }

        let name = name.into().trim().to_string();
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LENGTH {
            return Err(DebtError::InvalidName {
                len,
                max: MAX_NAME_LENGTH,
            });
        }

        if !balance.is_finite() || balance <= 0.0 {
            return Err(DebtError::InvalidBalance(balance));
        }
        if !interest_rate.is_finite() || !(0.0..=100.0).contains(&interest_rate) {
            return Err(DebtError::InvalidInterestRate(interest_rate));
        }
        if !minimum_payment.is_finite() || minimum_payment <= 0.0 {
            return Err(DebtError::InvalidMinimumPayment(minimum_payment));
        }
        if minimum_payment > balance {
            return Err(DebtError::MinimumExceedsBalance {
                minimum: minimum_payment,
                balance,
            });
        }

        Ok(Self {
            id,
            name,
            balance,
            interest_rate,
            minimum_payment,
            start_date,
        })
    }

    /// Monthly interest rate as a decimal (annual percentage / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Interest accrued over one month on the current balance
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// Whether the debt still has something owing
    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}
