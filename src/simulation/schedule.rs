//! Payment schedule output structures

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::round2;

/// Ledger row for one debt in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayment {
    pub id: String,
    pub name: String,
    pub starting_balance: f64,
    pub payment: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub ending_balance: f64,
    pub is_completed: bool,
}

impl DebtPayment {
    /// Zeroed row for a debt that was already paid off before this month
    pub fn completed(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            starting_balance: 0.0,
            payment: 0.0,
            interest_paid: 0.0,
            principal_paid: 0.0,
            ending_balance: 0.0,
            is_completed: true,
        }
    }
}

/// One simulated month across all debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMonth {
    /// Sequential month index (1-based)
    pub month: u32,

    /// Calendar month of this payment
    pub date: NaiveDate,

    /// Per-debt rows in attack order
    pub debts: Vec<DebtPayment>,

    pub total_payment: f64,
    pub total_interest: f64,

    /// Debts with a balance before this month's payments
    pub remaining_debts: usize,
}

impl PaymentMonth {
    /// Sum of ending balances after this month
    pub fn total_ending_balance(&self) -> f64 {
        round2(self.debts.iter().map(|d| d.ending_balance).sum())
    }

    pub fn total_principal(&self) -> f64 {
        round2(self.debts.iter().map(|d| d.principal_paid).sum())
    }

    /// Row for a debt id, if present
    pub fn debt(&self, id: &str) -> Option<&DebtPayment> {
        self.debts.iter().find(|d| d.id == id)
    }
}

/// Complete snowball simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub payment_plan: Vec<PaymentMonth>,
    pub total_months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub debt_free_date: NaiveDate,
}

impl SimulationResult {
    /// Result with no months, debt-free on the start date
    pub fn empty(start_date: NaiveDate) -> Self {
        Self::from_plan(Vec::new(), start_date)
    }

    /// Derive totals and the debt-free date from a finished plan
    pub fn from_plan(payment_plan: Vec<PaymentMonth>, start_date: NaiveDate) -> Self {
        let total_months = payment_plan.len() as u32;
        let total_interest = round2(payment_plan.iter().map(|m| m.total_interest).sum());
        let total_paid = round2(payment_plan.iter().map(|m| m.total_payment).sum());

        Self {
            payment_plan,
            total_months,
            total_interest,
            total_paid,
            debt_free_date: add_months(start_date, total_months),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payment_plan.is_empty()
    }

    /// Balance still owed after the last simulated month
    ///
    /// Non-zero only when the run stopped at the month ceiling.
    pub fn final_balance(&self) -> f64 {
        self.payment_plan
            .last()
            .map(|m| m.total_ending_balance())
            .unwrap_or(0.0)
    }

    /// First month in which a debt's ending balance reached zero
    pub fn payoff_month(&self, id: &str) -> Option<u32> {
        self.payment_plan
            .iter()
            .find(|m| m.debt(id).is_some_and(|d| d.is_completed))
            .map(|m| m.month)
    }

    /// Get summary statistics
    pub fn summary(&self) -> PlanSummary {
        let payoffs: Vec<DebtPayoff> = self
            .payment_plan
            .first()
            .map(|first| {
                first
                    .debts
                    .iter()
                    .map(|d| {
                        let month = self.payoff_month(&d.id);
                        DebtPayoff {
                            id: d.id.clone(),
                            name: d.name.clone(),
                            month,
                            date: month.and_then(|m| self.payment_plan.get(m as usize - 1)).map(|pm| pm.date),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        PlanSummary {
            total_months: self.total_months,
            total_interest: self.total_interest,
            total_paid: self.total_paid,
            debt_free_date: self.debt_free_date,
            final_balance: self.final_balance(),
            payoffs,
        }
    }
}

/// When each debt was paid off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    pub month: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Summary statistics for a payment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub debt_free_date: NaiveDate,
    pub final_balance: f64,
    pub payoffs: Vec<DebtPayoff>,
}

/// Advance a date by whole calendar months, clamping to month end
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
