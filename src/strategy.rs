//! Debt attack-order policies
//!
//! Both strategies share one contract: take a slice of debts and return a
//! new, stably sorted vector. The simulator captures this order once at the
//! start of a run and never re-ranks as balances change.

use crate::debt::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering policy for which debt receives the extra payment first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Smallest balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffStrategy {
    /// Comparator for this strategy
    pub fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        match self {
            PayoffStrategy::Snowball => a.balance.total_cmp(&b.balance),
            PayoffStrategy::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
        }
    }

    /// Return debts in attack order; ties keep their input order
    pub fn order(&self, debts: &[Debt]) -> Vec<Debt> {
        let mut ordered = debts.to_vec();
        // sort_by is stable
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Avalanche => "avalanche",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            other => Err(format!("Unknown payoff strategy: {}", other)),
        }
    }
}

/// Ascending balance order
pub fn snowball_order(debts: &[Debt]) -> Vec<Debt> {
    PayoffStrategy::Snowball.order(debts)
}

/// Descending interest rate order
pub fn avalanche_order(debts: &[Debt]) -> Vec<Debt> {
    PayoffStrategy::Avalanche.order(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn debt(id: &str, balance: f64, rate: f64) -> Debt {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Debt::new(id, id, balance, rate, 10.0, date).unwrap()
    }

    fn ids(debts: &[Debt]) -> Vec<&str> {
        debts.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_snowball_ascending_balance() {
        let debts = vec![debt("a", 3000.0, 5.0), debt("b", 500.0, 22.0), debt("c", 1200.0, 12.0)];
        assert_eq!(ids(&snowball_order(&debts)), vec!["b", "c", "a"]);
        // input untouched
        assert_eq!(ids(&debts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_snowball_ties_are_stable() {
        let debts = vec![
            debt("first", 800.0, 5.0),
            debt("small", 100.0, 5.0),
            debt("second", 800.0, 9.0),
            debt("third", 800.0, 1.0),
        ];
        assert_eq!(ids(&snowball_order(&debts)), vec!["small", "first", "second", "third"]);
    }

    #[test]
    fn test_avalanche_descending_rate() {
        let debts = vec![
            debt("a", 3000.0, 5.0),
            debt("b", 500.0, 22.0),
            debt("c", 1200.0, 22.0),
            debt("d", 100.0, 0.0),
        ];
        assert_eq!(ids(&avalanche_order(&debts)), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Avalanche".parse::<PayoffStrategy>(), Ok(PayoffStrategy::Avalanche));
        assert_eq!("snowball".parse::<PayoffStrategy>(), Ok(PayoffStrategy::Snowball));
        assert!("random".parse::<PayoffStrategy>().is_err());
        assert_eq!(PayoffStrategy::default().to_string(), "snowball");
    }
}
