//! Debt records and input loading

mod data;
pub mod loader;

pub use data::{Debt, MAX_NAME_LENGTH};
pub use loader::{load_debts, load_debts_from_reader, PlanDocument, DocumentMetadata};
