//! Loan input structures and loading

mod data;
pub mod loader;

pub use data::{LoanInputs, MAX_AMORTIZATION_YEARS, PERIODS_PER_YEAR};
pub use loader::{load_loan, load_loan_from_reader};
