//! Mortgage Amortization - schedule engine with extra-payment savings analysis
//!
//! This library provides:
//! - Semi-annual to monthly rate conversion and level payment calculation
//! - Period-by-period schedule simulation with extra principal payments
//! - Baseline interest and savings summary
//! - Extra-payment scenario comparison for a single loan
//! - CSV and JSON export of the schedule

pub mod error;
pub mod loan;
pub mod amortization;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{AmortizationError, Result};
pub use loan::LoanInputs;
pub use amortization::{AmortizationEngine, AmortizationResult, AmortizationSummary, PeriodRow, compute_amortization};
pub use scenario::{ScenarioRunner, ExtraPaymentScenario};
