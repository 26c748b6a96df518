//! Amortization engine: rate conversion, level payment and schedule simulation

pub mod rates;
mod state;
mod engine;
mod schedule;

pub use engine::{AmortizationEngine, compute_amortization};
pub use schedule::{AmortizationResult, AmortizationSummary, Baseline, PeriodRow, round_cents};
