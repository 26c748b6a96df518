//! Extra-payment scenarios for a single loan
//!
//! Validates the loan once, then evaluates many extra-payment amounts
//! against the same no-extra baseline.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, AmortizationResult};
use crate::error::Result;
use crate::loan::LoanInputs;

/// Payoff outcome of one extra-payment amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPaymentScenario {
    pub extra_monthly_payment: f64,
    pub new_payoff_periods: u32,
    pub periods_saved: u32,
    pub total_interest_paid: f64,
    pub interest_savings: f64,
}

impl ExtraPaymentScenario {
    fn from_result(extra_monthly_payment: f64, result: &AmortizationResult) -> Self {
        Self {
            extra_monthly_payment,
            new_payoff_periods: result.summary.new_payoff_periods,
            periods_saved: result.summary.periods_saved,
            total_interest_paid: result.summary.total_interest_paid,
            interest_savings: result.summary.interest_savings,
        }
    }
}

/// Runs one loan under different extra monthly payments
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(LoanInputs::default())?;
///
/// for scenario in runner.compare(&[0.0, 250.0, 500.0])? {
///     println!("{} -> {} months", scenario.extra_monthly_payment, scenario.new_payoff_periods);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_inputs: LoanInputs,
}

impl ScenarioRunner {
    /// Create runner for a loan, validating its inputs
    pub fn new(base_inputs: LoanInputs) -> Result<Self> {
        base_inputs.validate()?;
        Ok(Self { base_inputs })
    }

    /// Run the loan with one extra monthly payment
    pub fn run(&self, extra_monthly_payment: f64) -> Result<AmortizationResult> {
        Ok(AmortizationEngine::new(self.base_inputs.with_extra_payment(extra_monthly_payment))?.run())
    }

    /// Run the loan for each extra payment, in parallel, preserving input order
    pub fn run_extra_payments(&self, extra_payments: &[f64]) -> Result<Vec<AmortizationResult>> {
        extra_payments
            .par_iter()
            .map(|&extra| self.run(extra))
            .collect()
    }

    /// Payoff period and savings for each extra payment
    pub fn compare(&self, extra_payments: &[f64]) -> Result<Vec<ExtraPaymentScenario>> {
        let results = self.run_extra_payments(extra_payments)?;

        Ok(extra_payments
            .iter()
            .zip(&results)
            .map(|(&extra, result)| ExtraPaymentScenario::from_result(extra, result))
            .collect())
    }

    /// Get reference to the base loan
    pub fn inputs(&self) -> &LoanInputs {
        &self.base_inputs
    }
}
