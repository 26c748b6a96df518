//! Loan input structures

use serde::{Deserialize, Serialize};

use crate::error::{AmortizationError, Result};

/// Payment periods per year (monthly payments)
pub const PERIODS_PER_YEAR: u32 = 12;

/// Longest amortization accepted
pub const MAX_AMORTIZATION_YEARS: u32 = 100;

/// Parameters of a fixed-rate mortgage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Amount borrowed, in dollars
    pub principal: f64,

    /// Nominal annual rate as a percentage (4.54 means 4.54%)
    pub annual_rate_percent: f64,

    /// Years over which the scheduled payment retires the loan
    pub amortization_years: u32,

    /// Contract term in years (informational, does not truncate the schedule)
    pub term_years: u32,

    /// Additional principal paid every month
    #[serde(default)]
    pub extra_monthly_payment: f64,
}

impl LoanInputs {
    /// Create loan inputs with no extra payment
    pub fn new(principal: f64, annual_rate_percent: f64, amortization_years: u32, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            amortization_years,
            term_years,
            extra_monthly_payment: 0.0,
        }
    }

    /// Same loan with a different extra monthly payment
    pub fn with_extra_payment(&self, extra_monthly_payment: f64) -> Self {
        Self {
            extra_monthly_payment,
            ..self.clone()
        }
    }

    /// Number of scheduled payments over the amortization period
    pub fn total_periods(&self) -> u32 {
        self.amortization_years.saturating_mul(PERIODS_PER_YEAR)
    }

    /// Number of payments within the contract term
    pub fn term_periods(&self) -> u32 {
        self.term_years.saturating_mul(PERIODS_PER_YEAR)
    }

    /// Check the documented preconditions, naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(AmortizationError::invalid_input(
                "principal",
                format!("must be a positive amount, got {}", self.principal),
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(AmortizationError::invalid_input(
                "annual_rate_percent",
                format!("must be zero or positive, got {}", self.annual_rate_percent),
            ));
        }
        if self.amortization_years == 0 {
            return Err(AmortizationError::invalid_input(
                "amortization_years",
                "must be at least one year",
            ));
        }
        if self.amortization_years > MAX_AMORTIZATION_YEARS {
            return Err(AmortizationError::invalid_input(
                "amortization_years",
                format!(
                    "must not exceed {} years, got {}",
                    MAX_AMORTIZATION_YEARS, self.amortization_years
                ),
            ));
        }
        if self.term_years == 0 {
            return Err(AmortizationError::invalid_input("term_years", "must be at least one year"));
        }
        if self.term_years > self.amortization_years {
            return Err(AmortizationError::invalid_input(
                "term_years",
                format!(
                    "term of {} years exceeds amortization period of {} years",
                    self.term_years, self.amortization_years
                ),
            ));
        }
        if !self.extra_monthly_payment.is_finite() || self.extra_monthly_payment < 0.0 {
            return Err(AmortizationError::invalid_input(
                "extra_monthly_payment",
                format!("must be zero or positive, got {}", self.extra_monthly_payment),
            ));
        }
        Ok(())
    }
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self::new(800_000.0, 4.54, 28, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: AmortizationError) -> String {
        match err {
            AmortizationError::InvalidInput { field, .. } => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loan_is_valid() {
        let loan = LoanInputs::default();
        assert!(loan.validate().is_ok());
        assert_eq!(loan.total_periods(), 336);
        assert_eq!(loan.term_periods(), 36);
    }

    #[test]
    fn test_validation_names_field() {
        let base = LoanInputs::default();

        let loan = LoanInputs { principal: 0.0, ..base.clone() };
        assert_eq!(field_of(loan.validate().unwrap_err()), "principal");

        let loan = LoanInputs { annual_rate_percent: -1.0, ..base.clone() };
        assert_eq!(field_of(loan.validate().unwrap_err()), "annual_rate_percent");

        let loan = LoanInputs { amortization_years: 0, term_years: 0, ..base.clone() };
        assert_eq!(field_of(loan.validate().unwrap_err()), "amortization_years");

        let loan = LoanInputs { amortization_years: u32::MAX, term_years: 1, ..base.clone() };
        assert_eq!(field_of(loan.validate().unwrap_err()), "amortization_years");

        let loan = LoanInputs { term_years: 30, ..base.clone() };
        assert_eq!(field_of(loan.validate().unwrap_err()), "term_years");

        let loan = base.with_extra_payment(f64::NAN);
        assert_eq!(field_of(loan.validate().unwrap_err()), "extra_monthly_payment");
    }

    #[test]
    fn test_longest_amortization_accepted() {
        let loan = LoanInputs::new(100_000.0, 5.0, MAX_AMORTIZATION_YEARS, 1);
        assert!(loan.validate().is_ok());
        assert_eq!(loan.total_periods(), 1_200);

        let loan = LoanInputs::new(100_000.0, 5.0, MAX_AMORTIZATION_YEARS + 1, 1);
        assert!(loan.validate().is_err());
    }

    #[test]
    fn test_zero_rate_is_allowed() {
        let loan = LoanInputs::new(120_000.0, 0.0, 10, 5);
        assert!(loan.validate().is_ok());
    }
}
