//! Schedule output structures

use serde::{Deserialize, Serialize};

use crate::loan::PERIODS_PER_YEAR;

/// Round a dollar amount to cents for presentation
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A single payment period of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRow {
    /// Payment number (1-indexed)
    pub period_index: u32,

    /// Scheduled payment plus any extra principal applied
    pub total_payment: f64,

    /// Portion reducing principal, including extra
    pub principal_component: f64,

    /// Portion covering interest accrued over the period
    pub interest_component: f64,

    /// Balance after this period's payment, never negative
    pub remaining_balance: f64,
}

impl PeriodRow {
    /// Copy of this row with every amount rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            period_index: self.period_index,
            total_payment: round_cents(self.total_payment),
            principal_component: round_cents(self.principal_component),
            interest_component: round_cents(self.interest_component),
            remaining_balance: round_cents(self.remaining_balance),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    /// Monthly rate used for payment and interest accrual
    pub periodic_rate: f64,

    /// Level payment before extra principal
    pub scheduled_payment: f64,

    /// Number of payments actually made
    pub new_payoff_periods: u32,

    /// Whole years of the payoff period
    pub payoff_years: u32,

    /// Remaining months of the payoff period
    pub payoff_months: u32,

    /// Payments avoided compared with the full amortization
    pub periods_saved: u32,

    /// Interest over the full amortization with no extra payments
    pub original_total_interest: f64,

    /// Interest over the simulated schedule
    pub total_interest_paid: f64,

    /// `original_total_interest - total_interest_paid`
    pub interest_savings: f64,

    /// Sum of all payments made
    pub total_paid: f64,

    /// Outstanding balance when the term ends (zero if already repaid)
    pub term_end_balance: f64,

    /// Interest paid within the term
    pub term_interest_paid: f64,
}

/// Baseline figures the summary is measured against
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub periodic_rate: f64,
    pub scheduled_payment: f64,
    pub total_periods: u32,
    pub term_periods: u32,
    pub original_total_interest: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Payment rows, ending at the period the balance reaches zero
    pub schedule: Vec<PeriodRow>,

    /// Payoff timeline and interest savings
    pub summary: AmortizationSummary,
}

impl AmortizationResult {
    /// Build the result and derive its summary from the schedule
    pub fn new(schedule: Vec<PeriodRow>, total_interest_paid: f64, baseline: &Baseline) -> Self {
        let summary = summarize(&schedule, total_interest_paid, baseline);
        Self { schedule, summary }
    }

    pub fn new_payoff_periods(&self) -> u32 {
        self.summary.new_payoff_periods
    }

    pub fn total_interest_paid(&self) -> f64 {
        self.summary.total_interest_paid
    }

    pub fn original_total_interest(&self) -> f64 {
        self.summary.original_total_interest
    }

    pub fn interest_savings(&self) -> f64 {
        self.summary.interest_savings
    }

    /// Last row of the schedule, if any payment was made
    pub fn final_row(&self) -> Option<&PeriodRow> {
        self.schedule.last()
    }

    /// Schedule with amounts rounded to cents
    pub fn rounded_schedule(&self) -> Vec<PeriodRow> {
        self.schedule.iter().map(PeriodRow::rounded).collect()
    }
}

/// Derive summary statistics from a produced schedule
fn summarize(schedule: &[PeriodRow], total_interest_paid: f64, baseline: &Baseline) -> AmortizationSummary {
    let new_payoff_periods = schedule.len() as u32;
    let total_paid: f64 = schedule.iter().map(|r| r.total_payment).sum();

    // Rows within the term; a loan repaid early has nothing left at term end
    let term_rows = &schedule[..schedule.len().min(baseline.term_periods as usize)];
    let term_interest_paid: f64 = term_rows.iter().map(|r| r.interest_component).sum();
    let term_end_balance = term_rows.last().map(|r| r.remaining_balance).unwrap_or(0.0);

    AmortizationSummary {
        periodic_rate: baseline.periodic_rate,
        scheduled_payment: baseline.scheduled_payment,
        new_payoff_periods,
        payoff_years: new_payoff_periods / PERIODS_PER_YEAR,
        payoff_months: new_payoff_periods % PERIODS_PER_YEAR,
        periods_saved: baseline.total_periods.saturating_sub(new_payoff_periods),
        original_total_interest: baseline.original_total_interest,
        total_interest_paid,
        interest_savings: baseline.original_total_interest - total_interest_paid,
        total_paid,
        term_end_balance,
        term_interest_paid,
    }
}
