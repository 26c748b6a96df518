//! Core amortization engine for monthly mortgage schedules

use log::{debug, info};

use super::rates::{baseline_total_interest, level_payment, periodic_rate};
use super::schedule::{AmortizationResult, Baseline, PeriodRow};
use super::state::BalanceState;
use crate::error::Result;
use crate::loan::LoanInputs;

/// Compute the schedule and savings summary for one set of loan parameters
pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    amortization_years: u32,
    term_years: u32,
    extra_monthly_payment: f64,
) -> Result<AmortizationResult> {
    let inputs = LoanInputs {
        principal,
        annual_rate_percent,
        amortization_years,
        term_years,
        extra_monthly_payment,
    };
    Ok(AmortizationEngine::new(inputs)?.run())
}

/// Main amortization engine
///
/// Rate and scheduled payment are derived once at construction and held
/// constant for the life of the simulation.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    inputs: LoanInputs,
    rate: f64,
    payment: f64,
}

impl AmortizationEngine {
    /// Validate the inputs and derive the periodic rate and level payment
    pub fn new(inputs: LoanInputs) -> Result<Self> {
        inputs.validate()?;

        let rate = periodic_rate(inputs.annual_rate_percent);
        let payment = level_payment(rate, inputs.total_periods(), inputs.principal);
        debug!(
            "Loan {:.2} at {}% over {} periods: periodic rate {:.10}, payment {:.2}",
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.total_periods(),
            rate,
            payment
        );

        Ok(Self { inputs, rate, payment })
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    /// Monthly rate used for payment and interest accrual
    pub fn periodic_rate(&self) -> f64 {
        self.rate
    }

    /// Level payment before extra principal
    pub fn scheduled_payment(&self) -> f64 {
        self.payment
    }

    /// Interest over the full amortization with the scheduled payment only
    pub fn original_total_interest(&self) -> f64 {
        baseline_total_interest(self.rate, self.inputs.total_periods(), self.payment, self.inputs.principal)
    }

    /// Run the simulation and derive the summary
    pub fn run(&self) -> AmortizationResult {
        let total_periods = self.inputs.total_periods();
        let (schedule, state) = self.simulate();

        if state.period < total_periods {
            info!(
                "Loan repaid after {} of {} periods with {:.2} extra per month",
                state.period, total_periods, self.inputs.extra_monthly_payment
            );
        }
        debug!("Paid {:.2} interest over {} periods", state.total_interest, state.period);

        let baseline = Baseline {
            periodic_rate: self.rate,
            scheduled_payment: self.payment,
            total_periods,
            term_periods: self.inputs.term_periods(),
            original_total_interest: self.original_total_interest(),
        };

        AmortizationResult::new(schedule, state.total_interest, &baseline)
    }

    /// Simulate payments until the balance reaches zero or the amortization ends
    fn simulate(&self) -> (Vec<PeriodRow>, BalanceState) {
        let total_periods = self.inputs.total_periods();
        let mut schedule = Vec::with_capacity(total_periods as usize);
        let mut state = BalanceState::new(self.inputs.principal);

        for _period in 1..=total_periods {
            if !state.is_outstanding() {
                break;
            }

            state.advance_period();
            let row = self.calculate_period(&mut state);
            schedule.push(row);
        }

        (schedule, state)
    }

    /// Split one period's payment into interest and principal and apply it
    fn calculate_period(&self, state: &mut BalanceState) -> PeriodRow {
        let balance = state.balance;
        let extra = self.inputs.extra_monthly_payment;

        let interest = balance * self.rate;
        let scheduled_principal = self.payment - interest;
        // Balance left once the scheduled principal is applied
        let shortfall = balance - scheduled_principal;

        let principal = if shortfall <= 0.0 {
            // Final period: scheduled payment alone retires the loan
            balance
        } else if extra > 0.0 && extra >= shortfall {
            // Extra payment capped at what is left to repay
            balance
        } else {
            scheduled_principal + extra
        };

        state.apply_payment(principal, interest);

        PeriodRow {
            period_index: state.period,
            total_payment: principal + interest,
            principal_component: principal,
            interest_component: interest,
            remaining_balance: state.balance.max(0.0),
        }
    }
}
