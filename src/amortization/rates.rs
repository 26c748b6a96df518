//! Rate conversion, level payment and baseline interest calculations
//!
//! Rates follow the Canadian mortgage convention: the quoted nominal annual
//! rate compounds semi-annually, and the monthly rate is the one that
//! compounds to the same effective semi-annual yield.

/// Compounding periods per year of the quoted nominal rate
const NOMINAL_COMPOUNDING_PER_YEAR: f64 = 2.0;

/// Payment periods per compounding period (12 monthly payments / 2)
const PAYMENTS_PER_COMPOUNDING: f64 = 6.0;

/// Convert a nominal annual rate (percent, semi-annual compounding) to the
/// equivalent monthly rate
///
/// `(1 + annual_rate_percent / 200)^(1/6) - 1`
pub fn periodic_rate(annual_rate_percent: f64) -> f64 {
    let semi_annual = annual_rate_percent / 100.0 / NOMINAL_COMPOUNDING_PER_YEAR;
    (1.0 + semi_annual).powf(1.0 / PAYMENTS_PER_COMPOUNDING) - 1.0
}

/// Level payment that fully amortizes `principal` over `total_periods`
///
/// A zero rate spreads the principal evenly; zero periods yield no payment.
pub fn level_payment(rate: f64, total_periods: u32, principal: f64) -> f64 {
    if total_periods == 0 {
        return 0.0;
    }
    if rate == 0.0 {
        return principal / total_periods as f64;
    }
    principal * rate / (1.0 - (1.0 + rate).powi(-(total_periods as i32)))
}

/// Interest portion of payment `period` (1-indexed) on a level-payment loan
/// with no extra payments
pub fn interest_in_period(rate: f64, period: u32, payment: f64, principal: f64) -> f64 {
    if rate == 0.0 || period == 0 {
        return 0.0;
    }
    let growth = (1.0 + rate).powi(period as i32 - 1);
    // Balance at the start of the period, then one period of interest on it
    let opening_balance = principal * growth - payment * (growth - 1.0) / rate;
    rate * opening_balance
}

/// Total interest over the full amortization with the scheduled payment only
///
/// Closed form summed per period; independent of any extra-payment simulation.
pub fn baseline_total_interest(rate: f64, total_periods: u32, payment: f64, principal: f64) -> f64 {
    (1..=total_periods)
        .map(|period| interest_in_period(rate, period, payment, principal))
        .sum()
}

/// Same total as [`baseline_total_interest`], computed by rolling the balance
/// forward one period at a time
pub fn baseline_interest_by_recurrence(rate: f64, total_periods: u32, payment: f64, principal: f64) -> f64 {
    let mut balance = principal;
    let mut total_interest = 0.0;

    for _ in 0..total_periods {
        let interest = balance * rate;
        total_interest += interest;
        balance -= payment - interest;
    }

    total_interest
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_semi_annual_conversion() {
        let rate = periodic_rate(4.54);
        assert_abs_diff_eq!(rate, 0.0037480379, epsilon = 1e-9);

        // Six monthly periods compound back to the semi-annual rate
        assert_relative_eq!((1.0 + rate).powi(6), 1.0227, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(periodic_rate(0.0), 0.0);
        assert_abs_diff_eq!(level_payment(0.0, 120, 120_000.0), 1_000.0, epsilon = 1e-9);
        assert_eq!(baseline_total_interest(0.0, 120, 1_000.0, 120_000.0), 0.0);
    }

    #[test]
    fn test_zero_periods() {
        assert_eq!(level_payment(0.004, 0, 100_000.0), 0.0);
        assert_eq!(baseline_total_interest(0.004, 0, 0.0, 100_000.0), 0.0);
    }

    #[test]
    fn test_reference_payment() {
        let rate = periodic_rate(4.54);
        let payment = level_payment(rate, 336, 800_000.0);
        assert_abs_diff_eq!(payment, 4190.74, epsilon = 0.01);
    }

    #[test]
    fn test_first_period_interest() {
        let rate = periodic_rate(4.54);
        let payment = level_payment(rate, 336, 800_000.0);
        assert_relative_eq!(interest_in_period(rate, 1, payment, 800_000.0), 800_000.0 * rate);
    }

    #[test]
    fn test_closed_form_matches_recurrence() {
        let rate = periodic_rate(4.54);
        let payment = level_payment(rate, 336, 800_000.0);

        let closed = baseline_total_interest(rate, 336, payment, 800_000.0);
        let rolled = baseline_interest_by_recurrence(rate, 336, payment, 800_000.0);

        assert_relative_eq!(closed, rolled, max_relative = 1e-9);
        // Interest is everything paid beyond the principal
        assert_relative_eq!(closed, payment * 336.0 - 800_000.0, max_relative = 1e-9);
    }
}
