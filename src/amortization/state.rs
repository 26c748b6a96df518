//! Balance state tracking during schedule simulation

/// State of the loan at a point in time during simulation
#[derive(Debug, Clone)]
pub struct BalanceState {
    /// Current period (1-indexed, 0 before the first payment)
    pub period: u32,

    /// Outstanding principal after the most recent payment
    pub balance: f64,

    /// Cumulative interest paid so far
    pub total_interest: f64,
}

impl BalanceState {
    /// Initialize state at loan origination
    pub fn new(principal: f64) -> Self {
        Self {
            period: 0,
            balance: principal,
            total_interest: 0.0,
        }
    }

    /// Whether any principal remains outstanding
    pub fn is_outstanding(&self) -> bool {
        self.balance > 0.0
    }

    /// Advance to the next payment period
    pub fn advance_period(&mut self) {
        self.period += 1;
    }

    /// Apply one payment split. A principal amount at or above the balance
    /// retires the loan exactly.
    pub fn apply_payment(&mut self, principal: f64, interest: f64) {
        self.total_interest += interest;

        if principal >= self.balance {
            self.balance = 0.0;
        } else {
            self.balance -= principal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_payment() {
        let mut state = BalanceState::new(1_000.0);
        state.advance_period();
        state.apply_payment(400.0, 10.0);

        assert_eq!(state.period, 1);
        assert_eq!(state.balance, 600.0);
        assert_eq!(state.total_interest, 10.0);
        assert!(state.is_outstanding());
    }

    #[test]
    fn test_overpayment_retires_loan() {
        let mut state = BalanceState::new(250.0);
        state.advance_period();
        state.apply_payment(250.0 + 1e-9, 1.0);

        assert_eq!(state.balance, 0.0);
        assert!(!state.is_outstanding());
    }
}
