//! Load loan inputs from JSON

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::LoanInputs;
use crate::error::Result;

/// Load and validate loan inputs from a JSON file
pub fn load_loan<P: AsRef<Path>>(path: P) -> Result<LoanInputs> {
    let file = File::open(path)?;
    load_loan_from_reader(BufReader::new(file))
}

/// Load and validate loan inputs from any reader (e.g., stdin, string buffer)
pub fn load_loan_from_reader<R: Read>(reader: R) -> Result<LoanInputs> {
    let loan: LoanInputs = serde_json::from_reader(reader)?;
    loan.validate()?;
    Ok(loan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmortizationError;

    #[test]
    fn test_load_from_reader() {
        let json = r#"{
            "principal": 800000,
            "annual_rate_percent": 4.54,
            "amortization_years": 28,
            "term_years": 3
        }"#;

        let loan = load_loan_from_reader(json.as_bytes()).unwrap();
        assert_eq!(loan, LoanInputs::default());
        assert_eq!(loan.extra_monthly_payment, 0.0);
    }

    #[test]
    fn test_invalid_loan_rejected() {
        let json = r#"{
            "principal": -5,
            "annual_rate_percent": 4.54,
            "amortization_years": 28,
            "term_years": 3,
            "extra_monthly_payment": 100
        }"#;

        let err = load_loan_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, AmortizationError::InvalidInput { ref field, .. } if field == "principal"));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_loan_from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, AmortizationError::Json(_)));
    }
}
