//! Mortgage Amortization CLI
//!
//! Generates an amortization schedule and savings summary for one loan

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use mortgage_amortization::{
    export::{write_result_json, write_schedule_csv, write_schedule_csv_path},
    loan::load_loan,
    AmortizationEngine, AmortizationResult, LoanInputs, ScenarioRunner,
};

/// Mortgage amortization schedule with extra-payment savings
#[derive(Parser)]
#[command(name = "amortize", version, about)]
struct Cli {
    /// Loan amount ($)
    #[arg(long, default_value_t = 800_000.0)]
    principal: f64,

    /// Annual interest rate (%), compounded semi-annually
    #[arg(long, default_value_t = 4.54)]
    rate: f64,

    /// Amortization period (years)
    #[arg(long, default_value_t = 28)]
    amortization_years: u32,

    /// Mortgage term (years)
    #[arg(long, default_value_t = 3)]
    term_years: u32,

    /// Extra monthly payment ($)
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// Read loan parameters from a JSON file instead of the flags above
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Also write the schedule as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Limit the number of schedule rows printed in table format
    #[arg(long)]
    rows: Option<usize>,

    /// Compare payoff for these extra monthly payments
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    compare: Vec<f64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let inputs = match &cli.input {
        Some(path) => load_loan(path).with_context(|| format!("Failed to load loan from {}", path.display()))?,
        None => LoanInputs {
            principal: cli.principal,
            annual_rate_percent: cli.rate,
            amortization_years: cli.amortization_years,
            term_years: cli.term_years,
            extra_monthly_payment: cli.extra,
        },
    };

    let engine = AmortizationEngine::new(inputs).context("Invalid loan parameters")?;
    let result = engine.run();

    match cli.format {
        OutputFormat::Table => print_table(engine.inputs(), &result, cli.rows),
        OutputFormat::Json => {
            write_result_json(io::stdout().lock(), &result)?;
            println!();
        }
        OutputFormat::Csv => write_schedule_csv(io::stdout().lock(), &result.schedule)?,
    }

    if let Some(path) = &cli.csv {
        write_schedule_csv_path(path, &result.schedule)
            .with_context(|| format!("Failed to write schedule to {}", path.display()))?;
        info!("Schedule written to {}", path.display());
        if matches!(cli.format, OutputFormat::Table) {
            println!("\nFull schedule written to: {}", path.display());
        }
    }

    if !cli.compare.is_empty() {
        print_comparison(engine.inputs(), &cli.compare)?;
    }

    Ok(())
}

fn print_table(inputs: &LoanInputs, result: &AmortizationResult, limit: Option<usize>) {
    let summary = &result.summary;

    println!("Loan: {}", format_currency(inputs.principal));
    println!("  Annual Rate: {}% (periodic {:.8})", inputs.annual_rate_percent, summary.periodic_rate);
    println!("  Amortization: {} years, Term: {} years", inputs.amortization_years, inputs.term_years);
    println!("  Scheduled Payment: {}", format_currency(summary.scheduled_payment));
    println!("  Extra Payment: {}", format_currency(inputs.extra_monthly_payment));
    println!();

    println!("### Updated Amortization Schedule");
    println!("{:>5} {:>14} {:>14} {:>14} {:>18}", "Month", "Payment", "Principal", "Interest", "Remaining Balance");
    println!("{}", "-".repeat(69));

    let limit = limit.unwrap_or(result.schedule.len());
    for row in result.schedule.iter().take(limit) {
        println!("{:>5} {:>14} {:>14} {:>14} {:>18}",
            row.period_index,
            format_currency(row.total_payment),
            format_currency(row.principal_component),
            format_currency(row.interest_component),
            format_currency(row.remaining_balance),
        );
    }

    if result.schedule.len() > limit {
        println!("... ({} more months)", result.schedule.len() - limit);
    }

    println!("\n### Savings Summary");
    println!(
        "New Amortization Period: {} months ({} years and {} months)",
        summary.new_payoff_periods, summary.payoff_years, summary.payoff_months
    );
    println!("Total Interest Savings: {}", format_currency(summary.interest_savings));
    println!("  Interest Paid: {}", format_currency(summary.total_interest_paid));
    println!("  Original Interest: {}", format_currency(summary.original_total_interest));
    println!("  Balance at End of Term: {}", format_currency(summary.term_end_balance));
}

fn print_comparison(inputs: &LoanInputs, extras: &[f64]) -> Result<()> {
    let runner = ScenarioRunner::new(inputs.clone())?;
    let scenarios = runner.compare(extras)?;

    println!("\n### Extra Payment Comparison");
    println!("{:>14} {:>8} {:>8} {:>16} {:>16}", "Extra", "Months", "Saved", "Interest", "Savings");
    println!("{}", "-".repeat(66));
    for s in &scenarios {
        println!("{:>14} {:>8} {:>8} {:>16} {:>16}",
            format_currency(s.extra_monthly_payment),
            s.new_payoff_periods,
            s.periods_saved,
            format_currency(s.total_interest_paid),
            format_currency(s.interest_savings),
        );
    }

    Ok(())
}

/// Dollar amount with thousands separators and two decimals, e.g. `$1,234.57`
fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Savings can dip fractionally below zero; don't print "-$0.00"
    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(4190.737), "$4,190.74");
        assert_eq!(format_currency(129_776.88), "$129,776.88");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_currency(-1500.5), "-$1,500.50");
        assert_eq!(format_currency(-0.000001), "$0.00");
    }

    #[test]
    fn test_cli_parses_compare_list() {
        let cli = Cli::parse_from(["amortize", "--extra", "500", "--compare", "0,250,500"]);
        assert_eq!(cli.extra, 500.0);
        assert_eq!(cli.compare, vec![0.0, 250.0, 500.0]);
        assert!(matches!(cli.format, OutputFormat::Table));
    }
}
