//! Advice prompt construction

use crate::models::Transaction;
use crate::reports::{MonthlyReport, ReportStrategy};

/// Persona and scope instructions for the advice model
pub const SYSTEM_PROMPT: &str = "\
You are an experienced personal finance adviser.
Analyse the user's transactions and give practical, realistic financial advice
that fits everyday life in Indonesia.
Focus only on the 2-3 points with the biggest impact.
Use clear, easy-to-understand language.";

/// Full prompt sent to the provider for a transaction summary
pub fn build_prompt(summary: &str) -> String {
    format!(
        "{}\n\nHere is a summary of my transactions:\n\n{}\n\nPlease give specific, actionable financial advice.",
        SYSTEM_PROMPT,
        summary.trim_end()
    )
}

/// Plain-text summary of the ledger handed to the advice provider
pub fn transaction_summary(transactions: &[Transaction]) -> String {
    MonthlyReport.generate(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_prompt_embeds_summary_after_persona() {
        let prompt = build_prompt("2025-01  income 10.00\n");

        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("2025-01  income 10.00\n\nPlease give"));
        assert!(prompt.contains("2-3 points"));
    }

    #[test]
    fn test_summary_is_monthly_report() {
        let txns = vec![Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            "rent",
            Money::from_units(1_500_000),
            Category::Bills,
        )];

        let summary = transaction_summary(&txns);

        assert!(summary.starts_with("Monthly Report"));
        assert!(summary.contains("2025-04"));
        assert!(summary.contains("1,500,000.00"));
    }
}
