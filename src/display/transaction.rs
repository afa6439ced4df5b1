//! Transaction display formatting
//!
//! Renders the ledger as a table (date, description, type, category,
//! amount, id) and single transactions as detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            date: txn.date.format(&settings.date_format).to_string(),
            description: truncate(&txn.description, 32),
            kind: txn.transaction_type.to_string(),
            category: txn.category.to_string(),
            amount: settings.format_money(txn.amount),
            id: txn.id.short().to_string(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, settings));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Amount:      {}\n", settings.format_money(txn.amount)));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Truncate to `max_len` characters, marking the cut with "..."
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionId};
    use chrono::NaiveDate;

    fn coffee() -> Transaction {
        let mut txn = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Coffee",
            Money::from_units(25_000),
            Category::Food,
        );
        txn.id = TransactionId::from("0123456789abcdef");
        txn
    }

    #[test]
    fn test_table_columns() {
        let table = format_transaction_table(&[coffee()], &Settings::default());

        for heading in ["Date", "Description", "Type", "Category", "Amount", "ID"] {
            assert!(table.contains(heading), "missing {}", heading);
        }
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("Rp 25,000.00"));
        assert!(table.contains("01234567"));
        assert!(!table.contains("0123456789abcdef"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], &Settings::default()),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_details_show_full_id() {
        let settings = Settings {
            currency_symbol: "$".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let details = format_transaction_details(&coffee(), &settings);

        assert!(details.contains("Transaction: 0123456789abcdef"));
        assert!(details.contains("Amount:      $25,000.00"));
        assert!(details.contains("Date:        15/01/2025"));
        assert!(details.contains("Description: Coffee"));
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
