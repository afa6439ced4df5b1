//! Transaction CLI commands
//!
//! Implements the add, delete and list commands.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::TrackerResult;
use crate::services::{FinanceTracker, Totals, TransactionFilter};

use super::{
    parse_amount, parse_category, parse_date, parse_transaction_type, report_save_status,
};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Amount (e.g., "25000" or "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type")]
        transaction_type: String,
        /// Category (food, transport, shopping, bills, entertainment,
        /// health, education, salary, investment, other)
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction by ID or unique ID prefix
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },

    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    tracker: &mut FinanceTracker,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            transaction_type,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let transaction_type = parse_transaction_type(&transaction_type)?;
            let category = parse_category(&category)?;
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => tracker.today(),
            };

            let outcome = tracker.record(
                date,
                description.unwrap_or_default(),
                amount,
                transaction_type,
                category,
            )?;

            println!("Added transaction:");
            print!("{}", format_transaction_details(&outcome.transaction, settings));
            report_save_status(&outcome.save);
        }

        TransactionCommands::Delete { id } => {
            let id = tracker.resolve_id(&id)?;
            let outcome = tracker.delete(&id)?;

            if outcome.removed == 0 {
                println!("No transaction with ID {}", id);
            } else {
                println!("Deleted transaction {}", id);
            }
            report_save_status(&outcome.save);
        }

        TransactionCommands::List {
            category,
            from,
            to,
            transaction_type,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(from) = from {
                filter = filter.from_date(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to_date(parse_date(&to)?);
            }
            if let Some(transaction_type) = transaction_type {
                filter = filter.transaction_type(parse_transaction_type(&transaction_type)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = tracker.filter(&filter);
            print!("{}", format_transaction_table(&transactions, settings));

            if !transactions.is_empty() {
                let totals = Totals::of(&transactions);
                println!(
                    "{} transaction(s)  Income: {}  Expense: {}  Net: {}",
                    transactions.len(),
                    settings.format_money(totals.income),
                    settings.format_money(totals.expense),
                    settings.format_money(totals.net)
                );
            }
        }
    }

    Ok(())
}
