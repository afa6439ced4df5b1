//! Budget CLI commands
//!
//! Implements CLI commands for viewing, setting and checking the monthly
//! budget.

use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::display::{format_budget_status, format_budget_summary};
use crate::error::TrackerResult;
use crate::services::FinanceTracker;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget and this month's spending
    Show,

    /// Set the monthly budget (0 disables budget alerts)
    Set {
        /// Amount (e.g., "2000000")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Check spending against the budget and raise an alert if reached
    Check,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut FinanceTracker,
    settings: &mut Settings,
    paths: &TrackerPaths,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Show => {
            let summary = tracker.budget_summary();
            println!("Budget for {}", tracker.today().format("%B %Y"));
            println!("{}", "=".repeat(40));
            print!("{}", format_budget_summary(&summary, &settings.currency_symbol));
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let status = tracker.set_budget(amount)?;

            settings.monthly_budget = amount;
            settings.save(paths)?;

            if amount.is_zero() {
                println!("Monthly budget cleared; budget alerts are off.");
            } else {
                println!("Monthly budget set to {}", settings.format_money(amount));
            }
            println!("{}", format_budget_status(status, &tracker.budget_summary()));
        }

        BudgetCommands::Check => {
            let status = tracker.check_status()?;
            println!("{}", format_budget_status(status, &tracker.budget_summary()));
        }
    }

    Ok(())
}
