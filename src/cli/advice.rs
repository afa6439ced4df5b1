//! AI advice command

use std::sync::Arc;

use crate::advice::{spawn_advice, transaction_summary, AdvisorClient, OpenAiAdvisor};
use crate::config::Settings;
use crate::error::TrackerResult;
use crate::services::FinanceTracker;

/// Request financial advice for the whole ledger and print it
///
/// Provider failures are returned as [`crate::error::TrackerError::Advice`]
/// and leave the ledger untouched.
pub async fn handle_advice_command(tracker: &FinanceTracker, settings: &Settings) -> TrackerResult<()> {
    if tracker.is_empty() {
        println!("No transactions yet. Add some before asking for advice.");
        return Ok(());
    }

    let client: Arc<dyn AdvisorClient> = Arc::new(OpenAiAdvisor::from_env(settings.advice.clone())?);
    let summary = transaction_summary(tracker.transactions());

    println!("Asking {} for advice, please wait...", settings.advice.model);
    let advice = spawn_advice(client, summary).wait().await?;

    println!();
    println!("Financial advice");
    println!("{}", "=".repeat(40));
    println!("{}", advice);

    Ok(())
}
