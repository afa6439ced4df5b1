//! Budget display formatting

use crate::services::{BudgetLevel, BudgetStatus, BudgetSummary};

const BAR_WIDTH: usize = 30;

/// Text progress bar, capped at a full bar when over budget
pub fn format_progress_bar(percentage: i64) -> String {
    let clamped = percentage.clamp(0, 100) as usize;
    let filled = clamped * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Multi-line budget summary for `budget show`
pub fn format_budget_summary(summary: &BudgetSummary, currency_symbol: &str) -> String {
    if !summary.has_budget() {
        return format!(
            "No monthly budget set. Spending this month: {}\n",
            summary.spending.format_with_symbol(currency_symbol)
        );
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Monthly budget:   {}\n",
        summary.budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Spent this month: {}\n",
        summary.spending.format_with_symbol(currency_symbol)
    ));

    if summary.remaining.is_negative() {
        output.push_str(&format!(
            "Over budget by:   {}\n",
            summary.remaining.abs().format_with_symbol(currency_symbol)
        ));
    } else {
        output.push_str(&format!(
            "Remaining:        {}\n",
            summary.remaining.format_with_symbol(currency_symbol)
        ));
    }

    output.push_str(&format!(
        "{} {}% ({})\n",
        format_progress_bar(summary.percentage),
        summary.percentage,
        level_label(summary.level)
    ));

    output
}

/// One-line status after a mutation or check
pub fn format_budget_status(status: BudgetStatus, summary: &BudgetSummary) -> String {
    match status {
        BudgetStatus::NoBudget => "Budget monitoring is off (no budget set).".to_string(),
        _ => format!(
            "Budget status: {} ({}% of budget used)",
            status, summary.percentage
        ),
    }
}

fn level_label(level: BudgetLevel) -> &'static str {
    match level {
        BudgetLevel::Healthy => "healthy",
        BudgetLevel::Caution => "caution",
        BudgetLevel::Critical => "critical",
    }
}
