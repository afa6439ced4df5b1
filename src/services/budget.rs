//! Budget monitor
//!
//! Tracks the single monthly budget and whether an over-budget alert has
//! already been raised. Alerts are edge-triggered: one notification when
//! spending first reaches the budget, none while it stays there, and the
//! monitor re-arms once spending drops back below.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::notify::Notifier;

/// Outcome of a budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    /// Budget is zero; monitoring disabled
    NoBudget,
    UnderThreshold,
    AtOrOverThreshold,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoBudget => "no budget set",
            Self::UnderThreshold => "under budget",
            Self::AtOrOverThreshold => "over budget",
        };
        f.pad(text)
    }
}

/// Build the alert text published when spending reaches the budget
pub fn alert_message(spending: Money, budget: Money, currency_symbol: &str) -> String {
    format!(
        "BUDGET WARNING: spending this month ({}) has exceeded the budget ({})!",
        spending.format_with_symbol(currency_symbol),
        budget.format_with_symbol(currency_symbol)
    )
}

/// Monthly budget state with edge-triggered alerting
#[derive(Debug, Clone)]
pub struct BudgetMonitor {
    monthly_budget: Money,
    alerted: bool,
    currency_symbol: String,
}

impl BudgetMonitor {
    pub fn new(monthly_budget: Money) -> Self {
        Self {
            monthly_budget,
            alerted: false,
            currency_symbol: String::new(),
        }
    }

    /// Symbol used when formatting alert messages
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    pub fn is_alerted(&self) -> bool {
        self.alerted
    }

    /// Restore the alert state for spending recorded in an earlier session
    ///
    /// Spending already at or over the budget counts as alerted, since the
    /// crossing was published when it happened. Nothing is published here.
    pub fn resume(&mut self, spending: Money) {
        self.alerted = self.monthly_budget.is_positive() && spending >= self.monthly_budget;
        debug!(alerted = self.alerted, "budget alert state restored");
    }

    /// Re-evaluate the budget against the current month's spending
    ///
    /// Publishes at most one alert per crossing. Observer errors are returned
    /// after the state transition has been applied.
    pub fn check_status(&mut self, spending: Money, notifier: &Notifier) -> TrackerResult<BudgetStatus> {
        if !self.monthly_budget.is_positive() {
            self.alerted = false;
            return Ok(BudgetStatus::NoBudget);
        }

        if spending >= self.monthly_budget {
            if !self.alerted {
                self.alerted = true;
                let message = alert_message(spending, self.monthly_budget, &self.currency_symbol);
                info!(spending = %spending, budget = %self.monthly_budget, "budget threshold reached");
                notifier.publish(&message)?;
            }
            Ok(BudgetStatus::AtOrOverThreshold)
        } else {
            if self.alerted {
                debug!("spending back under budget, alert re-armed");
            }
            self.alerted = false;
            Ok(BudgetStatus::UnderThreshold)
        }
    }

    /// Replace the budget and re-check it
    ///
    /// Negative budgets are rejected without touching the current state.
    pub fn set_budget(
        &mut self,
        budget: Money,
        spending: Money,
        notifier: &Notifier,
    ) -> TrackerResult<BudgetStatus> {
        if budget.is_negative() {
            return Err(TrackerError::Budget(format!(
                "monthly budget must not be negative (got {})",
                budget
            )));
        }

        debug!(old = %self.monthly_budget, new = %budget, "monthly budget changed");
        self.monthly_budget = budget;
        self.check_status(spending, notifier)
    }

    pub fn summary(&self, spending: Money) -> BudgetSummary {
        BudgetSummary::new(self.monthly_budget, spending)
    }
}

/// Progress level of the current month's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetLevel {
    /// Up to 70% of the budget
    Healthy,
    /// 71% to 90%
    Caution,
    /// Above 90%
    Critical,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Healthy => "Healthy",
            Self::Caution => "Caution",
            Self::Critical => "Critical",
        };
        f.pad(text)
    }
}

/// Snapshot of spending against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub budget: Money,
    pub spending: Money,
    /// Budget minus spending; negative when over budget
    pub remaining: Money,
    /// Whole percent of the budget spent, truncated; 0 without a budget
    pub percentage: i64,
    pub level: BudgetLevel,
}

impl BudgetSummary {
    pub fn new(budget: Money, spending: Money) -> Self {
        let percentage = if budget.is_positive() {
            let pct = i128::from(spending.cents()) * 100 / i128::from(budget.cents());
            i64::try_from(pct).unwrap_or(i64::MAX)
        } else {
            0
        };

        let level = match percentage {
            p if p <= 70 => BudgetLevel::Healthy,
            p if p <= 90 => BudgetLevel::Caution,
            _ => BudgetLevel::Critical,
        };

        Self {
            budget,
            spending,
            remaining: budget - spending,
            percentage,
            level,
        }
    }

    pub fn has_budget(&self) -> bool {
        self.budget.is_positive()
    }

    pub fn is_over_budget(&self) -> bool {
        self.has_budget() && self.spending >= self.budget
    }
}
