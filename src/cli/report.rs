//! Report CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::reports::ReportKind;
use crate::services::FinanceTracker;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income and expense per day
    Daily,
    /// Income and expense per month
    Monthly,
    /// Income and expense per year
    Yearly,
}

impl ReportCommands {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Daily => ReportKind::Daily,
            Self::Monthly => ReportKind::Monthly,
            Self::Yearly => ReportKind::Yearly,
        }
    }
}

/// Handle a report command
pub fn handle_report_command(tracker: &FinanceTracker, cmd: ReportCommands) -> TrackerResult<()> {
    print!("{}", cmd.kind().generate(tracker.transactions()));
    Ok(())
}
