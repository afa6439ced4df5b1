use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_advice_command, handle_budget_command, handle_notifications_command,
    handle_report_command, handle_transaction_command, BudgetCommands, ReportCommands,
    TransactionCommands,
};
use finance_tracker::config::paths::DATA_DIR_ENV;
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::error::TrackerResult;
use finance_tracker::logging::init_tracing;
use finance_tracker::notify::{NotificationLogObserver, TracingObserver};
use finance_tracker::services::{BudgetMonitor, FinanceTracker, SystemClock};
use finance_tracker::storage::{JsonTransactionStore, NotificationLog};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack records income and expenses, reports on them by day, \
                  month or year, watches a monthly budget and can ask an AI model \
                  for advice on your spending."
)]
struct Cli {
    /// Directory holding settings, transactions and the notification log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Income/expense reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Ask an AI model for advice on your transactions (needs OPENAI_API_KEY)
    Advice,

    /// Show recent budget notifications
    Notifications {
        /// Number of notifications to show
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;

    let mut tracker = open_tracker(&paths, &settings);

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut tracker, &mut settings, &paths, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&tracker, cmd)?;
        }
        Some(Commands::Advice) => {
            handle_advice_command(&tracker, &settings).await?;
        }
        Some(Commands::Notifications { count }) => {
            handle_notifications_command(&paths, count)?;
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Notification log:  {}", paths.notification_log().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Monthly budget:  {}", settings.format_money(settings.monthly_budget));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Advice model:    {}", settings.advice.model);
        }
        None => {
            println!("fintrack - Personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}

/// Assemble the session: JSON store, wall clock, budget from settings and
/// the alert observers
fn open_tracker(paths: &TrackerPaths, settings: &Settings) -> FinanceTracker {
    let store = JsonTransactionStore::new(paths.transactions_file());
    let monitor = BudgetMonitor::new(settings.monthly_budget)
        .with_currency_symbol(settings.currency_symbol.clone());

    let mut tracker = FinanceTracker::open(Box::new(store), Box::new(SystemClock), monitor);

    tracker.subscribe(NotificationLogObserver::new(NotificationLog::new(
        paths.notification_log(),
    )));
    tracker.subscribe(TracingObserver);
    tracker.subscribe(|message: &str| -> TrackerResult<()> {
        println!("{}", message);
        Ok(())
    });

    tracker
}
