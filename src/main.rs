use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketguard::cli::{
    handle_audit_command, handle_balance_command, handle_budget_command, handle_expense_command,
    handle_export_command, handle_milestone_command, handle_report_command, BalanceCommands,
    BudgetCommands, ExpenseCommands, ExportCommands, MilestoneCommands, ReportCommands,
};
use pocketguard::config::{PocketGuardPaths, Settings};
use pocketguard::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "pocketguard",
    version,
    about = "Track expenses and keep an eye on your budget",
    long_about = "PocketGuard records your expenses and savings milestones and shows \
                  where the money goes: spending by category and month, progress \
                  against a budget, and what is left of your balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Record and list expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Savings milestones and their rewards
    #[command(subcommand)]
    Milestone(MilestoneCommands),

    /// Spending budget limit
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Initial balance and projected current balance
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Dashboard reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries, newest first
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    pocketguard::init_tracing();
    let cli = Cli::parse();

    let paths = PocketGuardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            let created = initialize_storage(&paths)?;
            if created {
                println!("Initialized PocketGuard at: {}", paths.base_dir().display());
                println!();
                println!("Next steps:");
                println!("  pocketguard balance set <amount>");
                println!("  pocketguard budget set <amount>");
                println!("  pocketguard expense add <name> <amount> --category <category>");
            } else {
                println!("PocketGuard is already initialized at: {}", paths.base_dir().display());
            }
        }
        Some(Commands::Config) => {
            println!("PocketGuard Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Budget limit:    {}",
                settings.budget_limit.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "  Initial balance: {}",
                settings.initial_balance.format_with_symbol(&settings.currency_symbol)
            );
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Milestone(cmd)) => handle_milestone_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Balance(cmd)) => handle_balance_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { count }) => handle_audit_command(&storage, count)?,
        None => {
            println!("PocketGuard - expense tracking and budget dashboard");
            println!();
            println!("Run 'pocketguard --help' for usage information.");
        }
    }

    Ok(())
}
