use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_history_command,
    handle_list_command, handle_show_command, handle_summary_command, handle_theme_command,
    AddArgs, ListArgs, ThemeChoice,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, browse them by category and see where the money \
                  goes. Run without a command to open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one expense in detail
    Show {
        /// Expense id (full, "exp-" short id, or a unique prefix)
        id: String,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id (full, "exp-" short id, or a unique prefix)
        id: String,
    },

    /// Show total spending and the per-category breakdown
    Summary,

    /// List the available categories
    Categories,

    /// Show or change the color theme
    Theme {
        /// New theme; omit to print the current one
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    let mut storage = Storage::open(&paths, &settings)?;
    storage.load_all();

    let command = cli.command.unwrap_or(Commands::Tui);
    if !matches!(command, Commands::Tui) {
        if let Some(warning) = storage.expenses.load_warning() {
            eprintln!("Warning: {}", warning);
        }
    }

    match command {
        Commands::Tui => expense_tracker::tui::run_tui(&mut storage, &settings)?,
        Commands::Add(args) => handle_add_command(&mut storage, &settings, args)?,
        Commands::List(args) => handle_list_command(&mut storage, &settings, args)?,
        Commands::Show { id } => handle_show_command(&mut storage, &settings, &id)?,
        Commands::Delete { id } => handle_delete_command(&mut storage, &id)?,
        Commands::Summary => handle_summary_command(&mut storage, &settings)?,
        Commands::Categories => handle_categories_command()?,
        Commands::Theme { choice } => handle_theme_command(&mut storage, choice)?,
        Commands::History { limit } => handle_history_command(&storage, limit)?,
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Theme:           {}", storage.preferences.theme());
        }
    }

    if let Some(warning) = storage.take_audit_warning() {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
