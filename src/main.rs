use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spentsmart::cli::{
    handle_export_command, handle_history_command, ExportFormat, MenuSession, SessionOutcome,
};
use spentsmart::config::{paths::SpentSmartPaths, settings::Settings};
use spentsmart::display;
use spentsmart::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spentsmart",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "SpentSmart records your expenses by category, tracks spending \
                  against a budget, keeps a running savings total and saves \
                  everything to a local JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    /// Export saved expenses
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent activity from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Show configuration paths and settings
    Config,

    /// List the expense categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpentSmartPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&storage, &settings)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("SpentSmart Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", storage.expenses.path().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Schema version:  {}", settings.schema_version);
        }
        Some(Commands::Categories) => println!("{}", display::format_category_menu()),
    }

    Ok(())
}

fn run_menu(storage: &Storage, settings: &Settings) -> Result<()> {
    let ledger = storage.load_ledger()?;
    println!("Welcome to SpentSmart! {} saved expenses loaded.", ledger.len());

    let stdin = io::stdin();
    let mut session = MenuSession::new(ledger, storage, settings, stdin.lock(), io::stdout());

    match session.run()? {
        SessionOutcome::Saved => println!("Goodbye!"),
        SessionOutcome::Abandoned => println!(
            "Exiting without saving ({} expenses in this session were not written).",
            session.ledger().len()
        ),
    }

    Ok(())
}
