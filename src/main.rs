use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pointkeeper::config::{load_actions, PointsPaths, Settings, STARTER_ACTIONS};
use pointkeeper::display::{format_action_list, format_balance};
use pointkeeper::services::TransactionService;
use pointkeeper::storage::BalanceStore;

#[derive(Parser)]
#[command(
    name = "points",
    version,
    about = "Gamified task tracker for the terminal",
    long_about = "pointkeeper keeps a point balance for you: finishing a task \
                  earns points, and rewards cost points. Tasks and rewards are \
                  listed in an INI-style actions file."
)]
struct Cli {
    /// Actions file to use instead of the one in the config directory
    #[arg(long, global = true, env = "POINTKEEPER_ACTIONS")]
    actions: Option<PathBuf>,

    /// Balance file to use instead of the one in the config directory
    #[arg(long, global = true, env = "POINTKEEPER_BALANCE")]
    balance: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// List the configured actions with their selection keys
    List,

    /// Show the current point balance
    Balance,

    /// Create a starter actions file, settings and balance
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PointsPaths::new()?
        .with_actions_file(cli.actions)
        .with_balance_file(cli.balance);
    paths.ensure_directories()?;
    pointkeeper::logging::init_logging(&paths.log_file())?;

    let settings = Settings::load_or_create(&paths)?;
    let keys = settings.key_map();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // Configuration problems are fatal before the screen is touched
            let actions = load_actions(paths.actions_file(), &settings)?;
            let store = BalanceStore::new(paths.balance_file());
            let mut service = TransactionService::open(actions, store)?;

            let summary = pointkeeper::tui::run_tui(&mut service, &keys)?;
            println!("{}", format_balance(service.balance()));
            if summary.applied > 0 {
                println!("{} transaction(s) saved.", summary.applied);
            }
        }
        Commands::List => {
            let actions = load_actions(paths.actions_file(), &settings)?;
            print!("{}", format_action_list(&actions, &keys));
            if actions.is_empty() {
                println!();
            }
        }
        Commands::Balance => {
            let balance = BalanceStore::new(paths.balance_file()).load()?;
            println!("{}", balance);
        }
        Commands::Init => init(&paths, &settings)?,
        Commands::Config => {
            println!("pointkeeper Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Actions file:     {}", paths.actions_file().display());
            println!("Balance file:     {}", paths.balance_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Max actions:   {}", settings.max_actions);
            println!("  Quit key:      {}", settings.quit_key);
            println!("  Earn section:  [{}]", settings.earn_section);
            println!("  Spend section: [{}]", settings.spend_section);
        }
    }

    Ok(())
}

fn init(paths: &PointsPaths, settings: &Settings) -> Result<()> {
    println!("Initializing pointkeeper at: {}", paths.base_dir().display());

    let actions_file = paths.actions_file();
    if actions_file.exists() {
        println!("Keeping existing actions file: {}", actions_file.display());
    } else {
        pointkeeper::storage::write_text_atomic(&actions_file, STARTER_ACTIONS)?;
        println!("Created actions file: {}", actions_file.display());
    }

    if !paths.settings_file().exists() {
        settings.save(paths)?;
        println!("Created settings file: {}", paths.settings_file().display());
    }

    let balance = BalanceStore::new(paths.balance_file()).load()?;
    println!("{}", format_balance(balance));
    println!();
    println!("Edit the actions file to add your own tasks and rewards,");
    println!("then run 'points' to start.");

    Ok(())
}
