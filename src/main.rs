use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketbook::api::ApiClient;
use pocketbook::cli::{
    handle_budget_command, handle_invest_command, handle_portfolio_command, BudgetCommands,
    InvestCommands, PortfolioCommands,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Terminal front end for a personal budget and investment tracking service",
    long_about = "pocketbook renders your recurring budget as editable tables, \
                  normalizes every item onto a common monthly/weekly basis, and \
                  tracks investment contributions and categorized holdings. All \
                  data lives behind your budget data service; pocketbook is the \
                  terminal in front of it."
)]
struct Cli {
    /// Base URL of the budget data service (overrides the configured value)
    #[arg(long, env = "POCKETBOOK_SERVICE_URL", global = true)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget item and aggregate commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Investment contribution commands
    #[command(subcommand, alias = "inv")]
    Invest(InvestCommands),

    /// Portfolio holdings commands
    #[command(subcommand, alias = "pf")]
    Portfolio(PortfolioCommands),

    /// Show or update client configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Set the data service base URL
    SetUrl {
        /// Base URL, e.g. "http://127.0.0.1:5000"
        url: String,
    },

    /// Set the fixed weekly income the spending summary is measured against
    SetIncome {
        /// Weekly income amount (e.g. "1200")
        amount: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let service_url = cli
        .service_url
        .unwrap_or_else(|| settings.service_url.clone());

    match cli.command {
        Commands::Budget(cmd) => {
            let api = ApiClient::new(service_url)?;
            handle_budget_command(&api, &settings, cmd)?;
        }
        Commands::Invest(cmd) => {
            let api = ApiClient::new(service_url)?;
            handle_invest_command(&api, cmd)?;
        }
        Commands::Portfolio(cmd) => {
            let api = ApiClient::new(service_url)?;
            handle_portfolio_command(&api, cmd)?;
        }
        Commands::Config(ConfigCommands::Show) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Service URL:     {}", service_url);
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Weekly income:   {}", settings.weekly_income);
            if !paths.is_initialized() {
                println!();
                println!("No settings file yet; defaults shown. It is created on first save.");
            }
        }
        Commands::Config(ConfigCommands::SetUrl { url }) => {
            let mut settings = settings;
            settings.service_url = url;
            settings.save(&paths)?;
            println!("Service URL set to {}.", settings.service_url);
        }
        Commands::Config(ConfigCommands::SetIncome { amount }) => {
            let income = pocketbook::models::Money::parse(&amount)
                .map_err(|e| pocketbook::PocketbookError::Validation(e.to_string()))?;

            let mut settings = settings;
            settings.weekly_income = income;
            settings.save(&paths)?;
            println!("Weekly income set to {}.", settings.weekly_income);
        }
    }

    Ok(())
}
