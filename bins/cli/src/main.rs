//! Coinage CLI
//!
//! Formats, parses, scales and allocates money from the command line.
//! Currency metadata comes from the built-in table plus `config/` and
//! `COINAGE__*` overrides.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::{CurrencyProvider, CurrencyRegistry, Money, RoundingMode, string_to_units};
use coinage_shared::CoinageConfig;

/// Coinage money CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an amount with the currency's symbol and separators
    Format {
        /// Currency code
        #[arg(short, long)]
        currency: String,
        /// Amount in major units
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "units")]
        amount: Option<Decimal>,
        /// Amount in minor units
        #[arg(short, long, allow_hyphen_values = true)]
        units: Option<i64>,
    },
    /// Print an amount as a count of minor units (truncated)
    Units {
        /// Currency code
        #[arg(short, long)]
        currency: String,
        /// Amount in major units
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Parse a two-decimal amount string into hundredths
    Parse {
        /// Text such as -12.3 or 42,05
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Also render the parsed units in this currency
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// Split an amount across ratios without losing a minor unit
    Allocate {
        /// Currency code
        #[arg(short, long)]
        currency: String,
        /// Amount in major units
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Comma separated ratios, e.g. 1,1,1
        #[arg(short, long, value_delimiter = ',', required = true)]
        ratios: Vec<Decimal>,
    },
    /// Multiply an amount and round to the minor unit
    Multiply {
        /// Currency code
        #[arg(short, long)]
        currency: String,
        /// Amount in major units
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Multiplier
        #[arg(short, long, allow_hyphen_values = true)]
        by: Decimal,
        /// HALF_UP, HALF_DOWN, HALF_EVEN or HALF_ODD
        #[arg(short, long)]
        mode: Option<RoundingMode>,
    },
    /// Divide an amount and round to the minor unit
    Divide {
        /// Currency code
        #[arg(short, long)]
        currency: String,
        /// Amount in major units
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Divisor
        #[arg(short, long, allow_hyphen_values = true)]
        by: Decimal,
        /// HALF_UP, HALF_DOWN, HALF_EVEN or HALF_ODD
        #[arg(short, long)]
        mode: Option<RoundingMode>,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &cli.log_level;
                format!("coinage={level},coinage_core={level},coinage_shared={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = CoinageConfig::load().context("Failed to load configuration")?;
    let registry =
        CurrencyRegistry::from_config(&config).context("Invalid currency configuration")?;
    info!(
        currencies = registry.len(),
        default_rounding = %config.default_rounding,
        "Configuration ready"
    );

    let output = run(cli.command, &registry, config.default_rounding)?;
    println!("{output}");

    Ok(())
}

fn run(
    command: Commands,
    registry: &CurrencyRegistry,
    default_rounding: RoundingMode,
) -> anyhow::Result<String> {
    let output = match command {
        Commands::Format {
            currency,
            amount,
            units,
        } => {
            let currency = registry.resolve(&currency)?;
            let money = match (amount, units) {
                (Some(amount), _) => Money::from_decimal(amount, currency),
                (None, Some(units)) => Money::from_units(units, currency),
                (None, None) => anyhow::bail!("either --amount or --units is required"),
            };
            money.formatted()
        }
        Commands::Units { currency, amount } => {
            let money = Money::from_decimal(amount, registry.resolve(&currency)?);
            money.units()?.to_string()
        }
        Commands::Parse { text, currency } => {
            let units =
                string_to_units(&text).with_context(|| format!("Cannot parse {text:?}"))?;
            match currency {
                Some(code) => Money::from_units(units, registry.resolve(&code)?).formatted(),
                None => units.to_string(),
            }
        }
        Commands::Allocate {
            currency,
            amount,
            ratios,
        } => {
            let money = Money::from_decimal(amount, registry.resolve(&currency)?);
            let parts = money.allocate(&ratios)?;
            debug!(parts = parts.len(), "Allocation done");
            parts
                .iter()
                .map(Money::formatted)
                .collect::<Vec<_>>()
                .join("\n")
        }
        Commands::Multiply {
            currency,
            amount,
            by,
            mode,
        } => {
            let money = Money::from_decimal(amount, registry.resolve(&currency)?);
            money
                .multiply(by, mode.unwrap_or(default_rounding))?
                .formatted()
        }
        Commands::Divide {
            currency,
            amount,
            by,
            mode,
        } => {
            let money = Money::from_decimal(amount, registry.resolve(&currency)?);
            money
                .divide(by, mode.unwrap_or(default_rounding))?
                .formatted()
        }
    };

    Ok(output)
}
