//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use storefront::{catalog::Url, discounts::DiscountRate};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Storefront cart tool configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Inspect and edit a storefront cart", long_about = None)]
pub struct CliConfig {
    /// File holding the persisted key-value store
    #[arg(
        long,
        env = "STOREFRONT_CART_FILE",
        default_value = "storefront-cart.json",
        global = true
    )]
    pub cart_file: PathBuf,

    /// Key the cart is persisted under
    #[arg(
        long,
        env = "STOREFRONT_STORAGE_KEY",
        default_value = "cart",
        global = true
    )]
    pub storage_key: String,

    /// Catalog document URL
    #[arg(long, env = "STOREFRONT_CATALOG_URL", global = true)]
    pub catalog_url: Option<Url>,

    /// ISO 4217 display currency
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "USD", global = true)]
    pub currency: String,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Cart commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the catalog
    Catalog,

    /// Show the cart with its totals
    Show {
        /// Discount rate between 0 and 1
        #[arg(long, value_parser = parse_discount)]
        discount: Option<DiscountRate>,
    },

    /// Add a catalog product to the cart
    Add {
        /// Product id
        id: u64,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Set the quantity of a cart line (values below 1 become 1)
    Set {
        /// Product id
        id: u64,

        /// New quantity
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },

    /// Remove a cart line
    Remove {
        /// Product id
        id: u64,
    },

    /// Print the number of units in the cart
    Count,
}

fn parse_discount(raw: &str) -> Result<DiscountRate, String> {
    let rate: Decimal = raw
        .parse()
        .map_err(|error: rust_decimal::Error| error.to_string())?;

    DiscountRate::new(rate).map_err(|error| error.to_string())
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_add_with_quantity() -> TestResult {
        let config = CliConfig::try_parse_from(["storefront", "add", "3", "--quantity", "2"])?;

        assert_eq!(config.command, Command::Add { id: 3, quantity: 2 });
        assert_eq!(config.storage_key, "cart");

        Ok(())
    }

    #[test]
    fn set_accepts_negative_quantity() -> TestResult {
        let config = CliConfig::try_parse_from(["storefront", "set", "3", "-4"])?;

        assert_eq!(config.command, Command::Set { id: 3, quantity: -4 });

        Ok(())
    }

    #[test]
    fn discount_must_be_a_fraction() {
        assert!(CliConfig::try_parse_from(["storefront", "show", "--discount", "1.5"]).is_err());
        assert!(CliConfig::try_parse_from(["storefront", "show", "--discount", "abc"]).is_err());
    }

    #[test]
    fn discount_parses() -> TestResult {
        let config = CliConfig::try_parse_from(["storefront", "show", "--discount", "0.25"])?;

        let Command::Show { discount } = config.command else {
            panic!("expected the show command");
        };

        assert_eq!(discount.map(|rate| rate.value()), Some(Decimal::new(25, 2)));

        Ok(())
    }
}
