//! Command-line configuration.
//!
//! Every [`EstimatorConfig`] field is a long flag of the same name in kebab case
//! (`catches_per_hour` becomes `--catches-per-hour`) defaulting to the matching
//! `DEFAULT_*` constant. Integer fields only accept integers; a malformed value is
//! rejected by clap before anything is computed.
//!
//! Negative numbers are accepted as values (`--treasure-rate -0.1`) since nothing
//! downstream rejects them either.

use crate::models::EstimatorConfig;
use crate::models::config as defaults;
use clap::{Args, Parser};

/// Top-level command line for the `fishincome` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "fishincome", version)]
#[command(about = "Estimate hourly income from an AFK fishing farm")]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Log at debug level instead of warn
    #[arg(long)]
    pub debug: bool,
}

/// One flag per estimator parameter.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ConfigArgs {
    /// Catches per hour
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_CATCHES_PER_HOUR,
        allow_negative_numbers = true
    )]
    pub catches_per_hour: f64,

    /// Probability that a catch is treasure
    #[arg(long, default_value_t = defaults::DEFAULT_TREASURE_RATE, allow_negative_numbers = true)]
    pub treasure_rate: f64,

    /// Number of equally likely treasure kinds
    #[arg(long, default_value_t = defaults::DEFAULT_TREASURE_TYPES)]
    pub treasure_types: u32,

    /// Share of fish that are cod
    #[arg(long, default_value_t = defaults::DEFAULT_FISH_RATE_COD, allow_negative_numbers = true)]
    pub fish_rate_cod: f64,

    /// Share of fish that are salmon
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_RATE_SALMON,
        allow_negative_numbers = true
    )]
    pub fish_rate_salmon: f64,

    /// Share of fish that are pufferfish
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_RATE_PUFFER,
        allow_negative_numbers = true
    )]
    pub fish_rate_puffer: f64,

    /// Share of fish that are tropical fish
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_RATE_TROPICAL,
        allow_negative_numbers = true
    )]
    pub fish_rate_tropical: f64,

    /// Price of one cod
    #[arg(long, default_value_t = defaults::DEFAULT_FISH_PRICE_COD, allow_negative_numbers = true)]
    pub fish_price_cod: i64,

    /// Price of one salmon
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_PRICE_SALMON,
        allow_negative_numbers = true
    )]
    pub fish_price_salmon: i64,

    /// Price of one pufferfish
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_PRICE_PUFFER,
        allow_negative_numbers = true
    )]
    pub fish_price_puffer: i64,

    /// Price of one tropical fish
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_FISH_PRICE_TROPICAL,
        allow_negative_numbers = true
    )]
    pub fish_price_tropical: i64,

    /// Share of books carrying Mending
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_MENDING_RATE,
        allow_negative_numbers = true
    )]
    pub book_mending_rate: f64,

    /// Share of Mending books with no other enchantment
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_MENDING_SINGLE_RATE,
        allow_negative_numbers = true
    )]
    pub book_mending_single_rate: f64,

    /// Share of Mending books with other enchantments
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_MENDING_MULTI_RATE,
        allow_negative_numbers = true
    )]
    pub book_mending_multi_rate: f64,

    /// Share of books that are Smite only
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_SMITE_ONLY_RATE,
        allow_negative_numbers = true
    )]
    pub book_smite_only_rate: f64,

    /// Share of books that are Bane of Arthropods only
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_BANE_ONLY_RATE,
        allow_negative_numbers = true
    )]
    pub book_bane_only_rate: f64,

    /// Share of books that are Unbreaking III only
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_BOOK_UNB3_ONLY_RATE,
        allow_negative_numbers = true
    )]
    pub book_unb3_only_rate: f64,

    /// Average enchantments on a book
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_AVG_ENCHANTS_PER_BOOK,
        allow_negative_numbers = true
    )]
    pub avg_enchants_per_book: f64,

    /// Average grindstone XP per enchantment
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_AVG_XP_PER_ENCHANT,
        allow_negative_numbers = true
    )]
    pub avg_xp_per_enchant: f64,

    /// Average XP dropped per catch
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_AVG_XP_PER_CATCH,
        allow_negative_numbers = true
    )]
    pub avg_xp_per_catch: f64,

    /// Yen paid per xp-cash-denom XP
    #[arg(long, default_value_t = defaults::DEFAULT_XP_CASH_NUMER, allow_negative_numbers = true)]
    pub xp_cash_numer: f64,

    /// XP needed to receive xp-cash-numer yen
    #[arg(long, default_value_t = defaults::DEFAULT_XP_CASH_DENOM, allow_negative_numbers = true)]
    pub xp_cash_denom: f64,

    /// Average enchantments on a treasure bow or rod
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_AVG_ENCHANTS_PER_TOOL,
        allow_negative_numbers = true
    )]
    pub avg_enchants_per_tool: f64,

    /// Sale price of a Mending-only book
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_PRICE_MENDING_SINGLE,
        allow_negative_numbers = true
    )]
    pub price_mending_single: i64,

    /// Sale price of a Mending book with other enchantments
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_PRICE_MENDING_MULTI,
        allow_negative_numbers = true
    )]
    pub price_mending_multi: i64,

    /// Sale price of a Smite-only book
    #[arg(
        long,
        default_value_t = defaults::DEFAULT_PRICE_SMITE_ONLY,
        allow_negative_numbers = true
    )]
    pub price_smite_only: i64,

    /// Sale price of a Bane of Arthropods-only book
    #[arg(long, default_value_t = defaults::DEFAULT_PRICE_BANE_ONLY, allow_negative_numbers = true)]
    pub price_bane_only: i64,

    /// Sale price of an Unbreaking III-only book
    #[arg(long, default_value_t = defaults::DEFAULT_PRICE_UNB3_ONLY, allow_negative_numbers = true)]
    pub price_unb3_only: i64,
}

impl From<ConfigArgs> for EstimatorConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            catches_per_hour: args.catches_per_hour,
            treasure_rate: args.treasure_rate,
            treasure_types: args.treasure_types,
            fish_rate_cod: args.fish_rate_cod,
            fish_rate_salmon: args.fish_rate_salmon,
            fish_rate_puffer: args.fish_rate_puffer,
            fish_rate_tropical: args.fish_rate_tropical,
            fish_price_cod: args.fish_price_cod,
            fish_price_salmon: args.fish_price_salmon,
            fish_price_puffer: args.fish_price_puffer,
            fish_price_tropical: args.fish_price_tropical,
            book_mending_rate: args.book_mending_rate,
            book_mending_single_rate: args.book_mending_single_rate,
            book_mending_multi_rate: args.book_mending_multi_rate,
            book_smite_only_rate: args.book_smite_only_rate,
            book_bane_only_rate: args.book_bane_only_rate,
            book_unb3_only_rate: args.book_unb3_only_rate,
            avg_enchants_per_book: args.avg_enchants_per_book,
            avg_xp_per_enchant: args.avg_xp_per_enchant,
            avg_xp_per_catch: args.avg_xp_per_catch,
            xp_cash_numer: args.xp_cash_numer,
            xp_cash_denom: args.xp_cash_denom,
            avg_enchants_per_tool: args.avg_enchants_per_tool,
            price_mending_single: args.price_mending_single,
            price_mending_multi: args.price_mending_multi,
            price_smite_only: args.price_smite_only,
            price_bane_only: args.price_bane_only,
            price_unb3_only: args.price_unb3_only,
        }
    }
}

impl Cli {
    /// The fully resolved estimator configuration.
    pub fn estimator_config(&self) -> EstimatorConfig {
        self.config.clone().into()
    }
}
