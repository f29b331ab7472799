use crate::models::EstimatorConfig;
use thiserror::Error;

/// Allowed drift for splits that should add up to 1.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Something about a configuration that is probably not what the user meant.
///
/// These never stop an estimate from being computed; they are reported so a
/// surprising number can be traced back to its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("{name} = {value} is outside [0, 1]")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("Fish rates sum to {0}, not 1")]
    FishRatesDoNotSumToOne(f64),

    #[error("Mending single and multi rates sum to {0}, not 1")]
    MendingSplitDoesNotSumToOne(f64),

    #[error("Mending and sellable book rates sum to {0}; grind books will be negative")]
    NegativeGrindBooks(f64),

    #[error("treasure_types is 0; book and tool figures will be infinite or NaN")]
    ZeroTreasureTypes,

    #[error("xp_cash_denom is 0; every XP-derived yen figure will be infinite or NaN")]
    ZeroXpCashDenominator,
}

/// Check a configuration for inputs the estimator will silently accept.
///
/// Returns an empty list for the defaults.
pub fn diagnose(config: &EstimatorConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for (name, value) in config.rates() {
        // NaN fails `contains` too
        if !(0.0..=1.0).contains(&value) {
            warnings.push(ConfigWarning::RateOutOfRange { name, value });
        }
    }

    let fish_sum = config.fish_rate_sum();
    if (fish_sum - 1.0).abs() > SUM_TOLERANCE {
        warnings.push(ConfigWarning::FishRatesDoNotSumToOne(fish_sum));
    }

    let mending_sum = config.book_mending_single_rate + config.book_mending_multi_rate;
    if (mending_sum - 1.0).abs() > SUM_TOLERANCE {
        warnings.push(ConfigWarning::MendingSplitDoesNotSumToOne(mending_sum));
    }

    let book_sum = config.book_mending_rate + config.sellable_non_mending_rate();
    if book_sum > 1.0 {
        warnings.push(ConfigWarning::NegativeGrindBooks(book_sum));
    }

    if config.treasure_types == 0 {
        warnings.push(ConfigWarning::ZeroTreasureTypes);
    }

    if config.xp_cash_denom == 0.0 {
        warnings.push(ConfigWarning::ZeroXpCashDenominator);
    }

    warnings
}
