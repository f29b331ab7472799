use serde::Serialize;

// Throughput
pub const DEFAULT_CATCHES_PER_HOUR: f64 = 500.0;

// Treasure (Luck of the Sea III: about 11.3%)
pub const DEFAULT_TREASURE_RATE: f64 = 0.113;
pub const DEFAULT_TREASURE_TYPES: u32 = 6;

// Fish category split
pub const DEFAULT_FISH_RATE_COD: f64 = 0.60;
pub const DEFAULT_FISH_RATE_SALMON: f64 = 0.25;
pub const DEFAULT_FISH_RATE_PUFFER: f64 = 0.13;
pub const DEFAULT_FISH_RATE_TROPICAL: f64 = 0.02;

// Fish unit prices
pub const DEFAULT_FISH_PRICE_COD: i64 = 20;
pub const DEFAULT_FISH_PRICE_SALMON: i64 = 80;
pub const DEFAULT_FISH_PRICE_PUFFER: i64 = 180;
pub const DEFAULT_FISH_PRICE_TROPICAL: i64 = 400;

// Mending share of all books (observed 20/530)
pub const DEFAULT_BOOK_MENDING_RATE: f64 = 0.0377;
pub const DEFAULT_BOOK_MENDING_SINGLE_RATE: f64 = 0.409;
pub const DEFAULT_BOOK_MENDING_MULTI_RATE: f64 = 0.591;

// Sellable non-mending books, as a share of all books
pub const DEFAULT_BOOK_SMITE_ONLY_RATE: f64 = 0.0074;
pub const DEFAULT_BOOK_BANE_ONLY_RATE: f64 = 0.0049;
pub const DEFAULT_BOOK_UNB3_ONLY_RATE: f64 = 0.0143;

// XP
pub const DEFAULT_AVG_ENCHANTS_PER_BOOK: f64 = 2.11;
pub const DEFAULT_AVG_XP_PER_ENCHANT: f64 = 25.0;
pub const DEFAULT_AVG_XP_PER_CATCH: f64 = 3.5;
pub const DEFAULT_XP_CASH_NUMER: f64 = 40.0;
pub const DEFAULT_XP_CASH_DENOM: f64 = 12.0;
pub const DEFAULT_AVG_ENCHANTS_PER_TOOL: f64 = 3.0;

// Book sale prices
pub const DEFAULT_PRICE_MENDING_SINGLE: i64 = 220_000;
pub const DEFAULT_PRICE_MENDING_MULTI: i64 = 120_000;
pub const DEFAULT_PRICE_SMITE_ONLY: i64 = 15_000;
pub const DEFAULT_PRICE_BANE_ONLY: i64 = 15_000;
pub const DEFAULT_PRICE_UNB3_ONLY: i64 = 5_000;

/// Input parameters for one income estimate.
///
/// Every field is independent and has a documented default (see the
/// `DEFAULT_*` constants). Nothing here is validated: rates are expected to lie
/// in `[0, 1]` and the fish split and mending split to each sum to about 1, but
/// the estimator computes with whatever it is given. See
/// [`crate::services::diagnose`] for advisory checks.
///
/// Serializes in declaration order, which is also the order the resolved
/// configuration is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorConfig {
    /// Fishing rod casts that land something, per hour.
    pub catches_per_hour: f64,

    /// Probability that a catch is treasure rather than fish.
    pub treasure_rate: f64,

    /// Number of equally likely treasure kinds. One is the enchanted book and
    /// two are enchanted tools (bow and fishing rod).
    pub treasure_types: u32,

    pub fish_rate_cod: f64,
    pub fish_rate_salmon: f64,
    pub fish_rate_puffer: f64,
    pub fish_rate_tropical: f64,

    pub fish_price_cod: i64,
    pub fish_price_salmon: i64,
    pub fish_price_puffer: i64,
    pub fish_price_tropical: i64,

    /// Share of books that carry Mending.
    pub book_mending_rate: f64,
    /// Share of Mending books with Mending as their only enchantment.
    pub book_mending_single_rate: f64,
    /// Share of Mending books with additional enchantments.
    pub book_mending_multi_rate: f64,

    pub book_smite_only_rate: f64,
    pub book_bane_only_rate: f64,
    pub book_unb3_only_rate: f64,

    pub avg_enchants_per_book: f64,
    /// XP returned by a grindstone per removed enchantment.
    pub avg_xp_per_enchant: f64,
    /// XP orbs dropped per catch (1 to 6, so 3.5 on average).
    pub avg_xp_per_catch: f64,

    /// `xp_cash_numer` yen are paid per `xp_cash_denom` XP.
    pub xp_cash_numer: f64,
    pub xp_cash_denom: f64,

    pub avg_enchants_per_tool: f64,

    pub price_mending_single: i64,
    pub price_mending_multi: i64,

    pub price_smite_only: i64,
    pub price_bane_only: i64,
    pub price_unb3_only: i64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            catches_per_hour: DEFAULT_CATCHES_PER_HOUR,
            treasure_rate: DEFAULT_TREASURE_RATE,
            treasure_types: DEFAULT_TREASURE_TYPES,

            fish_rate_cod: DEFAULT_FISH_RATE_COD,
            fish_rate_salmon: DEFAULT_FISH_RATE_SALMON,
            fish_rate_puffer: DEFAULT_FISH_RATE_PUFFER,
            fish_rate_tropical: DEFAULT_FISH_RATE_TROPICAL,

            fish_price_cod: DEFAULT_FISH_PRICE_COD,
            fish_price_salmon: DEFAULT_FISH_PRICE_SALMON,
            fish_price_puffer: DEFAULT_FISH_PRICE_PUFFER,
            fish_price_tropical: DEFAULT_FISH_PRICE_TROPICAL,

            book_mending_rate: DEFAULT_BOOK_MENDING_RATE,
            book_mending_single_rate: DEFAULT_BOOK_MENDING_SINGLE_RATE,
            book_mending_multi_rate: DEFAULT_BOOK_MENDING_MULTI_RATE,

            book_smite_only_rate: DEFAULT_BOOK_SMITE_ONLY_RATE,
            book_bane_only_rate: DEFAULT_BOOK_BANE_ONLY_RATE,
            book_unb3_only_rate: DEFAULT_BOOK_UNB3_ONLY_RATE,

            avg_enchants_per_book: DEFAULT_AVG_ENCHANTS_PER_BOOK,
            avg_xp_per_enchant: DEFAULT_AVG_XP_PER_ENCHANT,
            avg_xp_per_catch: DEFAULT_AVG_XP_PER_CATCH,

            xp_cash_numer: DEFAULT_XP_CASH_NUMER,
            xp_cash_denom: DEFAULT_XP_CASH_DENOM,

            avg_enchants_per_tool: DEFAULT_AVG_ENCHANTS_PER_TOOL,

            price_mending_single: DEFAULT_PRICE_MENDING_SINGLE,
            price_mending_multi: DEFAULT_PRICE_MENDING_MULTI,

            price_smite_only: DEFAULT_PRICE_SMITE_ONLY,
            price_bane_only: DEFAULT_PRICE_BANE_ONLY,
            price_unb3_only: DEFAULT_PRICE_UNB3_ONLY,
        }
    }
}

impl EstimatorConfig {
    /// Yen paid per single XP point.
    pub fn yen_per_xp(&self) -> f64 {
        self.xp_cash_numer / self.xp_cash_denom
    }

    /// Sum of the four fish category rates.
    pub fn fish_rate_sum(&self) -> f64 {
        self.fish_rate_cod + self.fish_rate_salmon + self.fish_rate_puffer + self.fish_rate_tropical
    }

    /// Share of books sold as-is without Mending (smite, bane and unbreaking III only).
    pub fn sellable_non_mending_rate(&self) -> f64 {
        self.book_smite_only_rate + self.book_bane_only_rate + self.book_unb3_only_rate
    }

    /// Every probability field with its name, in declaration order.
    pub fn rates(&self) -> [(&'static str, f64); 11] {
        [
            ("treasure_rate", self.treasure_rate),
            ("fish_rate_cod", self.fish_rate_cod),
            ("fish_rate_salmon", self.fish_rate_salmon),
            ("fish_rate_puffer", self.fish_rate_puffer),
            ("fish_rate_tropical", self.fish_rate_tropical),
            ("book_mending_rate", self.book_mending_rate),
            ("book_mending_single_rate", self.book_mending_single_rate),
            ("book_mending_multi_rate", self.book_mending_multi_rate),
            ("book_smite_only_rate", self.book_smite_only_rate),
            ("book_bane_only_rate", self.book_bane_only_rate),
            ("book_unb3_only_rate", self.book_unb3_only_rate),
        ]
    }
}
