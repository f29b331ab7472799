use crate::models::{EstimatorConfig, IncomeReport};

/// Treasure kinds that are enchanted tools (bow and fishing rod).
pub const TOOL_TREASURE_KINDS: f64 = 2.0;

/// Estimate hourly yield for the given parameters.
///
/// Single pass, no validation. A zero `treasure_types` or `xp_cash_denom`
/// produces infinite or NaN fields rather than an error, and `grind_books`
/// goes negative when the book rates overshoot 1.
pub fn compute(config: &EstimatorConfig) -> IncomeReport {
    let yen_per_xp = config.yen_per_xp();
    let treasure_types = f64::from(config.treasure_types);

    let treasures_per_hour = config.catches_per_hour * config.treasure_rate;
    let books_per_hour = treasures_per_hour / treasure_types;

    // Mending books sell directly
    let mending_books_per_hour = books_per_hour * config.book_mending_rate;
    let mending_single_books = mending_books_per_hour * config.book_mending_single_rate;
    let mending_multi_books = mending_books_per_hour * config.book_mending_multi_rate;
    let revenue_mending = mending_single_books * config.price_mending_single as f64
        + mending_multi_books * config.price_mending_multi as f64;

    // So do single-enchant smite / bane / unbreaking III books
    let sellable_non_mending_books = books_per_hour * config.sellable_non_mending_rate();
    let revenue_non_mending =
        books_per_hour * config.book_smite_only_rate * config.price_smite_only as f64
            + books_per_hour * config.book_bane_only_rate * config.price_bane_only as f64
            + books_per_hour * config.book_unb3_only_rate * config.price_unb3_only as f64;

    // Everything else goes to the grindstone
    let grind_books = books_per_hour - mending_books_per_hour - sellable_non_mending_books;
    let xp_from_books = grind_books * config.avg_enchants_per_book * config.avg_xp_per_enchant;
    let yen_from_books = xp_from_books * yen_per_xp;

    let tools_per_hour = treasures_per_hour * (TOOL_TREASURE_KINDS / treasure_types);
    let xp_from_tools = tools_per_hour * config.avg_enchants_per_tool * config.avg_xp_per_enchant;
    let yen_from_tools = xp_from_tools * yen_per_xp;

    let xp_from_fishing = config.catches_per_hour * config.avg_xp_per_catch;
    let yen_from_fishing = xp_from_fishing * yen_per_xp;

    let fish_per_hour = config.catches_per_hour * (1.0 - config.treasure_rate);
    let cod = fish_per_hour * config.fish_rate_cod;
    let salmon = fish_per_hour * config.fish_rate_salmon;
    let puffer = fish_per_hour * config.fish_rate_puffer;
    let tropical = fish_per_hour * config.fish_rate_tropical;
    let revenue_fish = cod * config.fish_price_cod as f64
        + salmon * config.fish_price_salmon as f64
        + puffer * config.fish_price_puffer as f64
        + tropical * config.fish_price_tropical as f64;

    let total_yen_per_hour = revenue_fish
        + yen_from_fishing
        + revenue_mending
        + revenue_non_mending
        + yen_from_books
        + yen_from_tools;

    tracing::debug!(
        treasures_per_hour,
        books_per_hour,
        grind_books,
        total_yen_per_hour,
        "Income estimate computed"
    );

    IncomeReport {
        treasures_per_hour,
        books_per_hour,
        mending_books_per_hour,
        mending_single_books,
        mending_multi_books,
        sellable_non_mending_books,
        grind_books,
        tools_per_hour,
        fish_per_hour,
        cod,
        salmon,
        puffer,
        tropical,
        revenue_fish,
        yen_from_fishing,
        revenue_mending,
        revenue_non_mending,
        yen_from_books,
        yen_from_tools,
        total_yen_per_hour,
        yen_per_xp,
        xp_from_fishing,
        xp_from_books,
        xp_from_tools,
    }
}
