//! Integration tests for the command-line surface
//!
//! These tests verify:
//! - Every configuration field has a flag with the documented default
//! - Flag values flow through to the estimate
//! - Malformed values are rejected at parse time
//! - The full printed output for a run

use clap::Parser;
use clap::error::ErrorKind;
use fishincome::render::{CONFIG_HEADER, REPORT_HEADER, write_output};
use fishincome::{Cli, EstimatorConfig, compute, diagnose};

fn run(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let config = cli.estimator_config();
    let report = compute(&config);

    let mut out = Vec::new();
    write_output(&mut out, &config, &report).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_every_field_is_settable() {
    let cli = Cli::try_parse_from([
        "fishincome",
        "--catches-per-hour",
        "600",
        "--treasure-rate",
        "0.1",
        "--treasure-types",
        "5",
        "--fish-rate-cod",
        "0.5",
        "--fish-rate-salmon",
        "0.3",
        "--fish-rate-puffer",
        "0.15",
        "--fish-rate-tropical",
        "0.05",
        "--fish-price-cod",
        "10",
        "--fish-price-salmon",
        "20",
        "--fish-price-puffer",
        "30",
        "--fish-price-tropical",
        "40",
        "--book-mending-rate",
        "0.04",
        "--book-mending-single-rate",
        "0.5",
        "--book-mending-multi-rate",
        "0.5",
        "--book-smite-only-rate",
        "0.01",
        "--book-bane-only-rate",
        "0.02",
        "--book-unb3-only-rate",
        "0.03",
        "--avg-enchants-per-book",
        "2",
        "--avg-xp-per-enchant",
        "20",
        "--avg-xp-per-catch",
        "4",
        "--xp-cash-numer",
        "50",
        "--xp-cash-denom",
        "10",
        "--avg-enchants-per-tool",
        "2.5",
        "--price-mending-single",
        "200000",
        "--price-mending-multi",
        "100000",
        "--price-smite-only",
        "1000",
        "--price-bane-only",
        "2000",
        "--price-unb3-only",
        "3000",
    ])
    .unwrap();

    let expected = EstimatorConfig {
        catches_per_hour: 600.0,
        treasure_rate: 0.1,
        treasure_types: 5,
        fish_rate_cod: 0.5,
        fish_rate_salmon: 0.3,
        fish_rate_puffer: 0.15,
        fish_rate_tropical: 0.05,
        fish_price_cod: 10,
        fish_price_salmon: 20,
        fish_price_puffer: 30,
        fish_price_tropical: 40,
        book_mending_rate: 0.04,
        book_mending_single_rate: 0.5,
        book_mending_multi_rate: 0.5,
        book_smite_only_rate: 0.01,
        book_bane_only_rate: 0.02,
        book_unb3_only_rate: 0.03,
        avg_enchants_per_book: 2.0,
        avg_xp_per_enchant: 20.0,
        avg_xp_per_catch: 4.0,
        xp_cash_numer: 50.0,
        xp_cash_denom: 10.0,
        avg_enchants_per_tool: 2.5,
        price_mending_single: 200_000,
        price_mending_multi: 100_000,
        price_smite_only: 1_000,
        price_bane_only: 2_000,
        price_unb3_only: 3_000,
    };

    assert_eq!(cli.estimator_config(), expected);
}

#[test]
fn test_equals_syntax_and_debug_flag() {
    let cli = Cli::try_parse_from(["fishincome", "--catches-per-hour=750", "--debug"]).unwrap();
    assert_eq!(cli.config.catches_per_hour, 750.0);
    assert!(cli.debug);
}

#[test]
fn test_non_numeric_value_rejected() {
    let err = Cli::try_parse_from(["fishincome", "--treasure-rate", "lots"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(err.to_string().contains("--treasure-rate"));
}

#[test]
fn test_negative_treasure_types_rejected() {
    assert!(Cli::try_parse_from(["fishincome", "--treasure-types", "-1"]).is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    let err = Cli::try_parse_from(["fishincome", "--junk-rate", "0.5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_default_run_output() {
    let output = run(&["fishincome"]);
    let lines: Vec<&str> = output.lines().collect();

    // Header, 28 config lines, blank, header, 24 result lines
    assert_eq!(lines.len(), 1 + 28 + 1 + 1 + 24);
    assert_eq!(lines[0], CONFIG_HEADER);
    assert_eq!(lines[1], "catches_per_hour: 500.0");
    assert_eq!(lines[29], "");
    assert_eq!(lines[30], REPORT_HEADER);
    assert_eq!(lines[31], "treasures_per_hour: 56.50");
    assert!(lines.contains(&"revenue_fish: 28,117.90"));
    assert!(lines.contains(&"yen_from_fishing: 5,833.33"));
    assert!(lines.contains(&"total_yen_per_hour: 99,740.37"));
}

#[test]
fn test_zero_divisor_run_prints_non_finite() {
    let output = run(&["fishincome", "--xp-cash-denom", "0"]);
    assert!(output.contains("xp_cash_denom: 0.0\n"));
    assert!(output.contains("yen_per_xp: inf\n"));
    assert!(output.contains("total_yen_per_hour: inf\n"));
}

#[test]
fn test_suspicious_flags_warn_but_still_compute() {
    let cli = Cli::try_parse_from(["fishincome", "--book-mending-rate", "1.2"]).unwrap();
    let config = cli.estimator_config();

    assert_eq!(diagnose(&config).len(), 2);
    assert!(compute(&config).grind_books < 0.0);
}
