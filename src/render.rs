//! Plain-text rendering of a configuration and its report.

use crate::models::{EstimatorConfig, IncomeReport};
use anyhow::{Context, Result};
use std::io::Write;

pub const CONFIG_HEADER: &str = "=== Configuration ===";
pub const REPORT_HEADER: &str = "=== Result (yen/hour, books/hour, etc.) ===";

/// Format a number with two decimals and comma thousands separators.
///
/// Non-finite values come out as `inf`, `-inf` and `nan`. The sign of negative
/// zero is kept (`-0.00`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// `name: value` per configuration field, in declaration order.
pub fn render_config(config: &EstimatorConfig) -> Result<String> {
    serde_yaml_ng::to_string(config).context("Failed to serialize configuration")
}

/// `name: value` per report field, values formatted with [`format_amount`].
pub fn render_report(report: &IncomeReport) -> String {
    report
        .entries()
        .iter()
        .map(|(name, value)| format!("{name}: {}\n", format_amount(*value)))
        .collect()
}

/// Write the full program output: configuration section, blank line, result section.
pub fn write_output<W: Write>(
    out: &mut W,
    config: &EstimatorConfig,
    report: &IncomeReport,
) -> Result<()> {
    let config_text = render_config(config)?;

    writeln!(out, "{CONFIG_HEADER}").context("Failed to write output")?;
    out.write_all(config_text.as_bytes())
        .context("Failed to write configuration")?;
    writeln!(out).context("Failed to write output")?;
    writeln!(out, "{REPORT_HEADER}").context("Failed to write output")?;
    out.write_all(render_report(report).as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
