//! Sheet inspection command handlers for the CLI.
//!
//! Results go to stdout as pretty JSON; skipped-row reports go to stderr so
//! the JSON stays pipeable.

use serde::Serialize;
use sheetshop_core::{AppConfig, ItemsResponse};
use sheetshop_sheets::{csv_export_url, SheetClient, SkippedRow};

/// Print the CSV-export URL for `url`.
///
/// # Errors
///
/// Returns an error if `url` is empty.
pub(crate) fn run_csv_url(url: &str) -> anyhow::Result<()> {
    println!("{}", csv_export_url(url)?);
    Ok(())
}

/// Fetch an item sheet and print `{"items": [...]}`.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the sheet cannot be fetched.
pub(crate) async fn run_items(
    config: &AppConfig,
    url: &str,
    show_skipped: bool,
) -> anyhow::Result<()> {
    let mapped = build_client(config)?.fetch_catalog(url).await?;
    tracing::info!(
        items = mapped.records.len(),
        skipped = mapped.skipped.len(),
        "item sheet fetched"
    );
    if show_skipped {
        report_skipped(&mapped.skipped);
    }
    print_json(&ItemsResponse {
        items: mapped.records,
    })
}

/// Fetch the customers sheet and print every accepted profile.
///
/// Profiles are printed in sheet order, duplicates included; the server's
/// cache is what collapses duplicate usernames.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the sheet cannot be fetched.
pub(crate) async fn run_customers(
    config: &AppConfig,
    url: &str,
    show_skipped: bool,
) -> anyhow::Result<()> {
    let mapped = build_client(config)?.fetch_profiles(url).await?;
    tracing::info!(
        profiles = mapped.records.len(),
        skipped = mapped.skipped.len(),
        "customers sheet fetched"
    );
    if show_skipped {
        report_skipped(&mapped.skipped);
    }
    print_json(&mapped.records)
}

fn build_client(config: &AppConfig) -> anyhow::Result<SheetClient> {
    Ok(SheetClient::new(
        config.sheet_request_timeout_secs,
        &config.sheet_user_agent,
    )?)
}

fn report_skipped(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        eprintln!("no rows skipped");
        return;
    }
    eprintln!("{} row(s) skipped:", skipped.len());
    for line in skipped_lines(skipped) {
        eprintln!("  {line}");
    }
}

fn skipped_lines(skipped: &[SkippedRow]) -> Vec<String> {
    skipped
        .iter()
        .map(|s| format!("row {}: {}", s.sheet_row, s.reason))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
