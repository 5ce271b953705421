//! Row-to-record mapping for catalog and profile sheets.
//!
//! Every mapper returns `Ok(record)` or a [`RowSkip`] explaining why the row
//! was dropped. A skipped row never aborts the batch.

use sheetshop_core::{CatalogEntry, ShopProfile};
use thiserror::Error;

use crate::coerce::{parse_bool, parse_float, parse_int, parse_tags, text, CoerceError};
use crate::csv_rows::SheetRow;

/// Why a single sheet row was left out of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowSkip {
    #[error("required column {0} is empty")]
    Missing(&'static str),

    #[error("column {column} has invalid value \"{value}\"")]
    Invalid { column: &'static str, value: String },
}

/// A dropped row and the reason for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Spreadsheet row number, counting the header as row 1.
    pub sheet_row: usize,
    pub reason: RowSkip,
}

/// Result of mapping a whole sheet: accepted records in source order plus
/// every skipped row.
#[derive(Debug, Clone)]
pub struct MappedRows<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

/// Applies `mapper` to each row, keeping successes in order and collecting
/// skip reasons. `kind` only labels the log lines.
pub fn map_rows<T, F>(rows: &[SheetRow], kind: &str, mapper: F) -> MappedRows<T>
where
    F: Fn(&SheetRow) -> Result<T, RowSkip>,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match mapper(row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                let sheet_row = idx + 2;
                tracing::debug!(kind, sheet_row, %reason, "skipping sheet row");
                skipped.push(SkippedRow { sheet_row, reason });
            }
        }
    }

    if skipped.is_empty() {
        tracing::info!(kind, accepted = records.len(), "mapped sheet rows");
    } else {
        tracing::warn!(
            kind,
            accepted = records.len(),
            skipped = skipped.len(),
            "mapped sheet rows with skips"
        );
    }

    MappedRows { records, skipped }
}

/// Maps one item-sheet row into a [`CatalogEntry`].
///
/// `Name`, `Category` and `Rate` must be non-empty. Optional numeric columns
/// default to zero, media columns to an empty string.
///
/// # Errors
///
/// - [`RowSkip::Missing`] when a required column is empty or absent.
/// - [`RowSkip::Invalid`] when any numeric column fails to parse.
pub fn map_catalog_row(row: &SheetRow) -> Result<CatalogEntry, RowSkip> {
    let name = required(row, "Name")?;
    let category = required(row, "Category")?;
    let rate = required(row, "Rate")?;

    Ok(CatalogEntry {
        id: coerced("id", parse_int(row.get("id"), 0))?,
        name,
        rate: coerced("Rate", parse_float(Some(rate.as_str()), 0.0))?,
        discount: coerced("Discount", parse_float(row.get("Discount"), 0.0))?,
        combo_quantity: coerced("combo_quantity", parse_int(row.get("combo_quantity"), 0))?,
        combo_discount: coerced("combo_discount", parse_float(row.get("combo_discount"), 0.0))?,
        category,
        in_stock: parse_bool(row.get("Stock")),
        tags: parse_tags(row.get("tags")),
        image1: text(row.get("image1")),
        image2: text(row.get("image2")),
        video: text(row.get("video")),
    })
}

/// Maps one customers-sheet row into a [`ShopProfile`].
///
/// `BusinessName`, `ShopUsername` and `SheetLink` must be non-empty.
///
/// # Errors
///
/// - [`RowSkip::Missing`] when a required column is empty or absent.
/// - [`RowSkip::Invalid`] when `ConvenienceFee` is not a number.
pub fn map_profile_row(row: &SheetRow) -> Result<ShopProfile, RowSkip> {
    let business_name = required(row, "BusinessName")?;
    let shop_username = required(row, "ShopUsername")?;
    let sheet_link = required(row, "SheetLink")?;

    Ok(ShopProfile {
        business_name,
        business_type: text(row.get("BusinessType")),
        address: text(row.get("Address")),
        mobile_no: text(row.get("MobileNo")),
        pincode: text(row.get("Pincode")),
        map_location: text(row.get("MapLocation")),
        shop_username,
        convenience_fee: coerced("ConvenienceFee", parse_float(row.get("ConvenienceFee"), 0.0))?,
        description: text(row.get("Description")),
        sheet_link,
        subscription_date: text(row.get("SubscriptionDate")),
    })
}

fn required(row: &SheetRow, column: &'static str) -> Result<String, RowSkip> {
    let value = text(row.get(column));
    if value.is_empty() {
        return Err(RowSkip::Missing(column));
    }
    Ok(value)
}

fn coerced<T>(column: &'static str, result: Result<T, CoerceError>) -> Result<T, RowSkip> {
    result.map_err(|e| RowSkip::Invalid {
        column,
        value: e.value,
    })
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
