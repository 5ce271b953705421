//! Rewrites spreadsheet share/edit links into direct CSV-export links.

use crate::error::SheetError;

/// Present in links that already point at the CSV export endpoint.
const CSV_EXPORT_MARKER: &str = "export?format=csv";

/// Path segment of the browser editing view.
const EDIT_MARKER: &str = "/edit";

/// Tab used when an edit link carries no `gid=` parameter.
const DEFAULT_GID: &str = "0";

/// Converts a spreadsheet link into the URL of its CSV export.
///
/// - Links that already contain `export?format=csv` are returned unchanged.
/// - Edit links (`.../d/<id>/edit?gid=42`) become
///   `.../d/<id>/export?format=csv&gid=42`; the tab id defaults to `0`.
/// - Anything else gets `/export?format=csv` appended after trailing slashes
///   are stripped, with no tab id.
///
/// No network access happens here.
///
/// # Errors
///
/// Returns [`SheetError::InvalidInput`] if `sheet_url` is empty.
pub fn csv_export_url(sheet_url: &str) -> Result<String, SheetError> {
    if sheet_url.is_empty() {
        return Err(SheetError::InvalidInput("sheet URL is empty".to_owned()));
    }

    if sheet_url.contains(CSV_EXPORT_MARKER) {
        return Ok(sheet_url.to_owned());
    }

    if let Some((base, tail)) = sheet_url.split_once(EDIT_MARKER) {
        let gid = extract_gid(tail).unwrap_or(DEFAULT_GID);
        return Ok(format!("{base}/export?format=csv&gid={gid}"));
    }

    Ok(format!(
        "{}/export?format=csv",
        sheet_url.trim_end_matches('/')
    ))
}

/// Returns the value of the first `gid=` parameter in `tail`, running up to
/// the next `&`, `#`, or the end of the string.
///
/// Stopping at `#` keeps a fragment out of the query; the fragment is never
/// sent to the server anyway. An empty `gid=` is treated as absent.
fn extract_gid(tail: &str) -> Option<&str> {
    let (_, after) = tail.split_once("gid=")?;
    let end = after.find(['&', '#']).unwrap_or(after.len());
    Some(&after[..end]).filter(|gid| !gid.is_empty())
}
