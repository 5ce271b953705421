//! HTTP client for published spreadsheet CSV exports.

use std::time::Duration;

use reqwest::Client;
use sheetshop_core::{CatalogEntry, ShopProfile};

use crate::csv_rows::{parse_csv_rows, SheetRow};
use crate::error::SheetError;
use crate::mapping::{map_catalog_row, map_profile_row, map_rows, MappedRows};
use crate::url::csv_export_url;

/// Fetches spreadsheets as CSV and turns them into header-keyed rows.
///
/// Each call issues exactly one GET; there is no retry. Any transport
/// failure, non-2xx status, or undecodable body fails the whole fetch.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the CSV export of `sheet_url` and parses every data row.
    ///
    /// `sheet_url` may be an edit link; it is rewritten with
    /// [`csv_export_url`] first.
    ///
    /// # Errors
    ///
    /// - [`SheetError::InvalidInput`]: `sheet_url` is empty.
    /// - [`SheetError::Http`]: network or TLS failure, or timeout.
    /// - [`SheetError::UnexpectedStatus`]: any non-2xx response.
    /// - [`SheetError::Decode`]: the body is not UTF-8.
    /// - [`SheetError::Csv`]: the body cannot be read as CSV.
    pub async fn fetch_rows(&self, sheet_url: &str) -> Result<Vec<SheetRow>, SheetError> {
        let url = csv_export_url(sheet_url)?;
        tracing::debug!(%url, "fetching sheet");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let text = String::from_utf8(body.to_vec()).map_err(|source| SheetError::Decode {
            url: url.clone(),
            source,
        })?;

        let rows = parse_csv_rows(&text).map_err(|source| SheetError::Csv {
            url: url.clone(),
            source,
        })?;

        tracing::debug!(%url, rows = rows.len(), "sheet fetched");
        Ok(rows)
    }

    /// Fetches an item sheet and maps it into catalog entries.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_rows`]. Bad rows are skipped,
    /// not reported as errors.
    pub async fn fetch_catalog(
        &self,
        sheet_url: &str,
    ) -> Result<MappedRows<CatalogEntry>, SheetError> {
        let rows = self.fetch_rows(sheet_url).await?;
        Ok(map_rows(&rows, "items", map_catalog_row))
    }

    /// Fetches the customers sheet and maps it into shop profiles.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_rows`].
    pub async fn fetch_profiles(
        &self,
        sheet_url: &str,
    ) -> Result<MappedRows<ShopProfile>, SheetError> {
        let rows = self.fetch_rows(sheet_url).await?;
        Ok(map_rows(&rows, "customers", map_profile_row))
    }
}
