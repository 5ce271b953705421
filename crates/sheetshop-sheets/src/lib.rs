pub mod client;
pub mod coerce;
pub mod csv_rows;
pub mod error;
pub mod mapping;
pub mod url;

pub use client::SheetClient;
pub use coerce::CoerceError;
pub use csv_rows::{parse_csv_rows, SheetRow};
pub use error::SheetError;
pub use mapping::{map_catalog_row, map_profile_row, map_rows, MappedRows, RowSkip, SkippedRow};
pub use url::csv_export_url;
