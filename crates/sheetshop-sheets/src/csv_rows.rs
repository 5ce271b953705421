//! Header-keyed rows parsed from a CSV export.

/// One data row of a sheet, keyed by the header row.
///
/// Cells keep the column order of the sheet. Rows shorter than the header
/// simply lack the trailing columns; cells past the last header are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: Vec<(String, String)>,
}

impl SheetRow {
    /// Raw cell value for `column`, or `None` if the row has no such cell.
    ///
    /// When a header name repeats, the right-most column wins.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates `(header, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<H, V> FromIterator<(H, V)> for SheetRow
where
    H: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }
}

/// Parses CSV text, using the first record as the header row.
///
/// Header names are trimmed; cell values are kept raw. Blank lines are
/// skipped and a leading UTF-8 byte-order mark is ignored.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if a record cannot be read.
pub fn parse_csv_rows(text: &str) -> Result<Vec<SheetRow>, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), v.to_owned()))
                .collect(),
        );
    }
    Ok(rows)
}
