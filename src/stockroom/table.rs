//! CSV exchange format.
//!
//! ```text
//! Name,Stock
//! Widget,5
//! "Bolt, M4",120
//! ```
//!
//! Reading is lenient about layout (header case, extra columns, short records) and
//! leaves value validation to the import command, which decides what to skip.

use crate::error::{Result, StockroomError};
use crate::model::Item;
use std::io::{Read, Write};

pub const NAME_HEADER: &str = "Name";
pub const STOCK_HEADER: &str = "Stock";

/// One data record of an input table, before validation.
///
/// A cell is `None` when the column is missing from the header or the record is
/// too short to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source, header included.
    pub line: u64,
    pub name: Option<String>,
    pub stock: Option<String>,
}

impl RawRow {
    pub fn new(line: u64, name: Option<&str>, stock: Option<&str>) -> Self {
        Self {
            line,
            name: name.map(str::to_string),
            stock: stock.map(str::to_string),
        }
    }
}

/// Reads every data record from a CSV source whose first record is the header.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(StockroomError::Csv)?.clone();
    let name_col = find_column(&headers, NAME_HEADER);
    let stock_col = find_column(&headers, STOCK_HEADER);
    tracing::trace!(?name_col, ?stock_col, "resolved csv columns");

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(StockroomError::Csv)?;
        if record.is_empty() {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);
        let cell = |col: Option<usize>| col.and_then(|c| record.get(c));
        rows.push(RawRow::new(line, cell(name_col), cell(stock_col)));
    }
    Ok(rows)
}

/// Writes the `Name,Stock` header followed by one record per item.
pub fn write_rows<W: Write>(writer: W, items: &[Item]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([NAME_HEADER, STOCK_HEADER])
        .map_err(StockroomError::Csv)?;
    for item in items {
        wtr.write_record([item.name.as_str(), item.stock_count.to_string().as_str()])
            .map_err(StockroomError::Csv)?;
    }
    wtr.flush().map_err(StockroomError::Io)?;
    Ok(())
}

fn find_column(headers: &csv::StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|h| {
        h.trim_start_matches('\u{feff}')
            .trim()
            .eq_ignore_ascii_case(wanted)
    })
}
