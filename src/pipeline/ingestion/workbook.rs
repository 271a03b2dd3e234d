//! Workbook loading
//!
//! Reads a named sheet into a [`SheetTable`]: the header row is located by its
//! absolute worksheet index, rows above it are ignored, and source headers are
//! renamed to internal field names.

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::SheetConfig;
use crate::error::{DashboardError, Result};

/// A typed spreadsheet cell, detached from the reader backend
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date (days since 1899-12-30, fraction = time of day)
    DateTime(f64),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Text rendering used for string fields. Whole numbers lose their `.0`
    /// so numeric title codes read the same as in the sheet.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) | Cell::DateTime(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    (*n as i64).to_string()
                } else {
                    n.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) if dt.is_duration() => Cell::Number(dt.as_f64()),
            Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            // Formula errors (#N/A, #DIV/0!) carry no value
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

/// Rows of one sheet with columns addressed by internal field name
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub sheet: String,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// Build a table from a worksheet range.
    ///
    /// `header_row` is absolute: a range that starts below it has no header
    /// and therefore no known columns.
    pub fn from_range(
        sheet: &str,
        range: &Range<Data>,
        header_row: u32,
        columns: &[(&str, &str)],
    ) -> Self {
        let mut table = SheetTable {
            sheet: sheet.to_string(),
            ..Default::default()
        };

        let Some((start_row, _)) = range.start() else {
            return table;
        };

        let mut blank_rows = 0usize;
        for (offset, row) in range.rows().enumerate() {
            let absolute = start_row as u64 + offset as u64;
            if absolute < header_row as u64 {
                continue;
            }
            if absolute == header_row as u64 {
                table.columns = map_header(row, columns);
                continue;
            }

            let cells: Vec<Cell> = row.iter().map(Cell::from).collect();
            if cells.iter().all(Cell::is_blank) {
                blank_rows += 1;
                continue;
            }
            table.rows.push(cells);
        }

        debug!(
            sheet,
            rows = table.rows.len(),
            blank_rows,
            columns = ?table.columns.keys().collect::<Vec<_>>(),
            "Parsed sheet"
        );
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    pub fn rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        (0..self.rows.len()).map(move |index| SheetRow { table: self, index })
    }
}

/// Borrowed view of a single table row
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    table: &'a SheetTable,
    index: usize,
}

impl<'a> SheetRow<'a> {
    /// Cell for `field`; missing columns and short rows read as empty
    pub fn get(&self, field: &str) -> &'a Cell {
        self.table
            .columns
            .get(field)
            .and_then(|col| self.table.rows[self.index].get(*col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn text(&self, field: &str) -> String {
        self.get(field).as_text()
    }
}

fn map_header(row: &[Data], columns: &[(&str, &str)]) -> HashMap<String, usize> {
    let mut mapped = HashMap::new();
    for (col, cell) in row.iter().enumerate() {
        let header = Cell::from(cell).as_text();
        let header = header.trim();
        if let Some((_, field)) = columns.iter().find(|(source, _)| *source == header) {
            // First occurrence wins for duplicated headers
            mapped.entry(field.to_string()).or_insert(col);
        }
    }
    mapped
}

/// An open workbook file
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open the workbook at `path`. A missing file is reported as
    /// [`DashboardError::InputNotFound`] before any parsing is attempted.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DashboardError::InputNotFound(path.to_path_buf()));
        }
        let sheets = open_workbook_auto(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read `sheet` and rename its columns per `columns` (source header -> field)
    #[instrument(skip(self, sheet, columns), fields(sheet = %sheet.name, header_row = sheet.header_row))]
    pub fn read_table(&mut self, sheet: &SheetConfig, columns: &[(&str, &str)]) -> Result<SheetTable> {
        let names = self.sheets.sheet_names();
        if !names.iter().any(|n| n == &sheet.name) {
            return Err(DashboardError::MissingSheet {
                sheet: sheet.name.clone(),
                available: names.join(", "),
            });
        }

        let range = self.sheets.worksheet_range(&sheet.name)?;
        let table = SheetTable::from_range(&sheet.name, &range, sheet.header_row, columns);
        info!("{} rows: {}", sheet.name, table.len());
        Ok(table)
    }
}
