// Pipeline ingestion: workbook loading and sheet-to-table conversion

pub mod workbook;

// Re-export key types for external use
pub use workbook::{Cell, SheetRow, SheetTable, Workbook};
