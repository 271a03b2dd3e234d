//! Row cleaning for the daily and catalog sheets
//!
//! Daily rows become [`SalesRecord`]s only when their date parses and their
//! sales coerce to a strictly positive number. Everything else is counted in
//! the [`NormalizeReport`] and dropped.

pub mod channel;
pub mod dates;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::constants::{
    FIELD_CHANNEL, FIELD_DATE, FIELD_PLATFORM, FIELD_SALES, FIELD_SERIES_NAME, FIELD_TITLE_JP,
    FIELD_TITLE_KR,
};
use crate::pipeline::ingestion::{Cell, SheetTable};
use crate::types::{CatalogEntry, SalesRecord};

pub use channel::ChannelNormalizer;
pub use dates::parse_date;

/// Row counts from one normalization pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeReport {
    pub total_rows: usize,
    pub invalid_dates: usize,
    pub non_positive_sales: usize,
    pub kept_rows: usize,
}

/// Coerce a sales cell to a number; anything non-numeric becomes zero
pub fn coerce_sales(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        // Booleans and dates are not sales figures
        Cell::Empty | Cell::Bool(_) | Cell::DateTime(_) => 0.0,
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clean the daily sheet into sales records, preserving row order
#[instrument(skip_all, fields(sheet = %table.sheet))]
pub fn normalize_sales(
    table: &SheetTable,
    channels: &ChannelNormalizer,
) -> (Vec<SalesRecord>, NormalizeReport) {
    let mut report = NormalizeReport {
        total_rows: table.len(),
        ..Default::default()
    };

    // Date validity is checked over every row before the sales filter so the
    // two drop counts never overlap.
    let dated: Vec<_> = table
        .rows()
        .filter_map(|row| match parse_date(row.get(FIELD_DATE)) {
            Some(date) => Some((row, date)),
            None => {
                report.invalid_dates += 1;
                None
            }
        })
        .collect();

    if report.invalid_dates > 0 {
        warn!("Dropped {} rows with invalid dates", report.invalid_dates);
    }

    let mut records = Vec::with_capacity(dated.len());
    for (row, date) in dated {
        let sales = coerce_sales(row.get(FIELD_SALES));
        if sales <= 0.0 {
            report.non_positive_sales += 1;
            continue;
        }
        records.push(SalesRecord::new(
            row.text(FIELD_TITLE_JP),
            row.text(FIELD_TITLE_KR),
            channels.normalize(&row.text(FIELD_CHANNEL)),
            date,
            sales,
        ));
    }

    report.kept_rows = records.len();
    info!(
        "Rows with sales > 0: {} ({} dropped as zero/negative/non-numeric)",
        report.kept_rows, report.non_positive_sales
    );
    (records, report)
}

/// Read catalog rows, normalizing the optional platform column
#[instrument(skip_all, fields(sheet = %table.sheet))]
pub fn catalog_entries(table: &SheetTable, channels: &ChannelNormalizer) -> Vec<CatalogEntry> {
    if !table.has_column(FIELD_PLATFORM) {
        info!("Catalog sheet has no platform column");
    }
    table
        .rows()
        .map(|row| CatalogEntry {
            title_jp: row.text(FIELD_TITLE_JP),
            title_kr: row.text(FIELD_TITLE_KR),
            series_name: row.text(FIELD_SERIES_NAME),
            platform: channels.normalize(&row.text(FIELD_PLATFORM)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use calamine::{Data, Range};
    use chrono::NaiveDate;

    fn daily_table(rows: &[[Data; 4]]) -> SheetTable {
        let mut range = Range::new((0, 0), (rows.len() as u32, 3));
        for (c, header) in ["Title(JP)", "Channel", "Date", "Sales(without tax)"]
            .iter()
            .enumerate()
        {
            range.set_value((0, c as u32), Data::String(header.to_string()));
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32 + 1, c as u32), value.clone());
            }
        }
        SheetTable::from_range("Daily_raw", &range, 0, crate::constants::DAILY_COLUMNS)
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_coerce_sales() {
        assert_eq!(coerce_sales(&Cell::Number(12.5)), 12.5);
        assert_eq!(coerce_sales(&Cell::Text(" 300 ".into())), 300.0);
        assert_eq!(coerce_sales(&Cell::Text("1,000".into())), 0.0);
        assert_eq!(coerce_sales(&Cell::Text("NaN".into())), 0.0);
        assert_eq!(coerce_sales(&Cell::Number(f64::INFINITY)), 0.0);
        assert_eq!(coerce_sales(&Cell::Empty), 0.0);
    }

    #[test]
    fn test_rows_filtered_and_counted() {
        let table = daily_table(&[
            [text("A"), text("Piccoma"), text("2024-01-01"), Data::Float(100.0)],
            [text("A"), text("piccoma"), text("not a date"), Data::Float(10.0)],
            [text("B"), text("CMOA"), text("2024-01-03"), Data::Float(0.0)],
            [text("B"), text("CMOA"), text("2024-01-03"), Data::Float(-5.0)],
            [text("B"), text("CMOA"), text("2024-01-04"), text("abc")],
            [text("C"), text(" LINE "), text("2024-02-10"), text("25.5")],
        ]);
        let channels = ChannelNormalizer::from_aliases(&Config::default().channel_aliases);

        let (records, report) = normalize_sales(&table, &channels);

        assert_eq!(
            report,
            NormalizeReport {
                total_rows: 6,
                invalid_dates: 1,
                non_positive_sales: 3,
                kept_rows: 2,
            }
        );
        assert_eq!(records[0].channel, "piccoma");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(records[0].date_key, "2024-01-01");
        assert_eq!(records[0].month, "2024-01");
        assert_eq!(records[0].title_kr, "");
        assert_eq!(records[1].channel, "LINE");
        assert_eq!(records[1].sales, 25.5);
    }

    #[test]
    fn test_catalog_without_platform_column() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), text("Title(JP)"));
        range.set_value((0, 1), text("シリーズ名"));
        range.set_value((1, 0), text("A"));
        range.set_value((1, 1), text("Series A"));
        let table = SheetTable::from_range("Title", &range, 0, crate::constants::TITLE_COLUMNS);

        let entries = catalog_entries(&table, &ChannelNormalizer::default());
        assert_eq!(
            entries,
            vec![CatalogEntry {
                title_jp: "A".into(),
                title_kr: String::new(),
                series_name: "Series A".into(),
                platform: String::new(),
            }]
        );
    }
}
