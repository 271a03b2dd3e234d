//! Dashboard views over the cleaned sales table
//!
//! Each pass reads the same immutable records and builds one output document;
//! no pass depends on another.

pub mod daily;
pub mod group;
pub mod master;
pub mod monthly;
pub mod platforms;
pub mod titles;

use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::types::{
    CatalogEntry, DailyRecord, MonthlyPoint, MonthlySummary, PlatformSummary, SalesRecord,
    TitleMaster, TitleSummary,
};

pub use daily::daily_records;
pub use master::title_master;
pub use monthly::monthly_summary;
pub use platforms::platform_summaries;
pub use titles::title_summaries;

/// All five output documents of a run
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub daily: Vec<DailyRecord>,
    pub monthly: Vec<MonthlySummary>,
    pub titles: Vec<TitleSummary>,
    pub platforms: Vec<PlatformSummary>,
    pub master: Vec<TitleMaster>,
}

impl DashboardViews {
    #[instrument(skip_all, fields(records = records.len(), catalog = catalog.len()))]
    pub fn build(records: &[SalesRecord], catalog: &[CatalogEntry]) -> Self {
        let views = Self {
            daily: daily_records(records),
            monthly: monthly_summary(records),
            titles: title_summaries(records, catalog),
            platforms: platform_summaries(records),
            master: title_master(catalog),
        };
        info!(
            months = views.monthly.len(),
            titles = views.titles.len(),
            platforms = views.platforms.len(),
            master_titles = views.master.len(),
            "Aggregated dashboard views"
        );
        views
    }
}

/// Per-month sums, ascending by month key
pub fn monthly_trend<'a>(records: impl IntoIterator<Item = &'a SalesRecord>) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        *months.entry(r.month.as_str()).or_default() += r.sales;
    }
    months
        .into_iter()
        .map(|(month, sales)| MonthlyPoint {
            month: month.to_string(),
            sales,
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(title_jp: &str, channel: &str, y: i32, m: u32, d: u32, sales: f64) -> SalesRecord {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        SalesRecord::new(title_jp.into(), String::new(), channel.into(), date, sales)
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("A", "piccoma", 2024, 1, 1, 100.0),
            record("B", "cmoa", 2024, 1, 5, 12.25),
            record("A", "cmoa", 2024, 2, 1, 40.0),
            record("C", "LINE", 2023, 11, 30, 7.5),
            record("B", "piccoma", 2024, 2, 3, 3.0),
        ]
    }

    #[test]
    fn test_views_conserve_total_sales() {
        let records = sample();
        let views = DashboardViews::build(&records, &[]);
        let expected: f64 = records.iter().map(|r| r.sales).sum();

        let monthly: f64 = views.monthly.iter().map(|m| m.total_sales).sum();
        let titles: f64 = views.titles.iter().map(|t| t.total_sales).sum();
        let platforms: f64 = views.platforms.iter().map(|p| p.total_sales).sum();
        let daily: f64 = views.daily.iter().map(|d| d.sales).sum();

        for total in [monthly, titles, platforms, daily] {
            assert!((total - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_daily_avg_times_days_matches_total() {
        let records = sample();
        let views = DashboardViews::build(&records, &[]);
        for title in &views.titles {
            let days = records
                .iter()
                .filter(|r| r.title_jp == title.title_jp)
                .map(|r| r.date_key.as_str())
                .collect::<std::collections::HashSet<_>>()
                .len() as f64;
            assert!((title.daily_avg * days - title.total_sales).abs() <= 0.005 * days);
        }
    }

    #[test]
    fn test_monthly_trend_ascending() {
        let trend = monthly_trend(&sample());
        let months: Vec<_> = trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2024-01", "2024-02"]);
        assert_eq!(trend[1].sales, 112.25);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(75.0), 75.0);
        assert_eq!(round2(6.666), 6.67);
        assert_eq!(round2(0.004), 0.0);
    }
}
