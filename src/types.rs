use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cleaned sales row: valid date, strictly positive sales
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub title_jp: String,
    pub title_kr: String,
    pub channel: String,
    pub date: NaiveDate,
    pub sales: f64,
    /// `YYYY-MM-DD`
    pub date_key: String,
    /// `YYYY-MM`
    pub month: String,
}

impl SalesRecord {
    pub fn new(title_jp: String, title_kr: String, channel: String, date: NaiveDate, sales: f64) -> Self {
        Self {
            title_jp,
            title_kr,
            channel,
            date,
            sales,
            date_key: date.format("%Y-%m-%d").to_string(),
            month: date.format("%Y-%m").to_string(),
        }
    }
}

/// One row of the title catalog sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    pub title_jp: String,
    pub title_kr: String,
    pub series_name: String,
    /// Normalized platform; empty when the sheet has no platform column
    pub platform: String,
}

/// `daily_sales.json` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(rename = "titleKR")]
    pub title_kr: String,
    #[serde(rename = "titleJP")]
    pub title_jp: String,
    pub channel: String,
    pub date: String,
    pub sales: f64,
}

/// `monthly_summary.json` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub total_sales: f64,
    pub platforms: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformSales {
    pub name: String,
    pub sales: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub sales: f64,
}

/// `title_summary.json` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    #[serde(rename = "titleKR")]
    pub title_kr: String,
    #[serde(rename = "titleJP")]
    pub title_jp: String,
    pub series_name: String,
    pub total_sales: f64,
    pub platforms: Vec<PlatformSales>,
    pub daily_avg: f64,
    pub peak_date: String,
    pub peak_sales: f64,
    pub first_date: String,
    pub last_date: String,
    pub monthly_trend: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopTitle {
    #[serde(rename = "titleKR")]
    pub title_kr: String,
    #[serde(rename = "titleJP")]
    pub title_jp: String,
    pub sales: f64,
}

/// `platform_summary.json` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: String,
    pub total_sales: f64,
    pub title_count: usize,
    pub monthly_trend: Vec<MonthlyPoint>,
    pub top_titles: Vec<TopTitle>,
}

/// `title_master.json` element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TitleMaster {
    #[serde(rename = "titleKR")]
    pub title_kr: String,
    #[serde(rename = "titleJP")]
    pub title_jp: String,
    pub series_name: String,
    pub platforms: Vec<String>,
}
