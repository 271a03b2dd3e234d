use std::collections::{BTreeMap, HashMap};

use super::group::OrderedGroups;
use super::{monthly_trend, round2};
use crate::types::{CatalogEntry, PlatformSales, SalesRecord, TitleSummary};

/// One summary per distinct `titleJP`, sorted descending by total sales.
///
/// Equal totals keep the order in which titles first appear in `records`.
pub fn title_summaries(records: &[SalesRecord], catalog: &[CatalogEntry]) -> Vec<TitleSummary> {
    // First catalog row per title decides the series name
    let mut series: HashMap<&str, &str> = HashMap::new();
    for entry in catalog {
        series
            .entry(entry.title_jp.as_str())
            .or_insert(entry.series_name.as_str());
    }

    let mut groups: OrderedGroups<&str, Vec<&SalesRecord>> = OrderedGroups::new();
    for r in records {
        groups.entry_or_insert_with(r.title_jp.as_str(), Vec::new).push(r);
    }

    let mut summaries: Vec<TitleSummary> = groups
        .into_vec()
        .into_iter()
        .map(|(title_jp, rows)| summarize_title(title_jp, &rows, &series))
        .collect();

    summaries.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    summaries
}

fn summarize_title(title_jp: &str, rows: &[&SalesRecord], series: &HashMap<&str, &str>) -> TitleSummary {
    let title_kr = rows
        .iter()
        .map(|r| r.title_kr.as_str())
        .find(|kr| !kr.trim().is_empty())
        .unwrap_or_default()
        .to_string();

    let total_sales: f64 = rows.iter().map(|r| r.sales).sum();

    let platforms = OrderedGroups::sum(rows.iter().map(|r| (r.channel.as_str(), r.sales)))
        .into_sorted_desc()
        .into_iter()
        .filter(|(_, sales)| *sales > 0.0)
        .map(|(name, sales)| PlatformSales {
            name: name.to_string(),
            sales,
        })
        .collect();

    let mut per_day: BTreeMap<&str, f64> = BTreeMap::new();
    for r in rows {
        *per_day.entry(r.date_key.as_str()).or_default() += r.sales;
    }

    let daily_avg = if per_day.is_empty() {
        0.0
    } else {
        round2(total_sales / per_day.len() as f64)
    };

    // Ascending walk with a strict comparison: ties resolve to the earliest date
    let mut peak: Option<(&str, f64)> = None;
    for (&day, &sales) in &per_day {
        if peak.map_or(true, |(_, best)| sales > best) {
            peak = Some((day, sales));
        }
    }
    let (peak_date, peak_sales) = peak.unwrap_or(("", 0.0));

    let first_date = per_day.keys().next().copied().unwrap_or_default();
    let last_date = per_day.keys().next_back().copied().unwrap_or_default();

    TitleSummary {
        title_kr,
        title_jp: title_jp.to_string(),
        series_name: series.get(title_jp).copied().unwrap_or_default().to_string(),
        total_sales,
        platforms,
        daily_avg,
        peak_date: peak_date.to_string(),
        peak_sales,
        first_date: first_date.to_string(),
        last_date: last_date.to_string(),
        monthly_trend: monthly_trend(rows.iter().copied()),
    }
}
