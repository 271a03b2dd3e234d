use std::collections::BTreeMap;

use crate::types::{MonthlySummary, SalesRecord};

/// Per-month totals with a per-platform breakdown, ascending by month
pub fn monthly_summary(records: &[SalesRecord]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<&str, (f64, BTreeMap<&str, f64>)> = BTreeMap::new();
    for r in records {
        let (total, platforms) = months.entry(r.month.as_str()).or_default();
        *total += r.sales;
        *platforms.entry(r.channel.as_str()).or_default() += r.sales;
    }

    months
        .into_iter()
        .map(|(month, (total, platforms))| MonthlySummary {
            month: month.to_string(),
            total_sales: total,
            platforms: platforms
                .into_iter()
                .filter(|(_, sales)| *sales > 0.0)
                .map(|(name, sales)| (name.to_string(), sales))
                .collect(),
        })
        .collect()
}
