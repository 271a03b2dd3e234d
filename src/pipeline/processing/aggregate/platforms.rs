use std::collections::HashSet;

use super::group::OrderedGroups;
use super::monthly_trend;
use crate::constants::TOP_TITLES_PER_PLATFORM;
use crate::types::{PlatformSummary, SalesRecord, TopTitle};

/// One summary per channel, sorted descending by total sales
pub fn platform_summaries(records: &[SalesRecord]) -> Vec<PlatformSummary> {
    let mut groups: OrderedGroups<&str, Vec<&SalesRecord>> = OrderedGroups::new();
    for r in records {
        groups.entry_or_insert_with(r.channel.as_str(), Vec::new).push(r);
    }

    let mut summaries: Vec<PlatformSummary> = groups
        .into_vec()
        .into_iter()
        .map(|(platform, rows)| summarize_platform(platform, &rows))
        .collect();

    summaries.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    summaries
}

fn summarize_platform(platform: &str, rows: &[&SalesRecord]) -> PlatformSummary {
    let title_count = rows
        .iter()
        .map(|r| r.title_jp.as_str())
        .collect::<HashSet<_>>()
        .len();

    // Keyed by the display pair, so one titleJP under two titleKR spellings
    // shows up twice
    let mut top_titles: Vec<TopTitle> = OrderedGroups::sum(
        rows.iter()
            .map(|r| ((r.title_kr.as_str(), r.title_jp.as_str()), r.sales)),
    )
    .into_sorted_desc()
    .into_iter()
    .map(|((title_kr, title_jp), sales)| TopTitle {
        title_kr: title_kr.to_string(),
        title_jp: title_jp.to_string(),
        sales,
    })
    .collect();
    top_titles.truncate(TOP_TITLES_PER_PLATFORM);

    PlatformSummary {
        platform: platform.to_string(),
        total_sales: rows.iter().map(|r| r.sales).sum(),
        title_count,
        monthly_trend: monthly_trend(rows.iter().copied()),
        top_titles,
    }
}
