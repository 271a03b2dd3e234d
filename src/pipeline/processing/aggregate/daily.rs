use crate::types::{DailyRecord, SalesRecord};

/// One output row per cleaned record, in input order
pub fn daily_records(records: &[SalesRecord]) -> Vec<DailyRecord> {
    records
        .iter()
        .map(|r| DailyRecord {
            title_kr: r.title_kr.clone(),
            title_jp: r.title_jp.clone(),
            channel: r.channel.clone(),
            date: r.date_key.clone(),
            sales: r.sales,
        })
        .collect()
}
