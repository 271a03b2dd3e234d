use std::collections::{BTreeMap, BTreeSet};

use crate::types::{CatalogEntry, TitleMaster};

/// Deduplicate the catalog by `titleJP`, ordered by `titleJP`.
///
/// Rows without a title are skipped. Display fields come from the first row
/// that has them; platforms are merged across every row of the title.
pub fn title_master(catalog: &[CatalogEntry]) -> Vec<TitleMaster> {
    let mut groups: BTreeMap<&str, Vec<&CatalogEntry>> = BTreeMap::new();
    for entry in catalog {
        if entry.title_jp.trim().is_empty() {
            continue;
        }
        groups.entry(entry.title_jp.as_str()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(title_jp, rows)| TitleMaster {
            title_kr: first_non_blank(rows.iter().map(|r| r.title_kr.as_str())),
            title_jp: title_jp.to_string(),
            series_name: first_non_blank(rows.iter().map(|r| r.series_name.as_str())),
            platforms: rows
                .iter()
                .map(|r| r.platform.as_str())
                .filter(|p| !p.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

fn first_non_blank<'a>(mut values: impl Iterator<Item = &'a str>) -> String {
    values
        .find(|v| !v.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title_jp: &str, title_kr: &str, series_name: &str, platform: &str) -> CatalogEntry {
        CatalogEntry {
            title_jp: title_jp.into(),
            title_kr: title_kr.into(),
            series_name: series_name.into(),
            platform: platform.into(),
        }
    }

    #[test]
    fn test_dedup_merges_platforms() {
        let catalog = vec![
            entry("B", "", "", "piccoma"),
            entry("A", "", "Series A", "piccoma"),
            entry("B", "비", "Series B", "cmoa"),
            entry("B", "비2", "Other", "piccoma"),
            entry("", "orphan", "", "cmoa"),
            entry("A", "에이", "", ""),
        ];

        let master = title_master(&catalog);
        assert_eq!(master.len(), 2);

        assert_eq!(master[0].title_jp, "A");
        assert_eq!(master[0].title_kr, "에이");
        assert_eq!(master[0].series_name, "Series A");
        assert_eq!(master[0].platforms, vec!["piccoma"]);

        assert_eq!(master[1].title_jp, "B");
        assert_eq!(master[1].title_kr, "비");
        assert_eq!(master[1].series_name, "Series B");
        assert_eq!(master[1].platforms, vec!["cmoa", "piccoma"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(title_master(&[]).is_empty());
    }
}
