/// Workbook layout and output naming shared across the pipeline.
/// Sheet and column names must match the weekly report workbook exactly.

// Sheets
pub const DAILY_SHEET: &str = "Daily_raw";
pub const DAILY_HEADER_ROW: u32 = 1;
pub const TITLE_SHEET: &str = "Title";
pub const TITLE_HEADER_ROW: u32 = 2;

// Internal field names
pub const FIELD_TITLE_JP: &str = "titleJP";
pub const FIELD_TITLE_KR: &str = "titleKR";
pub const FIELD_CHANNEL_TITLE_JP: &str = "channelTitleJP";
pub const FIELD_CHANNEL: &str = "channel";
pub const FIELD_DATE: &str = "date";
pub const FIELD_SALES: &str = "sales";
pub const FIELD_SERIES_NAME: &str = "seriesName";
pub const FIELD_PLATFORM: &str = "platform";

/// Source header -> field name for the daily sheet
pub const DAILY_COLUMNS: &[(&str, &str)] = &[
    ("Title(JP)", FIELD_TITLE_JP),
    ("Title(KR)", FIELD_TITLE_KR),
    ("Channel Title(JP)", FIELD_CHANNEL_TITLE_JP),
    ("Channel", FIELD_CHANNEL),
    ("Date", FIELD_DATE),
    ("Sales(without tax)", FIELD_SALES),
];

/// Source header -> field name for the title catalog sheet
pub const TITLE_COLUMNS: &[(&str, &str)] = &[
    ("Channel Title(JP)", FIELD_CHANNEL_TITLE_JP),
    ("Title(KR)", FIELD_TITLE_KR),
    ("Title(JP)", FIELD_TITLE_JP),
    ("シリーズ名", FIELD_SERIES_NAME),
    ("PF", FIELD_PLATFORM),
];

// Output documents
pub const DAILY_SALES_FILE: &str = "daily_sales.json";
pub const MONTHLY_SUMMARY_FILE: &str = "monthly_summary.json";
pub const TITLE_SUMMARY_FILE: &str = "title_summary.json";
pub const PLATFORM_SUMMARY_FILE: &str = "platform_summary.json";
pub const TITLE_MASTER_FILE: &str = "title_master.json";

// Defaults
pub const DEFAULT_INPUT_PATH: &str = "data/weekly_report.xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

/// Number of titles kept per platform in `topTitles`
pub const TOP_TITLES_PER_PLATFORM: usize = 10;

/// Built-in channel spellings, canonical name first
pub fn default_channel_aliases() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("piccoma", vec!["piccoma", "Piccoma"]),
        ("cmoa", vec!["cmoa", "CMOA"]),
    ]
}
