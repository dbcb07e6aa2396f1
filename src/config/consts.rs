// src/config/consts.rs

// Net config
pub const UPSTREAM_ORIGIN: &str = "https://www2.cricketstatz.com";
pub const DEV_PROXY_BASE: &str = "http://localhost:5173";
pub const RELAY_PREFIX: &str = "https://corsproxy.io/?";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("cricket_stats/", env!("CARGO_PKG_VERSION"));

// Catalog
pub const PRIMARY_REPORT_COUNT: usize = 13;

// Seasons
pub const FIRST_SEASON: u16 = 2020;

// Branding
pub const CLUB_NAME: &str = "Dundalk Cricket Club";
pub const LEAGUE_NAME: &str = "Leinster Cricket League";
pub const DATA_SOURCE_NAME: &str = "CricketStatz.com";
pub const DATA_SOURCE_URL: &str = "https://www.cricketstatz.com";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
