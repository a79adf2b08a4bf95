// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://www.pzsana.net/pzsana/alltime1.php";
pub const USER_AGENT: &str = concat!("pzs_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Fixed part of the report query; the per-source slots are set on top of it.
pub const QUERY_TEMPLATE: &str = "klub=&samo_en=ON&fina=2019&od=1990-1-1&do=2018-11-7&zaprto=ON";

// Query slots
pub const Q_RESULTS: &str = "stevilo";
pub const Q_GENDER: &str = "spol";
pub const Q_COURSE: &str = "disc";
pub const Q_POOL: &str = "bazen";

// Defaults
pub const DEFAULT_RESULTS: u32 = 500;

// Export
pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_FILE: &str = "data.json";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
