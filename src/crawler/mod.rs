pub mod config;
pub mod fetch;
pub mod marker;
pub mod runner;
pub mod scrape;
pub mod state;


pub use config::{CrawlerConfig, PAGE_REQUEST_TIMEOUT_SEC};
pub use fetch::fetch_page;
pub use marker::MarkerDecoder;
pub use runner::{CrawlOutcome, crawl};
pub use scrape::{extract_links, make_site_url};
pub use state::{CrawlSession, Egg};
