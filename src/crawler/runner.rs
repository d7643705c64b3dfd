use anyhow::Result;
use log2::*;
use reqwest::Client;

use super::config::CrawlerConfig;
use super::fetch::fetch_page;
use super::marker::MarkerDecoder;
use super::scrape::extract_links;
use super::state::{CrawlSession, Egg};

/// Why a crawl stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The configured number of eggs was found.
    QuotaMet,
    /// The worklist ran dry first; the session holds whatever was found.
    Exhausted,
}

/// Crawl pages reachable from the seed until the egg quota is met or no
/// discovered pages remain.
///
/// Pages are processed one at a time in discovery order, each to completion
/// (fetch, marker scan, link extraction) before the next pop. A page that
/// fails to load is skipped and never retried. Once the quota is reached the
/// crawl returns without extracting links from the final page.
pub async fn crawl(session: &mut CrawlSession, config: &CrawlerConfig) -> Result<CrawlOutcome> {
    let client = Client::new();
    let decoder = MarkerDecoder::new(&config.marker_segment)?;

    while let Some(url) = session.next_url() {
        info!("Processing {}", url);

        let page = fetch_page(&client, &url, config.request_timeout_sec).await;
        if page.is_empty() {
            info!("Skipping {} ...", url);
            continue;
        }

        if let Some(letter) = decoder.find_marker(&page) {
            session.eggs.push(Egg { letter, url: url.clone() });
        }

        if session.eggs.len() >= config.egg_target {
            return Ok(CrawlOutcome::QuotaMet);
        }

        let links = extract_links(
            &page,
            &config.link_prefix,
            &config.host_prefix,
            &session.visited,
        )?;
        for link in links {
            session.enqueue(link);
        }

        info!(
            "Remaining queue: {}, eggs: {} - {:?}",
            session.remaining.len(),
            session.eggs.len(),
            session.letters()
        );
    }

    Ok(CrawlOutcome::Exhausted)
}
