use anyhow::{Result, anyhow};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Turn a site-relative href into an absolute URL under `host_prefix`.
///
/// Anything not starting with `/` is not a candidate link and yields `None`.
/// Everything from the first `?` is stripped; trailing slashes, fragments and
/// case are left alone, so two links differing only in those stay distinct.
pub fn make_site_url(href: &str, host_prefix: &str) -> Option<Url> {
    if !href.starts_with('/') {
        return None;
    }
    let path = match href.find('?') {
        Some(index) => &href[..index],
        None => href,
    };
    Url::parse(&format!("{host_prefix}{path}")).ok()
}

/// Collect the candidate links on a page.
///
/// Keeps only hrefs under `link_prefix`, absolutizes them, and drops anything
/// already visited. Duplicate targets on one page collapse into the set.
pub fn extract_links(
    page: &str,
    link_prefix: &str,
    host_prefix: &str,
    visited: &HashSet<Url>,
) -> Result<HashSet<Url>> {
    let document = Html::parse_document(page);
    let selector = Selector::parse("a")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    let mut found_urls = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if !href.starts_with(link_prefix) {
                continue;
            }
            if let Some(url) = make_site_url(href, host_prefix) {
                if !visited.contains(&url) {
                    found_urls.insert(url);
                }
            }
        }
    }

    Ok(found_urls)
}
