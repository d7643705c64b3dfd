use log2::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Load the page body for `url`.
///
/// Transport failures, non-success statuses and body-read errors are logged
/// and collapsed to an empty string; the caller treats an empty body as
/// "skip this page". The URL stays marked visited, so a failed page is never
/// retried.
pub async fn fetch_page(client: &Client, url: &Url, timeout_sec: u64) -> String {
    let response = match client
        .get(url.clone())
        .timeout(Duration::from_secs(timeout_sec))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Request for {} failed: {}", url, e);
            return String::new();
        }
    };

    if !response.status().is_success() {
        error!("Error {} when loading url {}", response.status().as_u16(), url);
        return String::new();
    }

    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read body of {}: {}", url, e);
            String::new()
        }
    }
}
