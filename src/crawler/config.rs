use url::Url;

/// Default timeout for page requests in seconds
pub const PAGE_REQUEST_TIMEOUT_SEC: u64 = 2;

/// Configuration for one crawl
pub struct CrawlerConfig {
    pub seed_url: Url,
    /// Prepended to site-relative hrefs to form absolute URLs
    pub host_prefix: String,
    /// Only hrefs starting with this path prefix are followed
    pub link_prefix: String,
    /// Path segment the marker images live under
    pub marker_segment: String,
    /// Number of eggs after which the crawl stops
    pub egg_target: usize,
    pub request_timeout_sec: u64,
}

impl CrawlerConfig {
    pub fn new(seed_url: Url) -> Self {
        Self {
            seed_url,
            host_prefix: "https://www.tudelft.nl".to_string(),
            link_prefix: "/tbm/".to_string(),
            marker_segment: "faculteit/Afdelingen/Communicatie".to_string(),
            egg_target: 17,
            request_timeout_sec: PAGE_REQUEST_TIMEOUT_SEC,
        }
    }

    pub fn with_host_prefix(mut self, host_prefix: impl Into<String>) -> Self {
        self.host_prefix = host_prefix.into();
        self
    }

    pub fn with_link_prefix(mut self, link_prefix: impl Into<String>) -> Self {
        self.link_prefix = link_prefix.into();
        self
    }

    pub fn with_marker_segment(mut self, marker_segment: impl Into<String>) -> Self {
        self.marker_segment = marker_segment.into();
        self
    }

    pub fn with_egg_target(mut self, egg_target: usize) -> Self {
        self.egg_target = egg_target;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout_sec: u64) -> Self {
        self.request_timeout_sec = request_timeout_sec;
        self
    }
}
