use std::collections::{HashSet, VecDeque};
use url::Url;

/// A decoded marker letter together with the page it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Egg {
    pub letter: char,
    pub url: Url,
}

/// State of one crawl, owned by the caller and threaded through each step.
///
/// The worklist is an explicit FIFO queue (breadth-first), so a truncated
/// crawl visits pages in discovery order.
pub struct CrawlSession {
    /// URLs already popped for fetching; grows monotonically
    pub visited: HashSet<Url>,
    /// Discovered URLs awaiting a visit, in discovery order
    pub remaining: VecDeque<Url>,
    /// Shadow of `remaining` for O(1) membership checks
    queued: HashSet<Url>,
    /// Letters found so far, in discovery order
    pub eggs: Vec<Egg>,
}

impl CrawlSession {
    pub fn new(seed_url: Url) -> Self {
        let mut session = Self {
            visited: HashSet::new(),
            remaining: VecDeque::new(),
            queued: HashSet::new(),
            eggs: Vec::new(),
        };
        session.enqueue(seed_url);
        session
    }

    /// Queue a URL unless it was already fetched or queued before.
    /// Returns whether the URL was actually added.
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) || !self.queued.insert(url.clone()) {
            return false;
        }
        self.remaining.push_back(url);
        true
    }

    /// Pop the next URL in FIFO order and mark it visited.
    pub fn next_url(&mut self) -> Option<Url> {
        let url = self.remaining.pop_front()?;
        self.queued.remove(&url);
        self.visited.insert(url.clone());
        Some(url)
    }

    /// The discovered letters, in discovery order.
    pub fn letters(&self) -> Vec<char> {
        self.eggs.iter().map(|egg| egg.letter).collect()
    }
}
