use anyhow::{Context, Result};
use regex::Regex;

/// Finds at most one letter-bearing marker image per page.
///
/// Markers are `.png` references under a fixed path segment, named by one of
/// three conventions, checked in this order:
///   1. a plain single-character name (`e.png`),
///   2. a duplicate-numbered name (`t-2.png`),
///   3. a percent-encoded name for special characters (`%26.png`).
pub struct MarkerDecoder {
    plain: Regex,
    numbered: Regex,
    percent_encoded: Regex,
}

impl MarkerDecoder {
    pub fn new(segment: &str) -> Result<Self> {
        let segment = regex::escape(segment);
        let compile = |pattern: String| {
            Regex::new(&pattern).with_context(|| format!("bad marker pattern {pattern}"))
        };
        Ok(Self {
            plain: compile(format!(r"{segment}/.\.png"))?,
            numbered: compile(format!(r"{segment}/.-\d\.png"))?,
            percent_encoded: compile(format!(r"{segment}/%..\.png"))?,
        })
    }

    /// Scan `page` for a marker filename and decode it to a letter.
    ///
    /// Only the first convention that matches is used. The letter is the
    /// character just before the `.png` suffix; a non-letter there means the
    /// duplicate-numbering convention, whose letter sits three positions
    /// further back; a `%` there means the two hex digits before the suffix
    /// encode the character. The offsets match the target site's filenames
    /// exactly and must stay as they are.
    pub fn find_marker(&self, page: &str) -> Option<char> {
        let found = self
            .plain
            .find(page)
            .or_else(|| self.numbered.find(page))
            .or_else(|| self.percent_encoded.find(page))?;

        let name = found.as_str().as_bytes();
        let mut letter = name[name.len() - 5] as char;

        // letter repeats are named like t-2.png
        if !letter.is_ascii_alphabetic() {
            letter = name[name.len() - 7] as char;
        }

        // special characters are named by their %-code
        if letter == '%' {
            let hex = &found.as_str()[name.len() - 6..name.len() - 4];
            letter = u8::from_str_radix(hex, 16).ok()? as char;
        }

        Some(letter)
    }
}
