use std::collections::{HashMap, HashSet};

use anyhow::Result;
use reqwest::Client;

/// A count-bounded budget of available letters.
pub struct LetterPool {
    limits: HashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool from the available letters, lowercased.
    pub fn new(letters: &[char]) -> Self {
        let joined: String = letters.iter().collect();
        Self {
            limits: letter_counts(&joined),
        }
    }

    /// The distinct letters available, ignoring counts.
    pub fn alphabet(&self) -> HashSet<char> {
        self.limits.keys().copied().collect()
    }

    /// True if `counts` stays within the per-letter budget. A letter missing
    /// from the pool has a budget of zero.
    pub fn admits(&self, counts: &HashMap<char, usize>) -> bool {
        counts
            .iter()
            .all(|(letter, &count)| count <= self.limits.get(letter).copied().unwrap_or(0))
    }
}

/// Per-letter usage counts of `word`, lowercased.
pub fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in word.to_lowercase().chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Download the newline-separated word list at `url`. Fetch failures
/// propagate; the solver has no recovery path of its own.
pub async fn fetch_word_list(client: &Client, url: &str) -> Result<Vec<String>> {
    let body = client.get(url).send().await?.text().await?;
    Ok(body.lines().map(str::to_string).collect())
}

/// Bucket `words` by the target lengths, keeping only words whose distinct
/// letters all occur in the pool. Membership ignores counts, so this is a
/// necessary-but-not-sufficient pre-filter; budgets are enforced during the
/// search.
pub fn build_buckets(
    words: &[String],
    lengths: (usize, usize, usize),
    pool: &LetterPool,
    short_word_override: &[String],
) -> HashMap<usize, Vec<String>> {
    let alphabet = pool.alphabet();
    let wanted = [lengths.0, lengths.1, lengths.2];

    let mut buckets: HashMap<usize, Vec<String>> =
        wanted.iter().map(|&length| (length, Vec::new())).collect();

    for word in words {
        if !wanted.contains(&word.len()) {
            continue;
        }
        if !word.chars().all(|letter| alphabet.contains(&letter)) {
            continue;
        }
        buckets.entry(word.len()).or_default().push(word.clone());
    }

    // The bulk list is full of junk three-letter entries, use a curated set
    // instead.
    buckets.insert(3, short_word_override.to_vec());

    buckets
}

/// Every ordered triple (one word per length bucket, in bucket order) whose
/// combined letter usage fits the pool.
///
/// An exhaustive pass over the cross product, pruned as soon as a partial
/// combination overruns any letter's budget: `w1` is checked alone before
/// the second loop, `w1 + w2` before the third.
pub fn unscramble(
    pool: &LetterPool,
    buckets: &HashMap<usize, Vec<String>>,
    lengths: (usize, usize, usize),
) -> Vec<(String, String, String)> {
    let empty = Vec::new();
    let first = buckets.get(&lengths.0).unwrap_or(&empty);
    let second = buckets.get(&lengths.1).unwrap_or(&empty);
    let third = buckets.get(&lengths.2).unwrap_or(&empty);

    let mut phrases = Vec::new();

    for w1 in first {
        if !pool.admits(&letter_counts(w1)) {
            continue;
        }

        for w2 in second {
            if !pool.admits(&letter_counts(&format!("{w1}{w2}"))) {
                continue;
            }

            for w3 in third {
                if pool.admits(&letter_counts(&format!("{w1}{w2}{w3}"))) {
                    phrases.push((w1.clone(), w2.clone(), w3.clone()));
                }
            }
        }
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(letters: &str) -> LetterPool {
        LetterPool::new(&letters.chars().collect::<Vec<char>>())
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_letter_counts_lowercases() {
        let counts = letter_counts("Tea");
        assert_eq!(counts.get(&'t'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.get(&'a'), Some(&1));
        assert_eq!(counts.get(&'T'), None);
    }

    #[test]
    fn test_pool_rejects_overrun_at_first_level() {
        let pool = pool_of("aab");
        assert!(pool.admits(&letter_counts("ab")));
        assert!(pool.admits(&letter_counts("aab")));
        // three a's against a budget of two
        assert!(!pool.admits(&letter_counts("aaa")));
    }

    #[test]
    fn test_pool_rejects_letter_outside_alphabet() {
        let pool = pool_of("aab");
        assert!(!pool.admits(&letter_counts("abc")));
    }

    #[test]
    fn test_buckets_filter_length_and_alphabet() {
        let pool = pool_of("stars");
        let list = words(&["star", "tsar", "rats", "moon", "ta", "stars"]);
        let buckets = build_buckets(&list, (4, 3, 5), &pool, &[]);

        // "moon" uses letters outside the pool, "ta" has the wrong length
        assert_eq!(buckets[&4], words(&["star", "tsar", "rats"]));
        assert_eq!(buckets[&5], words(&["stars"]));
        assert!(buckets[&3].is_empty());
    }

    #[test]
    fn test_buckets_override_replaces_three_letter_words() {
        let pool = pool_of("theandhas");
        let list = words(&["the", "tea", "ant"]);
        let buckets = build_buckets(&list, (6, 3, 7), &pool, &words(&["and", "the", "has"]));
        assert_eq!(buckets[&3], words(&["and", "the", "has"]));
    }

    #[test]
    fn test_unscramble_prunes_infeasible_first_word() {
        let pool = pool_of("aab");
        let mut buckets = HashMap::new();
        buckets.insert(3, words(&["aaa"]));
        buckets.insert(1, words(&["a", "b"]));

        // "aaa" dies at the first-level prune, so nothing is emitted
        assert!(unscramble(&pool, &buckets, (3, 1, 1)).is_empty());
    }

    #[test]
    fn test_unscramble_finds_the_only_valid_triple() {
        let letters: Vec<char> = "STNEGDATSRSAIRHP".to_lowercase().chars().collect();
        let pool = LetterPool::new(&letters);
        // "startle" carries an l and is dropped by the bucket filter;
        // "starts has started" oversaturates s at the full-triple check
        let list = words(&["spring", "starts", "granite", "started", "startle"]);
        let buckets = build_buckets(&list, (6, 3, 7), &pool, &words(&["has"]));

        let phrases = unscramble(&pool, &buckets, (6, 3, 7));
        assert_eq!(
            phrases,
            vec![(
                "spring".to_string(),
                "has".to_string(),
                "started".to_string()
            )]
        );
    }

    #[test]
    fn test_unscramble_missing_bucket_yields_nothing() {
        let pool = pool_of("abc");
        let buckets = HashMap::new();
        assert!(unscramble(&pool, &buckets, (1, 2, 3)).is_empty());
    }
}
