use anyhow::Result;
use log2::*;
use url::Url;

use egghunt::config::Config;
use egghunt::crawler::{self, CrawlOutcome, CrawlSession, CrawlerConfig};
use egghunt::unscramble::{self, LetterPool};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("egghunt"))
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    let seed_url = Url::parse(&cfg.seed_url)?;
    let crawler_config = CrawlerConfig::new(seed_url)
        .with_host_prefix(&cfg.host_prefix)
        .with_link_prefix(&cfg.link_prefix)
        .with_marker_segment(&cfg.marker_segment)
        .with_egg_target(cfg.egg_target)
        .with_request_timeout(cfg.request_timeout);

    let mut session = CrawlSession::new(crawler_config.seed_url.clone());
    match crawler::crawl(&mut session, &crawler_config).await {
        Ok(outcome) => {
            if outcome == CrawlOutcome::Exhausted {
                warn!(
                    "Ran out of pages with {} of {} eggs found",
                    session.eggs.len(),
                    cfg.egg_target
                );
            }
            print_report(&session);
        }
        Err(e) => {
            error!("Crawling failed: {}", e);
        }
    }

    if cfg.solve {
        let client = reqwest::Client::new();
        let word_list = unscramble::fetch_word_list(&client, &cfg.dictionary_url).await?;
        info!("Word list loaded, {} entries", word_list.len());

        let letters: Vec<char> = cfg.letters.chars().collect();
        let pool = LetterPool::new(&letters);
        let lengths = (cfg.word_lengths[0], cfg.word_lengths[1], cfg.word_lengths[2]);
        let buckets = unscramble::build_buckets(&word_list, lengths, &pool, &cfg.short_words);

        for (w1, w2, w3) in unscramble::unscramble(&pool, &buckets, lengths) {
            println!("{} {} {}{}", w1, w2, w3, cfg.affix);
        }
    }

    Ok(())
}

/// Print each found letter with its source page, then the whole sequence.
fn print_report(session: &CrawlSession) {
    println!("\n#########################################");
    println!("# Results:\n");
    for egg in &session.eggs {
        println!("{} found at {}", egg.letter, egg.url);
    }
    println!("\nAll letters: {:?}", session.letters());
}
