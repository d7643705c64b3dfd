use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Program arguments. The site constants and puzzle literals all live here,
/// so pointing the hunt at a different site or puzzle only takes flags.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// URL the crawl starts from
    #[arg(short, long, default_value = "https://www.tudelft.nl/tbm/")]
    pub seed_url: String,
    /// Host prefix used to absolutize site-relative links
    #[arg(long, default_value = "https://www.tudelft.nl")]
    pub host_prefix: String,
    /// Path prefix a link must start with to be followed
    #[arg(long, default_value = "/tbm/")]
    pub link_prefix: String,
    /// Path segment the marker images live under
    #[arg(long, default_value = "faculteit/Afdelingen/Communicatie")]
    pub marker_segment: String,
    /// Number of eggs to find before the crawl stops
    #[arg(long, default_value_t = 17)]
    pub egg_target: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 2)]
    pub request_timeout: u64,
    /// Solve the phrase puzzle after crawling
    #[arg(long)]
    pub solve: bool,
    /// Letters available to the solver. These are the known puzzle answer
    /// letters, not whatever the current crawl happened to find.
    #[arg(long, default_value = "STNEGDATSRSAIRHP")]
    pub letters: String,
    /// Word lengths of the phrase, comma separated
    #[arg(long, value_delimiter = ',', default_value = "6,3,7")]
    pub word_lengths: Vec<usize>,
    /// URL of the newline-separated word list
    #[arg(
        long,
        default_value = "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt"
    )]
    pub dictionary_url: String,
    /// Replacement three-letter words; the bulk list's are too obscure
    #[arg(long, value_delimiter = ',', default_value = "and,the,has")]
    pub short_words: Vec<String>,
    /// Suffix appended to each printed phrase
    #[arg(long, default_value = "!")]
    pub affix: String,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.egg_target == 0 {
            anyhow::bail!("egg_target must be greater than 0");
        }
        if self.marker_segment.is_empty() {
            anyhow::bail!("marker_segment must not be empty");
        }
        if self.letters.is_empty() {
            anyhow::bail!("letters must not be empty");
        }
        if self.word_lengths.len() != 3 {
            anyhow::bail!("word_lengths must name exactly three lengths");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
