//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::source::{ProjectSource, DEFAULT_SOURCE};

/// Terminal portfolio viewer
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project document: a local path or an http(s) URL
    #[arg(default_value = DEFAULT_SOURCE, env = "FOLIO_SOURCE")]
    pub source: String,

    /// Delay between starting the modal fade-out and hiding it
    #[arg(long, default_value_t = 300, env = "FOLIO_CLOSE_DELAY_MS")]
    pub close_delay_ms: u64,

    /// Delay after the first render before button state is re-checked
    #[arg(long, default_value_t = 100, env = "FOLIO_SETTLE_DELAY_MS")]
    pub settle_delay_ms: u64,

    /// Card width in columns on wide terminals
    #[arg(long, default_value_t = 36, env = "FOLIO_CARD_WIDTH")]
    pub card_width: u16,

    /// Gap between cards in columns
    #[arg(long, default_value_t = 2, env = "FOLIO_CARD_GAP")]
    pub card_gap: u16,

    /// Scroll distance used when no card is rendered
    #[arg(long, default_value_t = 40, env = "FOLIO_FALLBACK_SCROLL")]
    pub fallback_scroll: u16,

    /// Timeout for HTTP reads of the project document (none by default)
    #[arg(long, env = "FOLIO_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: Option<u64>,

    /// File receiving log output
    #[arg(long, default_value = "folio-tui.log", env = "FOLIO_LOG_FILE")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "FOLIO_LOG_LEVEL")]
    pub log_level: String,
}

/// Carousel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub card_width: u16,
    pub card_gap: u16,
    pub fallback_scroll: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: 36,
            card_gap: 2,
            fallback_scroll: 40,
        }
    }
}

/// Timing of UI transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Modal fade-out duration before it is hidden and the scroll lock released
    pub close_delay: Duration,
    /// Wait after the initial render before recomputing button state
    pub settle_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(300),
            settle_delay: Duration::from_millis(100),
        }
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: ProjectSource,
    pub fetch_timeout: Option<Duration>,
    pub carousel: CarouselConfig,
    pub timing: TimingConfig,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        if self.source.trim().is_empty() {
            anyhow::bail!("Project source must not be empty");
        }
        if self.card_width < 8 {
            anyhow::bail!("Card width must be at least 8 columns, got {}", self.card_width);
        }
        if self.fallback_scroll == 0 {
            anyhow::bail!("Fallback scroll distance must be positive");
        }

        Ok(Config {
            source: ProjectSource::parse(&self.source),
            fetch_timeout: self.fetch_timeout_secs.map(Duration::from_secs),
            carousel: CarouselConfig {
                card_width: self.card_width,
                card_gap: self.card_gap,
                fallback_scroll: self.fallback_scroll,
            },
            timing: TimingConfig {
                close_delay: Duration::from_millis(self.close_delay_ms),
                settle_delay: Duration::from_millis(self.settle_delay_ms),
            },
            log_file: self.log_file,
            log_level: self.log_level,
        })
    }
}
