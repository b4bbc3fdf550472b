use std::path::PathBuf;

use crate::page::Selectors;
use crate::parser::Strategy;

pub const DEFAULT_URL: &str =
    "https://web.archive.org/web/20241111165815/https://www.tullysgoodtimes.com/menus/";
pub const DEFAULT_OUTPUT: &str = "cache/tullys_menu.csv";

/// Where the menu page comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

/// Everything one scrape run needs; built from the command line and handed
/// to the pipeline so nothing lives in globals.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub source: Source,
    pub output: PathBuf,
    pub selectors: Selectors,
    pub strategy: Strategy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source: Source::Url(DEFAULT_URL.to_string()),
            output: PathBuf::from(DEFAULT_OUTPUT),
            selectors: Selectors::default(),
            strategy: Strategy::default(),
        }
    }
}
