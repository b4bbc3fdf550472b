mod config;
mod export;
mod fetch;
mod page;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use config::{ScrapeConfig, Source, DEFAULT_OUTPUT, DEFAULT_URL};
use page::{Selectors, DEFAULT_ITEM_SELECTOR, DEFAULT_TITLE_SELECTOR};
use parser::{ExtractOutcome, Strategy};

#[derive(Parser)]
#[command(name = "menu_scraper", about = "Scrape restaurant menu pages into CSV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a menu page, extract its items and write them to CSV
    Scrape {
        /// Menu page URL
        #[arg(short, long, default_value = DEFAULT_URL)]
        url: String,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Same as scrape, but from an HTML file saved to disk
    Parse {
        /// Saved menu page
        file: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Extract one item from raw text (file or stdin) and print it as JSON
    Extract {
        /// Menu section the item belongs to
        #[arg(short, long)]
        category: String,
        /// Raw item text (default: stdin)
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Strategy::Positional)]
        strategy: Strategy,
        /// Print a CSV row with header instead of JSON
        #[arg(long)]
        csv: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Field assignment strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Positional)]
    strategy: Strategy,
    /// CSS selector for section titles
    #[arg(long, default_value = DEFAULT_TITLE_SELECTOR)]
    title_selector: String,
    /// CSS selector for item cards inside a section
    #[arg(long, default_value = DEFAULT_ITEM_SELECTOR)]
    item_selector: String,
}

impl RunArgs {
    fn into_config(self, source: Source) -> ScrapeConfig {
        ScrapeConfig {
            source,
            output: self.output,
            selectors: Selectors {
                title: self.title_selector,
                item: self.item_selector,
            },
            strategy: self.strategy,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scrape { url, run } => {
            let config = run.into_config(Source::Url(url));
            let out = run_pipeline(&config).await?;
            print_summary(&config, &out);
            Ok(())
        }
        Commands::Parse { file, run } => {
            let config = run.into_config(Source::File(file));
            let out = run_pipeline(&config).await?;
            print_summary(&config, &out);
            Ok(())
        }
        Commands::Extract {
            category,
            file,
            strategy,
            csv,
        } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?,
            };
            let item = strategy
                .extract(&category, &raw)
                .context("Failed to extract menu item")?;
            if csv {
                print!("{}", export::to_csv_string(&[item]));
            } else {
                println!("{}", serde_json::to_string_pretty(&item)?);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

/// Load the page, extract every section and write the CSV.
async fn run_pipeline(config: &ScrapeConfig) -> anyhow::Result<ExtractOutcome> {
    use indicatif::{ProgressBar, ProgressStyle};

    let html = match &config.source {
        Source::Url(url) => fetch::fetch_html(url).await?,
        Source::File(path) => fetch::read_page(path)?,
    };

    let sections = page::read_sections(&html, &config.selectors)?;
    let total: usize = sections.iter().map(|s| s.items.len()).sum();
    info!("Found {} sections, {} items", sections.len(), total);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let out = parser::extract_sections(&sections, config.strategy, || pb.inc(1));
    pb.finish_and_clear();

    export::write_csv(&config.output, &out.items)?;
    Ok(out)
}

fn print_summary(config: &ScrapeConfig, out: &ExtractOutcome) {
    println!(
        "Saved {} items to {} ({} failed).",
        out.items.len(),
        config.output.display(),
        out.failures.len()
    );
    for f in &out.failures {
        let first = f.raw.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        println!("  {} #{} ({}): {}", f.category, f.index + 1, first.trim(), f.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_run_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrapeConfig {
            source: Source::File("tests/fixtures/menu.html".into()),
            output: dir.path().join("out").join("menu.csv"),
            ..ScrapeConfig::default()
        };

        let out = run_pipeline(&config).await.unwrap();
        assert_eq!(out.items.len(), 4);
        assert!(out.failures.is_empty());

        let csv = std::fs::read_to_string(&config.output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "category,name,price,description");
        assert_eq!(
            lines[1],
            "Starters & Snacks,Tully Tots,11.79,Made from scratch with shredded potatoes..."
        );
        assert_eq!(lines[4], "Kids Menu,Kid's Burger & Fries,6.99,No description available");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let config = ScrapeConfig {
            source: Source::File("tests/fixtures/does-not-exist.html".into()),
            ..ScrapeConfig::default()
        };
        assert!(run_pipeline(&config).await.is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["menu_scraper", "parse", "page.html"]).unwrap();
        let Commands::Parse { file, run } = cli.command else {
            panic!("expected parse");
        };
        let config = run.into_config(Source::File(file));
        assert_eq!(config.output, PathBuf::from("cache/tullys_menu.csv"));
        assert_eq!(config.strategy, Strategy::Positional);
        assert_eq!(config.selectors.title, DEFAULT_TITLE_SELECTOR);
    }

    #[test]
    fn cli_strategy_flag() {
        let cli = Cli::try_parse_from(["menu_scraper", "scrape", "--strategy", "classified"])
            .unwrap();
        let Commands::Scrape { url, run } = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(url, DEFAULT_URL);
        assert_eq!(run.strategy, Strategy::Classified);
    }
}
