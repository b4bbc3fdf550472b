pub mod classify;
pub mod clean;
pub mod extract;
pub mod price;

use tracing::{debug, warn};

use crate::page::MenuSection;
use extract::MenuItem;
use price::ParseError;

/// How cleaned lines are mapped onto item fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// name, price, description by line position
    #[default]
    Positional,
    /// locate the price line by pattern, then name and description around it
    Classified,
}

impl Strategy {
    pub fn extract(self, title: &str, raw: &str) -> Result<MenuItem, ParseError> {
        match self {
            Strategy::Positional => extract::extract_menu_item(title, raw),
            Strategy::Classified => classify::classify_menu_item(title, raw),
        }
    }
}

/// An item that could not be extracted, kept so the run can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFailure {
    pub category: String,
    pub index: usize,
    pub raw: String,
    pub error: ParseError,
}

#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub items: Vec<MenuItem>,
    pub failures: Vec<ItemFailure>,
}

/// Extract every item of every section. A bad item is logged and recorded;
/// the rest of the batch still goes through. `on_item` runs once per item.
pub fn extract_sections(
    sections: &[MenuSection],
    strategy: Strategy,
    mut on_item: impl FnMut(),
) -> ExtractOutcome {
    let mut out = ExtractOutcome::default();
    for section in sections {
        for (index, raw) in section.items.iter().enumerate() {
            match strategy.extract(&section.title, raw) {
                Ok(item) => {
                    debug!(
                        category = item.category(),
                        name = item.name(),
                        price = item.price(),
                        description = item.description(),
                        "Extracted item"
                    );
                    out.items.push(item);
                }
                Err(error) => {
                    warn!(
                        "Skipping item {} in {:?}: {} (text: {:?})",
                        index, section.title, error, raw
                    );
                    out.failures.push(ItemFailure {
                        category: section.title.clone(),
                        index,
                        raw: raw.clone(),
                        error,
                    });
                }
            }
            on_item();
        }
    }
    out
}

// ── Tests ──
