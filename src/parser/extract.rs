use serde::Serialize;

use super::clean::clean_scraped_text;
use super::price::{normalize_price, ParseError};

pub const NO_NAME: &str = "No name available";
pub const NO_DESCRIPTION: &str = "No description available";

/// Column order of an exported row.
pub const COLUMNS: [&str; 4] = ["category", "name", "price", "description"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    category: String,
    name: String,
    price: f64,
    description: String,
}

impl MenuItem {
    /// Missing name/description fall back to their sentinels.
    pub fn new(
        category: impl Into<String>,
        name: Option<String>,
        price: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.unwrap_or_else(|| NO_NAME.to_string()),
            price,
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Flat row in `COLUMNS` order; price has no currency symbol.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.category.clone(),
            self.name.clone(),
            self.price.to_string(),
            self.description.clone(),
        ]
    }
}

/// Positional extraction: line 0 is the name, line 1 the price, line 2 the
/// description. Anything after line 2 is dropped.
pub fn extract_menu_item(title: &str, raw: &str) -> Result<MenuItem, ParseError> {
    let mut lines = clean_scraped_text(raw).into_iter();

    let name = lines.next();
    let price = match lines.next() {
        Some(p) => normalize_price(&p)?,
        None => 0.0,
    };
    let description = lines.next();

    Ok(MenuItem::new(title, name, price, description))
}
