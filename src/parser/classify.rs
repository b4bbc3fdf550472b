use std::sync::LazyLock;

use regex::Regex;

use super::clean::clean_scraped_text;
use super::extract::{extract_menu_item, MenuItem};
use super::price::{normalize_price, ParseError};

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{1,2})?$").unwrap());

pub fn is_price_line(line: &str) -> bool {
    PRICE_RE.is_match(line.trim())
}

/// Content-based extraction. The first standalone price line is the price,
/// the first line before it is the name, and the first non-price line after it
/// (or else the next line before it) is the description. Blocks with no price
/// line fall back to positional extraction.
pub fn classify_menu_item(title: &str, raw: &str) -> Result<MenuItem, ParseError> {
    let lines = clean_scraped_text(raw);

    let Some(p) = lines.iter().position(|l| is_price_line(l)) else {
        return extract_menu_item(title, raw);
    };

    let price = normalize_price(&lines[p])?;
    let name = lines[..p].first().cloned();
    let description = lines[p + 1..]
        .iter()
        .find(|l| !is_price_line(l))
        .or_else(|| lines[..p].get(1))
        .cloned();

    Ok(MenuItem::new(title, name, price, description))
}
