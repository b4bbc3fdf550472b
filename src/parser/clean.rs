/// Dietary/portion badges rendered as their own line inside an item card.
pub const BADGE_TOKENS: &[&str] = &["GS", "V", "S", "P"];

/// "NEW" and "NEW!" announcement markers.
const NEW_MARKER: &str = "NEW";

/// Split a scraped item block into its meaningful lines, in order.
///
/// Lines are trimmed; blank lines, badge tokens and lines starting with
/// `NEW` are dropped. Running this on its own output changes nothing.
pub fn clean_scraped_text(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !is_noise(line))
        .map(str::to_string)
        .collect()
}

fn is_noise(line: &str) -> bool {
    line.is_empty() || BADGE_TOKENS.contains(&line) || line.starts_with(NEW_MARKER)
}
