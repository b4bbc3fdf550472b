use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

pub const DEFAULT_TITLE_SELECTOR: &str = "h2.menu-title";
pub const DEFAULT_ITEM_SELECTOR: &str = "div.menu-item";

/// CSS selectors locating section titles and the item cards under them.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub title: String,
    pub item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_SELECTOR.to_string(),
            item: DEFAULT_ITEM_SELECTOR.to_string(),
        }
    }
}

/// One menu section: its heading and the raw text of every item card in it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<String>,
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid CSS selector {:?}: {:?}", css, e))
}

/// Walk the document for section titles; items are looked up inside the
/// title's grandparent, which is the container holding a whole section.
pub fn read_sections(html: &str, selectors: &Selectors) -> Result<Vec<MenuSection>> {
    let title_sel = compile(&selectors.title)?;
    let item_sel = compile(&selectors.item)?;
    let doc = Html::parse_document(html);

    let mut sections = Vec::new();
    for heading in doc.select(&title_sel) {
        let title = heading
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if title.is_empty() {
            warn!("Skipping menu section with empty title");
            continue;
        }

        let Some(container) = heading
            .parent()
            .and_then(|p| p.parent())
            .and_then(ElementRef::wrap)
        else {
            warn!("No section container around {:?}", title);
            continue;
        };

        let items: Vec<String> = container.select(&item_sel).map(inner_text).collect();
        debug!("Section {:?}: {} items", title, items.len());
        sections.push(MenuSection { title, items });
    }

    Ok(sections)
}

/// Elements that start a new line in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Elements whose text is never rendered.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// Rendered text of an element, close to a browser's `innerText`: whitespace
/// runs collapse to one space, lines break only at block elements and `<br>`.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();

    // (node, closing): a closing entry ends the line of a block element.
    let mut stack: Vec<_> = el.children().map(|n| (n, false)).collect();
    stack.reverse();

    while let Some((node, closing)) = stack.pop() {
        if closing {
            flush_line(&mut lines, &mut current);
            continue;
        }
        match node.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(e) => {
                let name = e.name();
                if HIDDEN_TAGS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    flush_line(&mut lines, &mut current);
                    continue;
                }
                if BLOCK_TAGS.contains(&name) {
                    flush_line(&mut lines, &mut current);
                    stack.push((node, true));
                }
                let children: Vec<_> = node.children().collect();
                stack.extend(children.into_iter().rev().map(|n| (n, false)));
            }
            _ => {}
        }
    }
    flush_line(&mut lines, &mut current);
    lines.join("\n")
}

fn flush_line(lines: &mut Vec<String>, current: &mut String) {
    let line = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !line.is_empty() {
        lines.push(line);
    }
    current.clear();
}
