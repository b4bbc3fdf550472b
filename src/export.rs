use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::parser::extract::{MenuItem, COLUMNS};

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one CSV row, quoting fields that need it.
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", SEP)?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line followed by one row per item.
pub fn write_items<W: Write>(w: &mut W, items: &[MenuItem]) -> io::Result<()> {
    write_row(w, &COLUMNS)?;
    for item in items {
        write_row(w, &item.to_row())?;
    }
    Ok(())
}

pub fn to_csv_string(items: &[MenuItem]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writes into a Vec cannot fail, and every byte comes from a &str.
    write_items(&mut buf, items).expect("write to Vec");
    String::from_utf8(buf).expect("CSV built from UTF-8 fields")
}

/// Write items to `path`, creating parent directories as needed.
pub fn write_csv(path: &Path, items: &[MenuItem]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_items(&mut w, items)?;
    w.flush()?;

    info!("Wrote {} rows to {}", items.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::extract_menu_item;

    #[test]
    fn header_and_rows() {
        let items = vec![
            extract_menu_item("Starters & Snacks", "Tully Tots\n$11.79\nCrispy").unwrap(),
            extract_menu_item("Kids", "Kid's Burger & Fries\n$6.99").unwrap(),
        ];
        assert_eq!(
            to_csv_string(&items),
            "category,name,price,description\n\
             Starters & Snacks,Tully Tots,11.79,Crispy\n\
             Kids,Kid's Burger & Fries,6.99,No description available\n"
        );
    }

    #[test]
    fn quoting() {
        let item = extract_menu_item(
            "Burgers",
            "The \"Big\" One\n$1,099.00\nBeef, cheese, bacon",
        )
        .unwrap();
        assert_eq!(
            to_csv_string(&[item]),
            "category,name,price,description\n\
             Burgers,\"The \"\"Big\"\" One\",1099,\"Beef, cheese, bacon\"\n"
        );
    }

    #[test]
    fn empty_batch_writes_header() {
        assert_eq!(to_csv_string(&[]), "category,name,price,description\n");
    }

    #[test]
    fn creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join("menu.csv");
        let items = vec![extract_menu_item("Sides", "Fries\n$3.49").unwrap()];
        write_csv(&path, &items).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("category,name,price,description\n"));
        assert!(written.contains("Sides,Fries,3.49,No description available"));
    }
}
