//! JSON-lines fixture loading

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::types::{InventoryError, InventoryResult, Product};

/// Load products from a JSON-lines file, one product per line.
///
/// A missing file is an empty catalog. Blank lines are skipped; a malformed
/// line fails the load with its 1-based line number.
pub fn load_products(path: &Path) -> InventoryResult<Vec<Product>> {
    if !path.exists() {
        warn!(path = %path.display(), "catalog file not found, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    parse_products(&content)
}

/// Parse JSON-lines content into products
pub fn parse_products(content: &str) -> InventoryResult<Vec<Product>> {
    let mut products = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let product: Product = serde_json::from_str(line).map_err(|source| InventoryError::Parse {
            line: index + 1,
            source,
        })?;
        products.push(product);
    }

    debug!(count = products.len(), "parsed catalog records");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = r#"
{"id":"1","name":"Laptop","category":"Computers","quantity":3,"price":900}

{"id":"2","name":"Monitor","category":"Displays"}
"#;
        let products = parse_products(content).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].quantity, 0.0);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let content = "{\"id\":\"1\",\"name\":\"ok\"}\nnot json\n";
        match parse_products(content) {
            Err(InventoryError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let products = load_products(&dir.path().join("absent.jsonl")).unwrap();
        assert!(products.is_empty());
    }
}
