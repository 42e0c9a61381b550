//! Plain-text name dumps for manual catalog review.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::types::CatalogDocument;
use crate::error::Result;

/// Dump path for a catalog source: the same location with a `.txt`
/// extension, so `1.json` produces `1.txt` next to it.
pub fn dump_path(source: &Path) -> PathBuf {
    source.with_extension("txt")
}

/// Write one display name per line, in document order.
pub fn write_name_dump(document: &CatalogDocument, path: &Path) -> Result<()> {
    let mut out = String::new();
    for product in &document.data.products {
        out.push_str(&product.name.default);
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_path_replaces_extension() {
        assert_eq!(dump_path(Path::new("1.json")), PathBuf::from("1.txt"));
        assert_eq!(
            dump_path(Path::new("exports/catalog.json")),
            PathBuf::from("exports/catalog.txt")
        );
    }

    #[test]
    fn test_dump_preserves_document_order() {
        let json = r#"{"data": {"products": [
            {"id": "B", "name": {"default": "Second"}},
            {"id": "A", "name": {"default": "First"}}
        ]}}"#;
        let document: CatalogDocument = serde_json::from_str(json).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        write_name_dump(&document, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Second\nFirst\n");
    }
}
