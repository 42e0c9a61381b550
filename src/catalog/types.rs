//! Catalog document type definitions.

use serde::Deserialize;

/// Top-level catalog document wrapper.
///
/// Matches the export shape `{"data": {"products": [...]}}`. Anything
/// outside the consumed fields is ignored; a document missing one of them
/// is rejected as malformed.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub data: CatalogData,
}

/// Payload section of a catalog document.
#[derive(Debug, Deserialize)]
pub struct CatalogData {
    pub products: Vec<Product>,
}

/// A single product entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: ProductName,
}

/// Localized display name variants; only the default is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductName {
    pub default: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_document() {
        let json = r#"{
            "data": {
                "products": [
                    {"id": "P1", "name": {"default": "Red Shoe", "en": "Red Shoe"}},
                    {"id": "P2", "name": {"default": "Blue! Hat"}}
                ],
                "total": 2
            }
        }"#;

        let doc: CatalogDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.data.products.len(), 2);
        assert_eq!(doc.data.products[0].id, "P1");
        assert_eq!(doc.data.products[0].name.default, "Red Shoe");
    }

    #[test]
    fn test_missing_products_is_malformed() {
        let json = r#"{"data": {}}"#;
        assert!(serde_json::from_str::<CatalogDocument>(json).is_err());
    }

    #[test]
    fn test_missing_default_name_is_malformed() {
        let json = r#"{"data": {"products": [{"id": "P1", "name": {}}]}}"#;
        assert!(serde_json::from_str::<CatalogDocument>(json).is_err());
    }
}
