//! Catalog module.
//!
//! This module handles:
//! - Parsing the JSON catalog documents
//! - Building the unified product ID to display name map
//! - Writing the plain-text name dumps

pub mod dump;
pub mod loader;
pub mod types;

pub use dump::{dump_path, write_name_dump};
pub use loader::{build_product_map, load_catalogs, load_document, ProductMap};
pub use types::{CatalogDocument, Product, ProductName};
