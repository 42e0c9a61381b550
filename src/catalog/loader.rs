//! Catalog loading and product map construction.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::dump::{dump_path, write_name_dump};
use crate::catalog::types::CatalogDocument;
use crate::error::{Error, Result};

/// Map from product ID to display name.
pub type ProductMap = HashMap<String, String>;

/// Read and parse a single catalog document.
pub fn load_document(path: &Path) -> Result<CatalogDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::MissingCatalog(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| Error::MalformedCatalog {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Build the unified product map from parsed documents.
///
/// Documents are folded in order; a product ID appearing in a later
/// document overwrites the earlier name.
pub fn build_product_map(documents: &[CatalogDocument]) -> ProductMap {
    let mut map = ProductMap::new();
    for document in documents {
        for product in &document.data.products {
            map.insert(product.id.clone(), product.name.default.clone());
        }
    }
    map
}

/// Load every catalog source, emit the name dumps, and build the product
/// map.
///
/// All sources are parsed before any dump is written, so a missing or
/// malformed catalog leaves no partial output behind.
pub fn load_catalogs(sources: &[PathBuf], write_dumps: bool) -> Result<ProductMap> {
    let mut documents = Vec::with_capacity(sources.len());
    for source in sources {
        documents.push(load_document(source)?);
    }

    if write_dumps {
        for (source, document) in sources.iter().zip(&documents) {
            let target = dump_path(source);
            write_name_dump(document, &target)?;
            tracing::debug!("wrote name dump {}", target.display());
        }
    }

    Ok(build_product_map(&documents))
}
