//! Catalog Relocator - product image renaming from catalog metadata
//!
//! This library maps product display names from JSON catalog documents onto
//! an image asset tree, renaming each image to a sanitized form of its
//! product's name and moving it into a flat destination directory.
//!
//! # Features
//!
//! - Unified product map built from multiple catalog documents
//! - Plain-text name dumps for manual catalog review
//! - Filename sanitation with per-run collision suffixing
//! - Per-file failure reporting; the run continues past individual errors
//!
//! # Example
//!
//! ```no_run
//! use catalog_relocator::catalog::load_catalogs;
//! use catalog_relocator::config::Config;
//! use catalog_relocator::relocate::relocate_images;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let products = load_catalogs(&config.catalog.sources, true)?;
//!     let state = relocate_images(&config, &products)?;
//!     println!("moved {} files", state.moved_count());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod relocate;

// Re-exports for convenience
pub use catalog::{load_catalogs, ProductMap};
pub use config::Config;
pub use error::{Error, Result};
pub use fs::naming::{sanitize_name, RenameCounter};
pub use relocate::{relocate_images, FileOutcome, RelocateState, SkipReason};
