//! Filesystem module.
//!
//! Provides:
//! - Filename sanitation and collision counting
//! - Asset tree path interpretation

pub mod naming;
pub mod paths;

pub use naming::{sanitize_name, RenameCounter};
pub use paths::{ensure_dir, is_image_file, resolve_product_id, ProductIdResolution};
