//! Path interpretation for the asset tree.

use std::ffi::OsStr;
use std::path::{Component, Path};

use crate::error::Result;

/// File extensions treated as images, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Check whether a path carries one of the image extensions
/// (case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Outcome of resolving a product ID from a file's containing directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductIdResolution<'a> {
    /// The path component immediately after the asset root's name.
    Resolved(&'a str),
    /// The asset root's name does not appear in the path at all.
    OutsideRoot,
    /// The asset root's name is the last component; the file sits directly
    /// in the root with no product directory.
    NoProductSegment,
}

/// Resolve the product ID for a file under the asset tree.
///
/// `parent` is the file's containing directory. The ID is the component
/// immediately after the first component equal to `root_name`.
pub fn resolve_product_id<'a>(root_name: &str, parent: &'a Path) -> ProductIdResolution<'a> {
    let mut components = parent.components().filter_map(|c| match c {
        Component::Normal(os) => os.to_str(),
        _ => None,
    });

    if !components.any(|c| c == root_name) {
        return ProductIdResolution::OutsideRoot;
    }

    match components.next() {
        Some(id) => ProductIdResolution::Resolved(id),
        None => ProductIdResolution::NoProductSegment,
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("a.JPG")));
        assert!(is_image_file(Path::new("dir/b.jpeg")));
        assert!(is_image_file(Path::new("c.Gif")));
        assert!(!is_image_file(Path::new("readme.md")));
        assert!(!is_image_file(Path::new("noext")));
        assert!(!is_image_file(Path::new("archive.png.zip")));
    }

    #[test]
    fn test_resolve_direct_child() {
        let parent = PathBuf::from("product/P1");
        assert_eq!(
            resolve_product_id("product", &parent),
            ProductIdResolution::Resolved("P1")
        );
    }

    #[test]
    fn test_resolve_nested_child() {
        let parent = PathBuf::from("/tmp/assets/product/P2/gallery");
        assert_eq!(
            resolve_product_id("product", &parent),
            ProductIdResolution::Resolved("P2")
        );
    }

    #[test]
    fn test_resolve_first_occurrence_wins() {
        let parent = PathBuf::from("product/product/P1");
        assert_eq!(
            resolve_product_id("product", &parent),
            ProductIdResolution::Resolved("product")
        );
    }

    #[test]
    fn test_resolve_outside_root() {
        let parent = PathBuf::from("elsewhere/P1");
        assert_eq!(
            resolve_product_id("product", &parent),
            ProductIdResolution::OutsideRoot
        );
    }

    #[test]
    fn test_resolve_no_product_segment() {
        let parent = PathBuf::from("/data/product");
        assert_eq!(
            resolve_product_id("product", &parent),
            ProductIdResolution::NoProductSegment
        );
    }
}
