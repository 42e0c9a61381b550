//! Filename generation from product display names.

use std::collections::HashMap;

/// Reduce a product display name to a filesystem-safe filename base.
///
/// Keeps ASCII letters and digits only; whitespace and punctuation are
/// removed entirely, so "Red Shoe" becomes "RedShoe". A name with no
/// alphanumeric characters reduces to an empty base, leaving the extension
/// alone as the eventual filename.
pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Tracks how many images have been assigned each sanitized base name
/// during one run.
///
/// The first file for a base keeps the bare name; later files get `_2`,
/// `_3`, ... in the order they are encountered. Uniqueness holds only
/// within one run; pre-existing files at the destination are not consulted
/// and will be overwritten.
#[derive(Debug, Default)]
pub struct RenameCounter {
    counts: HashMap<String, u32>,
}

impl RenameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next target filename for `base`, with `extension` given
    /// without its leading dot.
    pub fn assign(&mut self, base: &str, extension: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;

        if *count == 1 {
            format!("{}.{}", base, extension)
        } else {
            format!("{}_{}.{}", base, count, extension)
        }
    }
}
