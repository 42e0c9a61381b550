//! Directory walk and file moves.

use std::path::Path;

use walkdir::WalkDir;

use crate::catalog::ProductMap;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::naming::{sanitize_name, RenameCounter};
use crate::fs::paths::{ensure_dir, is_image_file, resolve_product_id, ProductIdResolution};
use crate::output::{print_error, print_success, print_warning};
use crate::relocate::outcome::{FileOutcome, SkipReason};
use crate::relocate::state::RelocateState;

/// Walk the asset tree and move every catalogued image into the
/// destination directory under its sanitized product name.
///
/// Files are processed strictly in traversal order; the rename counter
/// assigns collision suffixes in that same order. Individual move failures
/// are recorded and the walk continues.
pub fn relocate_images(config: &Config, products: &ProductMap) -> Result<RelocateState> {
    let asset_dir = &config.relocate.asset_dir;
    if !asset_dir.is_dir() {
        return Err(Error::MissingAssetDir(asset_dir.clone()));
    }

    // Product IDs are resolved relative to this name.
    let root_name = asset_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Config(format!(
            "asset directory has no usable name: {}",
            asset_dir.display()
        )))?
        .to_string();

    let destination = &config.relocate.destination;
    ensure_dir(destination)?;

    let mut counter = RenameCounter::new();
    let mut state = RelocateState::new();

    for entry in WalkDir::new(asset_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let outcome = process_file(entry.path(), &root_name, products, &mut counter, destination);
        report_outcome(config, &outcome);
        state.record(&outcome);
    }

    Ok(state)
}

/// Run one discovered file through the filter → resolve → lookup → rename
/// pipeline.
fn process_file(
    path: &Path,
    root_name: &str,
    products: &ProductMap,
    counter: &mut RenameCounter,
    destination: &Path,
) -> FileOutcome {
    if !is_image_file(path) {
        return FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::NotAnImage,
        };
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let product_id = match resolve_product_id(root_name, parent) {
        ProductIdResolution::Resolved(id) => id,
        ProductIdResolution::OutsideRoot => {
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::OutsideRoot,
            }
        }
        ProductIdResolution::NoProductSegment => {
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::NoProductSegment,
            }
        }
    };

    let Some(display_name) = products.get(product_id) else {
        return FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::UnknownProduct,
        };
    };

    // The counter advances even if the move below fails, so a failed file
    // still consumes its suffix slot.
    let base = sanitize_name(display_name);
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let target = destination.join(counter.assign(&base, extension));

    match move_file(path, &target) {
        Ok(()) => FileOutcome::Moved {
            from: path.to_path_buf(),
            to: target,
        },
        Err(e) => FileOutcome::Failed {
            from: path.to_path_buf(),
            to: target,
            message: e.to_string(),
        },
    }
}

/// Move a single file, overwriting any pre-existing file at the target.
///
/// Falls back to copy-and-delete when the destination is on another
/// filesystem.
fn move_file(from: &Path, to: &Path) -> std::result::Result<(), fs_extra::error::Error> {
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::move_file(from, to, &options)?;
    Ok(())
}

fn report_outcome(config: &Config, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Moved { from, to } => {
            if config.relocate.show_moves {
                print_success(&format!(
                    "Moved '{}' to '{}'",
                    from.display(),
                    to.display()
                ));
            }
        }
        FileOutcome::Skipped { path, reason } => {
            tracing::debug!("skipped {} ({})", path.display(), reason.describe());
            if config.relocate.show_skipped {
                print_warning(&format!(
                    "Skipped '{}' ({})",
                    path.display(),
                    reason.describe()
                ));
            }
        }
        FileOutcome::Failed { from, message, .. } => {
            print_error(&format!("Could not move {}: {}", from.display(), message));
        }
    }
}
