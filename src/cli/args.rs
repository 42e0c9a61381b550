//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Catalog image relocator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-relocator",
    version,
    about = "Rename and relocate product images from catalog metadata",
    long_about = "Maps product display names from JSON catalog documents onto an \
                  image asset tree, renaming each image to a sanitized form of its \
                  product's name and moving it into a flat destination directory.\n\n\
                  Run with no arguments to process 1.json, 2.json and the 'product' \
                  tree in the current directory."
)]
pub struct Args {
    /// Catalog JSON document(s), in precedence order.
    /// Later documents win when the same product ID appears twice.
    #[arg(short = 's', long = "catalog", num_args = 1..)]
    pub catalogs: Option<Vec<PathBuf>>,

    /// Root directory of the image asset tree.
    #[arg(short = 'r', long = "asset-dir")]
    pub asset_dir: Option<PathBuf>,

    /// Directory receiving the renamed images.
    #[arg(short = 'd', long = "destination")]
    pub destination: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Don't write the per-catalog plain-text name dumps.
    #[arg(long)]
    pub no_name_dumps: bool,

    /// Hide per-file move output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped files.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where
    /// specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(catalogs) = self.catalogs {
            config.catalog.sources = catalogs;
        }

        if let Some(asset_dir) = self.asset_dir {
            config.relocate.asset_dir = asset_dir;
        }

        if let Some(destination) = self.destination {
            config.relocate.destination = destination;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_name_dumps {
            config.catalog.write_name_dumps = false;
        }

        if self.quiet {
            config.relocate.show_moves = false;
            config.relocate.show_skipped = false;
        }

        if self.show_skipped {
            config.relocate.show_skipped = true;
        }
    }
}
