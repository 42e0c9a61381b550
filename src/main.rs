//! Catalog Relocator - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use catalog_relocator::{
    catalog::load_catalogs,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_warning,
    },
    relocate::relocate_images,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!(
            "no configuration file at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(&config);

    // Load catalogs and emit the name dumps. A missing catalog aborts the
    // run with a message but reports success, matching the classic tool.
    let products = match load_catalogs(&config.catalog.sources, config.catalog.write_name_dumps) {
        Ok(products) => products,
        Err(e @ Error::MissingCatalog(_)) => {
            print_error(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    print_info(&format!("Loaded {} products", products.len()));

    // Walk the asset tree and move the images. A missing tree is likewise
    // reported without failing the process.
    let state = match relocate_images(&config, &products) {
        Ok(state) => state,
        Err(e @ Error::MissingAssetDir(_)) => {
            print_warning(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    print_run_stats(&state);

    Ok(())
}
