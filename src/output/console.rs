//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════╗
║     Catalog Relocator                             ║
║     Product image renaming and relocation         ║
╚═══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    let sources: Vec<String> = config
        .catalog
        .sources
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Catalogs:    {}", sources.join(", "));
    println!("  Asset tree:  {}", config.relocate.asset_dir.display());
    println!("  Destination: {}", config.relocate.destination.display());
    println!();
}
