//! Statistics reporting.

use console::style;

use crate::relocate::RelocateState;

/// Print the end-of-run relocation statistics.
pub fn print_run_stats(state: &RelocateState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Relocation results:").bold());
    println!("  Moved:   {}", style(state.moved_count()).green());
    if state.failed_count() > 0 {
        println!("  Failed:  {}", style(state.failed_count()).red());
    }
    println!(
        "  Skipped: {} ({} unknown product, {} non-image)",
        state.total_skipped(),
        state.skipped_unknown_product,
        state.skipped_non_image
    );
    println!("{}", style("═".repeat(50)).dim());
}
