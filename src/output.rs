//! CLI output formatting for the check and build commands.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O and no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Images (2)
//!     001 a.jpg
//!     002 c.dng
//!
//! Skipped (1)
//!     b.png
//! ```
//!
//! ## Build
//!
//! ```text
//! Gallery → ./index.html
//!     001 a.jpg
//!     002 c.dng
//! Generated 2 images, 1 skipped
//! ```
//!
//! Image lines keep the filesystem listing order, the same order the page
//! embeds them.

use crate::scan::Listing;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the check report: matched images, then skipped entries.
pub fn format_check_output(listing: &Listing) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Images ({})", listing.images.len()));
    for (i, name) in listing.images.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), name));
    }

    if !listing.skipped.is_empty() {
        lines.push(String::new());
        lines.push(format!("Skipped ({})", listing.skipped.len()));
        for name in &listing.skipped {
            lines.push(format!("    {}", name));
        }
    }

    lines
}

/// Print the check report to stdout.
pub fn print_check_output(listing: &Listing) {
    for line in format_check_output(listing) {
        println!("{}", line);
    }
}

/// Format the build report: output path header, cell lines, summary.
pub fn format_build_output(listing: &Listing, output_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Gallery \u{2192} {}", output_path.display()));
    for (i, name) in listing.images.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), name));
    }
    lines.push(format!(
        "Generated {} images, {} skipped",
        listing.images.len(),
        listing.skipped.len()
    ));

    lines
}

/// Print the build report to stdout.
pub fn print_build_output(listing: &Listing, output_path: &Path) {
    for line in format_build_output(listing, output_path) {
        println!("{}", line);
    }
}
