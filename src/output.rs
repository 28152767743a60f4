//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output reads as an inventory of the invitation: which sections the page
//! shows, in order, under the label the navbar gives them. Files are
//! secondary context on indented lines. Asset problems are listed but never
//! fatal, because the page degrades to gradients for anything missing.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Document
//!     wedding.json
//!
//! Sections
//! 001 Home → #hero
//! 002 Our Story → #story
//! 003 RSVP → #closing
//! 2 dividers
//!
//! Assets
//!     assets/
//!     Missing: hero.backgroundImage → /images/hero.jpg
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html (84.2 KB)
//! Copied 14 assets from assets/
//! Probed 3 memory images
//! Generated 3 sections, 2 dividers
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::{BuildReport, Inventory};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Show `path` relative to `root` when it lives under it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Human-readable byte size with one decimal above 1 KB.
fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(inventory: &Inventory, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Document".to_string());
    lines.push(format!(
        "{}{}",
        indent(1),
        display_path(&inventory.document, source_root)
    ));
    lines.push(String::new());

    lines.push("Sections".to_string());
    if inventory.nav.is_empty() {
        lines.push(format!("{}(none enabled)", indent(1)));
    }
    for (i, item) in inventory.nav.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            item.label,
            item.href
        ));
    }
    lines.push(plural(inventory.dividers, "divider", "dividers"));
    lines.push(String::new());

    lines.push("Assets".to_string());
    lines.push(format!(
        "{}{}/",
        indent(1),
        display_path(&inventory.assets_root, source_root)
    ));
    for missing in &inventory.missing {
        lines.push(format!(
            "{}Missing: {} \u{2192} {}",
            indent(1),
            missing.label,
            missing.reference
        ));
    }

    lines
}

pub fn print_check_output(inventory: &Inventory, source_root: &Path) {
    for line in format_check_output(inventory, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport, source_root: &Path) -> Vec<String> {
    let inventory = &report.inventory;
    let mut lines = Vec::new();

    lines.push(format!("index.html ({})", format_size(report.page_bytes)));
    lines.push(format!(
        "Copied {} from {}/",
        plural(report.assets_copied, "asset", "assets"),
        display_path(&inventory.assets_root, source_root)
    ));
    if report.probed > 0 {
        lines.push(format!(
            "Probed {}",
            plural(report.probed, "memory image", "memory images")
        ));
    }
    if !inventory.missing.is_empty() {
        lines.push(format!(
            "Warning: {} (run check for details)",
            plural(inventory.missing.len(), "missing asset", "missing assets")
        ));
    }
    lines.push(format!(
        "Generated {}, {}",
        plural(inventory.sections.len(), "section", "sections"),
        plural(inventory.dividers, "divider", "dividers")
    ));

    lines
}

pub fn print_build_output(report: &BuildReport, source_root: &Path) {
    for line in format_build_output(report, source_root) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRef;
    use crate::sections::{SectionKind, nav_items};
    use crate::test_helpers::*;
    use std::path::PathBuf;

    fn inventory(mask: u32) -> Inventory {
        let data = wedding_with_mask(mask);
        let sections = crate::sections::enabled_sections(&data);
        Inventory {
            document: PathBuf::from("/content/wedding.json"),
            dividers: sections.len().saturating_sub(1),
            nav: nav_items(&data),
            sections,
            assets_root: PathBuf::from("/content/assets"),
            missing: vec![],
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_single_digit() {
        assert_eq!(format_index(1), "001");
    }

    #[test]
    fn format_index_triple_digit() {
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn display_path_relative_to_root() {
        assert_eq!(
            display_path(Path::new("/content/assets"), Path::new("/content")),
            "assets"
        );
        assert_eq!(
            display_path(Path::new("/elsewhere/x"), Path::new("/content")),
            "/elsewhere/x"
        );
    }

    // =========================================================================
    // Check output
    // =========================================================================

    #[test]
    fn check_lists_sections_in_order() {
        let inv = inventory(0b100_0011);
        let lines = format_check_output(&inv, Path::new("/content"));
        assert_eq!(
            lines,
            [
                "Document",
                "    wedding.json",
                "",
                "Sections",
                "001 Home \u{2192} #hero",
                "002 Our Story \u{2192} #story",
                "003 RSVP \u{2192} #closing",
                "2 dividers",
                "",
                "Assets",
                "    assets/",
            ]
        );
    }

    #[test]
    fn check_with_no_sections() {
        let inv = inventory(0);
        let lines = format_check_output(&inv, Path::new("/content"));
        assert!(lines.contains(&"    (none enabled)".to_string()));
        assert!(lines.contains(&"0 dividers".to_string()));
    }

    #[test]
    fn check_lists_missing_assets() {
        let mut inv = inventory(0b000_0001);
        inv.missing.push(AssetRef {
            label: "hero.backgroundImage".to_string(),
            reference: "/images/hero.jpg".to_string(),
        });
        let lines = format_check_output(&inv, Path::new("/content"));
        assert_eq!(
            lines.last().unwrap(),
            "    Missing: hero.backgroundImage \u{2192} /images/hero.jpg"
        );
        assert!(lines.contains(&"0 dividers".to_string()));
    }

    // =========================================================================
    // Build output
    // =========================================================================

    #[test]
    fn build_summary() {
        let report = BuildReport {
            inventory: inventory(0b111_1111),
            output: PathBuf::from("/dist"),
            page_bytes: 2048,
            assets_copied: 1,
            probed: 0,
        };
        let lines = format_build_output(&report, Path::new("/content"));
        assert_eq!(
            lines,
            [
                "index.html (2.0 KB)",
                "Copied 1 asset from assets/",
                "Generated 7 sections, 6 dividers",
            ]
        );
    }

    #[test]
    fn build_summary_mentions_probe_and_warnings() {
        let mut inv = inventory(0b010_0000);
        inv.missing.push(AssetRef {
            label: "memories.items[0].src".to_string(),
            reference: "/images/m1.jpg".to_string(),
        });
        let report = BuildReport {
            inventory: inv,
            output: PathBuf::from("/dist"),
            page_bytes: 10,
            assets_copied: 3,
            probed: 2,
        };
        let lines = format_build_output(&report, Path::new("/content"));
        assert!(lines.contains(&"Probed 2 memory images".to_string()));
        assert!(lines.contains(&"Warning: 1 missing asset (run check for details)".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 1 section, 0 dividers");
        assert_eq!(report.inventory.sections, [SectionKind::Memories]);
    }
}
