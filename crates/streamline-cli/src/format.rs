//! Text rendering for results, icon details and errors
//!
//! Every function builds a `String`; callers decide where it goes.

use std::fmt::Write;
use std::path::Path;

use streamline_core::catalog::{Catalog, FamilySet};
use streamline_core::client::{IconDetail, IconSearchResult, Pagination};
use streamline_core::config::API_KEY_ENV;
use streamline_core::download::DownloadedAsset;
use streamline_core::{AggregatedResults, GlobalResults, StreamlineError};

fn push_icon(out: &mut String, index: usize, icon: &IconSearchResult) {
    let badge = if icon.is_free { "FREE" } else { "PRO" };
    let _ = writeln!(out, "{}. {}", index, icon.name);
    let _ = writeln!(out, "   Hash: {}", icon.hash);
    let _ = writeln!(out, "   Family: {}", icon.family_name);
    let _ = writeln!(out, "   Category: {}", icon.category_name);
    let _ = writeln!(out, "   Status: {}", badge);
    let _ = writeln!(out, "   Preview: {}", icon.image_preview_url);
    out.push('\n');
}

/// A flat result list with one pagination cursor (global or single family).
///
/// `results` may be locally filtered, so the paging hint follows the remote
/// cursor rather than the number of results shown.
pub fn search_results(results: &[IconSearchResult], pagination: &Pagination) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No results found.\n");
    } else {
        let _ = writeln!(
            out,
            "\nSearch Results ({} icons shown, {} matching before filters)\n",
            results.len(),
            pagination.total
        );
        for (i, icon) in results.iter().enumerate() {
            push_icon(&mut out, i + 1, icon);
        }
    }
    if pagination.has_more {
        let _ = writeln!(
            out,
            "Use --offset {} to see more results",
            pagination.next_offset
        );
    }
    out
}

pub fn global_results(global: &GlobalResults) -> String {
    search_results(&global.results, &global.pagination)
}

/// Results of a family search; several families are grouped under headings.
pub fn family_results(aggregate: &AggregatedResults) -> String {
    if !aggregate.is_multi_family() {
        let mut out = match aggregate.groups.first() {
            Some(group) => search_results(&group.results, &group.pagination),
            None => String::new(),
        };
        out.push_str(&failure_manifest(aggregate));
        return out;
    }

    let mut out = String::new();
    if aggregate.total_count() == 0 {
        out.push_str("No results found.\n");
    } else {
        let _ = writeln!(
            out,
            "\nSearch Results ({} icons across {} families)\n",
            aggregate.total_count(),
            aggregate.groups.len()
        );
        let mut index = 0;
        for group in aggregate.groups.iter().filter(|g| !g.results.is_empty()) {
            let _ = writeln!(
                out,
                "== {} ({} shown, {} total) ==\n",
                group.display_name,
                group.results.len(),
                group.pagination.total
            );
            for icon in &group.results {
                index += 1;
                push_icon(&mut out, index, icon);
            }
        }
        let more: Vec<&str> = aggregate
            .groups
            .iter()
            .filter(|g| g.pagination.has_more)
            .map(|g| g.slug.as_str())
            .collect();
        if !more.is_empty() {
            let _ = writeln!(
                out,
                "More results available in: {} (search a single family with --offset to page)",
                more.join(", ")
            );
        }
    }
    out.push_str(&failure_manifest(aggregate));
    out
}

fn failure_manifest(aggregate: &AggregatedResults) -> String {
    if aggregate.failures.is_empty() {
        return String::new();
    }
    let mut out = format!("\n{} family search(es) failed:\n", aggregate.failures.len());
    for failure in &aggregate.failures {
        let _ = writeln!(out, "  - {}", failure);
    }
    out
}

pub fn icon_detail(icon: &IconDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nIcon Details: {}", icon.name);
    let _ = writeln!(out, "Hash: {}", icon.hash);
    let _ = writeln!(out, "Family: {}", icon.family_name);
    let _ = writeln!(out, "Category: {}", icon.category_name);
    let _ = writeln!(out, "Subcategory: {}", icon.subcategory_name);
    let _ = writeln!(out, "Free: {}", if icon.is_free { "Yes" } else { "No" });
    let _ = writeln!(out, "Preview: {}", icon.image_preview_url);
    if let Some(colors) = icon.colors.as_ref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "Colors: {}", colors.join(", "));
    }
    if let Some(tags) = icon.tags.as_ref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "Tags: {}", tags.join(", "));
    }
    if let Some(description) = &icon.description {
        let _ = writeln!(out, "Description: {}", description);
    }
    out
}

pub fn download_success(path: &Path, asset: &DownloadedAsset) -> String {
    let mut out = format!(
        "Successfully downloaded {} icon to: {}\n",
        asset.format.extension().to_uppercase(),
        path.display()
    );
    let _ = writeln!(out, "Icon: {}", asset.icon.name);
    let _ = writeln!(out, "Family: {}", asset.icon.family_name);
    if let Some(size) = asset.size {
        let _ = writeln!(out, "Size: {} x {} pixels", size, size);
    }
    out
}

pub fn sets(catalog: &Catalog) -> String {
    let mut out = String::from("Available Icon Sets:\n");
    for set in catalog.sets() {
        let _ = writeln!(out, "  {:<20} ({} families)", set.name, set.families.len());
    }
    out
}

pub fn families(set: &FamilySet) -> String {
    let mut out = format!("\nFamilies in {}:\n", set.name);
    for family in &set.families {
        let _ = writeln!(out, "  {:<30} (slug: {})", family.display_name, family.slug);
    }
    out
}

pub fn error(err: &StreamlineError, config_path: &Path) -> String {
    match err {
        StreamlineError::MissingCredential => {
            let mut out = String::from("API key not found. To get started:\n");
            out.push_str("1. Run: streamline init\n");
            out.push_str("2. Edit the config file and add your API key\n");
            let _ = writeln!(
                out,
                "3. Or use: --api-key YOUR_KEY or set the {} environment variable\n",
                API_KEY_ENV
            );
            let _ = writeln!(out, "Config file location: {}", config_path.display());
            out
        }
        StreamlineError::RemoteRequestFailed {
            status,
            message,
            error_code,
            ..
        } => {
            let mut out = format!("Error: {}\nStatus: {}\n", message, status);
            if let Some(code) = error_code {
                let _ = writeln!(out, "Details: {}", code);
            }
            out
        }
        StreamlineError::NoMatch { input, suggestions } => {
            let mut out = format!("Error: No family or set matches '{}'\n", input);
            if suggestions.is_empty() {
                out.push_str("Run 'streamline families' to see available sets.\n");
            } else {
                out.push_str("Did you mean:\n");
                for suggestion in suggestions {
                    let _ = writeln!(out, "  - {}", suggestion);
                }
            }
            out
        }
        other => format!("Error: {}\n", other),
    }
}
