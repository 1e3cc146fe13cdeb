//! Naming of downloaded assets
//!
//! The core never touches the filesystem; it hands callers the bytes together
//! with the file name they should be stored under.

use crate::client::IconDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    Svg,
    Png,
}

impl AssetFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AssetFormat::Svg => "svg",
            AssetFormat::Png => "png",
        }
    }
}

/// Bytes of a fully received asset plus the metadata used to name it.
#[derive(Debug, Clone)]
pub struct DownloadedAsset {
    pub icon: IconDetail,
    pub format: AssetFormat,
    pub filename: String,
    /// Pixel edge length for PNG downloads.
    pub size: Option<u32>,
    pub bytes: Vec<u8>,
}

/// Replace anything outside `[A-Za-z0-9_-]` with `_` and lowercase the rest.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Keep a user-chosen name as typed, but never let it leave the output
/// directory: path separators become `_` and a name made only of dots is
/// dropped.
fn sanitize_custom_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        None
    } else {
        Some(cleaned)
    }
}

fn base_name(hash: &str, icon_name: &str, custom_name: Option<&str>) -> String {
    if let Some(custom) = custom_name.and_then(sanitize_custom_name) {
        return custom;
    }
    let sanitized = sanitize_filename(icon_name);
    if sanitized.is_empty() {
        hash.to_string()
    } else {
        sanitized
    }
}

pub fn svg_filename(hash: &str, icon_name: &str, custom_name: Option<&str>, responsive: bool) -> String {
    let suffix = if responsive { "_responsive" } else { "" };
    format!("{}{}.svg", base_name(hash, icon_name, custom_name), suffix)
}

pub fn png_filename(hash: &str, icon_name: &str, custom_name: Option<&str>, size: u32) -> String {
    format!("{}_{}x{}.png", base_name(hash, icon_name, custom_name), size, size)
}
