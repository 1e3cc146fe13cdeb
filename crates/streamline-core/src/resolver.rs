//! Name resolution from free text to family slugs
//!
//! The remote API only accepts exact family slugs, while users type things
//! like "sharp", "mat" or "Material Pro". Resolution applies a fixed chain of
//! rules and stops at the first one that produces a non-empty result:
//!
//! 1. exact slug (style filter ignored)
//! 2. partial slug containment in either direction, if at most
//!    `partial_match_limit` slugs match (style filter ignored)
//! 3. alias table -> whole set, then style filter
//! 4. set key or display name -> whole set, then style filter
//!
//! An empty result means no match; `find_similar_names` provides candidates
//! to show alongside it.

use crate::catalog::{Catalog, FamilySet};

/// Fan-out guard for partial slug matching.
pub const DEFAULT_PARTIAL_MATCH_LIMIT: usize = 10;

/// Default number of suggestions offered for an unresolved name.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    ExactSlug,
    PartialSlug,
    Alias,
    SetName,
    NoMatch,
}

/// Ordered slugs produced for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub slugs: Vec<String>,
    pub kind: MatchKind,
}

impl ResolvedTarget {
    fn new(slugs: Vec<String>, kind: MatchKind) -> Self {
        if slugs.is_empty() {
            return Self::none();
        }
        Self { slugs, kind }
    }

    pub fn none() -> Self {
        Self {
            slugs: Vec::new(),
            kind: MatchKind::NoMatch,
        }
    }

    /// A target naming one slug directly, without consulting the catalog.
    pub fn single(slug: impl Into<String>) -> Self {
        Self {
            slugs: vec![slug.into()],
            kind: MatchKind::ExactSlug,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }
}

pub struct NameResolver<'a> {
    catalog: &'a Catalog,
    partial_match_limit: usize,
}

impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            partial_match_limit: DEFAULT_PARTIAL_MATCH_LIMIT,
        }
    }

    pub fn with_partial_match_limit(mut self, limit: usize) -> Self {
        self.partial_match_limit = limit;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn resolve(&self, input: &str, style: Option<&str>) -> ResolvedTarget {
        let input = input.trim();
        let style = style.map(str::trim).filter(|s| !s.is_empty());
        if input.is_empty() {
            return ResolvedTarget::none();
        }

        if let Some(family) = self.catalog.find_family(input) {
            log::info!("'{}' is an exact family slug", input);
            return ResolvedTarget::new(vec![family.slug.clone()], MatchKind::ExactSlug);
        }

        let partial = self.partial_matches(input);
        if !partial.is_empty() {
            if partial.len() <= self.partial_match_limit {
                log::info!("'{}' partially matches {} families", input, partial.len());
                return ResolvedTarget::new(partial, MatchKind::PartialSlug);
            }
            log::debug!(
                "'{}' partially matches {} families (limit {}), trying aliases and set names",
                input,
                partial.len(),
                self.partial_match_limit
            );
        }

        if let Some(set) = self.catalog.set_for_alias(input) {
            log::info!("'{}' is an alias for set '{}'", input, set.name);
            return ResolvedTarget::new(filter_by_style(set, style), MatchKind::Alias);
        }

        if let Some(set) = self.catalog.find_set(input) {
            log::info!("'{}' names set '{}'", input, set.name);
            return ResolvedTarget::new(filter_by_style(set, style), MatchKind::SetName);
        }

        ResolvedTarget::none()
    }

    /// Slugs containing `input`, or contained in it, ignoring case.
    fn partial_matches(&self, input: &str) -> Vec<String> {
        let needle = input.to_lowercase();
        self.catalog
            .all_slugs()
            .into_iter()
            .filter(|slug| {
                let slug = slug.to_lowercase();
                slug.contains(&needle) || needle.contains(&slug)
            })
            .map(str::to_string)
            .collect()
    }

    /// Candidate set names and family slugs for an input that did not resolve.
    ///
    /// Containment in either direction is tried first. If nothing matches, the
    /// input is split on hyphens and whitespace and any name containing one of
    /// the pieces is kept. Results follow catalog order (set names first) and
    /// contain no duplicates.
    pub fn find_similar_names(&self, input: &str, max_results: usize) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut names: Vec<&str> = self.catalog.set_names();
        names.extend(self.catalog.all_slugs());

        let mut matches: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| {
                let name = name.to_lowercase();
                name.contains(&needle) || needle.contains(&name)
            })
            .collect();

        if matches.is_empty() {
            let parts: Vec<&str> = needle
                .split(|c: char| c == '-' || c.is_whitespace())
                .filter(|p| !p.is_empty())
                .collect();
            matches = names
                .iter()
                .copied()
                .filter(|name| {
                    let name = name.to_lowercase();
                    parts.iter().any(|part| name.contains(part))
                })
                .collect();
        }

        let mut suggestions: Vec<String> = Vec::new();
        for name in matches {
            if suggestions.len() >= max_results {
                break;
            }
            if !suggestions.iter().any(|s| s == name) {
                suggestions.push(name.to_string());
            }
        }
        suggestions
    }
}

fn filter_by_style(set: &FamilySet, style: Option<&str>) -> Vec<String> {
    match style {
        Some(style) => {
            let style = style.to_lowercase();
            set.families
                .iter()
                .filter(|f| f.slug.to_lowercase().contains(&style))
                .map(|f| f.slug.clone())
                .collect()
        }
        None => set.slugs(),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
