//! Query orchestration over resolved family targets
//!
//! A family query may expand into several slugs (a whole set, or a bounded
//! partial match). The orchestrator issues one request per slug, strictly in
//! resolver order and one at a time, applies the filters the service does not
//! support, and keeps per-family grouping and pagination. In a multi-family
//! search a failing slug is recorded and skipped rather than aborting the rest.

use crate::catalog::Catalog;
use crate::client::*;
use crate::download::{png_filename, svg_filename, AssetFormat, DownloadedAsset};
use crate::errors::StreamlineError;
use crate::resolver::{NameResolver, ResolvedTarget, DEFAULT_MAX_SUGGESTIONS};

/// Filters applied locally to search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilter {
    pub free_only: bool,
    /// Matched against category slug or name, ignoring case.
    pub category: Option<String>,
    /// Matched against family slug or name, ignoring case.
    pub style: Option<String>,
}

impl ResultFilter {
    /// Filters for a family search. The style already shaped resolution, so
    /// it is not applied again.
    pub fn for_family(options: &SearchOptions) -> Self {
        Self {
            free_only: options.free_only,
            category: normalized(options.category.as_deref()),
            style: None,
        }
    }

    pub fn for_global(options: &SearchOptions) -> Self {
        Self {
            free_only: options.free_only,
            category: normalized(options.category.as_deref()),
            style: normalized(options.style.as_deref()),
        }
    }

    pub fn matches(&self, icon: &IconSearchResult) -> bool {
        if self.free_only && !icon.is_free {
            return false;
        }
        if let Some(category) = &self.category {
            if !icon.category_slug.to_lowercase().contains(category)
                && !icon.category_name.to_lowercase().contains(category)
            {
                return false;
            }
        }
        if let Some(style) = &self.style {
            if !icon.family_slug.to_lowercase().contains(style)
                && !icon.family_name.to_lowercase().contains(style)
            {
                return false;
            }
        }
        true
    }

    /// Keep matching results in their original order.
    pub fn apply(&self, results: Vec<IconSearchResult>) -> Vec<IconSearchResult> {
        results.into_iter().filter(|icon| self.matches(icon)).collect()
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Filtered results of one family, with that family's own pagination cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyResults {
    pub slug: String,
    pub display_name: String,
    pub results: Vec<IconSearchResult>,
    /// Remote pagination, untouched. `total` counts results before filtering.
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedResults {
    pub groups: Vec<FamilyResults>,
    /// One `PerSlugFailure` per slug that could not be searched.
    pub failures: Vec<StreamlineError>,
}

impl AggregatedResults {
    /// Number of results after filtering, across every family.
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }

    /// Sum of the remote totals, which count results before filtering.
    pub fn remote_total(&self) -> u64 {
        self.groups.iter().map(|g| g.pagination.total).sum()
    }

    pub fn is_multi_family(&self) -> bool {
        self.groups.len() + self.failures.len() > 1
    }

    /// True when slugs were queried and none of them succeeded.
    pub fn all_failed(&self) -> bool {
        self.groups.is_empty() && !self.failures.is_empty()
    }

    /// Every result tagged with its family's display name, in display order.
    pub fn tagged_results(&self) -> impl Iterator<Item = (&str, &IconSearchResult)> {
        self.groups.iter().flat_map(|group| {
            group
                .results
                .iter()
                .map(move |icon| (group.display_name.as_str(), icon))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalResults {
    pub results: Vec<IconSearchResult>,
    pub pagination: Pagination,
}

pub struct QueryOrchestrator<'a, C: IconApi + ?Sized> {
    client: &'a C,
    resolver: NameResolver<'a>,
}

impl<'a, C: IconApi + ?Sized> QueryOrchestrator<'a, C> {
    pub fn new(client: &'a C, catalog: &'a Catalog) -> Self {
        Self {
            client,
            resolver: NameResolver::new(catalog),
        }
    }

    pub fn with_resolver(client: &'a C, resolver: NameResolver<'a>) -> Self {
        Self { client, resolver }
    }

    pub fn resolver(&self) -> &NameResolver<'a> {
        &self.resolver
    }

    /// Resolve free text (with `options.style`) and search every resulting
    /// family. An unresolved name fails with `NoMatch` carrying suggestions.
    pub async fn search_family_input(
        &self,
        input: &str,
        options: &SearchOptions,
    ) -> Result<AggregatedResults, StreamlineError> {
        let target = self.resolver.resolve(input, options.style.as_deref());
        if target.is_empty() {
            return Err(StreamlineError::NoMatch {
                input: input.to_string(),
                suggestions: self
                    .resolver
                    .find_similar_names(input, DEFAULT_MAX_SUGGESTIONS),
            });
        }
        log::info!(
            "Searching {} famil{} for '{}' ({:?})",
            target.len(),
            if target.len() == 1 { "y" } else { "ies" },
            input,
            target.kind
        );
        self.search(&target, options).await
    }

    pub async fn search(
        &self,
        target: &ResolvedTarget,
        options: &SearchOptions,
    ) -> Result<AggregatedResults, StreamlineError> {
        options.validate()?;
        let filter = ResultFilter::for_family(options);
        let catalog = self.resolver.catalog();
        let mut aggregate = AggregatedResults::default();

        if let [slug] = target.slugs.as_slice() {
            let response = self.client.family_search(slug, options).await?;
            aggregate
                .groups
                .push(self.group(catalog, slug, response, &filter));
            return Ok(aggregate);
        }

        for slug in &target.slugs {
            match self.client.family_search(slug, options).await {
                Ok(response) => {
                    aggregate
                        .groups
                        .push(self.group(catalog, slug, response, &filter));
                }
                Err(err) => {
                    log::warn!("Search failed for family '{}': {}", slug, err);
                    aggregate.failures.push(StreamlineError::for_slug(slug, &err));
                }
            }
        }

        Ok(aggregate)
    }

    fn group(
        &self,
        catalog: &Catalog,
        slug: &str,
        response: SearchResponse,
        filter: &ResultFilter,
    ) -> FamilyResults {
        let before = response.results.len();
        let results = filter.apply(response.results);
        log::debug!(
            "Family '{}': {} of {} results kept after filtering",
            slug,
            results.len(),
            before
        );
        FamilyResults {
            slug: slug.to_string(),
            display_name: catalog.display_name(slug),
            results,
            pagination: response.pagination,
        }
    }

    pub async fn search_global(&self, options: &SearchOptions) -> Result<GlobalResults, StreamlineError> {
        let response = self.client.global_search(options).await?;
        let results = ResultFilter::for_global(options).apply(response.results);
        Ok(GlobalResults {
            results,
            pagination: response.pagination,
        })
    }

    pub async fn get_icon(&self, hash: &str) -> Result<IconDetail, StreamlineError> {
        self.client.get_icon(hash).await
    }

    /// Fetch metadata (for naming) and then the SVG bytes.
    pub async fn fetch_svg(
        &self,
        hash: &str,
        options: &SvgOptions,
        custom_name: Option<&str>,
    ) -> Result<DownloadedAsset, StreamlineError> {
        let icon = self.client.get_icon(hash).await?;
        let bytes = self.client.download_svg(hash, options).await?;
        let filename = svg_filename(&icon.hash, &icon.name, custom_name, options.responsive);
        Ok(DownloadedAsset {
            icon,
            format: AssetFormat::Svg,
            filename,
            size: None,
            bytes,
        })
    }

    /// Fetch metadata (for naming) and then the PNG bytes.
    pub async fn fetch_png(
        &self,
        hash: &str,
        options: &PngOptions,
        custom_name: Option<&str>,
    ) -> Result<DownloadedAsset, StreamlineError> {
        let icon = self.client.get_icon(hash).await?;
        let size = options.effective_size();
        let bytes = self.client.download_png(hash, options).await?;
        let filename = png_filename(&icon.hash, &icon.name, custom_name, size);
        Ok(DownloadedAsset {
            icon,
            format: AssetFormat::Png,
            filename,
            size: Some(size),
            bytes,
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
