//! Client side of the remote icon service
//!
//! `IconApi` is the seam between the query logic and the network: the
//! orchestrator only talks to this trait, `StreamlineClient` implements it over
//! HTTP. Every call is a single request; failures are classified and returned,
//! never retried.

use async_trait::async_trait;

use crate::errors::StreamlineError;

pub mod http;
pub mod types;

pub use http::{StreamlineClient, DEFAULT_BASE_URL};
pub use types::*;

#[async_trait]
pub trait IconApi: Send + Sync {
    /// Search across every family. `options.query` is required.
    async fn global_search(&self, options: &SearchOptions) -> Result<SearchResponse, StreamlineError>;

    /// Search within one family.
    async fn family_search(
        &self,
        family_slug: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, StreamlineError>;

    /// Fetch full metadata for one icon.
    async fn get_icon(&self, hash: &str) -> Result<IconDetail, StreamlineError>;

    async fn download_svg(&self, hash: &str, options: &SvgOptions) -> Result<Vec<u8>, StreamlineError>;

    async fn download_png(&self, hash: &str, options: &PngOptions) -> Result<Vec<u8>, StreamlineError>;
}

#[cfg(test)]
mod tests;
