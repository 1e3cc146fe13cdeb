//! Core library for searching and downloading icons from the Streamline API.
//!
//! The service only understands exact family slugs and has no endpoint for
//! discovering them, so most of the logic here sits in front of the HTTP calls:
//!
//! - **Catalog**: the built-in table of icon sets and their families
//! - **Name resolution**: free text ("sharp", "mat", "Material Pro") to slugs,
//!   with suggestions when nothing matches
//! - **API client**: authenticated GET requests with classified failures
//! - **Orchestration**: one request per resolved family, local filtering, and
//!   per-family aggregation that tolerates individual failures
//! - **Configuration**: config file and API key precedence

pub mod catalog;
pub mod client;
pub mod config;
pub mod download;
pub mod errors;
pub mod orchestrator;
pub mod resolver;

pub use catalog::{Catalog, Family, FamilySet};
pub use client::{IconApi, StreamlineClient};
pub use config::{CredentialSources, StreamlineConfig};
pub use download::DownloadedAsset;
pub use errors::StreamlineError;
pub use orchestrator::{AggregatedResults, GlobalResults, QueryOrchestrator};
pub use resolver::{NameResolver, ResolvedTarget};

#[cfg(test)]
pub mod test_utils;
