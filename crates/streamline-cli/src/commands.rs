//! Command handlers
//!
//! Each handler builds what it needs from the core, prints through
//! `format`, and returns an error for the caller to render.

use std::path::{Path, PathBuf};

use anyhow::Result;
use streamline_core::client::{PngOptions, ProductType, SearchOptions, SvgOptions};
use streamline_core::config::{self, InitOutcome, API_KEY_ENV, API_URL_ENV};
use streamline_core::resolver::DEFAULT_MAX_SUGGESTIONS;
use streamline_core::{
    Catalog, CredentialSources, NameResolver, QueryOrchestrator, StreamlineClient,
    StreamlineConfig, StreamlineError,
};

use crate::format;
use crate::output;

/// State shared by every command of one invocation.
pub struct Context {
    pub global_api_key: Option<String>,
    pub config_path: PathBuf,
}

/// Search arguments common to global and family search.
pub struct SearchArgs {
    pub product_type: ProductType,
    pub limit: u32,
    pub offset: u32,
    pub style: Option<String>,
    pub category: Option<String>,
    pub free_only: bool,
}

impl SearchArgs {
    fn into_options(self, query: &str) -> SearchOptions {
        let mut options = SearchOptions::new(query)
            .with_product_type(self.product_type)
            .with_limit(self.limit)
            .with_offset(self.offset)
            .with_free_only(self.free_only);
        if let Some(style) = self.style {
            options = options.with_style(style);
        }
        if let Some(category) = self.category {
            options = options.with_category(category);
        }
        options
    }
}

impl Context {
    async fn client(&self, command_api_key: Option<String>) -> Result<StreamlineClient, StreamlineError> {
        let config = StreamlineConfig::load_or_default(&self.config_path).await;
        let sources = CredentialSources {
            command: command_api_key,
            global: self.global_api_key.clone(),
            environment: std::env::var(API_KEY_ENV).ok(),
            config_file: config.api_key(),
        };
        let base_url = config.effective_base_url(std::env::var(API_URL_ENV).ok().as_deref());
        log::debug!("Using API at {}", base_url);
        Ok(StreamlineClient::new(sources.resolve_api_key())?.with_base_url(base_url))
    }
}

pub async fn search_global(
    ctx: &Context,
    query: &str,
    args: SearchArgs,
    api_key: Option<String>,
) -> Result<()> {
    let client = ctx.client(api_key).await?;
    let orchestrator = QueryOrchestrator::new(&client, Catalog::builtin());
    let options = args.into_options(query);

    println!("Searching for \"{}\"...", query);
    let results = orchestrator.search_global(&options).await?;
    print!("{}", format::global_results(&results));
    Ok(())
}

pub async fn search_family(
    ctx: &Context,
    family: &str,
    query: &str,
    args: SearchArgs,
    api_key: Option<String>,
) -> Result<()> {
    let client = ctx.client(api_key).await?;
    let orchestrator = QueryOrchestrator::new(&client, Catalog::builtin());
    let options = args.into_options(query);

    println!("Searching in family \"{}\" for \"{}\"...", family, query);
    let aggregate = orchestrator.search_family_input(family, &options).await?;
    print!("{}", format::family_results(&aggregate));

    if aggregate.all_failed() {
        anyhow::bail!(
            "All {} family searches failed",
            aggregate.failures.len()
        );
    }
    Ok(())
}

pub async fn get_icon(ctx: &Context, hash: &str, api_key: Option<String>) -> Result<()> {
    let client = ctx.client(api_key).await?;
    let orchestrator = QueryOrchestrator::new(&client, Catalog::builtin());

    let icon = orchestrator.get_icon(hash).await?;
    print!("{}", format::icon_detail(&icon));
    Ok(())
}

pub async fn download_svg(
    ctx: &Context,
    hash: &str,
    output_dir: &Path,
    name: Option<&str>,
    responsive: bool,
    api_key: Option<String>,
) -> Result<()> {
    let client = ctx.client(api_key).await?;
    let orchestrator = QueryOrchestrator::new(&client, Catalog::builtin());

    println!("Downloading SVG for icon {}...", hash);
    let asset = orchestrator
        .fetch_svg(hash, &SvgOptions { responsive }, name)
        .await?;
    let path = output::save_asset(output_dir, &asset)?;
    print!("{}", format::download_success(&path, &asset));
    Ok(())
}

pub async fn download_png(
    ctx: &Context,
    hash: &str,
    output_dir: &Path,
    name: Option<&str>,
    size: u32,
    api_key: Option<String>,
) -> Result<()> {
    let client = ctx.client(api_key).await?;
    let orchestrator = QueryOrchestrator::new(&client, Catalog::builtin());

    println!("Downloading PNG ({}x{}) for icon {}...", size, size, hash);
    let asset = orchestrator
        .fetch_png(hash, &PngOptions { size: Some(size) }, name)
        .await?;
    let path = output::save_asset(output_dir, &asset)?;
    print!("{}", format::download_success(&path, &asset));
    Ok(())
}

/// List all sets, or the families of one set. Needs no API key.
pub fn families(set: Option<&str>) -> Result<()> {
    let catalog = Catalog::builtin();
    let Some(name) = set else {
        print!("{}", format::sets(catalog));
        return Ok(());
    };

    match catalog.find_set(name).or_else(|| catalog.set_for_alias(name)) {
        Some(set) => {
            print!("{}", format::families(set));
            Ok(())
        }
        None => Err(StreamlineError::NoMatch {
            input: name.to_string(),
            suggestions: NameResolver::new(catalog)
                .find_similar_names(name, DEFAULT_MAX_SUGGESTIONS),
        }
        .into()),
    }
}

pub async fn init(ctx: &Context) -> Result<()> {
    match config::create_default_config(&ctx.config_path).await? {
        InitOutcome::Created => {
            println!("Created config file at: {}", ctx.config_path.display());
            println!("Edit this file and add your Streamline API key.");
            println!("Get your API key from: https://www.streamlinehq.com/profile?tab=api_keys");
        }
        InitOutcome::AlreadyExists => {
            println!("Config file already exists at: {}", ctx.config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_into_options() {
        let args = SearchArgs {
            product_type: ProductType::Icons,
            limit: 20,
            offset: 40,
            style: Some("line".to_string()),
            category: None,
            free_only: true,
        };
        let options = args.into_options("*");
        assert_eq!(options.query.as_deref(), Some("*"));
        assert_eq!(options.limit, 20);
        assert_eq!(options.offset, 40);
        assert_eq!(options.style.as_deref(), Some("line"));
        assert!(options.category.is_none());
        assert!(options.free_only);
    }

    #[test]
    fn test_families_listing_and_unknown_set() {
        assert!(families(None).is_ok());
        assert!(families(Some("sharp")).is_ok());
        assert!(families(Some("mat")).is_ok());

        let err = families(Some("no-such-set")).unwrap_err();
        match err.downcast_ref::<StreamlineError>() {
            Some(StreamlineError::NoMatch { input, .. }) => assert_eq!(input, "no-such-set"),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_init_writes_config_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = Context {
            global_api_key: None,
            config_path: dir.path().join("streamline").join("config.toml"),
        };
        init(&ctx).await.unwrap();
        assert!(ctx.config_path.exists());
        init(&ctx).await.unwrap();
    }
}
