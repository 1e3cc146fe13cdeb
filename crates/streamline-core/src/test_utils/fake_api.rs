// src/test_utils/fake_api.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::*;
use crate::errors::StreamlineError;

/// In-memory `IconApi` with canned answers keyed by slug or hash.
#[derive(Default)]
pub struct FakeIconApi {
    families: HashMap<String, Result<SearchResponse, StreamlineError>>,
    global: Option<Result<SearchResponse, StreamlineError>>,
    icons: HashMap<String, Result<IconDetail, StreamlineError>>,
    assets: HashMap<String, Result<Vec<u8>, StreamlineError>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeIconApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, slug: &str, response: Result<SearchResponse, StreamlineError>) -> Self {
        self.families.insert(slug.to_string(), response);
        self
    }

    pub fn with_global(mut self, response: Result<SearchResponse, StreamlineError>) -> Self {
        self.global = Some(response);
        self
    }

    pub fn with_icon(mut self, detail: IconDetail) -> Self {
        self.icons.insert(detail.hash.clone(), Ok(detail));
        self
    }

    pub fn with_icon_error(mut self, hash: &str, err: StreamlineError) -> Self {
        self.icons.insert(hash.to_string(), Err(err));
        self
    }

    pub fn with_asset(mut self, hash: &str, bytes: Result<Vec<u8>, StreamlineError>) -> Self {
        self.assets.insert(hash.to_string(), bytes);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(what: &str) -> StreamlineError {
    StreamlineError::RemoteRequestFailed {
        status: 404,
        message: format!("{} not found", what),
        error_code: Some("Not Found".to_string()),
        body: None,
    }
}

#[async_trait]
impl IconApi for FakeIconApi {
    async fn global_search(&self, options: &SearchOptions) -> Result<SearchResponse, StreamlineError> {
        self.record(format!("global:{}", options.query.clone().unwrap_or_default()));
        self.global.clone().unwrap_or_else(|| Err(not_found("search")))
    }

    async fn family_search(
        &self,
        family_slug: &str,
        _options: &SearchOptions,
    ) -> Result<SearchResponse, StreamlineError> {
        self.record(format!("family:{}", family_slug));
        self.families
            .get(family_slug)
            .cloned()
            .unwrap_or_else(|| Err(not_found(family_slug)))
    }

    async fn get_icon(&self, hash: &str) -> Result<IconDetail, StreamlineError> {
        self.record(format!("icon:{}", hash));
        self.icons.get(hash).cloned().unwrap_or_else(|| Err(not_found(hash)))
    }

    async fn download_svg(&self, hash: &str, options: &SvgOptions) -> Result<Vec<u8>, StreamlineError> {
        self.record(format!("svg:{}:{}", hash, options.responsive));
        self.assets.get(hash).cloned().unwrap_or_else(|| Err(not_found(hash)))
    }

    async fn download_png(&self, hash: &str, options: &PngOptions) -> Result<Vec<u8>, StreamlineError> {
        self.record(format!("png:{}:{}", hash, options.effective_size()));
        self.assets.get(hash).cloned().unwrap_or_else(|| Err(not_found(hash)))
    }
}

pub fn icon(hash: &str, family_slug: &str, is_free: bool, category: &str) -> IconSearchResult {
    IconSearchResult {
        hash: hash.to_string(),
        name: format!("Icon {}", hash),
        image_preview_url: format!("https://cdn.example/{}.png", hash),
        is_free,
        family_slug: family_slug.to_string(),
        family_name: family_slug.replace('-', " "),
        category_slug: category.to_lowercase().replace(' ', "-"),
        category_name: category.to_string(),
        subcategory_slug: String::new(),
        subcategory_name: String::new(),
    }
}

pub fn response(results: Vec<IconSearchResult>, total: u64, has_more: bool) -> SearchResponse {
    let count = results.len() as u64;
    SearchResponse {
        query: "*".to_string(),
        results,
        pagination: Pagination {
            total,
            has_more,
            offset: 0,
            next_offset: count,
        },
    }
}

pub fn detail(hash: &str, name: &str) -> IconDetail {
    IconDetail {
        hash: hash.to_string(),
        name: name.to_string(),
        image_preview_url: String::new(),
        is_free: true,
        family_slug: "sharp-line".to_string(),
        family_name: "Sharp Line".to_string(),
        category_slug: String::new(),
        category_name: String::new(),
        subcategory_slug: String::new(),
        subcategory_name: String::new(),
        colors: None,
        tags: None,
        description: None,
    }
}
