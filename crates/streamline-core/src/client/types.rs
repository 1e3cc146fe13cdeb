use crate::errors::StreamlineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LIMIT: u32 = 50;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_PNG_SIZE: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Icons,
    Illustrations,
    Emoji,
    Elements,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Icons => "icons",
            ProductType::Illustrations => "illustrations",
            ProductType::Emoji => "emoji",
            ProductType::Elements => "elements",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = StreamlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "icons" => Ok(ProductType::Icons),
            "illustrations" => Ok(ProductType::Illustrations),
            "emoji" => Ok(ProductType::Emoji),
            "elements" => Ok(ProductType::Elements),
            other => Err(StreamlineError::InvalidOptions(format!(
                "unknown product type '{}' (expected icons, illustrations, emoji or elements)",
                other
            ))),
        }
    }
}

/// Parameters for one search call.
///
/// `query`, `product_type`, `limit` and `offset` are sent to the service.
/// `category`, `free_only` and `style` are not understood by the service and
/// are applied to the results after they arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: Option<String>,
    pub product_type: ProductType,
    pub limit: u32,
    pub offset: u32,
    pub category: Option<String>,
    pub free_only: bool,
    pub style: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: None,
            product_type: ProductType::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
            category: None,
            free_only: false,
            style: None,
        }
    }
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_free_only(mut self, free_only: bool) -> Self {
        self.free_only = free_only;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn validate(&self) -> Result<(), StreamlineError> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(StreamlineError::InvalidOptions(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }
        Ok(())
    }

    /// Query string parameters in the order the service documents them.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("productType", self.product_type.to_string())];
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("offset", self.offset.to_string()));
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgOptions {
    pub responsive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    /// Edge length in pixels; the service renders square images.
    pub size: Option<u32>,
}

impl PngOptions {
    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_PNG_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSearchResult {
    pub hash: String,
    pub name: String,
    #[serde(default)]
    pub image_preview_url: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub family_slug: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub category_slug: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub subcategory_slug: String,
    #[serde(default)]
    pub subcategory_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub has_more: bool,
    pub offset: u64,
    #[serde(default)]
    pub next_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    pub results: Vec<IconSearchResult>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDetail {
    pub hash: String,
    pub name: String,
    #[serde(default)]
    pub image_preview_url: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub family_slug: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub category_slug: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub subcategory_slug: String,
    #[serde(default)]
    pub subcategory_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error body returned by the service on non-200 responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}
