use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::PageSizeOptions;
use crate::core::{PagerError, Result};
use crate::pagination::{DEFAULT_PAGE_SIZE, ResetPolicy};

/// Pagination defaults for a paged view
///
/// Loadable from JSON; every field is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaginationConfig")]
pub struct PaginationConfig {
    /// Page size used when a view is first shown
    pub default_page_size: usize,

    /// Choices offered by the page-size selector
    pub page_size_options: PageSizeOptions,

    /// Whether a collection length change returns to page 1
    pub reset_policy: ResetPolicy,
}

/// Config as written in JSON, before validation.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawPaginationConfig {
    default_page_size: usize,
    page_size_options: Vec<usize>,
    reset_policy: ResetPolicy,
}

impl Default for RawPaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PageSizeOptions::default().into(),
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl TryFrom<RawPaginationConfig> for PaginationConfig {
    type Error = PagerError;

    fn try_from(raw: RawPaginationConfig) -> Result<Self> {
        if raw.page_size_options.contains(&0) {
            return Err(PagerError::InvalidConfig(
                "page_size_options must be > 0".to_string(),
            ));
        }

        let page_size_options = PageSizeOptions::new(raw.page_size_options).ok_or_else(|| {
            PagerError::InvalidConfig("page_size_options cannot be empty".to_string())
        })?;

        let config = Self {
            default_page_size: raw.default_page_size,
            page_size_options,
            reset_policy: raw.reset_policy,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PageSizeOptions::default(),
            reset_policy: ResetPolicy::default(),
        }
    }

    /// Set the initial page size
    pub fn default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Set the selector choices
    pub fn page_size_options(mut self, options: PageSizeOptions) -> Self {
        self.page_size_options = options;
        self
    }

    /// Set the reset policy
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Parse from a JSON document
    ///
    /// # Examples
    ///
    /// ```
    /// use rustpager::{PaginationConfig, ResetPolicy};
    ///
    /// let config = PaginationConfig::from_json_str(
    ///     r#"{ "default_page_size": 25, "reset_policy": "on_replace_only" }"#,
    /// ).unwrap();
    /// assert_eq!(config.default_page_size, 25);
    /// assert_eq!(config.reset_policy, ResetPolicy::OnReplaceOnly);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawPaginationConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(PagerError::InvalidConfig(
                "default_page_size must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
