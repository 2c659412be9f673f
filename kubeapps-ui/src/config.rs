//! UI configuration
//!
//! The dashboard can be served under a path prefix. The prefix is fixed at
//! build time, either as a full JSON document in `KUBEAPPS_UI_CONFIG` or as
//! just the path in `KUBEAPPS_BASE_PATH`.

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_TITLE: &str = "Kubeapps";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Path prefix every link is resolved under
    pub base_path: String,
    /// Document title
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl UiConfig {
    pub fn new(base_path: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        let config = Self {
            base_path: base_path.into(),
            title: title.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration captured at compile time.
    pub fn from_build_env() -> Result<Self> {
        Self::from_sources(
            option_env!("KUBEAPPS_UI_CONFIG"),
            option_env!("KUBEAPPS_BASE_PATH"),
        )
    }

    /// JSON document first, then a bare base path, then defaults.
    pub fn from_sources(json: Option<&str>, base_path: Option<&str>) -> Result<Self> {
        match (json, base_path) {
            (Some(json), _) => Self::from_json(json),
            (None, Some(base_path)) => Self::new(base_path, DEFAULT_TITLE),
            (None, None) => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.base_path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "base path must start with '/': {:?}",
                self.base_path
            )));
        }
        if self.base_path.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(format!(
                "base path must not contain whitespace: {:?}",
                self.base_path
            )));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidConfig("title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Href for a static asset served under the base path.
    pub fn asset_href(&self, asset: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            asset.trim_start_matches('/')
        )
    }

    /// Path the landing page itself is mounted at.
    pub fn home_path(&self) -> String {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        }
    }
}
