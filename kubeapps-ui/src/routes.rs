use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Application routes the landing page links to.
///
/// The routes themselves are served by the host dashboard; this crate only
/// knows their paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Catalog,
    Apps,
    RepositoryConfig,
    Operators,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Catalog,
        Route::Apps,
        Route::RepositoryConfig,
        Route::Operators,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Catalog => "/catalog",
            Self::Apps => "/apps",
            Self::RepositoryConfig => "/config/repos",
            Self::Operators => "/operators",
        }
    }

    /// Link target for this route under `base_path`.
    pub fn href(&self, base_path: &str) -> String {
        let base = base_path.trim_end_matches('/');
        format!("{}{}", base, self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| Error::UnknownRoute(s.to_string()))
    }
}
