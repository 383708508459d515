// src/config/options.rs
use super::consts::DEFAULT_DATA_BASE_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Base URL the page sources are resolved against. Should end with `/`
    /// so relative file names land inside it rather than replacing its last segment.
    pub data_base_url: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { data_base_url: s!(DEFAULT_DATA_BASE_URL) }
    }
}

impl DashboardOptions {
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self { data_base_url: url.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Ranking,
    Roles,
    Means,
    Champions,
    Matches,
}
