//! Pagination parameters for list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters shared by every paginated listing: `per-page` (1–100,
/// default 25) and `page` (1-based, default 1).
///
/// Deserialization accepts any values; call [`PageRequest::clamped`] before
/// use to pull them into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    25
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }

    /// Row offset for the current page. Computed in u64 so a huge `page`
    /// value from the query string cannot overflow.
    pub fn offset(self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.per_page)
    }
}
