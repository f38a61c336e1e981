//! Offset/limit resolution for list endpoints.

use crate::error::CoreError;

/// Rows skipped when the caller omits `skip`.
pub const DEFAULT_SKIP: i64 = 0;

/// Rows returned when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// A resolved page window. Both fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Apply defaults and reject negative values.
///
/// No upper bound is applied to `limit`.
pub fn resolve_page(skip: Option<i64>, limit: Option<i64>) -> Result<Page, CoreError> {
    let skip = skip.unwrap_or(DEFAULT_SKIP);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if skip < 0 {
        return Err(CoreError::Validation(format!(
            "skip must be non-negative, got {skip}"
        )));
    }
    if limit < 0 {
        return Err(CoreError::Validation(format!(
            "limit must be non-negative, got {limit}"
        )));
    }

    Ok(Page { skip, limit })
}
