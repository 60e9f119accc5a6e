//! Pagination model and request parameter resolution
//!
//! A [`Pagination`] is the canonical, 1-based description of the page a
//! caller asked for. The resolver turns the raw `page`/`size` request
//! parameters into one, applying defaults and normalization:
//!
//! - an absent parameter falls back to its default (page 1, size 10);
//! - a non-numeric parameter is a hard error ([`ParameterFormatError`],
//!   surfaced as a 400);
//! - a numeric but non-positive parameter is silently replaced by the
//!   default.
//!
//! Paging engines count pages from 0, so the boundary conversion
//! (`internal = external - 1`) happens in [`Pagination::offset`]; an unpaged
//! value yields no window at all and must never be turned into a bounded
//! page request downstream.
//!
//! # Example
//!
//! ```rust
//! use manila::pagination::Pagination;
//!
//! let pagination = Pagination::resolve(Some("3"), None).unwrap();
//! assert_eq!(pagination.page, 3);
//! assert_eq!(pagination.size, 10);
//! assert_eq!(pagination.offset(), Some(20));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page number when the request carries none
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when the request carries none
pub const DEFAULT_SIZE: u32 = 10;

/// A `page` or `size` parameter that was present but not numeric
///
/// Unlike malformed sort specs, which are dropped, a malformed numeric is
/// rejected: the caller sent something that cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for parameter {name}")]
pub struct ParameterFormatError {
    /// Name of the offending parameter
    pub name: &'static str,
    /// The raw value received
    pub value: String,
}

impl ParameterFormatError {
    fn new(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Pagination to apply when reading data
///
/// `page` is 1-based at this boundary. The invariant `page >= 1 && size >= 1`
/// holds whenever `paged` is true; an unpaged value carries no page/size
/// semantics.
///
/// # Example
///
/// ```rust
/// use manila::pagination::Pagination;
///
/// let pagination = Pagination::of(2, 20);
/// assert_eq!(pagination.offset(), Some(20));
///
/// let unpaged = Pagination::unpaged();
/// assert_eq!(unpaged.offset(), None);
/// assert_eq!(unpaged.limit(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number, starting at 1
    pub page: u32,
    /// Number of elements per page
    pub size: u32,
    /// Whether this request is bounded to a page at all
    pub paged: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::of(DEFAULT_PAGE, DEFAULT_SIZE)
    }
}

impl Pagination {
    /// Paged request for the given page and size.
    ///
    /// Zero values are lifted to 1 to keep the invariant; the resolver is the
    /// place where default substitution happens.
    #[must_use]
    pub fn of(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
            paged: true,
        }
    }

    /// First page with the given size
    #[must_use]
    pub fn first(size: u32) -> Self {
        Self::of(1, size)
    }

    /// Request without page bounds
    #[must_use]
    pub fn unpaged() -> Self {
        Self {
            page: 0,
            size: 0,
            paged: false,
        }
    }

    /// 0-based element offset for a paging engine, `None` when unpaged.
    ///
    /// This is where the external 1-based page number becomes the engine's
    /// 0-based window.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.paged
            .then(|| u64::from(self.page.saturating_sub(1)) * u64::from(self.size))
    }

    /// Element limit for a paging engine, `None` when unpaged
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.paged.then_some(self.size)
    }

    /// Resolve raw request parameters with the standard defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterFormatError`] when a present parameter is not a
    /// valid integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::pagination::Pagination;
    ///
    /// assert_eq!(Pagination::resolve(None, None).unwrap(), Pagination::of(1, 10));
    /// assert_eq!(Pagination::resolve(Some("-1"), None).unwrap().page, 1);
    /// assert!(Pagination::resolve(Some("abc"), None).is_err());
    /// ```
    pub fn resolve(
        raw_page: Option<&str>,
        raw_size: Option<&str>,
    ) -> Result<Self, ParameterFormatError> {
        Self::resolve_with(raw_page, raw_size, DEFAULT_PAGE, DEFAULT_SIZE)
    }

    /// Resolve raw request parameters against configured defaults.
    ///
    /// The result is always paged; there is no unpaged path at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterFormatError`] when a present parameter is not a
    /// valid integer.
    pub fn resolve_with(
        raw_page: Option<&str>,
        raw_size: Option<&str>,
        default_page: u32,
        default_size: u32,
    ) -> Result<Self, ParameterFormatError> {
        let page = resolve_parameter("page", raw_page, default_page)?;
        let size = resolve_parameter("size", raw_size, default_size)?;

        Ok(Self::of(page, size))
    }
}

/// Resolve one numeric parameter: default when absent, error when
/// non-numeric, default substitution when non-positive.
fn resolve_parameter(
    name: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, ParameterFormatError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let parsed: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ParameterFormatError::new(name, raw))?;
    if parsed > 0 {
        Ok(parsed as u32)
    } else {
        tracing::warn!(parameter = name, received = parsed, substituted = default, "non-positive parameter, substituting default");
        Ok(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_when_absent() {
        let pagination = Pagination::resolve(None, None).unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.size, 10);
        assert!(pagination.paged);
    }

    #[test]
    fn test_resolve_reads_parameters() {
        let pagination = Pagination::resolve(Some("4"), Some("25")).unwrap();
        assert_eq!(pagination.page, 4);
        assert_eq!(pagination.size, 25);
    }

    #[test]
    fn test_resolve_substitutes_default_for_negative_page() {
        let pagination = Pagination::resolve(Some("-1"), None).unwrap();
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn test_resolve_substitutes_default_for_zero_size() {
        let pagination = Pagination::resolve(None, Some("0")).unwrap();
        assert_eq!(pagination.size, 10);
    }

    #[test]
    fn test_resolve_rejects_non_numeric_page() {
        let err = Pagination::resolve(Some("abc"), None).unwrap_err();
        assert_eq!(err.name, "page");
        assert_eq!(err.value, "abc");
    }

    #[test]
    fn test_resolve_rejects_non_numeric_size() {
        let err = Pagination::resolve(None, Some("ten")).unwrap_err();
        assert_eq!(err.name, "size");
    }

    #[test]
    fn test_resolve_rejects_overflowing_page() {
        assert!(Pagination::resolve(Some("99999999999"), None).is_err());
    }

    #[test]
    fn test_resolve_with_configured_defaults() {
        let pagination = Pagination::resolve_with(None, Some("-5"), 1, 50).unwrap();
        assert_eq!(pagination.size, 50);
    }

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(Pagination::of(1, 10).offset(), Some(0));
        assert_eq!(Pagination::of(3, 10).offset(), Some(20));
    }

    #[test]
    fn test_unpaged_has_no_window() {
        let unpaged = Pagination::unpaged();
        assert!(!unpaged.paged);
        assert_eq!(unpaged.offset(), None);
        assert_eq!(unpaged.limit(), None);
    }

    #[test]
    fn test_of_lifts_zero_to_one() {
        let pagination = Pagination::of(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.size, 1);
    }

    #[test]
    fn test_default_is_first_page() {
        assert_eq!(Pagination::default(), Pagination::of(1, 10));
    }
}
