//! Response envelope and handler result normalization
//!
//! Every response leaves the API in one canonical [`Envelope`] shape:
//! plain content, an error, a field-validation failure, or a paginated
//! result. [`normalize`] turns whatever a handler produced into the right
//! variant; values that are already in their final shape pass through
//! unchanged, so normalization is idempotent.
//!
//! Dispatch is a closed set of [`Normalize`] implementations, checked in
//! this order of specificity:
//!
//! 1. An [`Envelope`], [`ErrorResponse`] or [`FailureResponse`] is already
//!    wrapped and is returned as-is. Opaque transport values (a pre-built
//!    [`axum::response::Response`], binary bodies) never reach the
//!    normalizer at all; they implement `IntoResponse` themselves and pass
//!    the boundary untouched.
//! 2. A [`Page`] is already in its final shape and only changes container;
//!    a [`RawPage`] from a paging engine is adapted (0-based index becomes
//!    the 1-based page number) exactly once.
//! 3. An absent value becomes `{"content": null}`.
//! 4. Anything else becomes `{"content": <value>}`.
//!
//! # Example
//!
//! ```rust
//! use manila::envelope::{normalize, Envelope};
//!
//! let envelope = normalize(Some("hello"));
//! assert_eq!(envelope, Envelope::of("hello"));
//!
//! // Normalizing an envelope is a no-op
//! assert_eq!(normalize(envelope.clone()), envelope);
//! ```

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    page::{Page, RawPage},
    sorting::Sorting,
    validation::{group_by_field, FieldFailure},
};

/// Single machine/human error pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable code, the stringified transport status
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Error body with the given code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = status_from_code(&self.code, StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Validation failures grouped by field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureResponse {
    /// Machine-readable code, the stringified transport status
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Failures per field, in violation order within each field
    pub failures: HashMap<String, Vec<FieldFailure>>,
}

impl FailureResponse {
    /// Failure body grouping the given violations by field
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        failures: Vec<FieldFailure>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            failures: group_by_field(failures),
        }
    }
}

impl IntoResponse for FailureResponse {
    fn into_response(self) -> Response {
        let status = status_from_code(&self.code, StatusCode::BAD_REQUEST);
        (status, Json(self)).into_response()
    }
}

/// Paginated collection in its wire shape
///
/// Isomorphic to [`Page`]; this is the JSON contract, camelCase fields and
/// all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Elements in this page
    pub content: Vec<T>,
    /// Requested page size
    pub size: u32,
    /// Page number, starting at 1
    pub page: u32,
    /// Total number of elements across all pages
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Number of elements actually in this page
    pub elements_in_page: u32,
    /// Whether this is the first page
    pub first: bool,
    /// Whether this is the last page
    pub last: bool,
    /// Sorting that produced this page
    pub sort: Sorting,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.content,
            size: page.size,
            page: page.page,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            elements_in_page: page.elements_in_page,
            first: page.first,
            last: page.last,
            sort: page.sort,
        }
    }
}

impl<T> From<RawPage<T>> for PaginatedResponse<T> {
    fn from(raw: RawPage<T>) -> Self {
        Page::from(raw).into()
    }
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        self.normalize().into_response()
    }
}

impl<T: Serialize> IntoResponse for RawPage<T> {
    fn into_response(self) -> Response {
        self.normalize().into_response()
    }
}

/// The canonical outward response wrapper
///
/// Serialization is untagged: each variant keeps its own wire shape.
///
/// # Example
///
/// ```rust
/// use manila::envelope::Envelope;
///
/// let json = serde_json::to_value(Envelope::of(7)).unwrap();
/// assert_eq!(json, serde_json::json!({"content": 7}));
///
/// let empty = serde_json::to_value(Envelope::<i32>::empty()).unwrap();
/// assert_eq!(empty, serde_json::json!({"content": null}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T = ()> {
    /// Arbitrary successful content, possibly absent
    Content {
        /// The wrapped value; serializes as `null` when absent
        content: Option<T>,
    },
    /// Paginated collection
    Paginated(PaginatedResponse<T>),
    /// Error pair
    Error(ErrorResponse),
    /// Field-validation failures
    Failure(FailureResponse),
}

impl<T> Envelope<T> {
    /// Envelope around a successful value
    pub fn of(content: T) -> Self {
        Self::Content {
            content: Some(content),
        }
    }

    /// Envelope with no content
    #[must_use]
    pub fn empty() -> Self {
        Self::Content { content: None }
    }

    /// Error envelope
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error(ErrorResponse::new(code, message))
    }

    /// Failure envelope grouping the given violations by field
    pub fn failure(
        code: impl Into<String>,
        message: impl Into<String>,
        failures: Vec<FieldFailure>,
    ) -> Self {
        Self::Failure(FailureResponse::new(code, message, failures))
    }

    /// Envelope around a paginated result
    pub fn paginated(page: impl Into<PaginatedResponse<T>>) -> Self {
        Self::Paginated(page.into())
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Content { .. } | Self::Paginated(_) => StatusCode::OK,
            Self::Error(error) => status_from_code(&error.code, StatusCode::INTERNAL_SERVER_ERROR),
            Self::Failure(failure) => status_from_code(&failure.code, StatusCode::BAD_REQUEST),
        };
        (status, Json(self)).into_response()
    }
}

/// Parse an envelope code back into its transport status.
///
/// The code carried by error and failure bodies is the stringified status
/// code; anything unparsable falls back to the given default.
fn status_from_code(code: &str, fallback: StatusCode) -> StatusCode {
    code.parse::<u16>()
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(fallback)
}

/// Conversion of a handler result into its canonical [`Envelope`]
///
/// Implementations form the closed set of shapes the boundary recognizes;
/// see the module docs for the dispatch order. Everything not in the set is
/// wrapped explicitly with [`Envelope::of`].
pub trait Normalize {
    /// Element type carried by the resulting envelope
    type Content: Serialize;

    /// Produce the canonical envelope for this value
    fn normalize(self) -> Envelope<Self::Content>;
}

/// Normalize a handler result into its canonical [`Envelope`].
///
/// # Example
///
/// ```rust
/// use manila::envelope::{normalize, Envelope};
///
/// assert_eq!(normalize(None::<u32>), Envelope::empty());
/// ```
pub fn normalize<V: Normalize>(value: V) -> Envelope<V::Content> {
    value.normalize()
}

impl<T: Serialize> Normalize for Envelope<T> {
    type Content = T;

    /// Already wrapped; normalization is a no-op.
    fn normalize(self) -> Envelope<T> {
        self
    }
}

impl Normalize for ErrorResponse {
    type Content = ();

    fn normalize(self) -> Envelope {
        Envelope::Error(self)
    }
}

impl Normalize for FailureResponse {
    type Content = ();

    fn normalize(self) -> Envelope {
        Envelope::Failure(self)
    }
}

impl<T: Serialize> Normalize for PaginatedResponse<T> {
    type Content = T;

    /// Already in wire shape; only the container changes.
    fn normalize(self) -> Envelope<T> {
        Envelope::Paginated(self)
    }
}

impl<T: Serialize> Normalize for Page<T> {
    type Content = T;

    /// A `Page` is already 1-based; no numeric correction happens here.
    fn normalize(self) -> Envelope<T> {
        Envelope::Paginated(self.into())
    }
}

impl<T: Serialize> Normalize for RawPage<T> {
    type Content = T;

    /// Engine pages are adapted on the way through.
    fn normalize(self) -> Envelope<T> {
        Envelope::Paginated(self.into())
    }
}

impl<T: Serialize> Normalize for Option<T> {
    type Content = T;

    fn normalize(self) -> Envelope<T> {
        match self {
            Some(content) => Envelope::of(content),
            None => Envelope::empty(),
        }
    }
}

impl<T: Serialize> Normalize for Vec<T> {
    type Content = Vec<T>;

    fn normalize(self) -> Envelope<Vec<T>> {
        Envelope::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RawOrder;
    use serde_json::json;

    fn raw_page() -> RawPage<u32> {
        RawPage {
            index: 0,
            content: vec![1, 2],
            size: 2,
            total_elements: 4,
            total_pages: 2,
            elements_in_page: 2,
            first: true,
            last: false,
            orders: vec![RawOrder::new("name", false)],
        }
    }

    #[test]
    fn test_normalize_plain_value() {
        assert_eq!(normalize(Some(42)), Envelope::of(42));
    }

    #[test]
    fn test_normalize_absent_value() {
        assert_eq!(normalize(None::<u32>), Envelope::empty());
    }

    #[test]
    fn test_normalize_vec_wraps_as_content() {
        assert_eq!(normalize(vec![1, 2]), Envelope::of(vec![1, 2]));
    }

    #[test]
    fn test_normalize_envelope_is_identity() {
        let envelope = Envelope::of("x");
        assert_eq!(normalize(envelope.clone()), envelope);
    }

    #[test]
    fn test_normalize_error_passes_through() {
        let error = ErrorResponse::new("400", "Bad request");
        assert_eq!(normalize(error.clone()), Envelope::Error(error));
    }

    #[test]
    fn test_normalize_raw_page_adapts_index() {
        let Envelope::Paginated(paginated) = normalize(raw_page()) else {
            panic!("expected paginated envelope");
        };
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.sort, Sorting::desc("name"));
    }

    #[test]
    fn test_normalize_page_keeps_page_number() {
        let page = Page::from(raw_page());
        let Envelope::Paginated(paginated) = normalize(page) else {
            panic!("expected paginated envelope");
        };
        // Adapted once on ingestion, untouched on emission
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn test_normalize_is_idempotent_for_pages() {
        let once = normalize(raw_page());
        assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn test_content_wire_shape() {
        let json = serde_json::to_value(Envelope::of("hello")).unwrap();
        assert_eq!(json, json!({"content": "hello"}));
    }

    #[test]
    fn test_empty_content_serializes_null() {
        let json = serde_json::to_value(Envelope::<u32>::empty()).unwrap();
        assert_eq!(json, json!({"content": null}));
    }

    #[test]
    fn test_paginated_wire_shape() {
        let json = serde_json::to_value(normalize(raw_page())).unwrap();
        assert_eq!(
            json,
            json!({
                "content": [1, 2],
                "size": 2,
                "page": 1,
                "totalElements": 4,
                "totalPages": 2,
                "elementsInPage": 2,
                "first": true,
                "last": false,
                "sort": {"properties": [{"name": "name", "direction": "DESC"}]}
            })
        );
    }

    #[test]
    fn test_error_wire_shape() {
        let json = serde_json::to_value(Envelope::<()>::error("404", "Id 1 not found")).unwrap();
        assert_eq!(json, json!({"code": "404", "message": "Id 1 not found"}));
    }

    #[test]
    fn test_failure_wire_shape() {
        let failures = vec![FieldFailure::new("empty", "missing", "name")];
        let json =
            serde_json::to_value(Envelope::<()>::failure("400", "Field validation failure", failures))
                .unwrap();
        assert_eq!(
            json,
            json!({
                "code": "400",
                "message": "Field validation failure",
                "failures": {
                    "name": [{"code": "empty", "message": "missing", "field": "name"}]
                }
            })
        );
    }

    #[test]
    fn test_envelope_response_status() {
        assert_eq!(
            Envelope::of(1).into_response().status(),
            StatusCode::OK
        );
        assert_eq!(
            Envelope::<()>::error("404", "Id 1 not found")
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Envelope::<()>::failure("400", "Field validation failure", vec![])
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_status_from_code_fallback() {
        assert_eq!(
            status_from_code("nope", StatusCode::INTERNAL_SERVER_ERROR),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_from_code("503", StatusCode::OK), StatusCode::SERVICE_UNAVAILABLE);
    }
}
