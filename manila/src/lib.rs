//! # manila
//!
//! Request/response normalization for axum APIs.
//!
//! Handlers read canonical [`Pagination`](pagination::Pagination) and
//! [`Sorting`](sorting::Sorting) values straight from their arguments, return
//! domain values or engine pages, and raise typed errors; the boundary turns
//! all of it into one consistent JSON envelope contract:
//!
//! - **Inbound**: the `page`/`size` parameters resolve with defaults and
//!   normalization, the repeatable `sort` parameter parses forgivingly into
//!   an ordered multi-key sort.
//! - **Outbound**: plain values wrap as `{"content": ...}`, engine pages
//!   become 1-based paginated bodies, and raised errors classify into
//!   `(status, body)` pairs that never leak internal detail.
//!
//! ## Example
//!
//! ```rust,no_run
//! use manila::prelude::*;
//!
//! async fn list_widgets(pagination: Pagination, sorting: Sorting) -> Result<RawPage<String>> {
//!     // hand pagination.offset() / sorting to the data layer...
//!     # let _ = (pagination, sorting);
//!     # unimplemented!()
//! }
//!
//! async fn get_widget(Path(id): Path<u64>) -> Result<Envelope<String>> {
//!     Err(Error::not_found("widget", id))
//! }
//!
//! let app: Router = Router::new()
//!     .route("/widgets", get(list_widgets))
//!     .route("/widgets/{id}", get(get_widget))
//!     .layer(Extension(WebConfig::default()));
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod observability;
pub mod page;
pub mod pagination;
pub mod sorting;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::WebConfig;
    pub use crate::envelope::{
        normalize, Envelope, ErrorResponse, FailureResponse, Normalize, PaginatedResponse,
    };
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::page::{Page, RawOrder, RawPage};
    pub use crate::pagination::{Pagination, ParameterFormatError, DEFAULT_PAGE, DEFAULT_SIZE};
    pub use crate::sorting::{Direction, Property, Sorting, DEFAULT_SORT_DELIMITER};
    pub use crate::validation::{failure_code, group_by_field, FieldFailure};

    pub use axum::{
        extract::{Path, Query, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Json, Response},
        routing::{delete, get, patch, post, put},
        Extension, Router,
    };

    pub use serde::{Deserialize, Serialize};

    // Re-export tracing macros
    pub use tracing::{debug, error, info, instrument, trace, warn};
}
