//! Axum extractors for pagination and sorting parameters
//!
//! These are the inbound half of the boundary: they read the raw `page`,
//! `size` and `sort` query parameters and hand the canonical
//! [`Pagination`] and [`Sorting`] values to handlers.
//!
//! Both extractors honor a [`WebConfig`] request extension when one is
//! installed (via `Extension(config)` on the router) and fall back to the
//! standard defaults otherwise.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use manila::{pagination::Pagination, sorting::Sorting};
//!
//! async fn list_widgets(pagination: Pagination, sorting: Sorting) -> String {
//!     format!("page {} of size {}, {} sort keys",
//!         pagination.page, pagination.size, sorting.properties.len())
//! }
//!
//! let app: Router = Router::new().route("/widgets", get(list_widgets));
//! ```

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use axum_extra::extract::Query as MultiQuery;
use serde::Deserialize;

use crate::{config::WebConfig, error::Error, pagination::Pagination, sorting::Sorting};

/// Raw `page`/`size` parameters, kept as strings so that non-numeric input
/// is rejected by the resolver rather than swallowed by deserialization
#[derive(Debug, Deserialize)]
struct RawPaginationParams {
    page: Option<String>,
    size: Option<String>,
}

/// Repeatable `sort` parameter
#[derive(Debug, Deserialize)]
struct RawSortParams {
    #[serde(default)]
    sort: Vec<String>,
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<WebConfig>()
            .cloned()
            .unwrap_or_default();

        let Query(params) = Query::<RawPaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::bad_input(rejection.to_string()))?;

        let pagination = Pagination::resolve_with(
            params.page.as_deref(),
            params.size.as_deref(),
            config.default_page,
            config.default_size,
        )?;

        Ok(pagination)
    }
}

impl<S> FromRequestParts<S> for Sorting
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Sorting extraction never rejects: unreadable parameters degrade to an
    /// unsorted result, matching the parser's drop-not-fail policy.
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<WebConfig>()
            .cloned()
            .unwrap_or_default();

        let specs = match MultiQuery::<RawSortParams>::from_request_parts(parts, state).await {
            Ok(MultiQuery(params)) => params.sort,
            Err(rejection) => {
                tracing::warn!(%rejection, "failed to read sort parameters");
                Vec::new()
            }
        };

        Ok(Sorting::parse(specs, config.sort_delimiter))
    }
}
