use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::Deserialize;

use crate::names;

/// The 1-based `page` query parameter. Absent, non-numeric, or non-positive values
/// fall back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(pub usize);

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for PageNumber {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = page_from_uri(&parts.uri).unwrap_or(names::DEFAULT_PAGE);
        Ok(PageNumber(page))
    }
}

/// Decode the query string and parse `page` as a positive number.
fn page_from_uri(uri: &Uri) -> Option<usize> {
    let Query(query) = Query::<PageQuery>::try_from_uri(uri).ok()?;
    query
        .page
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
}
