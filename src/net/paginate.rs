//! Paginated fetch engine
//!
//! Walks a cloud controller collection page by page, decoding each item into
//! a caller-chosen wire type and handing it to a visitor that decides whether
//! the walk continues.

use super::gateway::Gateway;
use crate::errors::ApiError;
use crate::resources::null_as_default;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// One page of a collection as returned by the server
#[derive(Debug, Default, Deserialize)]
pub struct PaginatedResources {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u64,
    /// Relative or absolute link to the following page
    #[serde(default)]
    pub next_url: Option<String>,
    /// Items are kept raw and decoded one at a time while visiting
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<Value>,
}

fn is_absolute(path: &str) -> bool {
    Url::parse(path)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Combine the API root with a page path.
///
/// Absolute `http(s)` paths are returned unchanged, anything else is appended
/// to `endpoint` with a single `/` between them.
pub fn page_url(endpoint: &str, path: &str) -> Result<String, ApiError> {
    let url = if is_absolute(path) {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    };

    Url::parse(&url).map_err(|source| ApiError::InvalidUrl {
        url: url.clone(),
        source,
    })?;

    Ok(url)
}

/// List a paginated collection, visiting every item in server order.
///
/// `visitor` returns `false` to stop the walk; no further item is decoded and
/// no further page is requested once it does. The first transport or decode
/// failure ends the walk with that error. Items already visited stay visited.
pub async fn list_paginated_resources<R, F, G>(
    gateway: &G,
    endpoint: &str,
    path: &str,
    mut visitor: F,
) -> Result<(), ApiError>
where
    R: DeserializeOwned,
    F: FnMut(R) -> bool,
    G: Gateway + ?Sized,
{
    let mut next_path = Some(path.to_string());
    let mut page_number: u64 = 0;

    while let Some(current) = next_path.take() {
        page_number += 1;
        let url = page_url(endpoint, &current)?;
        tracing::debug!("Fetching page {}: {}", page_number, url);

        let page: PaginatedResources = serde_json::from_value(gateway.get_page(&url).await?)?;
        tracing::debug!(
            "Page {} of {} holds {} resources ({} total)",
            page_number,
            page.total_pages,
            page.resources.len(),
            page.total_results
        );

        for item in page.resources {
            let resource: R = serde_json::from_value(item)?;
            if !visitor(resource) {
                tracing::debug!("Visitor stopped pagination on page {}", page_number);
                return Ok(());
            }
        }

        next_path = page.next_url.filter(|next| !next.is_empty());
    }

    Ok(())
}
