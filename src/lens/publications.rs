// Publication fetching — one page of a profile's feed, comments removed.
//
// The feed shows top-level activity only, so comments are dropped here.
// Everything else (posts, mirrors, kinds we don't know) passes through in
// the order the API returned it.

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::client::QueryClient;
use super::models::{PageInfo, ProfileId, Publication};
use super::queries::{PublicationsData, PUBLICATIONS};
use crate::error::FetchError;

/// Optional paging parameters for the publications request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

/// A filtered page of publications.
#[derive(Debug, Clone, Default)]
pub struct PublicationsPage {
    pub items: Vec<Publication>,
    pub page_info: Option<PageInfo>,
}

/// Remove every comment, keeping the rest in order.
pub fn without_comments(publications: Vec<Publication>) -> Vec<Publication> {
    publications.into_iter().filter(|p| !p.is_comment()).collect()
}

/// Build the `request` variable for the publications query.
///
/// An unresolved profile is sent as `null`; the API rejects that, which is
/// how an unresolved handle ends up as an empty feed.
pub fn request_variables(profile_id: Option<&ProfileId>, page: &PageRequest) -> Value {
    let mut request = Map::new();
    request.insert(
        "profileId".to_string(),
        profile_id.map_or(Value::Null, |id| Value::String(id.0.clone())),
    );
    if let Some(limit) = page.limit {
        request.insert("limit".to_string(), json!(limit));
    }
    if let Some(cursor) = &page.cursor {
        request.insert("cursor".to_string(), json!(cursor));
    }
    json!({ "request": request })
}

/// Fetch one page of publications for `profile_id`, dropping comments
/// unless `include_comments` is set.
///
/// Missing `data`, `publications`, or `items` all count as an empty page.
pub async fn fetch_publications(
    client: &dyn QueryClient,
    profile_id: Option<&ProfileId>,
    page: &PageRequest,
    include_comments: bool,
) -> Result<PublicationsPage, FetchError> {
    let response = client
        .query(PUBLICATIONS, request_variables(profile_id, page))
        .await
        .map_err(|e| FetchError::Request(format!("{e:#}")))?;

    if let Some(message) = response.error_message() {
        return Err(FetchError::GraphQl(message));
    }

    let Some(data) = response.data.filter(|d| !d.is_null()) else {
        debug!("Publications response had no data");
        return Ok(PublicationsPage::default());
    };

    let data: PublicationsData =
        serde_json::from_value(data).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let (items, page_info) = match data.publications {
        Some(connection) => (connection.items.unwrap_or_default(), connection.page_info),
        None => (Vec::new(), None),
    };

    let fetched = items.len();
    let items = if include_comments {
        items
    } else {
        without_comments(items)
    };

    info!(
        fetched,
        kept = items.len(),
        profile_id = profile_id.map(ProfileId::as_str).unwrap_or("<none>"),
        "Fetched publications"
    );

    Ok(PublicationsPage { items, page_info })
}
