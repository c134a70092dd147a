// Identity resolution — turn a (profile id, handle) pair into a profile id.
//
// A profile id always wins and short-circuits the lookup. A handle is
// normalized to its `.lens` form and looked up through the profile query.
// Lookup failures are reported but never stop the pipeline: the caller
// carries on with no id and lets the publications fetch fail on its own.

use serde_json::json;
use tracing::{debug, warn};

use super::client::QueryClient;
use super::models::{Handle, ProfileId};
use super::queries::{ProfileData, PROFILE_BY_HANDLE};
use crate::error::ResolutionError;

/// What the resolver produced: an id (if any), and the error that stopped it
/// from producing one.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub profile_id: Option<ProfileId>,
    pub error: Option<ResolutionError>,
}

/// Resolve the identifier to use for the publications fetch.
///
/// - `profile_id` set: used as-is, `handle` ignored, no request made.
/// - only `handle` set: normalized and looked up.
/// - neither: nothing to resolve.
///
/// Blank strings count as not set.
pub async fn resolve_profile_id(
    client: &dyn QueryClient,
    profile_id: Option<&ProfileId>,
    handle: Option<&str>,
) -> Resolution {
    let profile_id = profile_id.filter(|id| !id.as_str().trim().is_empty());
    let handle = handle.filter(|h| !h.trim().is_empty());

    if let Some(id) = profile_id {
        return Resolution {
            profile_id: Some(id.clone()),
            error: None,
        };
    }

    let Some(raw) = handle else {
        debug!("No profile id or handle supplied, nothing to resolve");
        return Resolution::default();
    };

    let handle = Handle::normalize(raw);
    match lookup_profile(client, &handle).await {
        Ok(id) => {
            debug!(handle = %handle, profile_id = %id, "Resolved handle");
            Resolution {
                profile_id: Some(id),
                error: None,
            }
        }
        Err(e) => {
            warn!(handle = %handle, error = %e, "Failed to resolve handle");
            Resolution {
                profile_id: None,
                error: Some(e),
            }
        }
    }
}

/// Look up a single normalized handle.
pub async fn lookup_profile(
    client: &dyn QueryClient,
    handle: &Handle,
) -> Result<ProfileId, ResolutionError> {
    let response = client
        .query(PROFILE_BY_HANDLE, json!({ "handle": handle.as_str() }))
        .await
        .map_err(|e| ResolutionError::Request {
            handle: handle.to_string(),
            reason: format!("{e:#}"),
        })?;

    if let Some(message) = response.error_message() {
        return Err(ResolutionError::GraphQl {
            handle: handle.to_string(),
            message,
        });
    }

    let not_found = || ResolutionError::NotFound {
        handle: handle.to_string(),
    };

    let data = response.data.filter(|d| !d.is_null()).ok_or_else(not_found)?;
    let data: ProfileData =
        serde_json::from_value(data).map_err(|e| ResolutionError::Malformed {
            handle: handle.to_string(),
            reason: e.to_string(),
        })?;

    data.profile.map(|p| p.id).ok_or_else(not_found)
}
