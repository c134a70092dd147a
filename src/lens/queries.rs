// GraphQL documents and the response shapes the pipeline reads from them.

use serde::Deserialize;

use super::models::{PageInfo, ProfileId, Publication};

/// Look up a profile by its full handle.
pub const PROFILE_BY_HANDLE: &str = r#"
query Profile($handle: Handle!) {
  profile(request: { handle: $handle }) {
    id
    handle
    name
  }
}
"#;

/// Fetch one page of a profile's publications.
pub const PUBLICATIONS: &str = r#"
query Publications($request: PublicationsQueryRequest!) {
  publications(request: $request) {
    items {
      __typename
      ... on Post { ...PublicationFields }
      ... on Comment { ...PublicationFields }
      ... on Mirror {
        ...PublicationFields
        mirrorOf {
          ... on Post { id }
          ... on Comment { id }
        }
      }
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}

fragment PublicationFields on Publication {
  id
  createdAt
  profile { id handle name }
  metadata { name description content }
  stats {
    totalUpvotes
    totalAmountOfMirrors
    totalAmountOfComments
    totalAmountOfCollects
  }
}
"#;

/// `data` of the profile lookup.
#[derive(Debug, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub profile: Option<ProfileRef>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRef {
    pub id: ProfileId,
}

/// `data` of the publications query.
#[derive(Debug, Deserialize)]
pub struct PublicationsData {
    #[serde(default)]
    pub publications: Option<PublicationsConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationsConnection {
    #[serde(default)]
    pub items: Option<Vec<Publication>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}
