// Lens API access — GraphQL client, query documents, and the two pipeline
// steps (resolve a profile, fetch its publications).

pub mod client;
pub mod models;
pub mod publications;
pub mod queries;
pub mod resolve;
