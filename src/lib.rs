// lensfeed: publications feeds for Lens Protocol profiles.
//
// This is the library root. `lens` talks to the API, `feed` holds the
// stateful list and its rendering, `output` prints it.

pub mod config;
pub mod error;
pub mod feed;
pub mod lens;
pub mod output;
