// Feed — the stateful publications list for one profile.
//
// A feed either shows caller-supplied publications or runs the
// resolve -> fetch pipeline and stores the result. Loads can overlap (the
// caller may change the profile while a fetch is in flight); each load takes
// a sequence number when it starts, and only the most recently started load
// is allowed to write its result.

pub mod display;
pub mod policy;
pub mod render;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::lens::client::QueryClient;
use crate::lens::models::{PageInfo, ProfileId, Publication};
use crate::lens::publications::{self, PageRequest};
use crate::lens::resolve;

use display::DisplayConfig;
use policy::{AlwaysForward, InteractionHandler, InteractionPolicy};
use render::RenderedItem;

/// Whether a pipeline run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Fetching,
}

/// Outcome of the most recent settled load.
#[derive(Debug, Clone)]
pub enum FeedStatus {
    /// Nothing has settled yet.
    Pending,
    Ready,
    /// The pipeline hit an error. The publications list is whatever it was
    /// before (or empty on the first load).
    Failed(FeedError),
}

impl FeedStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FeedStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&FeedError> {
        match self {
            FeedStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Behavior switches that apply for the lifetime of a feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedOptions {
    /// Drop comments from caller-supplied lists too. Off by default:
    /// supplied lists are shown verbatim.
    pub filter_supplied: bool,
    /// Keep comments in fetched pages. Off by default.
    pub include_comments: bool,
}

/// Inputs a host hands to the feed.
#[derive(Clone)]
pub struct FeedProps {
    pub profile_id: Option<ProfileId>,
    pub handle: Option<String>,
    /// Pre-fetched publications. When non-empty, no request is made.
    pub publications: Option<Vec<Publication>>,
    pub page: PageRequest,
    pub display: DisplayConfig,
    pub on_interaction: Option<InteractionHandler>,
    pub policy: Arc<dyn InteractionPolicy>,
}

impl Default for FeedProps {
    fn default() -> Self {
        Self {
            profile_id: None,
            handle: None,
            publications: None,
            page: PageRequest::default(),
            display: DisplayConfig::default(),
            on_interaction: None,
            policy: Arc::new(AlwaysForward),
        }
    }
}

impl FeedProps {
    pub fn for_profile(id: impl Into<String>) -> Self {
        Self {
            profile_id: Some(ProfileId::new(id)),
            ..Self::default()
        }
    }

    pub fn for_handle(handle: impl Into<String>) -> Self {
        Self {
            handle: Some(handle.into()),
            ..Self::default()
        }
    }

    fn supplied(&self) -> Option<&[Publication]> {
        self.publications.as_deref().filter(|p| !p.is_empty())
    }

    fn inputs(&self) -> LoadInputs {
        LoadInputs {
            profile_id: self.profile_id.clone(),
            handle: self.handle.clone(),
            publications: self.publications.clone(),
            page: self.page.clone(),
        }
    }
}

/// The props that decide what gets loaded. A change here triggers a reload.
#[derive(Debug, Clone, PartialEq)]
struct LoadInputs {
    profile_id: Option<ProfileId>,
    handle: Option<String>,
    publications: Option<Vec<Publication>>,
    page: PageRequest,
}

/// What happened to a load's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The supplied list was used; no request made.
    Supplied,
    /// The pipeline ran and its result was stored.
    Applied,
    /// A newer load started before this one settled; result discarded.
    Superseded,
}

/// Point-in-time copy of the feed state.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub phase: FeedPhase,
    pub status: FeedStatus,
    pub publications: Vec<Publication>,
    pub page_info: Option<PageInfo>,
}

struct FeedState {
    phase: FeedPhase,
    status: FeedStatus,
    publications: Vec<Publication>,
    page_info: Option<PageInfo>,
    last_inputs: Option<LoadInputs>,
}

pub struct Feed {
    client: Arc<dyn QueryClient>,
    options: FeedOptions,
    latest: AtomicU64,
    state: Mutex<FeedState>,
}

impl Feed {
    pub fn new(client: Arc<dyn QueryClient>) -> Self {
        Self::with_options(client, FeedOptions::default())
    }

    pub fn with_options(client: Arc<dyn QueryClient>, options: FeedOptions) -> Self {
        Self {
            client,
            options,
            latest: AtomicU64::new(0),
            state: Mutex::new(FeedState {
                phase: FeedPhase::Idle,
                status: FeedStatus::Pending,
                publications: Vec::new(),
                page_info: None,
                last_inputs: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load when the identifying props differ from the last load (or on the
    /// first call). Returns None when nothing changed.
    pub async fn update(&self, props: &FeedProps) -> Option<LoadOutcome> {
        let inputs = props.inputs();
        if self.lock().last_inputs.as_ref() == Some(&inputs) {
            debug!("Feed inputs unchanged, skipping reload");
            return None;
        }
        Some(self.load(props).await)
    }

    /// Load unconditionally: use the supplied list, or run the pipeline.
    ///
    /// Never fails. Errors end up in the feed's status.
    pub async fn load(&self, props: &FeedProps) -> LoadOutcome {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(supplied) = props.supplied() {
            let publications = if self.options.filter_supplied {
                publications::without_comments(supplied.to_vec())
            } else {
                supplied.to_vec()
            };
            debug!(count = publications.len(), "Using supplied publications");
            let mut state = self.lock();
            state.publications = publications;
            state.page_info = None;
            state.status = FeedStatus::Ready;
            state.phase = FeedPhase::Idle;
            state.last_inputs = Some(props.inputs());
            return LoadOutcome::Supplied;
        }

        {
            let mut state = self.lock();
            state.phase = FeedPhase::Fetching;
            state.last_inputs = Some(props.inputs());
        }

        let resolution = resolve::resolve_profile_id(
            self.client.as_ref(),
            props.profile_id.as_ref(),
            props.handle.as_deref(),
        )
        .await;

        let fetched = publications::fetch_publications(
            self.client.as_ref(),
            resolution.profile_id.as_ref(),
            &props.page,
            self.options.include_comments,
        )
        .await;

        let mut state = self.lock();
        if seq != self.latest.load(Ordering::SeqCst) {
            debug!(seq, "Discarding superseded feed load");
            return LoadOutcome::Superseded;
        }

        state.phase = FeedPhase::Idle;
        match fetched {
            Ok(page) => {
                info!(count = page.items.len(), "Feed updated");
                state.publications = page.items;
                state.page_info = page.page_info;
                state.status = match resolution.error {
                    Some(e) => FeedStatus::Failed(e.into()),
                    None => FeedStatus::Ready,
                };
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch publications");
                // A resolution failure is the root cause when both steps fail.
                state.status = FeedStatus::Failed(match resolution.error {
                    Some(resolution_error) => resolution_error.into(),
                    None => e.into(),
                });
            }
        }
        LoadOutcome::Applied
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.lock();
        FeedSnapshot {
            phase: state.phase,
            status: state.status.clone(),
            publications: state.publications.clone(),
            page_info: state.page_info.clone(),
        }
    }

    pub fn phase(&self) -> FeedPhase {
        self.lock().phase
    }

    pub fn status(&self) -> FeedStatus {
        self.lock().status.clone()
    }

    /// Render the current publications with the display flags and
    /// interaction wiring from `props`.
    pub fn render(&self, props: &FeedProps) -> Vec<RenderedItem> {
        let publications = self.lock().publications.clone();
        render::render_items(
            &publications,
            &props.display,
            props.policy.as_ref(),
            props.on_interaction.as_ref(),
        )
    }
}
