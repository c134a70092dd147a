// Interaction policy — decides which items get a callback and what
// per-viewer operations they carry.
//
// Two policies exist: `AlwaysForward` hands every item a callback, and
// `GateOnPriorReaction` withholds it from items the viewer already upvoted
// and attaches looked-up operations to each item.

use std::fmt;
use std::sync::Arc;

use crate::lens::models::{Operations, PublicationId};

/// A user interaction on a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    Like,
    Comment,
    Quote,
    Share,
}

impl fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionEvent::Like => "like",
            InteractionEvent::Comment => "comment",
            InteractionEvent::Quote => "quote",
            InteractionEvent::Share => "share",
        };
        f.write_str(name)
    }
}

/// Caller-level callback: receives the event and the publication it hit.
pub type InteractionHandler = Arc<dyn Fn(&InteractionEvent, &PublicationId) + Send + Sync>;

/// Item-level callback with the publication id already bound.
pub type ItemCallback = Arc<dyn Fn(&InteractionEvent) + Send + Sync>;

/// Bind `id` into `handler`, producing an item-level callback.
pub fn bind(handler: &InteractionHandler, id: &PublicationId) -> ItemCallback {
    let handler = Arc::clone(handler);
    let id = id.clone();
    Arc::new(move |event: &InteractionEvent| handler(event, &id))
}

pub trait InteractionPolicy: Send + Sync {
    /// The callback the item for `id` should receive, if any.
    fn callback_for(
        &self,
        id: &PublicationId,
        handler: Option<&InteractionHandler>,
    ) -> Option<ItemCallback>;

    /// Per-viewer operations for `id`. None when unknown.
    fn operations_for(&self, _id: &PublicationId) -> Option<Operations> {
        None
    }
}

/// Every item gets a callback. Without a caller handler it does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysForward;

impl InteractionPolicy for AlwaysForward {
    fn callback_for(
        &self,
        id: &PublicationId,
        handler: Option<&InteractionHandler>,
    ) -> Option<ItemCallback> {
        match handler {
            Some(handler) => Some(bind(handler, id)),
            None => Some(Arc::new(|_: &InteractionEvent| {})),
        }
    }
}

pub type UpvotePredicate = Arc<dyn Fn(&PublicationId) -> bool + Send + Sync>;
pub type OperationsLookup = Arc<dyn Fn(&PublicationId) -> Option<Operations> + Send + Sync>;

/// Items the viewer already upvoted get no callback.
pub struct GateOnPriorReaction {
    has_upvoted: UpvotePredicate,
    operations: OperationsLookup,
}

impl GateOnPriorReaction {
    pub fn new(has_upvoted: UpvotePredicate, operations: OperationsLookup) -> Self {
        Self {
            has_upvoted,
            operations,
        }
    }

    /// Gate on the `has_upvoted` flag of the looked-up operations.
    pub fn from_operations(operations: OperationsLookup) -> Self {
        let lookup = Arc::clone(&operations);
        Self {
            has_upvoted: Arc::new(move |id: &PublicationId| {
                lookup(id).is_some_and(|ops| ops.has_upvoted)
            }),
            operations,
        }
    }
}

impl InteractionPolicy for GateOnPriorReaction {
    fn callback_for(
        &self,
        id: &PublicationId,
        handler: Option<&InteractionHandler>,
    ) -> Option<ItemCallback> {
        if (self.has_upvoted)(id) {
            return None;
        }
        handler.map(|h| bind(h, id))
    }

    fn operations_for(&self, id: &PublicationId) -> Option<Operations> {
        (self.operations)(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_handler() -> (InteractionHandler, Arc<Mutex<Vec<(InteractionEvent, String)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler: InteractionHandler =
            Arc::new(move |event: &InteractionEvent, id: &PublicationId| {
                sink.lock().unwrap().push((*event, id.to_string()));
            });
        (handler, seen)
    }

    #[test]
    fn always_forward_injects_id() {
        let (handler, seen) = recording_handler();
        let id = PublicationId::new("0x01-0x01");
        let callback = AlwaysForward.callback_for(&id, Some(&handler)).unwrap();
        callback(&InteractionEvent::Like);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(InteractionEvent::Like, "0x01-0x01".to_string())]
        );
    }

    #[test]
    fn always_forward_without_handler_is_noop() {
        let id = PublicationId::new("0x01-0x01");
        let callback = AlwaysForward.callback_for(&id, None);
        assert!(callback.is_some());
        callback.unwrap()(&InteractionEvent::Share);
        assert!(AlwaysForward.operations_for(&id).is_none());
    }

    #[test]
    fn gate_withholds_callback_after_upvote() {
        let (handler, _seen) = recording_handler();
        let policy = GateOnPriorReaction::new(
            Arc::new(|id: &PublicationId| id.as_str() == "0x01-0x02"),
            Arc::new(|_: &PublicationId| -> Option<Operations> { None }),
        );
        assert!(policy
            .callback_for(&PublicationId::new("0x01-0x02"), Some(&handler))
            .is_none());
        assert!(policy
            .callback_for(&PublicationId::new("0x01-0x03"), Some(&handler))
            .is_some());
    }

    #[test]
    fn gate_from_operations_reads_has_upvoted() {
        let policy = GateOnPriorReaction::from_operations(Arc::new(|id: &PublicationId| {
            (id.as_str() == "liked").then(|| Operations {
                has_upvoted: true,
                ..Operations::default()
            })
        }));
        let (handler, _seen) = recording_handler();
        assert!(policy
            .callback_for(&PublicationId::new("liked"), Some(&handler))
            .is_none());
        assert!(policy
            .callback_for(&PublicationId::new("fresh"), Some(&handler))
            .is_some());
        assert!(policy.operations_for(&PublicationId::new("fresh")).is_none());
    }
}
