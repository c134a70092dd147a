// Rendering pass — one item per publication, in list order, keyed by id.

use std::fmt;

use super::display::DisplayConfig;
use super::policy::{InteractionEvent, InteractionHandler, InteractionPolicy, ItemCallback};
use crate::lens::models::{Operations, Publication, PublicationId};

/// Everything an item renderer needs for one publication.
#[derive(Clone)]
pub struct RenderedItem {
    pub key: PublicationId,
    pub publication: Publication,
    pub display: DisplayConfig,
    pub on_interaction: Option<ItemCallback>,
    pub operations: Option<Operations>,
}

impl RenderedItem {
    /// Fire the item's callback. Returns false when it has none.
    pub fn interact(&self, event: InteractionEvent) -> bool {
        match &self.on_interaction {
            Some(callback) => {
                callback(&event);
                true
            }
            None => false,
        }
    }

    /// Actions to show for this item, honoring the hide flags.
    pub fn visible_actions(&self) -> Vec<InteractionEvent> {
        let mut actions = vec![InteractionEvent::Like];
        if !self.display.hide_comment_button {
            actions.push(InteractionEvent::Comment);
        }
        if !self.display.hide_quote_button {
            actions.push(InteractionEvent::Quote);
        }
        if !self.display.hide_share_button {
            actions.push(InteractionEvent::Share);
        }
        actions
    }
}

impl fmt::Debug for RenderedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedItem")
            .field("key", &self.key)
            .field("kind", &self.publication.kind)
            .field("display", &self.display)
            .field("has_callback", &self.on_interaction.is_some())
            .field("operations", &self.operations)
            .finish()
    }
}

/// Map publications to rendered items through `policy`.
pub fn render_items(
    publications: &[Publication],
    display: &DisplayConfig,
    policy: &dyn InteractionPolicy,
    handler: Option<&InteractionHandler>,
) -> Vec<RenderedItem> {
    publications
        .iter()
        .map(|publication| RenderedItem {
            key: publication.id.clone(),
            publication: publication.clone(),
            display: display.clone(),
            on_interaction: policy.callback_for(&publication.id, handler),
            operations: policy.operations_for(&publication.id),
        })
        .collect()
}
