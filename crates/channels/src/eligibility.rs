use std::collections::BTreeSet;

use botdeck_directory::{AssistantProfile, DocumentCollection, sort_for_display};

/// The four derived sets the configuration form renders from.
///
/// `selectable`/`excluded_collections` partition the collection listing;
/// `search_assistants`/`excluded_assistants` partition the visible
/// assistants. Invisible assistants are not offered at all.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct EligibilitySets {
    /// Collections safe to offer in a shared channel.
    pub selectable: Vec<DocumentCollection>,
    /// Collections withheld because a connector syncs external ACLs.
    pub excluded_collections: Vec<DocumentCollection>,
    /// Assistants usable for search-backed replies.
    pub search_assistants: Vec<AssistantProfile>,
    /// Assistants withheld for search-backed replies.
    pub excluded_assistants: Vec<AssistantProfile>,
}

impl EligibilitySets {
    /// Ids of all selectable collections.
    #[must_use]
    pub fn selectable_ids(&self) -> BTreeSet<i64> {
        self.selectable.iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn is_selectable(&self, collection_id: i64) -> bool {
        self.selectable.iter().any(|c| c.id == collection_id)
    }

    /// Look up a search-usable assistant by id.
    #[must_use]
    pub fn search_assistant(&self, id: i64) -> Option<&AssistantProfile> {
        self.search_assistants.iter().find(|a| a.id == id)
    }

    /// Look up any offered assistant (search-usable or excluded) by id.
    #[must_use]
    pub fn any_assistant(&self, id: i64) -> Option<&AssistantProfile> {
        self.search_assistant(id)
            .or_else(|| self.excluded_assistants.iter().find(|a| a.id == id))
    }
}

/// Classify the directory listings into the four derived sets.
///
/// Pure and deterministic: the result depends only on the input data,
/// never on the operator's current selection. Eviction of a stale
/// selection is a separate step ([`crate::reconcile`]).
#[must_use]
pub fn classify(
    collections: &[DocumentCollection],
    assistants: &[AssistantProfile],
) -> EligibilitySets {
    let mut sets = EligibilitySets::default();

    for collection in collections {
        if collection.is_sync_tainted() {
            sets.excluded_collections.push(collection.clone());
        } else {
            sets.selectable.push(collection.clone());
        }
    }

    for assistant in assistants {
        if !assistant.is_visible {
            continue;
        }
        if assistant.is_sync_tainted() {
            sets.excluded_assistants.push(assistant.clone());
        } else {
            sets.search_assistants.push(assistant.clone());
        }
    }
    sort_for_display(&mut sets.search_assistants);
    sort_for_display(&mut sets.excluded_assistants);

    sets
}
