use crate::{eligibility::EligibilitySets, schema::SelectionState};

/// Outcome of reconciling a selection against freshly classified data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Every chosen collection is still selectable.
    Clean,
    /// Stale ids were evicted; `selection` is the corrected state.
    Evicted {
        removed: Vec<i64>,
        selection: SelectionState,
    },
}

impl Reconciliation {
    /// Warning text for the operator, present only when an eviction
    /// occurred. The caller emits it exactly once per reconciliation.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Clean => None,
            Self::Evicted { removed, .. } => {
                let ids = removed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!(
                    "Removed {} collection(s) from this channel because their \
                     permissions now sync with an external system: {ids}",
                    removed.len()
                ))
            },
        }
    }
}

/// Drop every selected collection id that is no longer selectable.
///
/// Explicit state transition invoked by the owning controller after each
/// data refresh. Idempotent fixed point: reconciling the corrected
/// selection yields [`Reconciliation::Clean`], so eviction can never
/// re-trigger itself.
#[must_use]
pub fn reconcile(selection: &SelectionState, eligibility: &EligibilitySets) -> Reconciliation {
    let selectable = eligibility.selectable_ids();
    let removed: Vec<i64> = selection
        .collection_ids
        .iter()
        .copied()
        .filter(|id| !selectable.contains(id))
        .collect();

    if removed.is_empty() {
        return Reconciliation::Clean;
    }

    let mut corrected = selection.clone();
    for id in &removed {
        corrected.collection_ids.remove(id);
    }
    Reconciliation::Evicted {
        removed,
        selection: corrected,
    }
}
