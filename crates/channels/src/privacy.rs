use {
    botdeck_directory::{AssistantProfile, DocumentCollection},
    crate::schema::{AnswerSource, SelectionState},
};

/// Whether the form should surface the privacy warning affordance.
///
/// True iff the active answer source can draw on a privacy-sensitive
/// collection: the selected collections in `collections` mode, or the
/// chosen assistant's collections in `search_assistant` mode. Plain
/// assistants carry no collections and the all-public scope only draws
/// from public connectors, so both are always false. Advisory only;
/// never gates submission.
#[must_use]
pub fn privacy_alert(
    source: AnswerSource,
    selection: &SelectionState,
    collections: &[DocumentCollection],
    assistants: &[AssistantProfile],
) -> bool {
    match source {
        AnswerSource::Collections => collections
            .iter()
            .any(|c| selection.collection_ids.contains(&c.id) && c.is_privacy_sensitive()),
        AnswerSource::SearchAssistant => selection
            .assistant_id
            .and_then(|id| assistants.iter().find(|a| a.id == id))
            .is_some_and(|a| {
                a.collections
                    .iter()
                    .any(DocumentCollection::is_privacy_sensitive)
            }),
        AnswerSource::AllPublic | AnswerSource::PlainAssistant => false,
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        botdeck_directory::{AccessTag, ConnectorSummary},
    };

    fn collection(id: i64, access: AccessTag) -> DocumentCollection {
        DocumentCollection {
            id,
            name: format!("set-{id}"),
            description: None,
            is_public: true,
            connectors: vec![ConnectorSummary {
                id: id * 100,
                access,
                source: "confluence".into(),
            }],
        }
    }

    fn assistant(id: i64, collections: Vec<DocumentCollection>) -> AssistantProfile {
        AssistantProfile {
            id,
            name: "helper".into(),
            description: String::new(),
            collections,
            is_visible: true,
            display_priority: None,
        }
    }

    #[test]
    fn collections_mode_alerts_on_selected_private_connector() {
        let collections = vec![
            collection(1, AccessTag::Private),
            collection(2, AccessTag::Public),
        ];
        let selected = SelectionState::with_collections([1]);
        assert!(privacy_alert(
            AnswerSource::Collections,
            &selected,
            &collections,
            &[]
        ));

        // Same selection over purely public connectors: no alert.
        let public_only = vec![collection(1, AccessTag::Public)];
        assert!(!privacy_alert(
            AnswerSource::Collections,
            &selected,
            &public_only,
            &[]
        ));
    }

    #[test]
    fn unselected_private_collections_do_not_alert() {
        let collections = vec![
            collection(1, AccessTag::Public),
            collection(2, AccessTag::Private),
        ];
        let selected = SelectionState::with_collections([1]);
        assert!(!privacy_alert(
            AnswerSource::Collections,
            &selected,
            &collections,
            &[]
        ));
    }

    #[test]
    fn search_assistant_mode_follows_the_chosen_assistant() {
        let assistants = vec![
            assistant(1, vec![collection(10, AccessTag::Private)]),
            assistant(2, vec![collection(11, AccessTag::Public)]),
        ];
        assert!(privacy_alert(
            AnswerSource::SearchAssistant,
            &SelectionState::with_assistant(1),
            &[],
            &assistants
        ));
        assert!(!privacy_alert(
            AnswerSource::SearchAssistant,
            &SelectionState::with_assistant(2),
            &[],
            &assistants
        ));
        // Unknown assistant id: nothing to alert on.
        assert!(!privacy_alert(
            AnswerSource::SearchAssistant,
            &SelectionState::with_assistant(99),
            &[],
            &assistants
        ));
    }

    #[test]
    fn other_modes_never_alert() {
        let collections = vec![collection(1, AccessTag::Private)];
        let selected = SelectionState::with_collections([1]);
        assert!(!privacy_alert(
            AnswerSource::AllPublic,
            &selected,
            &collections,
            &[]
        ));
        assert!(!privacy_alert(
            AnswerSource::PlainAssistant,
            &SelectionState::with_assistant(1),
            &collections,
            &[assistant(1, vec![collection(2, AccessTag::Private)])]
        ));
    }
}
