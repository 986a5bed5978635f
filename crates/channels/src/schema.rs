use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where a channel draws its answers from. The four modes are mutually
/// exclusive; the discriminant decides which parts of the selection apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Search over every public collection.
    #[default]
    AllPublic,
    /// Search restricted to the selected collections.
    Collections,
    /// A search-backed assistant answers with its own collections.
    SearchAssistant,
    /// A plain assistant answers without document search.
    PlainAssistant,
}

/// Post-processing filters applied to candidate answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFilter {
    /// Drop answers the model judged incomplete.
    WellAnsweredPostfilter,
    /// Only respond to messages that look like questions.
    QuestionmarkPrefilter,
}

/// The operator's current choices, interpreted per [`AnswerSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    /// Chosen collection ids (mode `collections`).
    pub collection_ids: BTreeSet<i64>,
    /// Chosen assistant id (assistant modes).
    pub assistant_id: Option<i64>,
}

impl SelectionState {
    #[must_use]
    pub fn with_collections(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            collection_ids: ids.into_iter().collect(),
            assistant_id: None,
        }
    }

    #[must_use]
    pub fn with_assistant(id: i64) -> Self {
        Self {
            collection_ids: BTreeSet::new(),
            assistant_id: Some(id),
        }
    }
}

/// One channel's full configuration as submitted to the persistence
/// endpoint. Serialization must be lossless: mode and selection round-trip
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Channel name; `None` for the bot-default configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    pub answer_source: AnswerSource,
    pub selection: SelectionState,
    /// Only respond when the bot is @-tagged.
    pub respond_tag_only: bool,
    /// Respond to messages authored by other bots.
    pub respond_to_bots: bool,
    /// Answer in an ephemeral message visible only to the asker.
    pub is_ephemeral: bool,
    pub show_continue_in_web_ui: bool,
    pub disabled: bool,
    /// Derive source/time filters from the question automatically.
    pub enable_auto_filters: bool,
    /// Restrict responses to members of these groups; empty means open.
    pub respond_member_group_list: Vec<String>,
    pub answer_filters: Vec<AnswerFilter>,
    /// `None` = no follow-up; empty = follow up without tagging anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_tags: Option<Vec<String>>,
    /// Standard-answer category ids attached to this channel.
    pub standard_answer_categories: Vec<i64>,
}
