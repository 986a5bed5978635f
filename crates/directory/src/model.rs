use serde::{Deserialize, Serialize};

/// Access classification of a connector — governs who may see content
/// drawn from it.
///
/// `Sync` means the connector mirrors an external system's ACLs, which
/// makes any collection it feeds unsafe to expose in a broadcast context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTag {
    Public,
    Private,
    Sync,
}

/// Summary of one configured connector contributing to a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorSummary {
    pub id: i64,
    pub access: AccessTag,
    /// Display source type, e.g. "slack" or "google_drive".
    pub source: String,
}

/// A named, curated grouping of indexed content sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCollection {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub connectors: Vec<ConnectorSummary>,
}

impl DocumentCollection {
    /// True when any contributing connector mirrors external ACLs.
    #[must_use]
    pub fn is_sync_tainted(&self) -> bool {
        self.connectors.iter().any(|c| c.access == AccessTag::Sync)
    }

    /// True when any contributing connector is classified private.
    #[must_use]
    pub fn is_privacy_sensitive(&self) -> bool {
        self.connectors
            .iter()
            .any(|c| c.access == AccessTag::Private)
    }
}

/// An assistant profile with its associated collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub collections: Vec<DocumentCollection>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_priority: Option<i64>,
}

impl AssistantProfile {
    /// True when any associated collection is sync-tainted.
    #[must_use]
    pub fn is_sync_tainted(&self) -> bool {
        self.collections.iter().any(DocumentCollection::is_sync_tainted)
    }
}

/// Opaque pass-through category for the follow-up tagging sub-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardAnswerCategory {
    pub id: i64,
    pub name: String,
}

/// Order assistants the way the admin surface lists them: higher
/// `display_priority` first, ties broken by lower id. Profiles without a
/// priority sort after all prioritized ones.
pub fn sort_for_display(assistants: &mut [AssistantProfile]) {
    assistants.sort_by_key(|a| (std::cmp::Reverse(a.display_priority.unwrap_or(i64::MIN)), a.id));
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(id: i64, access: AccessTag) -> ConnectorSummary {
        ConnectorSummary {
            id,
            access,
            source: "slack".into(),
        }
    }

    fn collection(id: i64, tags: &[AccessTag]) -> DocumentCollection {
        DocumentCollection {
            id,
            name: format!("collection-{id}"),
            description: None,
            is_public: true,
            connectors: tags
                .iter()
                .enumerate()
                .map(|(i, t)| connector(id * 10 + i as i64, *t))
                .collect(),
        }
    }

    #[test]
    fn sync_taint_requires_a_sync_connector() {
        assert!(!collection(1, &[AccessTag::Public, AccessTag::Private]).is_sync_tainted());
        assert!(collection(2, &[AccessTag::Public, AccessTag::Sync]).is_sync_tainted());
        assert!(!collection(3, &[]).is_sync_tainted());
    }

    #[test]
    fn privacy_sensitivity_requires_a_private_connector() {
        assert!(collection(1, &[AccessTag::Private]).is_privacy_sensitive());
        assert!(!collection(2, &[AccessTag::Public, AccessTag::Sync]).is_privacy_sensitive());
    }

    #[test]
    fn assistant_taint_follows_its_collections() {
        let assistant = AssistantProfile {
            id: 7,
            name: "Support".into(),
            description: String::new(),
            collections: vec![collection(1, &[AccessTag::Public]), collection(2, &[AccessTag::Sync])],
            is_visible: true,
            display_priority: None,
        };
        assert!(assistant.is_sync_tainted());
    }

    #[test]
    fn display_order_prefers_priority_then_low_id() {
        let mut assistants = vec![
            AssistantProfile {
                id: 3,
                name: "c".into(),
                description: String::new(),
                collections: vec![],
                is_visible: true,
                display_priority: None,
            },
            AssistantProfile {
                id: 2,
                name: "b".into(),
                description: String::new(),
                collections: vec![],
                is_visible: true,
                display_priority: Some(5),
            },
            AssistantProfile {
                id: 1,
                name: "a".into(),
                description: String::new(),
                collections: vec![],
                is_visible: true,
                display_priority: Some(5),
            },
            AssistantProfile {
                id: 4,
                name: "d".into(),
                description: String::new(),
                collections: vec![],
                is_visible: true,
                display_priority: Some(9),
            },
        ];
        sort_for_display(&mut assistants);
        let ids: Vec<i64> = assistants.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn access_tag_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&AccessTag::Sync).unwrap(), "\"sync\"");
        let tag: AccessTag = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(tag, AccessTag::Private);
    }
}
