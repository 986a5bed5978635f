use tracing::warn;

use crate::{
    client::{DirectoryClient, RequestContext},
    model::{AssistantProfile, DocumentCollection, StandardAnswerCategory},
};

/// One consistent view of everything the channel-configuration form needs.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DirectorySnapshot {
    pub collections: Vec<DocumentCollection>,
    pub assistants: Vec<AssistantProfile>,
    pub categories: Vec<StandardAnswerCategory>,
}

/// Fetch all three listings as one concurrent batch.
///
/// Each source fails independently: a failed fetch is logged once and
/// degrades to an empty listing for this snapshot only. No retries; the
/// next request builds a fresh snapshot.
pub async fn load_snapshot(client: &DirectoryClient, ctx: &RequestContext) -> DirectorySnapshot {
    let (collections, assistants, categories) = tokio::join!(
        client.list_collections(ctx),
        client.list_assistants(ctx),
        client.list_answer_categories(ctx),
    );

    DirectorySnapshot {
        collections: collections.unwrap_or_else(|e| {
            warn!(error = %e, "collection listing unavailable, using empty set");
            Vec::new()
        }),
        assistants: assistants.unwrap_or_else(|e| {
            warn!(error = %e, "assistant listing unavailable, using empty set");
            Vec::new()
        }),
        categories: categories.unwrap_or_else(|e| {
            warn!(error = %e, "answer category listing unavailable, using empty set");
            Vec::new()
        }),
    }
}
