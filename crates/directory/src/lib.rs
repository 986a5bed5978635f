//! Upstream directory model and clients.
//!
//! The platform API exposes three listings the admin surface consumes:
//! document collections (with their contributing connectors), assistant
//! profiles, and standard-answer categories. This crate holds the typed
//! model for those listings, the HTTP client, and the concurrent snapshot
//! fetch with per-source failure isolation.

pub mod client;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod model;

pub use {
    client::{DirectoryClient, RequestContext},
    error::{Error, Result},
    fetch::{DirectorySnapshot, load_snapshot},
    fields::{ConnectorField, FieldTab, SelectOption},
    model::{
        AccessTag, AssistantProfile, ConnectorSummary, DocumentCollection,
        StandardAnswerCategory, sort_for_display,
    },
};
