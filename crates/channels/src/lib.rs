//! Channel configuration domain.
//!
//! A channel configuration binds one messaging-bot channel to an answer
//! source (everything public, chosen collections, or an assistant) plus
//! response toggles and follow-up tags. This crate owns the configuration
//! schema, the eligibility classifier that decides which collections and
//! assistants may be offered, the selection reconciler that evicts stale
//! choices, the privacy-alert predicate, per-mode validation, and the
//! persistence store trait.

pub mod eligibility;
pub mod error;
pub mod privacy;
pub mod reconcile;
pub mod schema;
pub mod store;
pub mod validate;

pub use {
    eligibility::{EligibilitySets, classify},
    error::{Error, Result},
    privacy::privacy_alert,
    reconcile::{Reconciliation, reconcile},
    schema::{AnswerFilter, AnswerSource, ChannelConfig, SelectionState},
    store::{ChannelConfigStore, MemoryChannelConfigStore, StoredChannelConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate_config},
};
