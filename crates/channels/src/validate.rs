//! Per-mode validation of a channel configuration before submission.
//!
//! Produces structured diagnostics surfaced inline per field; validation
//! failure is never fatal.

use crate::{
    eligibility::EligibilitySets,
    schema::{AnswerSource, ChannelConfig},
};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "channel", "mode", "selection", "eligibility"
    pub category: &'static str,
    /// Dotted field path, e.g. "selection.assistant_id"
    pub path: String,
    pub message: String,
}

/// Result of validating a channel configuration.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn error(&mut self, category: &'static str, path: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            category,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate a configuration against the current eligibility sets.
///
/// `is_default` marks the bot-default configuration, which is the only one
/// allowed to omit a channel name.
#[must_use]
pub fn validate_config(
    config: &ChannelConfig,
    is_default: bool,
    eligibility: &EligibilitySets,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    match (&config.channel_name, is_default) {
        (None, false) => {
            result.error("channel", "channel_name", "channel name is required");
        },
        (Some(name), false) if name.trim().is_empty() => {
            result.error("channel", "channel_name", "channel name is required");
        },
        (Some(_), true) => {
            result.error(
                "channel",
                "channel_name",
                "the default configuration applies to all channels and must not name one",
            );
        },
        _ => {},
    }

    match config.answer_source {
        AnswerSource::AllPublic => {},
        AnswerSource::Collections => {
            if config.selection.collection_ids.is_empty() {
                result.error(
                    "selection",
                    "selection.collection_ids",
                    "select at least one collection",
                );
            }
            for id in &config.selection.collection_ids {
                if !eligibility.is_selectable(*id) {
                    result.error(
                        "eligibility",
                        "selection.collection_ids",
                        format!("collection {id} is not selectable for shared channels"),
                    );
                }
            }
        },
        AnswerSource::SearchAssistant => match config.selection.assistant_id {
            None => {
                result.error("selection", "selection.assistant_id", "choose an assistant");
            },
            Some(id) => {
                if eligibility.search_assistant(id).is_none() {
                    let message = if eligibility.any_assistant(id).is_some() {
                        format!("assistant {id} is not usable for search-backed replies")
                    } else {
                        format!("unknown assistant: {id}")
                    };
                    result.error("eligibility", "selection.assistant_id", message);
                }
            },
        },
        AnswerSource::PlainAssistant => match config.selection.assistant_id {
            None => {
                result.error("selection", "selection.assistant_id", "choose an assistant");
            },
            Some(id) => {
                if eligibility.any_assistant(id).is_none() {
                    result.error(
                        "eligibility",
                        "selection.assistant_id",
                        format!("unknown assistant: {id}"),
                    );
                }
            },
        },
    }

    result
}
