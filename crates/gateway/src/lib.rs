//! Admin gateway for channel configuration.
//!
//! Serves the aggregated form data (directory snapshot + eligibility
//! classification), accepts configuration submissions (validate, reconcile,
//! persist, forward), and broadcasts transient popup notifications.

pub mod notify;
pub mod routes;
pub mod server;
pub mod state;
pub mod submit;

pub use {
    notify::{BroadcastNotifier, NotificationSink, Popup, PopupSeverity},
    server::{AppState, build_admin_app, serve},
    state::GatewayState,
    submit::SubmissionClient,
};
