use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use {
    botdeck_channels::{
        ChannelConfig, Error as ChannelError, Reconciliation, StoredChannelConfig, classify,
        privacy_alert, reconcile, validate_config,
    },
    botdeck_directory::{RequestContext, load_snapshot},
    tracing::warn,
};

use crate::{
    notify::{NotificationSink, Popup},
    server::AppState,
};

/// Build the request context forwarded to upstream services from the
/// incoming request's headers. No ambient lookups happen downstream.
fn request_context(headers: &HeaderMap) -> RequestContext {
    let bearer_token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned);
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    RequestContext {
        bearer_token,
        accept_language,
    }
}

fn error_json(status: StatusCode, message: impl std::fmt::Display) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({ "error": message.to_string() })),
    )
        .into_response()
}

/// Aggregated form data: directory snapshot classified into the four
/// eligibility sets, plus the answer categories for the tagging sub-field.
pub async fn options(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let ctx = request_context(&headers);
    let snapshot = load_snapshot(&state.gateway.directory, &ctx).await;
    let sets = classify(&snapshot.collections, &snapshot.assistants);

    Json(serde_json::json!({
        "selectable": sets.selectable,
        "excluded_collections": sets.excluded_collections,
        "search_assistants": sets.search_assistants,
        "excluded_assistants": sets.excluded_assistants,
        "categories": snapshot.categories,
    }))
}

/// Submission body for creating or updating one channel configuration.
#[derive(Debug, serde::Deserialize)]
pub struct SubmitChannelConfig {
    /// 0 (or absent) creates a new configuration.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub is_default: bool,
    pub config: ChannelConfig,
}

/// List a bot's stored channel configurations.
pub async fn list(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
) -> impl IntoResponse {
    match state.gateway.store.list(&bot_id).await {
        Ok(configs) => Json(serde_json::json!({ "configs": configs })).into_response(),
        Err(e) => error_json(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// Validate, reconcile, persist, and forward one channel configuration.
pub async fn submit(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<SubmitChannelConfig>,
) -> impl IntoResponse {
    let ctx = request_context(&headers);
    let snapshot = load_snapshot(&state.gateway.directory, &ctx).await;
    let sets = classify(&snapshot.collections, &snapshot.assistants);

    // A selection computed against stale data is corrected, not rejected:
    // evict ineligible ids first, one warning per correction.
    let mut config = body.config;
    let outcome = reconcile(&config.selection, &sets);
    let mut removed_ids = Vec::new();
    if let Reconciliation::Evicted { removed, selection } = outcome.clone() {
        if let Some(notice) = outcome.notice() {
            state.gateway.notifier.notify(Popup::warning(notice)).await;
        }
        removed_ids = removed;
        config.selection = selection;
    }

    let result = validate_config(&config, body.is_default, &sets);
    if result.has_errors() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "diagnostics": result.diagnostics })),
        )
            .into_response();
    }

    let alert = privacy_alert(
        config.answer_source,
        &config.selection,
        &snapshot.collections,
        &snapshot.assistants,
    );

    let record = StoredChannelConfig {
        id: body.id,
        bot_id,
        is_default: body.is_default,
        config,
        created_at: 0,
        updated_at: 0,
    };
    let stored = match state.gateway.store.upsert(record).await {
        Ok(stored) => stored,
        Err(e @ ChannelError::DuplicateDefault { .. }) => {
            return error_json(StatusCode::CONFLICT, e);
        },
        Err(e @ ChannelError::UnknownConfig { .. }) => {
            return error_json(StatusCode::NOT_FOUND, e);
        },
        Err(e @ ChannelError::InvalidInput { .. }) => {
            return error_json(StatusCode::BAD_REQUEST, e);
        },
        Err(e) => return error_json(StatusCode::INTERNAL_SERVER_ERROR, e),
    };

    if let Err(e) = state.gateway.submitter.push(&stored).await {
        warn!(error = %e, id = stored.id, "failed to forward configuration to persistence");
        state
            .gateway
            .notifier
            .notify(Popup::error("Saving the channel configuration failed upstream"))
            .await;
        return error_json(StatusCode::BAD_GATEWAY, e);
    }

    state
        .gateway
        .notifier
        .notify(Popup::success("Channel configuration saved"))
        .await;

    Json(serde_json::json!({
        "config": stored,
        "privacy_alert": alert,
        "removed_collection_ids": removed_ids,
    }))
    .into_response()
}

/// Delete a stored channel configuration.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.gateway.store.delete(id).await {
        Ok(()) => Json(serde_json::json!({ "ok": true })).into_response(),
        Err(e @ ChannelError::UnknownConfig { .. }) => error_json(StatusCode::NOT_FOUND, e),
        Err(e) => error_json(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// Typed configuration field descriptors for one connector source.
pub async fn connector_fields(
    State(state): State<AppState>,
    Path(source): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let ctx = request_context(&headers);
    match state.gateway.directory.connector_fields(&source, &ctx).await {
        Ok(fields) => Json(serde_json::json!({ "fields": fields })).into_response(),
        Err(e) => {
            warn!(error = %e, source, "connector field lookup failed");
            error_json(StatusCode::BAD_GATEWAY, e)
        },
    }
}
