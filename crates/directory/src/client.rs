use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{
    error::{Context, Error, Result},
    fields::ConnectorField,
    model::{AssistantProfile, DocumentCollection, StandardAnswerCategory},
};

/// Request-scoped values forwarded to the upstream services.
///
/// Callers build this from the incoming request; nothing in this crate
/// reads ambient state (headers, cookies, process env).
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Bearer token of the acting operator, forwarded as `Authorization`.
    pub bearer_token: Option<String>,
    /// Preferred locale, forwarded as `Accept-Language`.
    pub accept_language: Option<String>,
}

impl RequestContext {
    #[must_use]
    pub fn with_bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            accept_language: None,
        }
    }
}

/// HTTP client for the platform's directory listings.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Build a client for the given base URL with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build directory http client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// List all document collections with their contributing connectors.
    pub async fn list_collections(&self, ctx: &RequestContext) -> Result<Vec<DocumentCollection>> {
        self.get_json("/api/document-sets", ctx).await
    }

    /// List all assistant profiles.
    pub async fn list_assistants(&self, ctx: &RequestContext) -> Result<Vec<AssistantProfile>> {
        self.get_json("/api/assistants", ctx).await
    }

    /// List standard-answer categories for the follow-up tagging sub-field.
    pub async fn list_answer_categories(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<StandardAnswerCategory>> {
        self.get_json("/api/standard-answer-categories", ctx).await
    }

    /// Fetch the typed configuration field descriptors for a connector source.
    pub async fn connector_fields(
        &self,
        source: &str,
        ctx: &RequestContext,
    ) -> Result<Vec<ConnectorField>> {
        self.get_json(&format!("/api/connectors/{source}/fields"), ctx)
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, ctx: &RequestContext) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(token) = &ctx.bearer_token {
            req = req.bearer_auth(token);
        }
        if let Some(lang) = &ctx.accept_language {
            req = req.header(reqwest::header::ACCEPT_LANGUAGE, lang);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::status(url, status.as_u16()));
        }
        Ok(resp.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> DirectoryClient {
        DirectoryClient::new(server.url(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn lists_collections_and_forwards_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/document-sets")
            .match_header("authorization", "Bearer sekrit")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 1,
                    "name": "Handbook",
                    "connectors": [{"id": 10, "access": "public", "source": "notion"}]
                }]"#,
            )
            .create_async()
            .await;

        let ctx = RequestContext::with_bearer("sekrit");
        let collections = client_for(&server).list_collections(&ctx).await.unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].name, "Handbook");
        assert!(collections[0].is_public);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/assistants")
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server)
            .list_assistants(&RequestContext::default())
            .await
            .unwrap_err();
        match err {
            Error::Status { status, .. } => assert_eq!(status, 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetches_connector_fields_by_source() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/connectors/slack/fields")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"type":"text","name":"bot_token","label":"Bot token","is_secret":true}]"#)
            .create_async()
            .await;

        let fields = client_for(&server)
            .connector_fields("slack", &RequestContext::default())
            .await
            .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), Some("bot_token"));
    }
}
