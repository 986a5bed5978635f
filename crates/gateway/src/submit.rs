use std::time::Duration;

use botdeck_channels::StoredChannelConfig;

/// Errors from forwarding a configuration to the persistence endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("persistence endpoint returned HTTP {status}")]
    Status { status: u16 },
}

/// Client for the external persistence endpoint that owns accepted
/// channel configurations.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Push an accepted configuration. The payload is the exact stored
    /// record; this layer performs no transform of mode or selection.
    pub async fn push(&self, record: &StoredChannelConfig) -> Result<(), SubmitError> {
        let url = format!("{}/api/channel-configs", self.base_url);
        let resp = self.http.post(&url).json(record).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, botdeck_channels::ChannelConfig};

    fn record() -> StoredChannelConfig {
        StoredChannelConfig {
            id: 3,
            bot_id: "bot-a".into(),
            is_default: false,
            config: ChannelConfig::default(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[tokio::test]
    async fn posts_the_record_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/channel-configs")
            .match_header("content-type", "application/json")
            .with_status(200)
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url(), Duration::from_secs(2)).unwrap();
        client.push(&record()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_rejection_surfaces_the_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/channel-configs")
            .with_status(500)
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url(), Duration::from_secs(2)).unwrap();
        let err = client.push(&record()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Status { status: 500 }));
    }
}
