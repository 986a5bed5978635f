use std::{sync::Arc, time::Duration};

use {
    botdeck_channels::{ChannelConfigStore, MemoryChannelConfigStore},
    botdeck_config::BotdeckConfig,
    botdeck_directory::DirectoryClient,
};

use crate::{notify::BroadcastNotifier, submit::SubmissionClient};

/// Shared gateway state handed to every request handler.
pub struct GatewayState {
    pub config: BotdeckConfig,
    pub directory: DirectoryClient,
    pub submitter: SubmissionClient,
    pub store: Arc<dyn ChannelConfigStore>,
    pub notifier: Arc<BroadcastNotifier>,
}

impl GatewayState {
    /// Build state from config with the in-memory store.
    pub fn new(config: BotdeckConfig) -> anyhow::Result<Arc<Self>> {
        Self::with_store(config, Arc::new(MemoryChannelConfigStore::new()))
    }

    /// Build state with an explicit store implementation.
    pub fn with_store(
        config: BotdeckConfig,
        store: Arc<dyn ChannelConfigStore>,
    ) -> anyhow::Result<Arc<Self>> {
        let timeout = Duration::from_secs(config.directory.timeout_secs);
        let directory = DirectoryClient::new(&config.directory.base_url, timeout)?;
        let submitter = SubmissionClient::new(config.persistence_base_url(), timeout)?;
        Ok(Arc::new(Self {
            config,
            directory,
            submitter,
            store,
            notifier: Arc::new(BroadcastNotifier::default()),
        }))
    }
}
