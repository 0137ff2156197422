//! Single-process channel layer.

use async_trait::async_trait;

use crate::server::{
    channel::{ChannelLayer, GroupRegistry, GroupSubscription},
    error::channel::ChannelError,
};

/// Channel layer that delivers directly through the local registry.
///
/// Suitable for a single server process and for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryChannelLayer {
    registry: GroupRegistry,
}

impl InMemoryChannelLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChannelLayer for InMemoryChannelLayer {
    async fn group_add(&self, group: &str) -> Result<GroupSubscription, ChannelError> {
        Ok(self.registry.subscribe(group).await)
    }

    async fn group_send(&self, group: &str, payload: String) -> Result<(), ChannelError> {
        let delivered = self.registry.dispatch(group, &payload).await;
        tracing::trace!("Delivered payload to {} subscriber(s) of {}", delivered, group);

        Ok(())
    }

    async fn group_discard(&self, subscription: GroupSubscription) {
        self.registry.unsubscribe(subscription).await;
    }
}
