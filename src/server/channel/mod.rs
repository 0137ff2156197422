//! Group pub/sub used to fan chat events out to connected sockets.
//!
//! A [`ChannelLayer`] delivers a text payload to every subscriber of a named group. The
//! in-memory backend only reaches sockets of the current process; the Redis backend
//! relays through Redis so every process serving the same chat receives the event.
//! Both backends share [`GroupRegistry`] for local delivery.

pub mod memory;
pub mod redis;

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::{
    mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    RwLock,
};

use crate::server::error::channel::ChannelError;

pub use memory::InMemoryChannelLayer;
pub use self::redis::RedisChannelLayer;

/// Pub/sub abstraction over named groups.
#[async_trait]
pub trait ChannelLayer: Send + Sync {
    /// Subscribes to a group.
    ///
    /// # Arguments
    /// - `group` - Name of the group, e.g. `chat_12`
    ///
    /// # Returns
    /// - `Ok(GroupSubscription)` - Receiver for every payload sent to the group from now on
    /// - `Err(ChannelError)` - The backend is unavailable
    async fn group_add(&self, group: &str) -> Result<GroupSubscription, ChannelError>;

    /// Sends a payload to every current subscriber of a group.
    ///
    /// # Arguments
    /// - `group` - Name of the group
    /// - `payload` - Text frame to deliver
    ///
    /// # Returns
    /// - `Ok(())` - Payload handed to the backend
    /// - `Err(ChannelError)` - The backend rejected the payload
    async fn group_send(&self, group: &str, payload: String) -> Result<(), ChannelError>;

    /// Leaves a group, removing the subscription's entry right away.
    async fn group_discard(&self, subscription: GroupSubscription);
}

/// Serialises `event` to JSON and sends it to `group`.
pub async fn send_json<T: Serialize>(
    layer: &dyn ChannelLayer,
    group: &str,
    event: &T,
) -> Result<(), ChannelError> {
    let payload = serde_json::to_string(event)?;
    layer.group_send(group, payload).await
}

/// Membership of a single socket in a group.
///
/// Hand it back through [`ChannelLayer::group_discard`] to leave the group. A
/// subscription that is only dropped is pruned on the group's next send.
#[derive(Debug)]
pub struct GroupSubscription {
    group: String,
    receiver: UnboundedReceiver<String>,
}

impl GroupSubscription {
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Waits for the next payload. Returns `None` once the layer is gone.
    pub async fn recv(&mut self) -> Option<String> {
        self.receiver.recv().await
    }
}

/// Process-local map of group name to subscriber senders.
#[derive(Debug, Default, Clone)]
pub struct GroupRegistry {
    inner: Arc<RwLock<HashMap<String, Vec<UnboundedSender<String>>>>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber to a group and returns its receiving end.
    pub async fn subscribe(&self, group: &str) -> GroupSubscription {
        let (tx, rx) = unbounded_channel();
        let mut guard = self.inner.write().await;
        guard.entry(group.to_string()).or_default().push(tx);

        GroupSubscription {
            group: group.to_string(),
            receiver: rx,
        }
    }

    /// Removes a subscription from its group, and the group once it is empty.
    pub async fn unsubscribe(&self, subscription: GroupSubscription) {
        let GroupSubscription { group, receiver } = subscription;
        drop(receiver);

        let mut guard = self.inner.write().await;
        let Some(senders) = guard.get_mut(&group) else {
            return;
        };
        senders.retain(|sender| !sender.is_closed());
        if senders.is_empty() {
            guard.remove(&group);
        }
    }

    /// Delivers a payload to every live subscriber of a group.
    ///
    /// Subscribers whose receiver was dropped are removed, and so is the group once it
    /// has no subscribers left.
    ///
    /// # Returns
    /// - `usize` - Number of subscribers the payload reached
    pub async fn dispatch(&self, group: &str, payload: &str) -> usize {
        let mut guard = self.inner.write().await;
        let Some(senders) = guard.get_mut(group) else {
            return 0;
        };

        senders.retain(|sender| sender.send(payload.to_string()).is_ok());
        let delivered = senders.len();
        if delivered == 0 {
            guard.remove(group);
        }

        delivered
    }

    /// Number of live entries registered for a group.
    #[cfg(test)]
    pub async fn subscriber_count(&self, group: &str) -> usize {
        let guard = self.inner.read().await;
        guard
            .get(group)
            .map(|senders| senders.iter().filter(|s| !s.is_closed()).count())
            .unwrap_or(0)
    }

    /// Number of groups with at least one registered entry.
    #[cfg(test)]
    pub async fn group_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
