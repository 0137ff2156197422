//! Redis-backed channel layer for multi-process deployments.
//!
//! Every group maps to the Redis channel `cupid:{group}`. Each process runs a single
//! pattern subscription on `cupid:*` and hands incoming payloads to its local
//! [`GroupRegistry`], so a payload published by any process reaches every socket.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use redis::AsyncCommands;
use tokio::task::JoinHandle;

use crate::server::{
    channel::{ChannelLayer, GroupRegistry, GroupSubscription},
    error::channel::ChannelError,
};

/// Prefix of every Redis channel used by the layer.
pub const CHANNEL_PREFIX: &str = "cupid:";

/// Delay before the listener reconnects after losing its subscription.
const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Builds the Redis channel name for a group.
pub fn redis_channel(group: &str) -> String {
    format!("{}{}", CHANNEL_PREFIX, group)
}

/// Channel layer relaying payloads through Redis pub/sub.
#[derive(Clone)]
pub struct RedisChannelLayer {
    client: redis::Client,
    registry: GroupRegistry,
}

impl RedisChannelLayer {
    /// Creates the layer from a Redis URL.
    ///
    /// No connection is made until the first publish or until the listener starts.
    ///
    /// # Arguments
    /// - `redis_url` - Connection URL such as `redis://localhost:6379`
    ///
    /// # Returns
    /// - `Ok(RedisChannelLayer)` - Layer ready to start its listener
    /// - `Err(ChannelError::Redis)` - The URL could not be parsed
    pub fn new(redis_url: &str) -> Result<Self, ChannelError> {
        Ok(Self {
            client: redis::Client::open(redis_url)?,
            registry: GroupRegistry::new(),
        })
    }

    /// Spawns the pattern-subscribe listener.
    ///
    /// The listener reconnects after errors and runs for the lifetime of the process.
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Handle of the background task
    pub fn spawn_listener(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let registry = self.registry.clone();

        tokio::spawn(async move {
            loop {
                match listen(&client, &registry).await {
                    Ok(()) => tracing::warn!("Redis subscription ended, reconnecting"),
                    Err(e) => tracing::error!("Redis subscription failed: {}", e),
                }
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        })
    }
}

#[async_trait]
impl ChannelLayer for RedisChannelLayer {
    async fn group_add(&self, group: &str) -> Result<GroupSubscription, ChannelError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;

        Ok(self.registry.subscribe(group).await)
    }

    async fn group_send(&self, group: &str, payload: String) -> Result<(), ChannelError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.publish::<_, _, ()>(redis_channel(group), payload).await?;

        Ok(())
    }

    async fn group_discard(&self, subscription: GroupSubscription) {
        self.registry.unsubscribe(subscription).await;
    }
}

/// Runs one pattern subscription until the stream ends or fails.
async fn listen(client: &redis::Client, registry: &GroupRegistry) -> Result<(), ChannelError> {
    // Pub/sub needs a dedicated connection.
    let conn = client.get_async_connection().await?;
    let mut pubsub = conn.into_pubsub();
    pubsub.psubscribe(format!("{}*", CHANNEL_PREFIX)).await?;
    tracing::info!("Subscribed to Redis channels {}*", CHANNEL_PREFIX);

    let mut stream = pubsub.on_message();
    while let Some(msg) = stream.next().await {
        let channel = msg.get_channel_name().to_string();
        let Some(group) = channel.strip_prefix(CHANNEL_PREFIX) else {
            continue;
        };

        let payload: String = match msg.get_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Dropping undecodable payload on {}: {}", channel, e);
                continue;
            }
        };

        registry.dispatch(group, &payload).await;
    }

    Ok(())
}
