use thiserror::Error;

/// Failures of the chat fan-out layer.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The Redis backend could not be reached or rejected a command.
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// A payload could not be encoded for publishing.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
