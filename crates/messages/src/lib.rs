//! Kafka message model for event-source mapping batches

/// Base64, ASCII and hex helpers
pub mod codec;

/// Errors raised while decoding records
pub mod errors;

/// Decoded message and header types
pub mod message;

/// `topic-partition` keys
pub mod partition;

/// Per-batch totals
pub mod summary;

pub use errors::Error;
pub use message::{KafkaHeader, KafkaMessage};
pub use partition::PartitionKey;
pub use summary::BatchSummary;

/// Placeholder logged when a record carries no key or value.
pub const NULL_PLACEHOLDER: &str = "null";
