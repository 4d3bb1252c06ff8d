use chrono::{DateTime, Utc};
use derive_new::new;
use serde::Serialize;

use crate::codec;

/// One Kafka header with its value rendered as text
#[derive(Clone, Debug, Serialize, Eq, PartialEq, new)]
pub struct KafkaHeader {
    pub key: String,
    pub value: String,
}

impl KafkaHeader {
    pub fn from_bytes(key: impl Into<String>, value: &[i8]) -> Self {
        Self::new(key.into(), codec::header_text(value))
    }
}

/// A record from the batch, with key and value decoded
#[derive(Clone, Debug, Serialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct KafkaMessage {
    pub topic: String,
    pub partition: i64,
    pub offset: i64,
    pub timestamp: DateTime<Utc>,
    pub timestamp_type: String,
    /// Raw base64 key as delivered
    pub key: Option<String>,
    /// Raw base64 value as delivered
    pub value: Option<String>,
    pub decoded_key: String,
    pub decoded_value: String,
    pub headers: Vec<KafkaHeader>,
}

impl KafkaMessage {
    /// `topic-partition@offset`, used to tag log lines.
    pub fn position(&self) -> String {
        format!("{}-{}@{}", self.topic, self.partition, self.offset)
    }
}
