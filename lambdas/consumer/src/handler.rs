use aws_lambda_events::kafka::{KafkaEvent, KafkaRecord};
use lambda_runtime::{Error, LambdaEvent};
use messages::{codec, BatchSummary, KafkaHeader, KafkaMessage, PartitionKey, NULL_PLACEHOLDER};
use serde_json::Value;

use crate::config::Config;

pub(crate) async fn handle(
    event: LambdaEvent<KafkaEvent>,
    config: &Config,
) -> Result<Value, Error> {
    tracing::info!("========== Kafka batch started ==========");

    let (messages, summary) = process_batch(event.payload, config)?;

    tracing::info!("All messages in this batch = {}", serde_json::to_string(&messages)?);
    tracing::info!("Batch summary = {}", serde_json::to_string(&summary)?);
    tracing::info!("========== Kafka batch completed ==========");

    Ok(serde_json::json!({"statusCode": 200}))
}

/// Walks every partition in key order and every record in delivery order.
pub(crate) fn process_batch(
    batch: KafkaEvent,
    config: &Config,
) -> Result<(Vec<KafkaMessage>, BatchSummary), Error> {
    tracing::info!("Event source: {}", or_null(batch.event_source.as_deref()));
    tracing::info!("Event source ARN: {}", or_null(batch.event_source_arn.as_deref()));
    tracing::info!("Bootstrap servers: {}", or_null(batch.bootstrap_servers.as_deref()));
    tracing::info!("Partition keys: {}", batch.records.len());

    let mut summary = BatchSummary::new(
        batch.event_source.clone(),
        batch.event_source_arn.clone(),
        batch.bootstrap_servers.clone(),
    );
    let mut messages = Vec::new();

    // Parsed keys first by topic and partition number, malformed ones after by string.
    let mut partitions: Vec<_> = batch
        .records
        .iter()
        .map(|(key, records)| (key.parse::<PartitionKey>(), key, records))
        .collect();
    partitions.sort_by(|a, b| {
        (a.0.is_err(), a.0.as_ref().ok(), a.1).cmp(&(b.0.is_err(), b.0.as_ref().ok(), b.1))
    });

    for (parsed, _, records) in partitions {
        match parsed {
            Ok(partition) => tracing::info!(
                "Processing {} records from topic {} partition {}",
                records.len(),
                partition.topic,
                partition.partition
            ),
            Err(e) => tracing::warn!("{} ({} records)", e, records.len()),
        }
        summary.add_partition();

        for record in records {
            let (message, value_len) = handle_record(record, config)?;
            summary.add_message(value_len);
            messages.push(message);
        }
    }

    Ok((messages, summary))
}

fn handle_record(record: &KafkaRecord, config: &Config) -> Result<(KafkaMessage, usize), Error> {
    let topic = record.topic.clone().unwrap_or_default();

    tracing::info!(
        "Record metadata - Topic: {}, Partition: {}, Offset: {}, Timestamp: {}, TimestampType: {}",
        topic,
        record.partition,
        record.offset,
        record.timestamp.0.to_rfc3339(),
        or_null(record.timestamp_type.as_deref())
    );
    tracing::info!("Key (base64): {}", or_null(record.key.as_deref()));
    tracing::info!("Value (base64): {}", or_null(record.value.as_deref()));

    let decoded_key = codec::decode_optional("key", record.key.as_deref())?;
    tracing::info!("Decoded key: {}", decoded_key);

    let (decoded_value, value_len) = match record.value.as_deref() {
        Some(encoded) => {
            let bytes = codec::decode_bytes("value", encoded)?;
            let value_len = bytes.len();
            tracing::info!("Value decoded, length: {} bytes", value_len);

            if config.hex_dump {
                tracing::info!(
                    "Message in hex format:\n{}",
                    codec::hex_dump(&bytes, config.hex_dump_bytes)
                );
            }

            let text = codec::ascii_text("value", bytes)?;
            tracing::info!("Decoded value: {}", codec::preview(&text, config.preview_chars));
            (text, value_len)
        }
        None => {
            tracing::info!("Decoded value: {}", NULL_PLACEHOLDER);
            (NULL_PLACEHOLDER.to_string(), 0)
        }
    };

    let headers: Vec<KafkaHeader> = record
        .headers
        .iter()
        .flat_map(|entry| entry.iter())
        .map(|(name, value)| KafkaHeader::from_bytes(name.as_str(), value))
        .collect();
    if headers.is_empty() {
        tracing::debug!("No headers in message");
    }
    for header in &headers {
        tracing::info!("Header - Key: {}, Value: {}", header.key, header.value);
    }

    let message = KafkaMessage::new(
        topic,
        record.partition,
        record.offset,
        record.timestamp.0,
        record.timestamp_type.clone().unwrap_or_default(),
        record.key.clone(),
        record.value.clone(),
        decoded_key,
        decoded_value,
        headers,
    );

    tracing::info!(
        "Message {} in JSON format: {}",
        message.position(),
        serde_json::to_string(&message)?
    );

    Ok((message, value_len))
}

fn or_null(field: Option<&str>) -> &str {
    field.unwrap_or(NULL_PLACEHOLDER)
}
