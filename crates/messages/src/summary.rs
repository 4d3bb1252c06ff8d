use serde::Serialize;

/// Totals for one invocation, logged once the batch has been walked
#[derive(Clone, Debug, Default, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub event_source: Option<String>,
    pub event_source_arn: Option<String>,
    pub bootstrap_servers: Option<String>,
    pub partitions: usize,
    pub messages: usize,
    /// Decoded value bytes across all messages
    pub bytes: usize,
}

impl BatchSummary {
    pub fn new(
        event_source: Option<String>,
        event_source_arn: Option<String>,
        bootstrap_servers: Option<String>,
    ) -> Self {
        Self {
            event_source,
            event_source_arn,
            bootstrap_servers,
            ..Default::default()
        }
    }

    pub fn add_partition(&mut self) {
        self.partitions += 1;
    }

    pub fn add_message(&mut self, value_len: usize) {
        self.messages += 1;
        self.bytes += value_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_totals() {
        let mut summary = BatchSummary::new(Some("aws:kafka".to_string()), None, None);
        summary.add_partition();
        summary.add_message(5);
        summary.add_message(0);
        summary.add_partition();
        summary.add_message(7);

        assert_eq!(summary.partitions, 2);
        assert_eq!(summary.messages, 3);
        assert_eq!(summary.bytes, 12);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["eventSource"], "aws:kafka");
        assert_eq!(json["eventSourceArn"], serde_json::Value::Null);
    }
}
