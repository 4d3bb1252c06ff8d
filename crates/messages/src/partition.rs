use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::Error;

/// Key of a record list in the batch: `<topic>-<partition>`.
///
/// Topic names may themselves contain dashes, so the partition number is
/// whatever follows the last one. Orders by topic, then partition number.
#[derive(Clone, Debug, Serialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PartitionKey {
    pub topic: String,
    pub partition: i64,
}

impl FromStr for PartitionKey {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPartitionKey {
            key: key.to_string(),
        };

        let (topic, partition) = key.rsplit_once('-').ok_or_else(invalid)?;
        if topic.is_empty() {
            return Err(invalid());
        }
        let partition = partition.parse::<i64>().map_err(|_| invalid())?;

        Ok(Self {
            topic: topic.to_string(),
            partition,
        })
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.topic, self.partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_key() {
        let key: PartitionKey = "mytopic-0".parse().unwrap();
        assert_eq!(key.topic, "mytopic");
        assert_eq!(key.partition, 0);
    }

    #[test]
    fn topic_may_contain_dashes() {
        let key: PartitionKey = "msk-serverless-orders-12".parse().unwrap();
        assert_eq!(key.topic, "msk-serverless-orders");
        assert_eq!(key.partition, 12);
        assert_eq!(key.to_string(), "msk-serverless-orders-12");
    }

    #[test]
    fn orders_partitions_numerically() {
        let mut keys: Vec<PartitionKey> = ["t-10", "t-2", "s-11"]
            .iter()
            .map(|k| k.parse().unwrap())
            .collect();
        keys.sort();

        let sorted: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(sorted, vec!["s-11", "t-2", "t-10"]);
    }

    #[test]
    fn rejects_malformed_keys() {
        for key in ["mytopic", "-3", "mytopic-", "mytopic-x", "mytopic-1.5"] {
            assert!(
                matches!(key.parse::<PartitionKey>(), Err(Error::InvalidPartitionKey { .. })),
                "{key} should not parse"
            );
        }
    }
}
