use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid base64 in {field}: {source}")]
    InvalidBase64 {
        field: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Non-ASCII byte in {field} at position {position}")]
    NonAscii { field: String, position: usize },

    #[error("Invalid partition key: {key}")]
    InvalidPartitionKey { key: String },
}
