//! Redis-backed document gateway
//!
//! A thin key → JSON-document wrapper over a Redis connection. The gateway
//! offers no merge, transaction, or locking semantics; concurrent writers to
//! the same key rely entirely on the store's own atomicity.

use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::StoreConfig;

/// Errors that can occur when talking to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store unreachable, authentication rejected, or transport failure
    #[error("document store error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Document could not be serialized for storage
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored payload could not be deserialized
    #[error("failed to decode document: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Connection handle for the document store
///
/// Acquired once at startup and held for the whole run; the connection is
/// released implicitly at process exit.
pub struct TermStore {
    /// Multiplexed async connection to the store
    connection: redis::aio::MultiplexedConnection,
}

impl TermStore {
    /// Connects to the store described by the given configuration
    ///
    /// # Returns
    /// * `Ok(TermStore)` - A ready connection
    /// * `Err(StoreError)` - If the store is unreachable or rejects the
    ///   credential
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(connection_url(config))?;
        let connection = client.get_multiplexed_async_connection().await?;

        debug!(host = %config.host, port = config.port, "connected to document store");
        Ok(Self { connection })
    }

    /// Stores a document under `key`, replacing any previous value wholesale
    pub async fn put_document<T: Serialize>(
        &mut self,
        key: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        let payload = encode_document(document)?;
        debug!(key, bytes = payload.len(), "writing document");

        let _: () = self.connection.set(key, payload).await?;
        Ok(())
    }

    /// Retrieves the document stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The decoded document
    /// * `Ok(None)` - The key does not exist
    /// * `Err(StoreError)` - Transport failure or an undecodable payload
    pub async fn get_document<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let payload: Option<String> = self.connection.get(key).await?;
        debug!(key, found = payload.is_some(), "read document");

        match payload {
            Some(payload) => Ok(Some(decode_document(&payload)?)),
            None => Ok(None),
        }
    }
}

/// Builds the connection URL for the given store configuration
fn connection_url(config: &StoreConfig) -> String {
    match &config.password {
        Some(password) => format!("redis://:{}@{}:{}/", password, config.host, config.port),
        None => format!("redis://{}:{}/", config.host, config.port),
    }
}

/// Serializes a document to its stored JSON form
fn encode_document<T: Serialize>(document: &T) -> Result<String, StoreError> {
    serde_json::to_string(document).map_err(StoreError::Encode)
}

/// Deserializes a stored JSON payload back into a document
fn decode_document<T: DeserializeOwned>(payload: &str) -> Result<T, StoreError> {
    serde_json::from_str(payload).map_err(StoreError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestDocument {
        name: String,
        value: i32,
    }

    #[test]
    fn test_codec_roundtrip_preserves_document() {
        let original = TestDocument {
            name: "roundtrip".to_string(),
            value: 12345,
        };

        let payload = encode_document(&original).expect("Encode should succeed");
        let decoded: TestDocument = decode_document(&payload).expect("Decode should succeed");

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_codec_roundtrip_preserves_collections() {
        let original = vec![
            TestDocument {
                name: "first".to_string(),
                value: 1,
            },
            TestDocument {
                name: "second".to_string(),
                value: 2,
            },
        ];

        let payload = encode_document(&original).expect("Encode should succeed");
        let decoded: Vec<TestDocument> = decode_document(&payload).expect("Decode should succeed");

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        let result: Result<TestDocument, StoreError> = decode_document("not json at all");
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_connection_url_without_password() {
        let config = StoreConfig {
            host: "cache.internal".to_string(),
            port: 6380,
            password: None,
        };

        assert_eq!(connection_url(&config), "redis://cache.internal:6380/");
    }

    #[test]
    fn test_connection_url_with_password() {
        let config = StoreConfig {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: Some("hunter2".to_string()),
        };

        assert_eq!(connection_url(&config), "redis://:hunter2@127.0.0.1:6379/");
    }

    /// Full round-trip against a live store. Run with a local Redis and
    /// `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_live_put_then_get_is_deep_equal() {
        let config = StoreConfig::default();
        let mut store = TermStore::connect(&config)
            .await
            .expect("Requires a running Redis server");

        let document = vec![TestDocument {
            name: "live".to_string(),
            value: 7,
        }];

        store
            .put_document("tenure_test_roundtrip", &document)
            .await
            .expect("Put should succeed");

        let fetched: Option<Vec<TestDocument>> = store
            .get_document("tenure_test_roundtrip")
            .await
            .expect("Get should succeed");

        assert_eq!(fetched, Some(document));
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_get_of_missing_key_is_none() {
        let config = StoreConfig::default();
        let mut store = TermStore::connect(&config)
            .await
            .expect("Requires a running Redis server");

        let fetched: Option<TestDocument> = store
            .get_document("tenure_test_missing_key")
            .await
            .expect("Get should succeed");

        assert!(fetched.is_none());
    }
}
