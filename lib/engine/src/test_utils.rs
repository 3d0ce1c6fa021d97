//! Test doubles for the lexicon and the backend that record every call.

use crate::CancellationToken;
use async_trait::async_trait;
use quadstore_common::error::StorageError;
use quadstore_common::{Lexicon, QuadBackend};
use quadstore_model::{IndexKey, ObjectId};
use quadstore_storage::memory::MemLexicon;
use std::sync::Mutex;

/// A [MemLexicon] that records the strings it has been asked to register.
#[derive(Debug, Default)]
pub struct CountingLexicon {
    inner: MemLexicon,
    uris: Mutex<Vec<String>>,
    literals: Mutex<Vec<String>>,
}

impl CountingLexicon {
    pub fn uris(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }

    pub fn literals(&self) -> Vec<String> {
        self.literals.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.uris.lock().unwrap().len() + self.literals.lock().unwrap().len()
    }

    pub fn saw_uri(&self, value: &str) -> bool {
        self.uris.lock().unwrap().iter().any(|uri| uri == value)
    }
}

#[async_trait]
impl Lexicon for CountingLexicon {
    async fn register_uri(&self, value: &str) -> ObjectId {
        self.uris.lock().unwrap().push(value.to_owned());
        self.inner.register_uri(value).await
    }

    async fn register_literal(&self, value: &str) -> ObjectId {
        self.literals.lock().unwrap().push(value.to_owned());
        self.inner.register_literal(value).await
    }
}

/// A backend that records the indexed keys. If `failure` is set, every call fails with a storage
/// error carrying that message and nothing is recorded. If `cancel_on_index` is set, the token is
/// cancelled after a key has been recorded.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    keys: Mutex<Vec<IndexKey>>,
    failure: Option<String>,
    cancel_on_index: Option<CancellationToken>,
}

impl RecordingBackend {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn cancelling(token: CancellationToken) -> Self {
        Self {
            cancel_on_index: Some(token),
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<IndexKey> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuadBackend for RecordingBackend {
    async fn index(&self, key: IndexKey) -> Result<(), StorageError> {
        if let Some(message) = &self.failure {
            return Err(StorageError::other(message.clone()));
        }
        self.keys.lock().unwrap().push(key);
        if let Some(token) = &self.cancel_on_index {
            token.cancel();
        }
        Ok(())
    }
}
