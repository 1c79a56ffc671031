//! Versioned editing session.
//!
//! A [`Session`] owns the current [`Snapshot`]. Every edit clones the current
//! document, applies the change to the clone and publishes the result as the
//! next version, so a snapshot handed out earlier never changes underneath
//! its reader. Subscribers receive each published snapshot over a channel.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::document::{Document, WireFormat};
use crate::error::{TreeError, TreeResult};
use crate::field::Field;
use crate::value::Value;

/// One published editing state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub version: u64,
    pub document: Document,
    /// The error of the operation that produced this snapshot, if it failed.
    pub error: Option<TreeError>,
}

#[derive(Debug)]
pub struct Session {
    current: Arc<Snapshot>,
    subscribers: Vec<Sender<Arc<Snapshot>>>,
}

impl Session {
    /// Start a session at version 0.
    pub fn new(document: Document) -> Self {
        Session {
            current: Arc::new(Snapshot {
                version: 0,
                document,
                error: None,
            }),
            subscribers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    pub fn document(&self) -> &Document {
        &self.current.document
    }

    pub fn error(&self) -> Option<&TreeError> {
        self.current.error.as_ref()
    }

    /// Receive every snapshot published after this call.
    pub fn subscribe(&mut self) -> Receiver<Arc<Snapshot>> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, document: Document, error: Option<TreeError>) {
        let snapshot = Arc::new(Snapshot {
            version: self.current.version + 1,
            document,
            error,
        });
        tracing::debug!(
            version = snapshot.version,
            format = %snapshot.document.format(),
            failed = snapshot.error.is_some(),
            "publishing snapshot"
        );
        self.subscribers
            .retain(|tx| tx.send(Arc::clone(&snapshot)).is_ok());
        self.current = snapshot;
    }

    /// Apply `edit` to a copy of the current document and publish the outcome.
    fn edit<T>(&mut self, edit: impl FnOnce(&mut Document) -> TreeResult<T>) -> TreeResult<T> {
        let mut document = self.current.document.clone();
        match edit(&mut document) {
            Ok(out) => {
                self.publish(document, None);
                Ok(out)
            }
            Err(err) => {
                let unchanged = self.current.document.clone();
                self.publish(unchanged, Some(err.clone()));
                Err(err)
            }
        }
    }

    /// Read from the current snapshot. A failed lookup is published as an
    /// error snapshot over the unchanged document.
    pub fn get_path(&mut self, path: &str) -> TreeResult<Field> {
        match self.current.document.get_path(path) {
            Ok(field) => Ok(field),
            Err(err) => {
                tracing::trace!(path, error = %err, "lookup failed");
                let unchanged = self.current.document.clone();
                self.publish(unchanged, Some(err.clone()));
                Err(err)
            }
        }
    }

    pub fn key_size_at(&self, path: &str) -> TreeResult<usize> {
        self.current.document.key_size_at(path)
    }

    pub fn get_key_at(&self, path: &str, i: usize) -> TreeResult<String> {
        self.current.document.get_key_at(path, i)
    }

    pub fn set_path(&mut self, path: &str, field: Field) -> TreeResult<()> {
        self.edit(|doc| doc.set_path(path, field))
    }

    pub fn set_value_at(&mut self, path: &str, value: Value) -> TreeResult<()> {
        self.edit(|doc| doc.set_value_at(path, value))
    }

    pub fn remove_path(&mut self, path: &str) -> TreeResult<Option<Value>> {
        self.edit(|doc| doc.remove_path(path))
    }

    pub fn insert_at(&mut self, path: &str, value: Value) -> TreeResult<()> {
        self.edit(|doc| doc.insert_at(path, value))
    }

    pub fn set_format(&mut self, format: WireFormat) {
        let mut document = self.current.document.clone();
        document.set_format(format);
        self.publish(document, None);
    }

    /// Publish the current document without its error.
    pub fn clear_error(&mut self) {
        let document = self.current.document.clone();
        self.publish(document, None);
    }
}
