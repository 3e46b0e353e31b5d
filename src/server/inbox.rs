use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::contact::ContactMessage;

#[derive(Debug, Clone)]
pub struct StoredMessage {
    pub id: u64,
    pub message: ContactMessage,
    pub received_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
#[error("inbox lock poisoned")]
pub struct InboxPoisoned;

struct InboxInner {
    next_id: u64,
    messages: VecDeque<StoredMessage>,
}

/// Bounded in-memory record of received contact messages, oldest evicted first.
#[derive(Clone)]
pub struct Inbox {
    capacity: usize,
    inner: Arc<Mutex<InboxInner>>,
}

impl Inbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Arc::new(Mutex::new(InboxInner {
                next_id: 1,
                messages: VecDeque::new(),
            })),
        }
    }

    pub fn record(&self, message: ContactMessage) -> Result<StoredMessage, InboxPoisoned> {
        let mut inner = self.inner.lock().map_err(|_| InboxPoisoned)?;
        let stored = StoredMessage {
            id: inner.next_id,
            message,
            received_at: Utc::now(),
        };
        inner.next_id += 1;
        if inner.messages.len() >= self.capacity {
            inner.messages.pop_front();
        }
        inner.messages.push_back(stored.clone());
        Ok(stored)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.messages.len())
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest first.
    #[cfg(test)]
    pub fn recent(&self, limit: usize) -> Vec<StoredMessage> {
        self.inner
            .lock()
            .map(|inner| inner.messages.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}
