//! Unread-message counter shared between the inbox and every badge.
//!
//! The counter is the only mutable state shared across views. It lives in a
//! `watch` channel: [`UnreadCounter`] owns the sender and is the only handle
//! that can change the value, while [`UnreadBadge`]s only read and wait.

use std::sync::Arc;
use tokio::sync::watch;

use crate::client::ResourceApi;
use crate::error::ClientResult;

/// Owning, mutating handle. Not `Clone`: there is exactly one writer.
pub struct UnreadCounter {
    api: Arc<dyn ResourceApi>,
    sender: watch::Sender<u64>,
}

impl UnreadCounter {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        let (sender, _) = watch::channel(0);
        Self { api, sender }
    }

    pub fn get(&self) -> u64 {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> UnreadBadge {
        UnreadBadge {
            receiver: self.sender.subscribe(),
        }
    }

    /// Replace the value with the server's unread count
    pub async fn refresh(&self) -> ClientResult<u64> {
        let count = self.api.unread_count().await?;
        self.sender.send_replace(count);
        tracing::debug!("Unread messages: {}", count);
        Ok(count)
    }

    /// Subtract `n`, never going below zero
    pub fn decrement(&self, n: u64) -> u64 {
        self.sender.send_modify(|count| *count = count.saturating_sub(n));
        self.get()
    }

    pub fn reset(&self) {
        self.sender.send_replace(0);
    }
}

/// Read-only view of the unread count
#[derive(Clone)]
pub struct UnreadBadge {
    receiver: watch::Receiver<u64>,
}

impl UnreadBadge {
    pub fn get(&self) -> u64 {
        *self.receiver.borrow()
    }

    /// Wait for the next change and return the new value.
    ///
    /// Fails only once the counter itself is gone.
    pub async fn changed(&mut self) -> Result<u64, watch::error::RecvError> {
        self.receiver.changed().await?;
        Ok(*self.receiver.borrow_and_update())
    }
}
