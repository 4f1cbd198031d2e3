use futures::future::try_join_all;
use std::sync::Arc;

use crate::client::ResourceApi;
use crate::error::{ClientError, ClientResult};
use crate::models::Message;
use crate::resource::{decode_persisted, Collection};
use crate::store::ResourceStore;
use crate::unread::{UnreadBadge, UnreadCounter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    fn accepts(&self, message: &Message) -> bool {
        match self {
            Self::All => true,
            Self::Read => message.read,
            Self::Unread => message.is_unread(),
        }
    }
}

/// View state for the message list
#[derive(Debug, Clone, Default)]
pub struct MessageQuery {
    pub search: String,
    pub filter: ReadFilter,
}

/// Messages section: the message store plus the only writer of the unread count
pub struct MessageInbox {
    store: ResourceStore<Message>,
    unread: UnreadCounter,
    selected: Option<String>,
}

impl MessageInbox {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        Self {
            store: ResourceStore::new(api.clone()),
            unread: UnreadCounter::new(api),
            selected: None,
        }
    }

    /// Load messages and refresh the unread count
    pub async fn load(&mut self) -> ClientResult<()> {
        self.store.load().await?;
        self.unread.refresh().await?;
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        self.store.items()
    }

    pub fn store(&self) -> &ResourceStore<Message> {
        &self.store
    }

    /// Read-only handle for badges in other views
    pub fn badge(&self) -> UnreadBadge {
        self.unread.subscribe()
    }

    pub fn unread_count(&self) -> u64 {
        self.unread.get()
    }

    pub fn selected(&self) -> Option<&Message> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    /// Select a message, marking it read first when it is unread
    pub async fn open(&mut self, id: &str) -> ClientResult<Message> {
        if self.store.get(id).is_none() {
            let fetched = self.store.api().get(Collection::Messages, id).await?;
            self.store.merge(decode_persisted(fetched)?);
        }

        let message = match self.store.get(id).cloned() {
            Some(message) if message.is_unread() => self.mark_read(id).await?,
            Some(message) => message,
            None => return Err(ClientError::NotFound(Collection::Messages.label().to_string())),
        };

        self.selected = Some(id.to_string());
        Ok(message)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Mark one message read on the server, then locally.
    ///
    /// The counter drops by one only if the message was unread here.
    pub async fn mark_read(&mut self, id: &str) -> ClientResult<Message> {
        let was_unread = self.store.get(id).is_some_and(Message::is_unread);

        let message = self.store.mark_read(id).await?;
        if was_unread {
            self.unread.decrement(1);
        }
        Ok(message)
    }

    /// Mark every unread message read concurrently; all or nothing locally
    pub async fn mark_all_read(&mut self) -> ClientResult<usize> {
        let marked = self.store.mark_all_read().await?;
        self.unread.reset();
        Ok(marked)
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        let was_unread = self.store.get(id).is_some_and(Message::is_unread);

        self.store.delete(id).await?;
        if was_unread {
            self.unread.decrement(1);
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(())
    }

    /// Searched, filtered messages, newest first. Never touches the store.
    pub fn view(&self, query: &MessageQuery) -> Vec<Message> {
        let term = query.search.trim();

        let mut messages: Vec<Message> = self
            .store
            .items()
            .iter()
            .filter(|message| query.filter.accepts(message))
            .filter(|message| term.is_empty() || message.matches(term))
            .cloned()
            .collect();

        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }
}

impl ResourceStore<Message> {
    pub async fn mark_read(&mut self, id: &str) -> ClientResult<Message> {
        let message: Message = decode_persisted(self.api().mark_read(id).await?)?;
        self.merge(message.clone());
        Ok(message)
    }

    /// Returns how many messages were marked. Nothing changes locally unless every call succeeds.
    pub async fn mark_all_read(&mut self) -> ClientResult<usize> {
        let unread: Vec<String> = self
            .items()
            .iter()
            .filter(|message| message.is_unread())
            .filter_map(|message| message.id.clone())
            .collect();

        let api = self.api().clone();
        let marked = try_join_all(unread.iter().map(|id| api.mark_read(id))).await?;

        let marked = marked
            .into_iter()
            .map(decode_persisted)
            .collect::<ClientResult<Vec<Message>>>()?;

        let count = marked.len();
        for message in marked {
            self.merge(message);
        }
        tracing::info!("Marked {} messages as read", count);
        Ok(count)
    }
}
