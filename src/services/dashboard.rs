use crate::client::ResourceApi;
use crate::error::ClientResult;
use crate::models::Message;
use crate::resource::{decode, Collection};

pub const RECENT_MESSAGES: usize = 5;

/// Figures shown on the dashboard landing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_messages: usize,
    pub total_projects: usize,
    pub unread_messages: u64,
    /// Newest first
    pub recent_messages: Vec<Message>,
}

impl DashboardSummary {
    /// Fetch messages, projects and the unread count concurrently
    pub async fn load(api: &dyn ResourceApi) -> ClientResult<Self> {
        let (messages, projects, unread_messages) = futures::try_join!(
            api.list(Collection::Messages),
            api.list(Collection::Projects),
            api.unread_count(),
        )?;

        let mut recent = messages
            .into_iter()
            .map(decode::<Message>)
            .collect::<ClientResult<Vec<_>>>()?;
        let total_messages = recent.len();

        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(RECENT_MESSAGES);

        Ok(Self {
            total_messages,
            total_projects: projects.len(),
            unread_messages,
            recent_messages: recent,
        })
    }
}
