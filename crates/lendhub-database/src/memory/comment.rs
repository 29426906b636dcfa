//! In-memory comment store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use lendhub_core::result::AppResult;
use lendhub_entity::item::{Comment, CreateComment};

use crate::stores::CommentStore;

/// DashMap-backed [`CommentStore`].
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: DashMap<Uuid, Comment>,
}

impl MemoryCommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            item_id: data.item_id,
            author_id: data.author_id,
            author_name: data.author_name.clone(),
            text: data.text.clone(),
            created: data.created,
        };
        self.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.item_id == item_id)
            .map(|entry| entry.value().clone())
            .collect();
        comments.sort_by_key(|c| c.created);
        Ok(comments)
    }
}
