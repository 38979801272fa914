use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Comment;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CommentRepository};

/// In-memory comment store.
///
/// Comments are kept in a `Vec` so per-post listings come back in insertion order.
pub struct InMemoryCommentRepository {
    store: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|c| c.id == comment.id) {
            Some(existing) => *existing = comment.clone(),
            None => store.push(comment.clone()),
        }
        Ok(comment)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::forms::CommentFields;

    fn comment(post_id: Uuid, text: &str) -> Comment {
        Comment::new(
            post_id,
            Uuid::new_v4(),
            CommentFields {
                text: text.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_comments_in_insertion_order() {
        let repo = InMemoryCommentRepository::new();
        let post_id = Uuid::new_v4();

        let first = repo.save(comment(post_id, "first")).await.unwrap();
        repo.save(comment(Uuid::new_v4(), "elsewhere")).await.unwrap();
        let second = repo.save(comment(post_id, "second")).await.unwrap();

        let comments = repo.find_by_post_id(post_id).await.unwrap();
        assert_eq!(comments, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryCommentRepository::new();
        let saved = repo.save(comment(Uuid::new_v4(), "hi")).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
    }
}
