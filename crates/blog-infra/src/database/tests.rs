#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::database::entity::{comment, post};
    use crate::database::postgres_repo::{PostgresCommentRepository, PostgresPostRepository};
    use blog_core::domain::{Comment, Post};
    use blog_core::ports::{BaseRepository, CommentRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn post_model(title: &str, published: bool) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            author_id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            text: "Body".to_owned(),
            created_at: now.into(),
            published_at: published.then(|| now.into()),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let model = post_model("Test Post", false);
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert!(post.is_draft());
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_published_maps_rows() {
        let newer = post_model("newer", true);
        let older = post_model("older", true);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer.clone(), older.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let posts = repo.find_published().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, newer.id);
        assert!(posts.iter().all(|p| p.published_at.is_some()));
    }

    #[tokio::test]
    async fn test_save_post_returns_stored_row() {
        let model = post_model("Saved", true);
        let post: Post = model.clone().into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let saved = repo.save(post.clone()).await.unwrap();

        assert_eq!(saved, post);
    }

    #[tokio::test]
    async fn test_find_comments_by_post() {
        let post_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();
        let model = comment::Model {
            id: uuid::Uuid::new_v4(),
            post_id,
            author_id: uuid::Uuid::new_v4(),
            text: "Nice".to_owned(),
            created_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = PostgresCommentRepository::new(Arc::new(db));
        let comments: Vec<Comment> = repo.find_by_post_id(post_id).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, model.id);
        assert_eq!(comments[0].post_id, post_id);
    }

    #[tokio::test]
    async fn test_repositories_share_one_connection() {
        let post_row = post_model("Shared", true);
        let comment_row = comment::Model {
            id: uuid::Uuid::new_v4(),
            post_id: post_row.id,
            author_id: uuid::Uuid::new_v4(),
            text: "First".to_owned(),
            created_at: chrono::Utc::now().into(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![post_row.clone()]])
                .append_query_results(vec![vec![comment_row.clone()]])
                .into_connection(),
        );

        let posts = PostgresPostRepository::new(Arc::clone(&db));
        let comments = PostgresCommentRepository::new(db);

        let post: Option<Post> = posts.find_by_id(post_row.id).await.unwrap();
        let post = post.unwrap();
        let found = comments.find_by_post_id(post.id).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, comment_row.id);
    }
}
