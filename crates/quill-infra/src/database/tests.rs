#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres::PostgresPostRepository;
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(slug: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: "Test Post".to_owned(),
            slug: slug.to_owned(),
            content: "Content".to_owned(),
            excerpt: "Excerpt".to_owned(),
            author: "Ada".to_owned(),
            author_id: Some(uuid::Uuid::new_v4()),
            cover_image: String::new(),
            published: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let expected = model("hello-world");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![expected.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_slug("hello-world").await.unwrap();

        let found = result.expect("post should be found");
        assert_eq!(found.id, expected.id);
        assert_eq!(found.slug, "hello-world");
        assert_eq!(found.title, "Test Post");
    }

    #[tokio::test]
    async fn test_find_post_by_slug_miss() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_slug("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_maps_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("a"), model("b")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list(Some(true)).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[1].slug, "b");
    }

    #[tokio::test]
    async fn test_insert_duplicate_slug_maps_to_constraint() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx-posts-slug\"".to_owned(),
            )])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let candidate: quill_core::domain::Post = model("taken").into();

        let err = repo.insert(candidate).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(err.to_string(), "A post with this slug already exists");
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo.delete_by_slug("missing").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
