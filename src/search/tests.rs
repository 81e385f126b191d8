//! Search Module Tests
//!
//! Validates the query path: never-indexed shards, query validation, engine
//! parse failures, and result mapping.

#[cfg(test)]
mod tests {
    use crate::api::types::{SearchRequest, StatusCode};
    use crate::ingestion::types::Document;
    use crate::search::executor::SearchExecutor;
    use crate::shard::registry::{ShardId, ShardRegistry};

    use std::sync::Arc;
    use tempfile::TempDir;

    fn request(dataset: &str, branch: &str, query: &str) -> SearchRequest {
        SearchRequest {
            dataset: dataset.to_string(),
            branch: branch.to_string(),
            query: query.to_string(),
        }
    }

    async fn seed(registry: &Arc<ShardRegistry>, id: &ShardId, rows: &[(&str, &str)]) {
        let mut writer = registry.open_for_write(id).await.unwrap();
        for (key, value) in rows {
            writer
                .upsert(&Document {
                    key: key.to_string(),
                    all: format!("{},{}", key, value),
                    columns: vec![("value".to_string(), value.to_string())],
                })
                .unwrap();
        }
        writer.commit().unwrap();
    }

    // ============================================================
    // UNINDEXED SHARDS
    // ============================================================

    #[tokio::test]
    async fn test_search_never_indexed_shard_is_empty_success() {
        let temp = TempDir::new().unwrap();
        let executor = SearchExecutor::new(ShardRegistry::new(temp.path()));

        let response = executor.search(&request("dataset1", "branch1", "Ronaldo"));

        assert_eq!(response.status, StatusCode::Success);
        assert!(response.docs.is_empty());
    }

    #[tokio::test]
    async fn test_search_missing_shard_wins_over_bad_query() {
        let temp = TempDir::new().unwrap();
        let executor = SearchExecutor::new(ShardRegistry::new(temp.path()));

        // Existence is checked first, so even an invalid query succeeds.
        let response = executor.search(&request("dataset1", "branch1", "   "));

        assert_eq!(response.status, StatusCode::Success);
        assert!(response.docs.is_empty());
    }

    // ============================================================
    // QUERY VALIDATION
    // ============================================================

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", ""));

        assert_eq!(response.status, StatusCode::ParseError);
        assert!(response.docs.is_empty());
        assert!(!response.msg.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_query_is_rejected() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", " \t \n "));

        assert_eq!(response.status, StatusCode::ParseError);
    }

    #[tokio::test]
    async fn test_query_syntax_error_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        // Unclosed phrase quote is rejected by the engine's parser.
        let response = executor.search(&request("dataset1", "branch1", "\"Ronaldo"));

        assert_eq!(response.status, StatusCode::ParseError);
        assert!(response.docs.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_parsing() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", "  Ronaldo  "));

        assert_eq!(response.status, StatusCode::Success);
        assert_eq!(response.docs.len(), 1);
    }

    // ============================================================
    // RESULT MAPPING
    // ============================================================

    #[tokio::test]
    async fn test_hits_carry_stored_primary_keys() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(
            &registry,
            &id,
            &[
                ("Portugal", "Cristiano Ronaldo scored a goal!"),
                ("Argentina", "Messi missed the penalty!"),
            ],
        )
        .await;

        let executor = SearchExecutor::new(registry);

        let response = executor.search(&request("dataset1", "branch1", "Ronaldo"));
        assert_eq!(response.status, StatusCode::Success);
        assert_eq!(response.docs.len(), 1);
        assert_eq!(response.docs[0].key, "Portugal");

        let response = executor.search(&request("dataset1", "branch1", "penalty"));
        assert_eq!(response.docs.len(), 1);
        assert_eq!(response.docs[0].key, "Argentina");
    }

    #[tokio::test]
    async fn test_no_match_is_empty_success() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", "Messi"));

        assert_eq!(response.status, StatusCode::Success);
        assert!(response.docs.is_empty());
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive_on_analyzed_fields() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        seed(&registry, &id, &[("Portugal", "Cristiano Ronaldo scored")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", "ronaldo"));

        assert_eq!(response.docs.len(), 1);
        assert_eq!(response.docs[0].key, "Portugal");
    }

    #[tokio::test]
    async fn test_results_have_no_duplicate_keys() {
        let temp = TempDir::new().unwrap();
        let registry = ShardRegistry::new(temp.path());
        let id = ShardId::new("dataset1", "branch1");
        // Same key written twice: the upsert leaves one document.
        seed(&registry, &id, &[("Portugal", "Ronaldo scored")]).await;
        seed(&registry, &id, &[("Portugal", "Ronaldo scored again")]).await;

        let executor = SearchExecutor::new(registry);
        let response = executor.search(&request("dataset1", "branch1", "Ronaldo"));

        assert_eq!(response.docs.len(), 1);
        assert_eq!(response.docs[0].key, "Portugal");
    }
}
