use async_trait::async_trait;
use serde_json::json;
use tokio_test::assert_ok;

use llm_explainer::config::AppConfig;
use llm_explainer::endpoint::ChallengesEndpoint;
use llmx_catalog::{CatalogError, ChallengeSource, Difficulty, FileChallengeSource, StaticChallengeSource};

const DOC: &str = "### Easy\nTitle: FizzBuzz\nDescription: Print 1..100.\nUse Fizz and Buzz.\n\n### Hard\nTitle: LRU\nDescription: O(1) get and put.\n";

struct BrokenSource;

#[async_trait]
impl ChallengeSource for BrokenSource {
    async fn load(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Load("backend unavailable".into()))
    }
}

#[tokio::test]
async fn success_returns_parsed_sections() {
    let response = ChallengesEndpoint::new(StaticChallengeSource::new(DOC)).get().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body,
               json!({
                   "easy": [{ "title": "FizzBuzz", "description": "Print 1..100.\nUse Fizz and Buzz." }],
                   "medium": [],
                   "hard": [{ "title": "LRU", "description": "O(1) get and put." }]
               }));
    let data = response.challenges().unwrap();
    assert_eq!(data.get(Difficulty::Hard)[0].title, "LRU");
}

#[tokio::test]
async fn failure_maps_to_500_with_fixed_body() {
    let response = ChallengesEndpoint::new(BrokenSource).get().await;
    assert_eq!(response.status, 500);
    assert_eq!(response.body, json!({ "error": "Failed to load challenges" }));
    assert!(response.challenges().is_none());
}

#[tokio::test]
async fn missing_file_is_a_500() {
    let cfg = AppConfig { challenges_path: "/no/such/dir/challenges.md".into(),
                          ..AppConfig::default() };
    let response = ChallengesEndpoint::from_config(&cfg).get().await;
    assert_eq!(response.status, 500);
}

#[tokio::test]
async fn reads_document_from_disk() {
    let path = std::env::temp_dir().join(format!("llmx-challenges-{}.md", std::process::id()));
    assert_ok!(tokio::fs::write(&path, DOC).await);

    let response = ChallengesEndpoint::new(FileChallengeSource::new(&path)).get().await;
    let _ = tokio::fs::remove_file(&path).await;

    assert!(response.is_success());
    assert_eq!(response.challenges().unwrap().easy.len(), 1);
}
