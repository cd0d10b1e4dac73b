//! Integration tests for skillgraph

use skillgraph::catalog::JobCatalog;
use skillgraph::config::Config;
use skillgraph::input::manager::InputManager;
use skillgraph::market::MarketDataClient;
use skillgraph::processing::analyzer::AnalysisEngine;
use skillgraph::taxonomy::SkillTaxonomy;
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("ReactJS"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

fn seed_engine(with_market: bool) -> AnalysisEngine {
    let market = if with_market {
        Some(Arc::new(MarketDataClient::builtin()))
    } else {
        None
    };
    AnalysisEngine::new(
        Arc::new(SkillTaxonomy::builtin()),
        JobCatalog::builtin(),
        market,
        &Config::default(),
    )
}

#[tokio::test]
async fn test_end_to_end_match_from_txt_fixture() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let report = seed_engine(true).analyze(&text).await.unwrap();

    let names: Vec<&str> = report
        .extracted_skills
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Python", "JavaScript", "React", "SQL", "Agile"]);

    let ranked: Vec<(u32, u8)> = report
        .matches
        .iter()
        .map(|m| (m.listing.id, m.match_score))
        .collect();
    assert_eq!(ranked, vec![(1, 70), (4, 50), (2, 40), (3, 38)]);

    // gap annotations on the top match
    let top = &report.matches[0];
    let missing: Vec<&str> = top.missing_required.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(missing, vec!["Communication"]);
    let bonus: Vec<&str> = top.matched_bonus.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(bonus, vec!["SQL"]);

    // enrichment attached for known companies
    assert!(top.market.is_some());
    assert_eq!(top.market.as_ref().unwrap().health_score, 92);
}

#[tokio::test]
async fn test_markdown_and_txt_fixtures_extract_identically() {
    let mut manager = InputManager::new();
    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let md = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let engine = seed_engine(false);
    let from_txt: Vec<String> = engine.extract(&txt).names().map(String::from).collect();
    let from_md: Vec<String> = engine.extract(&md).names().map(String::from).collect();
    assert_eq!(from_txt, from_md);
}

#[tokio::test]
async fn test_enrichment_absence_keeps_scores_identical() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let enriched = seed_engine(true).analyze(&text).await.unwrap();
    let bare = seed_engine(false).analyze(&text).await.unwrap();

    let enriched_scores: Vec<u8> = enriched.matches.iter().map(|m| m.match_score).collect();
    let bare_scores: Vec<u8> = bare.matches.iter().map(|m| m.match_score).collect();
    assert_eq!(enriched_scores, bare_scores);
    assert!(bare.matches.iter().all(|m| m.market.is_none()));
}
