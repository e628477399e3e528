//! End-to-end pipeline tests: raw JSON records through normalization,
//! categorization, ranking, and report output, without the network.

use serde_json::json;

use modelscrapor::catalog::{normalize, ConversationShape};
use modelscrapor::categorize::{CategoryConfig, Categorizer};
use modelscrapor::rank::Ranker;
use modelscrapor::report::{render_css, render_html, write_report};

#[test]
fn two_record_scenario() {
    let raw = vec![
        json!({
            "id": "a",
            "name": "CodeMaster",
            "pricing": { "prompt": "0", "completion": "0" }
        }),
        json!({
            "id": "b",
            "name": "Generic Chat",
            "pricing": { "prompt": "0.000002", "completion": "0.000006" }
        }),
    ];

    let (models, stats) = normalize(&raw);
    assert_eq!(stats.fetched, 2);
    assert_eq!(stats.skipped, 0);

    assert!(models[0].is_free());
    assert!(!models[1].is_free());
    assert!((models[1].total_price() - 8.0).abs() < 1e-9);

    let config = CategoryConfig::default();
    let assignment = Categorizer::new(config.clone()).assign(&models);

    // "CodeMaster" matches "code"; "Generic Chat" matches "chat".
    assert!(assignment
        .members("Programming")
        .unwrap()
        .iter()
        .any(|m| m.id == "a"));
    assert!(assignment
        .members("Roleplay")
        .unwrap()
        .iter()
        .any(|m| m.id == "b"));

    // Every category is populated, by match, fallback, or backfill.
    for name in config.names() {
        assert!(
            !assignment.members(name).unwrap().is_empty(),
            "category {name} is empty"
        );
    }

    // In any category holding both, "b" outranks "a" on the price proxy.
    let ranker = Ranker::default();
    for category in assignment.iter() {
        let views = ranker.views(&category.members);
        let ids: Vec<&str> = views
            .heuristic
            .iter()
            .map(|r| r.record.id.as_str())
            .collect();
        if ids.contains(&"a") && ids.contains(&"b") {
            let rank_a = views
                .heuristic
                .iter()
                .find(|r| r.record.id == "a")
                .and_then(|r| r.rank);
            let rank_b = views
                .heuristic
                .iter()
                .find(|r| r.record.id == "b")
                .and_then(|r| r.rank);
            assert_eq!(rank_b, Some(1), "in {}", category.name);
            assert_eq!(rank_a, Some(2), "in {}", category.name);
        }
    }
}

#[test]
fn malformed_records_are_dropped_not_fatal() {
    let raw = vec![
        json!({ "id": "one", "name": "One" }),
        json!({ "id": "two", "name": "Two" }),
        json!({ "name": "missing id" }),
        json!({ "id": "three", "name": "Three" }),
        json!({ "id": "four", "name": "Four" }),
    ];

    let (models, stats) = normalize(&raw);
    assert_eq!(models.len(), 4);
    assert_eq!(stats.fetched, 4);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn report_files_written_atomically_after_render() {
    let raw = vec![
        json!({
            "id": "openai/gpt-4o",
            "name": "GPT-4o",
            "pricing": { "prompt": "0.000005", "completion": "0.000015" },
            "context_length": 128000
        }),
        json!({
            "id": "meta-llama/llama-3.1-8b:free",
            "name": "Llama 3.1 8B (free)",
            "pricing": { "prompt": "0", "completion": "0" }
        }),
    ];

    let (models, _) = normalize(&raw);
    let assignment = Categorizer::default().assign(&models);
    let html = render_html(
        &assignment,
        &Ranker::default(),
        "2026-08-24",
        10,
        ConversationShape::default(),
    );
    let css = render_css();

    let dir = tempfile::tempdir().unwrap();
    let (html_path, css_path) = write_report(dir.path(), "2026-08-24", &html, css).unwrap();

    let written = std::fs::read_to_string(&html_path).unwrap();
    assert!(written.contains("GPT-4o"));
    assert!(written.contains("[FREE]"));
    assert!(std::fs::read_to_string(&css_path)
        .unwrap()
        .contains("--free-badge"));
}

#[test]
fn custom_category_config_is_substitutable() {
    let toml = r#"
        fallback = ["General"]

        [[rules]]
        name = "Vision"
        keywords = ["vision", "image"]

        [[rules]]
        name = "General"
        keywords = ["nothing-matches-this"]
    "#;
    let mut config: CategoryConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.rules.len(), 2);

    let raw = vec![
        json!({ "id": "v", "name": "Vision Pro" }),
        json!({ "id": "g", "name": "Plain" }),
    ];
    let (models, _) = normalize(&raw);

    let assignment = Categorizer::new(config.clone()).assign(&models);
    assert!(assignment.members("Vision").unwrap().iter().any(|m| m.id == "v"));
    // "Plain" matched nothing and fell back to General.
    assert!(assignment.members("General").unwrap().iter().any(|m| m.id == "g"));

    // Order-preserving: report order follows rule order.
    let names: Vec<&str> = config.names().collect();
    assert_eq!(names, vec!["Vision", "General"]);
    config.rules.reverse();
    let names: Vec<&str> = config.names().collect();
    assert_eq!(names, vec!["General", "Vision"]);
}
