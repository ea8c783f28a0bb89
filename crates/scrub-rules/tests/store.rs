//! Rule store fallback-chain and caching behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scrub_rules::{RuleStore, RulesError};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "scrub-rules-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

const ONE_RULE: &str = r#"[
  {
    "id": "CLM-001",
    "severity": "critical",
    "message": "Claim is missing diagnosis information",
    "fix": "Add an HI segment",
    "conditions": [{"type": "diagnosis_present", "expected": false}]
  }
]"#;

#[test]
fn loads_rule_set_by_name() {
    let dir = unique_temp_dir("named");
    write(&dir.join("dhcs_rules.json"), ONE_RULE);

    let store = RuleStore::new(&dir);
    let rules = store.load("dhcs").unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, "CLM-001");
}

#[test]
fn missing_name_falls_back_to_default() {
    let dir = unique_temp_dir("fallback");
    write(&dir.join("default_rules.json"), ONE_RULE);

    let store = RuleStore::new(&dir);
    let rules = store.load("nonexistent").unwrap();
    assert_eq!(rules.len(), 1);
}

#[test]
fn missing_name_and_default_yields_empty_not_error() {
    let dir = unique_temp_dir("empty");
    let store = RuleStore::new(&dir);
    let rules = store.load("nonexistent").unwrap();
    assert!(rules.is_empty());
}

#[test]
fn malformed_rule_set_is_a_load_error() {
    let dir = unique_temp_dir("malformed");
    write(&dir.join("broken_rules.json"), "{not json");

    let store = RuleStore::new(&dir);
    let error = store.load("broken").unwrap_err();
    assert!(matches!(error, RulesError::Json { .. }));
}

#[test]
fn malformed_default_during_fallback_is_a_load_error() {
    let dir = unique_temp_dir("malformed-default");
    write(&dir.join("default_rules.json"), "[{]");

    let store = RuleStore::new(&dir);
    assert!(matches!(
        store.load("nonexistent"),
        Err(RulesError::Json { .. })
    ));
}

#[test]
fn loads_are_cached_under_the_requested_name() {
    let dir = unique_temp_dir("cache");
    write(&dir.join("default_rules.json"), ONE_RULE);

    let store = RuleStore::new(&dir);
    let first = store.load("dhcs").unwrap();
    assert_eq!(first.len(), 1);

    // Removing the backing file must not affect later loads of the same name.
    fs::remove_file(dir.join("default_rules.json")).unwrap();
    let second = store.load("dhcs").unwrap();
    assert_eq!(second.len(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn empty_outcome_is_cached_too() {
    let dir = unique_temp_dir("cache-empty");
    let store = RuleStore::new(&dir);
    assert!(store.load("dhcs").unwrap().is_empty());

    // A rule set appearing later is not picked up without a restart.
    write(&dir.join("dhcs_rules.json"), ONE_RULE);
    assert!(store.load("dhcs").unwrap().is_empty());
}

#[test]
fn failed_load_is_not_cached() {
    let dir = unique_temp_dir("retry");
    write(&dir.join("dhcs_rules.json"), "{not json");

    let store = RuleStore::new(&dir);
    assert!(store.load("dhcs").is_err());

    // Fixing the file makes the next load succeed.
    write(&dir.join("dhcs_rules.json"), ONE_RULE);
    assert_eq!(store.load("dhcs").unwrap().len(), 1);
}

#[test]
fn concurrent_first_callers_agree_on_one_result() {
    let dir = unique_temp_dir("concurrent");
    write(&dir.join("dhcs_rules.json"), ONE_RULE);

    let store = Arc::new(RuleStore::new(&dir));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.load("dhcs").unwrap())
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    for result in &results {
        assert_eq!(result.len(), 1);
        assert!(Arc::ptr_eq(result, &results[0]));
    }
}
