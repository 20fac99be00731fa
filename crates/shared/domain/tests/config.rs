use sfeed_domain::catalog::ConditionTypeCatalog;
use sfeed_domain::config::{CatalogConfig, FeedConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let catalog = CatalogConfig::default();
    assert_eq!(catalog.condition_types, vec!["New", "Used", "Refurbished"]);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.path.is_none());
    assert!(!logging.json);
    assert_eq!(logging.max_files, 10);

    let cfg = FeedConfig::default();
    assert_eq!(ConditionTypeCatalog::from(&cfg.catalog), ConditionTypeCatalog::default());
}

#[test]
fn feed_config_deserializes() {
    let raw = json!({
        "catalog": { "condition_types": ["Nuevo", "Usado"] },
        "logging": { "level": "debug", "path": "/tmp/logs", "json": true }
    });

    let cfg: FeedConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.catalog.condition_types, vec!["Nuevo", "Usado"]);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/logs")));
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.max_files, 10, "missing keys fall back to defaults");

    let catalog = ConditionTypeCatalog::from(&cfg.catalog);
    assert!(catalog.contains("Usado"));
    assert!(!catalog.contains("New"));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: FeedConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.catalog.condition_types.len(), 3);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn config_clone_is_copy_on_write() {
    let original = FeedConfig::default();
    let mut changed = original.clone();
    changed.logging.level = "trace".to_owned();

    assert_eq!(original.logging.level, "info");
    assert_eq!(changed.logging.level, "trace");
}
