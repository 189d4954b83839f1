use cartbind::catalog::Product;
use cartbind::config::{Config, ConfigError, ReducerConfig, ViewConfig};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.reducer.load_delay_ms, 500);
    assert_eq!(config.reducer.load_delay(), Duration::from_millis(500));
    assert!(config.reducer.emit_on_reset);
    assert_eq!(config.view.max_quantity, 100);
    assert_eq!(config.products.len(), 5);
    assert_eq!(config.catalog().products()[0].name, "iPhone");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cartbind/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_parse_full_config() {
    let (_dir, path) = write_config(
        r#"
[reducer]
load_delay_ms = 0
emit_on_reset = false

[view]
max_quantity = 10

[[products]]
id = 7
name = "Switch"
image = "gamecontroller"
price = 4

[[products]]
id = 8
name = "Deck"
image = "steamdeck"
price = 6
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.reducer,
        ReducerConfig {
            load_delay_ms: 0,
            emit_on_reset: false,
        }
    );
    assert_eq!(config.view, ViewConfig { max_quantity: 10 });
    assert_eq!(
        config.products,
        vec![
            Product::new(7, "Switch", "gamecontroller", 4),
            Product::new(8, "Deck", "steamdeck", 6),
        ]
    );
}

#[test]
fn test_partial_sections_fill_defaults() {
    let (_dir, path) = write_config("[reducer]\nload_delay_ms = 50\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.reducer.load_delay_ms, 50);
    assert!(config.reducer.emit_on_reset);
    assert_eq!(config.view.max_quantity, 100);
    assert_eq!(config.products.len(), 5);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[reducer\nload_delay_ms = ");
    match Config::load_from(&path) {
        Err(err @ ConfigError::Parse { .. }) => {
            assert!(err.to_string().contains("invalid TOML in cartbind config"));
            assert!(matches!(err, ConfigError::Parse { path: ref p, .. } if *p == path));
        }
        other => panic!("Expected Parse, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_empty_catalog() {
    let config = Config {
        products: vec![],
        ..Config::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyCatalog), "got {:?}", err);
    assert!(err.to_string().contains("catalog is empty"));
}

#[test]
fn test_validation_fails_duplicate_ids() {
    let (_dir, path) = write_config(
        r#"
[[products]]
id = 1
name = "A"
image = "a"
price = 1

[[products]]
id = 1
name = "B"
image = "b"
price = 2
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::DuplicateProductId { id, first, second }) => {
            assert_eq!((id, first.as_str(), second.as_str()), (1, "A", "B"));
        }
        other => panic!("Expected DuplicateProductId, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    match Config::load_from(temp_dir.path()) {
        Err(err @ ConfigError::Read { .. }) => {
            assert!(err.to_string().starts_with("cannot read cartbind config"));
        }
        other => panic!("Expected Read, got {:?}", other),
    }
}

#[test]
fn test_duplicate_id_message_names_both_products() {
    let config = Config {
        products: vec![
            Product::new(4, "XBOX", "xbox.logo", 5),
            Product::new(4, "Switch", "gamecontroller", 4),
        ],
        ..Config::default()
    };

    assert_eq!(
        config.validate().unwrap_err().to_string(),
        "catalog lists product id 4 twice ('XBOX' and 'Switch')"
    );
}
