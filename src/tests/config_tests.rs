use crate::config::Config;
use crate::error::ConfigError;

const FULL_CONFIG: &str = r#"
{
    "bogo": {
        "keywords": "ham, cheese,bacon",
        "url": "https://example.com/weekly-ad",
        "prefix_text": "🚨",
        "postfix_text": "🚨",
        "no_bogo_text": "Nothing this week",
        "producers": "logging_producer,mastodon_producer"
    },
    "logging": { "level": "debug" },
    "mastodon_producer": {
        "base_url": "https://mastodon.example",
        "access_token": "token123"
    }
}
"#;

#[test]
fn test_full_config_parses() {
    let config = Config::from_json(FULL_CONFIG).unwrap();

    assert_eq!(config.keywords(), vec!["ham", "cheese", "bacon"]);
    assert_eq!(config.bogo.url, "https://example.com/weekly-ad");
    assert_eq!(config.bogo.prefix_text, "🚨");
    assert_eq!(config.bogo.postfix_text, "🚨");
    assert_eq!(config.bogo.no_bogo_text, "Nothing this week");
    assert_eq!(
        config.producers(),
        vec!["logging_producer", "mastodon_producer"]
    );
    assert_eq!(config.logging.level, "debug");

    let section = config.section("mastodon_producer").unwrap();
    assert_eq!(section["base_url"], "https://mastodon.example");
    assert!(config.section("nonexistent").is_none());
}

#[test]
fn test_minimal_config_gets_defaults() {
    let config = Config::from_json(
        r#"{ "bogo": { "keywords": "ham", "url": "https://example.com" } }"#,
    )
    .unwrap();

    assert_eq!(config.bogo.prefix_text, "");
    assert_eq!(config.bogo.postfix_text, "");
    assert_eq!(config.bogo.no_bogo_text, "No BOGOs");
    assert!(config.producers().is_empty());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_keywords_is_an_error() {
    let result = Config::from_json(r#"{ "bogo": { "url": "https://example.com" } }"#);
    assert!(matches!(result, Err(ConfigError::MissingKey("keywords"))));
}

#[test]
fn test_missing_url_is_an_error() {
    let result = Config::from_json(r#"{ "bogo": { "keywords": "ham" } }"#);
    assert!(matches!(result, Err(ConfigError::MissingKey("url"))));
}

#[test]
fn test_blank_keywords_is_an_error() {
    let result =
        Config::from_json(r#"{ "bogo": { "keywords": "  ", "url": "https://example.com" } }"#);
    assert!(matches!(result, Err(ConfigError::MissingKey("keywords"))));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let result = Config::from_json("not json at all");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
