#![cfg(feature = "serde")]

use promptvars::{Config, MissingPolicy};

#[test]
fn test_policy_snake_case() {
    let json = serde_json::to_string(&MissingPolicy::Undefined).unwrap();
    assert_eq!(json, "\"undefined\"");
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = serde_json::from_str(r#"{"missing":"keep"}"#).unwrap();
    assert_eq!(config.missing, MissingPolicy::Keep);
    assert!(config.warn_on_missing);
}
