mod common;
use std::borrow::Cow;
use std::collections::HashMap;

use common::context;
use promptvars::{interpolate, Config, Error, FormValues, Interpolator, MissingPolicy};

fn fill(input: &str, missing: MissingPolicy) -> Result<Cow<'_, str>, Error> {
    let vars = context(&[("USER", "ada"), ("EMPTY_VAR", "")]);
    let config = Config::with_missing(missing);
    Interpolator::new(&vars, &config).interpolate(input)
}

#[test]
fn test_missing_policy_empty() {
    assert_eq!(fill("Hi {USER}{MISSING}!", MissingPolicy::Empty).unwrap(), "Hi ada!");
}

#[test]
fn test_missing_policy_undefined() {
    assert_eq!(fill("Hi {MISSING}", MissingPolicy::Undefined).unwrap(), "Hi undefined");
}

#[test]
fn test_missing_policy_keep() {
    let result = fill("{USER} {MISSING} {}", MissingPolicy::Keep).unwrap();
    assert_eq!(result, "ada {MISSING} {}");
}

#[test]
fn test_missing_policy_error() {
    match fill("{USER} {MISSING} {OTHER}", MissingPolicy::Error) {
        Err(Error::MissingVar(var)) => assert_eq!(var, "MISSING"),
        other => panic!("Expected MissingVar error, got {:?}", other),
    }
}

#[test]
fn test_empty_value_is_not_missing() {
    assert_eq!(fill("[{EMPTY_VAR}]", MissingPolicy::Error).unwrap(), "[]");
}

#[test]
fn test_free_interpolate_matches_default_config() {
    let vars = context(&[("a", "1")]);
    let config = Config::default();
    let input = "{a} {b} {a-b}";
    let configured = Interpolator::new(&vars, &config).interpolate(input).unwrap();
    assert_eq!(interpolate(input, &vars), configured);
    assert_eq!(configured, "1  {a-b}");
}

#[test]
fn test_error_display() {
    let err = Error::MissingVar("topic".to_string());
    assert_eq!(err.to_string(), "Variable not found: topic");
}

#[test]
fn test_borrowed_without_placeholders() {
    let vars: HashMap<String, String> = HashMap::new();
    let config = Config::default();
    let input = "plain {not-a-var} text";
    match Interpolator::new(&vars, &config).interpolate(input).unwrap() {
        Cow::Borrowed(s) => assert_eq!(s, input),
        Cow::Owned(_) => panic!("Expected borrowed result"),
    }
}

#[test]
fn test_owned_with_placeholders() {
    let vars = context(&[("USER", "ada")]);
    let config = Config::default();
    let result = Interpolator::new(&vars, &config).interpolate("{USER}").unwrap();
    assert!(matches!(result, Cow::Owned(_)));
}

#[test]
fn test_borrowed_str_map() {
    let vars: HashMap<&str, &str> = [("a", "1")].into_iter().collect();
    let config = Config {
        missing: MissingPolicy::Keep,
        warn_on_missing: false,
    };
    assert_eq!(Interpolator::new(&vars, &config).interpolate("{a}{b}").unwrap(), "1{b}");
}

#[test]
fn test_form_values() {
    let mut form = FormValues::blank(["b", "a", "b"]);
    assert_eq!(form.len(), 2);
    assert_eq!(form.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(form.set("a", "1"), Some(String::new()));
    assert_eq!(form.set("c", "3"), None);
    assert_eq!(form.get("a"), Some("1"));

    let config = Config::default();
    let result = Interpolator::new(&form, &config).interpolate("{a}{b}{c}").unwrap();
    assert_eq!(result, "13");
}

#[test]
fn test_form_values_from_iter() {
    let form: FormValues = [("x", "1"), ("y", "2")].into_iter().collect();
    assert!(!form.is_empty());
    assert_eq!(form.get("y"), Some("2"));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.missing, MissingPolicy::Empty);
    assert!(config.warn_on_missing);
}
