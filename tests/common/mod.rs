use std::collections::HashMap;

#[allow(dead_code)]
pub const SCENARIO: &str = "There are 3 valid variables {variable1}, {variable_2}, {variable_3} and {variable1} again and {this-is-invalid} and {this_is_too_long_to_be_valid} in this prompt";

#[allow(dead_code)]
pub fn context(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn scenario_context() -> HashMap<String, String> {
    context(&[
        ("variable1", "value1"),
        ("variable_2", "value2"),
        ("variable_3", "value3"),
    ])
}
