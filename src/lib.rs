//! Placeholder extraction and interpolation for chat prompt templates.
//!
//! A prompt literal holds `{name}` placeholders (see [`scanner`] for the
//! grammar). [`extract_variables`] lists them, [`interpolate`] fills them.

mod config;
mod context;
mod error;
mod interpolator;
pub mod scanner;
mod template;

use std::collections::{BTreeSet, HashMap};

pub use config::{Config, MissingPolicy};
pub use context::{Context, FormValues};
pub use error::Error;
pub use interpolator::Interpolator;
pub use template::PromptTemplate;

/// Every `{name}` placeholder in `literal`, in order of appearance.
///
/// Duplicates are kept and malformed tokens are skipped.
pub fn extract_variables(literal: &str) -> Vec<String> {
    scanner::Scanner::new(literal)
        .placeholders()
        .map(str::to_string)
        .collect()
}

/// Distinct placeholder names, sorted.
pub fn variable_names(literal: &str) -> Vec<String> {
    let names: BTreeSet<&str> = scanner::Scanner::new(literal).placeholders().collect();
    names.into_iter().map(str::to_string).collect()
}

/// Replace each placeholder with its value from `context`.
///
/// Text outside placeholders, including malformed tokens, is copied as is.
/// This behaves like an [`Interpolator`] under `Config::default()`: a name
/// missing from `context` becomes the empty string and is reported with a
/// `tracing` warning.
pub fn interpolate(literal: &str, context: &HashMap<String, String>) -> String {
    interpolator::interpolate_lenient(literal, context)
}
