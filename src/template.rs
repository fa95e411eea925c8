use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::config::Config;
use crate::context::{Context, FormValues};
use crate::error::Error;
use crate::interpolator::{interpolate_lenient, Interpolator};
use crate::scanner::Scanner;

/// A stored prompt as the variable-fill form sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    literal: String,
}

impl PromptTemplate {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Every placeholder occurrence in order, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        Scanner::new(&self.literal).placeholders().collect()
    }

    /// Distinct placeholder names, sorted. These are the form's fields.
    pub fn variable_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = Scanner::new(&self.literal).placeholders().collect();
        names.into_iter().collect()
    }

    pub fn has_variables(&self) -> bool {
        Scanner::new(&self.literal).placeholders().next().is_some()
    }

    /// A fill-in form with an empty field per distinct name.
    pub fn blank_form(&self) -> FormValues {
        FormValues::blank(Scanner::new(&self.literal).placeholders())
    }

    /// Distinct, sorted names the provider has no value for.
    pub fn missing_variables(&self, context: &dyn Context) -> Vec<String> {
        self.variable_names()
            .into_iter()
            .filter(|name| context.lookup(name).is_none())
            .map(str::to_string)
            .collect()
    }

    /// Fill the template using `Config::default()`. Missing names become
    /// empty and are reported with a `tracing` warning.
    pub fn render(&self, context: &dyn Context) -> String {
        interpolate_lenient(&self.literal, context)
    }

    pub fn render_with(
        &self,
        context: &dyn Context,
        config: &Config,
    ) -> Result<Cow<'_, str>, Error> {
        Interpolator::new(context, config).interpolate(&self.literal)
    }
}

impl From<&str> for PromptTemplate {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for PromptTemplate {
    fn from(literal: String) -> Self {
        Self::new(literal)
    }
}
