use std::borrow::Cow;
use std::convert::Infallible;

use crate::config::{Config, MissingPolicy};
use crate::context::Context;
use crate::error::Error;
use crate::scanner::{split_fragments, Scanner};

/// Fills placeholders from a [`Context`] under a [`Config`].
pub struct Interpolator<'a> {
    context: &'a dyn Context,
    config: &'a Config,
}

impl<'a> Interpolator<'a> {
    pub fn new(context: &'a dyn Context, config: &'a Config) -> Self {
        Self { context, config }
    }

    /// Substitute every placeholder in `input`, applying the configured
    /// missing-key policy.
    ///
    /// Returns `Cow::Borrowed` if the input has no placeholder, `Cow::Owned`
    /// otherwise. Substituted values are not scanned again.
    pub fn interpolate<'b>(&self, input: &'b str) -> Result<Cow<'b, str>, Error> {
        weave(input, |name, out| -> Result<(), Error> {
            match self.context.lookup(name) {
                Some(value) => out.push_str(value),
                None => fill_missing(name, self.config, out)?,
            }
            Ok(())
        })
    }
}

/// Interpolate under `Config::default()`: a missing name becomes the empty
/// string and is reported with a warning. Never fails.
pub(crate) fn interpolate_lenient<C>(input: &str, context: &C) -> String
where
    C: Context + ?Sized,
{
    let config = Config::default();
    let woven = weave(input, |name, out| -> Result<(), Infallible> {
        // MissingPolicy::Empty writes nothing
        match context.lookup(name) {
            Some(value) => out.push_str(value),
            None => report_missing(name, &config),
        }
        Ok(())
    });

    match woven {
        Ok(result) => result.into_owned(),
        Err(never) => match never {},
    }
}

fn report_missing(name: &str, config: &Config) {
    if config.warn_on_missing {
        tracing::warn!(variable = name, policy = ?config.missing, "no value for prompt variable");
    }
}

fn fill_missing(name: &str, config: &Config, out: &mut String) -> Result<(), Error> {
    report_missing(name, config);
    match config.missing {
        MissingPolicy::Empty => {}
        MissingPolicy::Undefined => out.push_str("undefined"),
        MissingPolicy::Keep => {
            out.push('{');
            out.push_str(name);
            out.push('}');
        }
        MissingPolicy::Error => return Err(Error::MissingVar(name.to_string())),
    }
    Ok(())
}

/// Rebuilds `input` as `f0 v1 f1 .. vk fk`, where the fragments come from
/// cutting at each placeholder and `push_value` writes the value of each
/// placeholder in order.
fn weave<'b, E>(
    input: &'b str,
    mut push_value: impl FnMut(&str, &mut String) -> Result<(), E>,
) -> Result<Cow<'b, str>, E> {
    let names: Vec<&str> = Scanner::new(input).placeholders().collect();
    if names.is_empty() {
        return Ok(Cow::Borrowed(input));
    }

    let fragments = split_fragments(input);
    debug_assert_eq!(fragments.len(), names.len() + 1);
    tracing::trace!(placeholders = names.len(), "interpolating prompt");

    let mut result = String::with_capacity(input.len());
    let mut fragments = fragments.into_iter();
    if let Some(head) = fragments.next() {
        result.push_str(head);
    }
    for (name, fragment) in names.into_iter().zip(fragments) {
        push_value(name, &mut result)?;
        result.push_str(fragment);
    }

    Ok(Cow::Owned(result))
}
