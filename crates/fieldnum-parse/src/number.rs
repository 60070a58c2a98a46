use fieldnum_common::{LocaleSeparators, NumericInput};

use crate::disambiguate::disambiguate;
use crate::locale::resolve_separators;
use crate::numerals::normalize;
use crate::script::same_script;

/// Parse a form answer into a finite number.
///
/// `locale` selects the separator convention (`None` = `en-US`). Booleans
/// never parse, numbers pass through when finite, and text goes through the
/// full normalize / disambiguate pipeline. Any malformed, mixed-script,
/// exponent or ambiguous input is `None`.
pub fn parse_number<'a>(value: impl Into<NumericInput<'a>>, locale: Option<&str>) -> Option<f64> {
    match value.into() {
        NumericInput::Boolean(_) => None,
        NumericInput::Number(n) => n.is_finite().then_some(n),
        NumericInput::Text(s) => parse_text(s, resolve_separators(locale)),
    }
}

/// `parse_number(value, locale).is_some()`.
pub fn is_number<'a>(value: impl Into<NumericInput<'a>>, locale: Option<&str>) -> bool {
    parse_number(value, locale).is_some()
}

/// Text pipeline with already-resolved separators.
pub fn parse_text(text: &str, seps: LocaleSeparators) -> Option<f64> {
    let trimmed = text.trim();

    if !same_script(trimmed) {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = trimmed, "rejected: mixed numeral scripts");
        return None;
    }

    let normalized = normalize(trimmed);
    let compact: String = normalized
        .chars()
        .filter(|&c| !c.is_whitespace() && (seps.has_ascii_group() || c != seps.group))
        .collect();

    let Some(canonical) = disambiguate(&compact, seps) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = trimmed, "rejected: not a numeral");
        return None;
    };

    let value = canonical.parse::<f64>().ok()?;
    if !value.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = trimmed, "rejected: out of range");
        return None;
    }
    Some(value)
}

/// A parser bound to one locale, for validating many answers in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberParser {
    separators: LocaleSeparators,
}

impl NumberParser {
    /// Parser for `locale`; unknown tags fall back to `en-US`.
    pub fn for_locale(locale: &str) -> Self {
        Self::with_separators(resolve_separators(Some(locale)))
    }

    pub const fn with_separators(separators: LocaleSeparators) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> LocaleSeparators {
        self.separators
    }

    pub fn parse<'a>(&self, value: impl Into<NumericInput<'a>>) -> Option<f64> {
        match value.into() {
            NumericInput::Boolean(_) => None,
            NumericInput::Number(n) => n.is_finite().then_some(n),
            NumericInput::Text(s) => parse_text(s, self.separators),
        }
    }

    pub fn is_number<'a>(&self, value: impl Into<NumericInput<'a>>) -> bool {
        self.parse(value).is_some()
    }
}
