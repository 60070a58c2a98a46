//! Locale identifiers and the separator pair a locale writes numbers with.
//!
//! - **`LocaleSeparators`**: decimal mark + digit-group mark of one locale
//! - **`LocaleTag`**       : a parsed `language[-Script][-REGION]` identifier
//! - **`LocaleError`**     : why a tag string could not be parsed

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal and group separator of a locale.
///
/// `decimal` is always `.` or `,`: locales whose native decimal mark lives
/// outside ASCII (Arabic `٫`) are stored with the ASCII mark the numeral
/// normalizer rewrites it to. `group` may be any single character, including
/// spaces and apostrophes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleSeparators {
    pub decimal: char,
    pub group: char,
}

impl LocaleSeparators {
    /// `en-US` style: `1,234.56`.
    pub const DOT_DECIMAL: Self = Self::new('.', ',');
    /// Continental style: `1.234,56`.
    pub const COMMA_DECIMAL: Self = Self::new(',', '.');

    pub const fn new(decimal: char, group: char) -> Self {
        Self { decimal, group }
    }

    /// `true` when `decimal` is an ASCII mark distinct from `group`.
    pub fn is_consistent(&self) -> bool {
        matches!(self.decimal, '.' | ',') && self.decimal != self.group
    }

    /// Whether the group mark is one of the ASCII marks the disambiguator
    /// reasons about, as opposed to a space or apostrophe that is stripped.
    pub fn has_ascii_group(&self) -> bool {
        matches!(self.group, '.' | ',')
    }
}

impl Default for LocaleSeparators {
    fn default() -> Self {
        Self::DOT_DECIMAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("locale tag is empty")]
    Empty,
    #[error("invalid language subtag '{0}' (expected 2-3 ASCII letters)")]
    InvalidLanguage(String),
}

/// A locale identifier reduced to what separator lookup needs.
///
/// Accepts `-` or `_` as delimiter and any casing (`de_de`, `DE-de`). A
/// four-letter script subtag is skipped; variants and extensions after the
/// region are ignored.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    pub const DEFAULT: &'static str = "en-US";

    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut subtags = tag.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        let mut region = None;
        for sub in subtags {
            let is_alpha = sub.bytes().all(|b| b.is_ascii_alphabetic());
            match sub.len() {
                4 if is_alpha => continue,
                2 if is_alpha => region = Some(sub.to_ascii_uppercase()),
                3 if sub.bytes().all(|b| b.is_ascii_digit()) => region = Some(sub.to_string()),
                _ => {}
            }
            break;
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.to_string()
    }
}
