//! Locale-aware number parsing for free-text form answers.
//!
//! Answers typed on a phone arrive in whatever numeral script and separator
//! convention the respondent uses: `"1,234.56"`, `"1.234,56"`, `"١٬٢٣٤٫٥٦"`,
//! `"१२३.४५"`, `"1,00,000"`. [`parse_number`] folds them into one `f64`, or
//! returns `None` when the text is not unambiguously a number.
//!
//! ```
//! use fieldnum_parse::parse_number;
//!
//! assert_eq!(parse_number("1.234,56", Some("de-DE")), Some(1234.56));
//! assert_eq!(parse_number("١٬٢٣٤٫٥٦", Some("ar-SA")), Some(1234.56));
//! assert_eq!(parse_number("100.50.25", None), None);
//! assert_eq!(parse_number(true, None), None);
//! ```
//!
//! All functions are pure; the lookup tables are built once on first use
//! and shared read-only across threads.

pub mod disambiguate;
pub mod locale;
mod number;
pub mod numerals;
pub mod script;

pub use disambiguate::disambiguate;
pub use locale::{lookup_separators, resolve_separators};
pub use number::{NumberParser, is_number, parse_number, parse_text};
pub use numerals::{NUMERAL_RANGES, NumeralRange, NumeralScript, normalize};
pub use script::{DigitScript, digit_scripts, same_script};

// Re-export common types
pub use fieldnum_common::{LocaleError, LocaleSeparators, LocaleTag, NumericInput};
