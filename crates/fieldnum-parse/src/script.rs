//! Mixed-script veto.
//!
//! A value such as `"१२3"` (Devanagari followed by an ASCII digit) is treated
//! as corrupted input. The check looks at every Unicode decimal digit (`Nd`)
//! of the raw string, before normalization folds the scripts together.

use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::numerals::{NumeralScript, digit_value};

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Nd}").expect("decimal digit regex must compile"));

/// Script class of a single decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitScript {
    Ascii,
    Numeral(NumeralScript),
    /// An `Nd` digit outside the numeral table (N'Ko, Gurmukhi, ...).
    Unclassified,
}

impl DigitScript {
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            return DigitScript::Ascii;
        }
        match digit_value(c) {
            Some((script, _)) => DigitScript::Numeral(script),
            None => DigitScript::Unclassified,
        }
    }
}

impl Display for DigitScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitScript::Ascii => f.write_str("ascii"),
            DigitScript::Numeral(script) => write!(f, "{script}"),
            DigitScript::Unclassified => f.write_str("other"),
        }
    }
}

fn decimal_digits(input: &str) -> impl Iterator<Item = char> + '_ {
    DECIMAL_DIGIT
        .find_iter(input)
        .filter_map(|m| m.as_str().chars().next())
}

/// Distinct digit scripts of `input`, in order of first appearance.
pub fn digit_scripts(input: &str) -> SmallVec<[DigitScript; 2]> {
    let mut seen: SmallVec<[DigitScript; 2]> = SmallVec::new();
    for c in decimal_digits(input) {
        let script = DigitScript::of(c);
        if !seen.contains(&script) {
            seen.push(script);
        }
    }
    seen
}

/// `true` when all decimal digits of `input` belong to one script.
///
/// A string without digits passes; this only vetoes mixing and says nothing
/// about whether the rest of the string is a number.
pub fn same_script(input: &str) -> bool {
    let mut digits = decimal_digits(input).map(DigitScript::of);
    match digits.next() {
        Some(first) => digits.all(|script| script == first),
        None => true,
    }
}
