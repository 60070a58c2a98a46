//! Unicode numeral scripts and their mapping onto ASCII digits.
//!
//! Every supported script owns a block of ten consecutive codepoints for the
//! digits 0-9. The blocks live in [`NUMERAL_RANGES`]; supporting a new script
//! is one variant plus one table row.

use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// A numeral script the normalizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralScript {
    ArabicIndic,
    ExtendedArabicIndic,
    Devanagari,
    Bengali,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    MyanmarShan,
    Khmer,
    Mongolian,
    Limbu,
    NewTaiLue,
    TaiThamHora,
    TaiThamTham,
    Balinese,
    Sundanese,
    Lepcha,
    OlChiki,
    Vai,
    Saurashtra,
    KayahLi,
    Javanese,
    MyanmarTaiLaing,
    Cham,
    MeeteiMayek,
    Fullwidth,
}

impl NumeralScript {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArabicIndic => "arabic-indic",
            Self::ExtendedArabicIndic => "extended-arabic-indic",
            Self::Devanagari => "devanagari",
            Self::Bengali => "bengali",
            Self::Gujarati => "gujarati",
            Self::Oriya => "oriya",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Kannada => "kannada",
            Self::Malayalam => "malayalam",
            Self::Thai => "thai",
            Self::Lao => "lao",
            Self::Tibetan => "tibetan",
            Self::Myanmar => "myanmar",
            Self::MyanmarShan => "myanmar-shan",
            Self::Khmer => "khmer",
            Self::Mongolian => "mongolian",
            Self::Limbu => "limbu",
            Self::NewTaiLue => "new-tai-lue",
            Self::TaiThamHora => "tai-tham-hora",
            Self::TaiThamTham => "tai-tham-tham",
            Self::Balinese => "balinese",
            Self::Sundanese => "sundanese",
            Self::Lepcha => "lepcha",
            Self::OlChiki => "ol-chiki",
            Self::Vai => "vai",
            Self::Saurashtra => "saurashtra",
            Self::KayahLi => "kayah-li",
            Self::Javanese => "javanese",
            Self::MyanmarTaiLaing => "myanmar-tai-laing",
            Self::Cham => "cham",
            Self::MeeteiMayek => "meetei-mayek",
            Self::Fullwidth => "fullwidth",
        }
    }

    /// The range this script's digits occupy.
    pub fn range(&self) -> &'static NumeralRange {
        NUMERAL_RANGES
            .iter()
            .find(|r| r.script == *self)
            .expect("every script has a table row")
    }
}

impl Display for NumeralScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten consecutive codepoints holding digits 0-9 of one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralRange {
    pub script: NumeralScript,
    pub start: u32,
}

impl NumeralRange {
    const fn new(script: NumeralScript, start: u32) -> Self {
        Self { script, start }
    }

    /// Last codepoint of the block (digit nine).
    pub const fn end(&self) -> u32 {
        self.start + 9
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end()).contains(&(c as u32))
    }

    /// Digit characters of the block, zero first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        (self.start..=self.end()).filter_map(char::from_u32)
    }
}

pub static NUMERAL_RANGES: &[NumeralRange] = &[
    NumeralRange::new(NumeralScript::ArabicIndic, 0x0660),
    NumeralRange::new(NumeralScript::ExtendedArabicIndic, 0x06F0),
    NumeralRange::new(NumeralScript::Devanagari, 0x0966),
    NumeralRange::new(NumeralScript::Bengali, 0x09E6),
    NumeralRange::new(NumeralScript::Gujarati, 0x0AE6),
    NumeralRange::new(NumeralScript::Oriya, 0x0B66),
    NumeralRange::new(NumeralScript::Tamil, 0x0BE6),
    NumeralRange::new(NumeralScript::Telugu, 0x0C66),
    NumeralRange::new(NumeralScript::Kannada, 0x0CE6),
    NumeralRange::new(NumeralScript::Malayalam, 0x0D66),
    NumeralRange::new(NumeralScript::Thai, 0x0E50),
    NumeralRange::new(NumeralScript::Lao, 0x0ED0),
    NumeralRange::new(NumeralScript::Tibetan, 0x0F20),
    NumeralRange::new(NumeralScript::Myanmar, 0x1040),
    NumeralRange::new(NumeralScript::MyanmarShan, 0x1090),
    NumeralRange::new(NumeralScript::Khmer, 0x17E0),
    NumeralRange::new(NumeralScript::Mongolian, 0x1810),
    NumeralRange::new(NumeralScript::Limbu, 0x1946),
    NumeralRange::new(NumeralScript::NewTaiLue, 0x19D0),
    NumeralRange::new(NumeralScript::TaiThamHora, 0x1A80),
    NumeralRange::new(NumeralScript::TaiThamTham, 0x1A90),
    NumeralRange::new(NumeralScript::Balinese, 0x1B50),
    NumeralRange::new(NumeralScript::Sundanese, 0x1BB0),
    NumeralRange::new(NumeralScript::Lepcha, 0x1C40),
    NumeralRange::new(NumeralScript::OlChiki, 0x1C50),
    NumeralRange::new(NumeralScript::Vai, 0xA620),
    NumeralRange::new(NumeralScript::Saurashtra, 0xA8D0),
    NumeralRange::new(NumeralScript::KayahLi, 0xA900),
    NumeralRange::new(NumeralScript::Javanese, 0xA9D0),
    NumeralRange::new(NumeralScript::MyanmarTaiLaing, 0xA9F0),
    NumeralRange::new(NumeralScript::Cham, 0xAA50),
    NumeralRange::new(NumeralScript::MeeteiMayek, 0xABF0),
    NumeralRange::new(NumeralScript::Fullwidth, 0xFF10),
];

/// Codepoint -> (script, digit value), built once from [`NUMERAL_RANGES`].
static DIGIT_TABLE: Lazy<FxHashMap<char, (NumeralScript, u8)>> = Lazy::new(|| {
    let mut table = FxHashMap::default();
    table.reserve(NUMERAL_RANGES.len() * 10);
    for range in NUMERAL_RANGES {
        for (value, c) in (0u8..).zip(range.digits()) {
            table.insert(c, (range.script, value));
        }
    }
    table
});

/// Script and digit value of a non-ASCII numeral, `None` for anything else
/// (ASCII digits included).
#[inline]
pub fn digit_value(c: char) -> Option<(NumeralScript, u8)> {
    if c.is_ascii() {
        return None;
    }
    DIGIT_TABLE.get(&c).copied()
}

/// ASCII replacement for the Arabic punctuation used inside numbers.
#[inline]
pub fn separator_value(c: char) -> Option<char> {
    match c {
        '\u{066B}' => Some('.'), // ARABIC DECIMAL SEPARATOR
        '\u{066C}' | '\u{060C}' => Some(','), // ARABIC THOUSANDS SEPARATOR, ARABIC COMMA
        _ => None,
    }
}

/// Rewrite every supported numeral to its ASCII digit and Arabic numeric
/// punctuation to `.`/`,`. Everything else is copied through, so the
/// function is idempotent.
pub fn normalize(input: &str) -> String {
    if input.is_ascii() {
        return input.to_string();
    }

    input
        .chars()
        .map(|c| {
            if let Some((_, value)) = digit_value(c) {
                char::from(b'0' + value)
            } else {
                separator_value(c).unwrap_or(c)
            }
        })
        .collect()
}
