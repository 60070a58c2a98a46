//! Static locale -> separator table.
//!
//! Resolution never consults the platform locale database, so results are
//! identical on every host. Lookup order: `language-REGION`, then the bare
//! language, then [`LocaleSeparators::DOT_DECIMAL`] (`en-US`).
//!
//! Arabic-script and Persian locales are listed with `.`/`,`: their native
//! marks `٫`/`٬` are rewritten to exactly those by the numeral normalizer.

use fieldnum_common::{LocaleSeparators, LocaleTag};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

const DOT: LocaleSeparators = LocaleSeparators::DOT_DECIMAL;
const COMMA: LocaleSeparators = LocaleSeparators::COMMA_DECIMAL;
const COMMA_SPACE: LocaleSeparators = LocaleSeparators::new(',', ' ');
const COMMA_NBSP: LocaleSeparators = LocaleSeparators::new(',', '\u{00A0}');
const COMMA_NNBSP: LocaleSeparators = LocaleSeparators::new(',', '\u{202F}');
const DOT_APOSTROPHE: LocaleSeparators = LocaleSeparators::new('.', '\'');

static LOCALE_SEPARATORS: &[(&str, LocaleSeparators)] = &[
    // English
    ("en", DOT),
    ("en-US", DOT),
    ("en-GB", DOT),
    ("en-AU", DOT),
    ("en-CA", DOT),
    ("en-IN", DOT),
    ("en-NG", DOT),
    ("en-KE", DOT),
    ("en-PH", DOT),
    ("en-ZA", COMMA_NBSP),
    // South Asia (Indian grouping is handled by the disambiguator)
    ("hi", DOT),
    ("hi-IN", DOT),
    ("bn", DOT),
    ("bn-BD", DOT),
    ("bn-IN", DOT),
    ("ta", DOT),
    ("ta-IN", DOT),
    ("te", DOT),
    ("mr", DOT),
    ("gu", DOT),
    ("kn", DOT),
    ("ml", DOT),
    ("pa", DOT),
    ("ne", DOT),
    ("ur", DOT),
    ("ur-PK", DOT),
    // Arabic script
    ("ar", DOT),
    ("ar-SA", DOT),
    ("ar-EG", DOT),
    ("ar-AE", DOT),
    ("ar-IQ", DOT),
    ("ar-JO", DOT),
    ("ar-MA", COMMA_SPACE),
    ("ar-DZ", COMMA),
    ("ar-TN", COMMA),
    ("fa", DOT),
    ("fa-IR", DOT),
    // East and South-East Asia
    ("th", DOT),
    ("th-TH", DOT),
    ("zh", DOT),
    ("ja", DOT),
    ("ko", DOT),
    ("ms", DOT),
    ("fil", DOT),
    ("my", DOT),
    ("km", DOT),
    ("lo", COMMA),
    ("id", COMMA),
    ("vi", COMMA),
    // Africa and Middle East
    ("sw", DOT),
    ("he", DOT),
    ("tr", COMMA),
    // Europe and the Americas
    ("de", COMMA),
    ("de-DE", COMMA),
    ("de-AT", COMMA_NBSP),
    ("de-CH", DOT_APOSTROPHE),
    ("de-LI", DOT_APOSTROPHE),
    ("it", COMMA),
    ("it-CH", DOT_APOSTROPHE),
    ("es", COMMA),
    ("es-ES", COMMA),
    ("es-AR", COMMA),
    ("es-CO", COMMA),
    ("es-CL", COMMA),
    ("es-MX", DOT),
    ("es-US", DOT),
    ("es-419", DOT),
    ("pt", COMMA),
    ("pt-BR", COMMA),
    ("pt-PT", COMMA_NBSP),
    ("nl", COMMA),
    ("da", COMMA),
    ("el", COMMA),
    ("ro", COMMA),
    ("fr", COMMA_NNBSP),
    ("fr-FR", COMMA_NNBSP),
    ("fr-CA", COMMA_NBSP),
    ("fr-CH", COMMA_NNBSP),
    ("ru", COMMA_NBSP),
    ("uk", COMMA_NBSP),
    ("pl", COMMA_NBSP),
    ("cs", COMMA_NBSP),
    ("sk", COMMA_NBSP),
    ("hu", COMMA_NBSP),
    ("bg", COMMA_NBSP),
    ("sv", COMMA_NBSP),
    ("nb", COMMA_NBSP),
    ("no", COMMA_NBSP),
    ("fi", COMMA_NBSP),
];

static TABLE: Lazy<FxHashMap<&'static str, LocaleSeparators>> =
    Lazy::new(|| LOCALE_SEPARATORS.iter().copied().collect());

/// Table entry for `tag`, falling back to its bare language. `None` when
/// neither is known.
pub fn lookup_separators(tag: &LocaleTag) -> Option<LocaleSeparators> {
    TABLE
        .get(tag.to_string().as_str())
        .or_else(|| TABLE.get(tag.language()))
        .copied()
}

/// Separators for `locale`; `None` means `en-US`. Unknown or malformed tags
/// resolve to the default pair rather than failing.
pub fn resolve_separators(locale: Option<&str>) -> LocaleSeparators {
    let Some(locale) = locale else {
        return LocaleSeparators::default();
    };

    match LocaleTag::parse(locale) {
        Ok(tag) => lookup_separators(&tag).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(locale = %tag, "no separator entry for locale, using en-US");
            LocaleSeparators::default()
        }),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(locale, error = %_err, "malformed locale tag, using en-US");
            LocaleSeparators::default()
        }
    }
}
