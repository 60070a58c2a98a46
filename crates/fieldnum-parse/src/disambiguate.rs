//! Decide which `.`/`,` in a numeral are decimal marks and which are digit
//! group marks, and rewrite the numeral as `[sign]digits[.digits]`.
//!
//! The input has already been digit-normalized, trimmed and stripped of
//! whitespace grouping. Cases, by separator count:
//!
//! - none: a plain integer
//! - one: a decimal mark, unless it is the locale's group mark sitting in a
//!   thousands position (`1,234` in `en-US`, `1.234` in `de-DE`)
//! - both kinds: the one appearing last is the decimal mark and may occur
//!   once; the other is stripped
//! - one kind, several times: the trailing group decides; 3 digits means all
//!   marks are grouping, 1-2 digits means the last mark is decimal
//!
//! An integer part grouped more than once must look like real grouping: a
//! leading group of 1-3 digits followed by 3-digit groups, or by 2-digit
//! groups ending in a 3-digit group (Indian lakh/crore) where that reading is
//! unambiguous.

use fieldnum_common::LocaleSeparators;
use smallvec::SmallVec;

type Groups<'a> = SmallVec<[&'a str; 8]>;

/// Canonical numeral for `input`, or `None` when the separators cannot be
/// read unambiguously.
pub fn disambiguate(input: &str, seps: LocaleSeparators) -> Option<String> {
    // Scientific notation is never valid form input.
    if input.contains(['e', 'E']) {
        return None;
    }

    let (sign, body) = split_sign(input);
    if !body
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
    {
        return None;
    }
    if !body.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let dots = body.matches('.').count();
    let commas = body.matches(',').count();

    let (int, frac) = match (dots, commas) {
        (0, 0) => (body.to_string(), ""),
        (d, c) if d > 0 && c > 0 => mixed(body, seps)?,
        (1, 0) => single(body, '.', seps),
        (0, 1) => single(body, ',', seps),
        (_, 0) => repeated(body, '.')?,
        _ => repeated(body, ',')?,
    };

    Some(canonical(sign, &int, frac))
}

fn split_sign(input: &str) -> (&str, &str) {
    match input.as_bytes().first() {
        Some(b'+' | b'-') => input.split_at(1),
        _ => ("", input),
    }
}

fn canonical(sign: &str, int: &str, frac: &str) -> String {
    let int = if int.is_empty() { "0" } else { int };
    if frac.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{frac}")
    }
}

/// Both `.` and `,` present.
fn mixed(body: &str, seps: LocaleSeparators) -> Option<(String, &str)> {
    let last_dot = body.rfind('.')?;
    let last_comma = body.rfind(',')?;
    let (decimal, group) = if last_dot > last_comma {
        ('.', ',')
    } else {
        (',', '.')
    };

    let (int_part, frac) = body.rsplit_once(decimal)?;
    if int_part.contains(decimal) {
        return None;
    }

    let groups: Groups = int_part.split(group).collect();
    // A single group mark is stripped wherever it sits. Repeated ones must
    // group plausibly, and `1.234.567,89` is fine for de-DE but a fully
    // grouped number written in the opposite convention is not for en-US.
    if groups.len() > 2 && (decimal == seps.group || !plausible_grouping(&groups, true)) {
        return None;
    }

    Some((groups.concat(), frac))
}

/// Exactly one separator.
fn single(body: &str, sep: char, seps: LocaleSeparators) -> (String, &str) {
    let (int_part, frac) = body.split_once(sep).unwrap_or((body, ""));
    let thousands = sep == seps.group
        && frac.len() == 3
        && (1..=3).contains(&int_part.len())
        && !int_part.starts_with('0');
    if thousands {
        (format!("{int_part}{frac}"), "")
    } else {
        (int_part.to_string(), frac)
    }
}

/// Two or more of one separator kind, none of the other.
fn repeated(body: &str, sep: char) -> Option<(String, &str)> {
    let groups: Groups = body.split(sep).collect();
    let (last, head) = groups.split_last()?;

    match last.len() {
        3 => plausible_grouping(&groups, true).then(|| (groups.concat(), "")),
        1 | 2 => plausible_grouping(head, false).then(|| (head.concat(), *last)),
        _ => (!groups.iter().any(|g| g.is_empty())).then(|| (groups.concat(), "")),
    }
}

fn plausible_grouping(groups: &[&str], allow_indian: bool) -> bool {
    let Some((lead, rest)) = groups.split_first() else {
        return false;
    };
    if !(1..=3).contains(&lead.len()) {
        return false;
    }
    if rest.iter().all(|g| g.len() == 3) {
        return true;
    }
    // Indian grouping: 12,34,567 but never 123,45,678.
    allow_indian
        && lead.len() <= 2
        && matches!(
            rest.split_last(),
            Some((last, middle)) if last.len() == 3 && middle.iter().all(|g| g.len() == 2)
        )
}
