use fieldnum_parse::{NumericInput, parse_number};

/// (input, locale, expected)
fn cases() -> Vec<(NumericInput<'static>, Option<&'static str>, Option<f64>)> {
    use NumericInput::{Boolean, Number, Text};
    vec![
        // US format (default) - integers
        (Text("123"), None, Some(123.0)),
        (Text("0"), None, Some(0.0)),
        (Text("-456"), None, Some(-456.0)),
        (Text("+789"), None, Some(789.0)),
        // US format - decimals
        (Text("100.50"), None, Some(100.5)),
        (Text("0.99"), None, Some(0.99)),
        (Text("-123.45"), None, Some(-123.45)),
        (Text("3.14159"), None, Some(3.14159)),
        // US format - thousands separators
        (Text("1,234"), None, Some(1234.0)),
        (Text("1,234.56"), None, Some(1234.56)),
        (Text("1,234,567.89"), None, Some(1234567.89)),
        (Text("10,000,000"), None, Some(10000000.0)),
        // US format - edge cases
        (Text(".5"), None, Some(0.5)),
        (Text("-.5"), None, Some(-0.5)),
        (Text("100."), None, Some(100.0)),
        (Text("  123  "), None, Some(123.0)),
        // de-DE - comma decimal
        (Text("100,50"), Some("de-DE"), Some(100.5)),
        (Text("3,14159"), Some("de-DE"), Some(3.14159)),
        (Text("-0,99"), Some("de-DE"), Some(-0.99)),
        // de-DE - dot thousands
        (Text("1.234"), Some("de-DE"), Some(1234.0)),
        (Text("1.234,56"), Some("de-DE"), Some(1234.56)),
        (Text("1.234.567,89"), Some("de-DE"), Some(1234567.89)),
        // ar-SA - Arabic-Indic numerals
        (Text("١٢٣"), Some("ar-SA"), Some(123.0)),
        (Text("٩٨٧٦٥"), Some("ar-SA"), Some(98765.0)),
        (Text("٠"), Some("ar-SA"), Some(0.0)),
        // ar-SA - native separators
        (Text("١٬٢٣٤"), Some("ar-SA"), Some(1234.0)),
        (Text("١٬٢٣٤٫٥٦"), Some("ar-SA"), Some(1234.56)),
        // ar-SA - Arabic digits typed with ASCII separators
        (Text("١,٢٣٤.٥٦"), Some("ar-SA"), Some(1234.56)),
        (Text("١٢٣.٤٥"), Some("ar-SA"), Some(123.45)),
        // ar-MA - space thousands, comma decimal
        (Text("1 234,56"), Some("ar-MA"), Some(1234.56)),
        (Text("1 234 567,89"), Some("ar-MA"), Some(1234567.89)),
        (Text("100,50"), Some("ar-MA"), Some(100.5)),
        // ar-MA with US-style input: a lone separator reads as decimal
        (Text("100.50"), Some("ar-MA"), Some(100.5)),
        (Text("1,234.56"), Some("ar-MA"), Some(1234.56)),
        // Devanagari
        (Text("१२३"), None, Some(123.0)),
        (Text("१००.५०"), None, Some(100.5)),
        (Text("१,२३४.५६"), None, Some(1234.56)),
        (Text("१२३.४५"), None, Some(123.45)),
        // Persian
        (Text("۱۲۳۴۵"), None, Some(12345.0)),
        (Text("۱۲۳.۴۵"), None, Some(123.45)),
        // Other scripts
        (Text("৫৬৭"), None, Some(567.0)),
        (Text("௧௨௩"), None, Some(123.0)),
        (Text("๑๒๓๔๕"), None, Some(12345.0)),
        (Text("１２３４"), None, Some(1234.0)),
        // Pass-through numbers
        (Number(123.45), None, Some(123.45)),
        (Number(0.0), None, Some(0.0)),
        (Number(-42.0), None, Some(-42.0)),
        // Cross-locale: ar-SA with US-style ASCII input
        (Text("100.50"), Some("ar-SA"), Some(100.5)),
        (Text("1,234.56"), Some("ar-SA"), Some(1234.56)),
        // Cross-locale: default locale with Arabic script input
        (Text("١٠٠.٥٠"), None, Some(100.5)),
        (Text("١٬٢٣٤٫٥٦"), None, Some(1234.56)),
        (Text("١٢٣"), None, Some(123.0)),
        // Indian grouping
        (Text("1,00,000"), None, Some(100000.0)),
        (Text("12,34,567"), Some("hi-IN"), Some(1234567.0)),
        // Invalid inputs
        (Boolean(true), None, None),
        (Boolean(false), None, None),
        (Text("abc"), None, None),
        (Text("12abc"), None, None),
        (Text("8888 mil"), None, None),
        (Text(""), None, None),
        (Text("1.2.3"), None, None),
        (Text("1..2"), None, None),
        (Text("1e5"), None, None),
        (Text("100.50.25"), None, None),
        (Text("1.234.567,89"), None, None),
        (Text("१२3"), None, None),
    ]
}

#[test]
fn parse_number_case_table() {
    for (input, locale, expected) in cases() {
        let got = parse_number(input, locale);
        assert_eq!(
            got,
            expected,
            "parse_number({input}, {}) ",
            locale.unwrap_or("default")
        );
    }
}

#[test]
fn locale_symmetry() {
    assert_eq!(parse_number("1.234,56", Some("de-DE")), Some(1234.56));
    assert_eq!(parse_number("1,234.56", Some("en-US")), Some(1234.56));
}

#[test]
fn one_dot_and_one_comma_read_by_position() {
    for locale in [None, Some("de-DE"), Some("ar-MA")] {
        assert_eq!(parse_number("1,23.4", locale), Some(123.4));
        assert_eq!(parse_number("12345,678.9", locale), Some(12345678.9));
        assert_eq!(parse_number("1,2.5", locale), Some(12.5));
        assert_eq!(parse_number("1.23,4", locale), Some(123.4));
    }
}

#[test]
fn unknown_locale_behaves_like_default() {
    for input in ["1,234", "1,234.56", "100,50", "1.234.567,89"] {
        assert_eq!(
            parse_number(input, Some("zz-ZZ")),
            parse_number(input, None),
            "{input}"
        );
    }
}

#[test]
fn every_table_script_parses_its_own_digits() {
    for range in fieldnum_parse::NUMERAL_RANGES {
        let digits: String = range.digits().rev().collect();
        assert_eq!(
            parse_number(digits.as_str(), None),
            Some(9876543210.0),
            "{}",
            range.script
        );
    }
}
