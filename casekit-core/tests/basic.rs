use casekit_core::{
    camel_case, capitalize, ellipsis, is_alpha, is_alphanumeric, is_numeric, kebab_case,
    pascal_case, rune_length, substring, words, CaseStyle,
};

const SAMPLES: &[&str] = &[
    "",
    "helloWorld",
    "abc123def",
    "hello world",
    "Hello World",
    "HTTPServer",
    "parseHTTPResponse2xx",
    "  __snake_case_Value__  ",
    "kebab-case-value",
    "MixedUP_and-down 42times",
    "fooÉtat über9",
    "日本語Text",
    "!!!",
];

#[test]
fn words_scenarios() {
    assert_eq!(words("helloWorld"), vec!["hello", "World"]);
    assert_eq!(words("abc123def"), vec!["abc", "123", "def"]);
    assert!(words("").is_empty());
}

#[test]
fn case_scenarios() {
    assert_eq!(pascal_case("hello world"), "HelloWorld");
    assert_eq!(camel_case("Hello World"), "helloWorld");
    assert_eq!(kebab_case("Hello World"), "hello-world");
}

#[test]
fn truncation_scenarios() {
    assert_eq!(ellipsis("hello world", 5), "he...");
    assert_eq!(ellipsis("hi", 5), "hi");
    assert_eq!(ellipsis("", 4), "");
}

#[test]
fn substring_scenarios() {
    assert_eq!(substring(String::from("hello"), -3, 2), "ll");
    assert_eq!(substring(String::from("hello"), 10, 2), "");
    assert_eq!(substring(String::new(), -2, 2), "");
}

#[test]
fn words_never_contain_empty_tokens() {
    for sample in SAMPLES {
        assert!(words(sample).iter().all(|w| !w.is_empty()), "{sample:?}");
    }
}

#[test]
fn words_preserve_source_case() {
    assert_eq!(words("fooBAR_Baz"), vec!["foo", "BAR", "Baz"]);
}

#[test]
fn pascal_and_camel_differ_only_in_first_token() {
    for sample in SAMPLES {
        let tokens = words(sample);
        let pascal = pascal_case(sample);
        let camel = camel_case(sample);
        let Some(first) = tokens.first() else {
            assert_eq!(pascal, "");
            assert_eq!(camel, "");
            continue;
        };

        let pascal_first = capitalize(&first.to_lowercase());
        let camel_first = first.to_lowercase();
        assert_eq!(
            pascal.strip_prefix(pascal_first.as_str()),
            camel.strip_prefix(camel_first.as_str()),
            "{sample:?}"
        );
    }
}

#[test]
fn kebab_case_has_no_uppercase() {
    for sample in SAMPLES {
        let kebab = kebab_case(sample);
        assert!(!kebab.chars().any(char::is_uppercase), "{sample:?} -> {kebab}");
    }
}

#[test]
fn case_style_dispatches_to_converters() {
    let input = "some mixedInput_value";
    assert_eq!(CaseStyle::Pascal.apply(input), pascal_case(input));
    assert_eq!(CaseStyle::Camel.apply(input), camel_case(input));
    assert_eq!(CaseStyle::Kebab.apply(input), kebab_case(input));
}

#[test]
fn substring_is_bounded_by_length_and_remaining_runes() {
    let text = "héllo wörld";
    let size = rune_length(text) as isize;
    for offset in -15..15isize {
        for length in 0..15usize {
            let out = substring(text.to_string(), offset, length);
            let start = if offset < 0 { (size + offset).max(0) } else { offset };
            let remaining = (size - start).max(0) as usize;
            assert!(rune_length(&out) <= length.min(remaining), "{offset} {length}");
        }
    }
}

#[test]
fn ellipsis_respects_limit() {
    let text = "  Lorem ipsum dolor sit amet, consectetur adipiscing elit  ";
    for max in -3..70isize {
        let out = ellipsis(text, max);
        if max < 3 && out.len() < text.trim().len() {
            assert_eq!(out, "...");
        } else {
            assert!(rune_length(&out) as isize <= max, "{max}: {out}");
        }
    }
}

#[test]
fn character_classes() {
    assert!(is_alpha("") && is_numeric("") && is_alphanumeric(""));
    assert!(is_alpha("abcXYZ"));
    assert!(is_numeric("2024"));
    assert!(is_alphanumeric("abc2024"));
    assert!(!is_numeric("abc2024"));
}
