//! Text normalization shared by name and domain tokens.

/// Trims, collapses every whitespace run into a single space and lowercases.
///
/// Empty input yields an empty string. The result is a fixed point:
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

/// Keeps only ASCII `a`-`z` and `0`-`9`. Expects already-lowercased input.
pub fn strip_non_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

/// Normalizes a domain and drops every `@`, wherever it appears.
///
/// Dots, hyphens and any other punctuation are left alone; the domain is not
/// validated.
pub fn normalize_domain(text: &str) -> String {
    normalize(text).replace('@', "")
}

/// Normalizes a name and keeps only its ASCII letters and digits.
pub fn clean_name(text: &str) -> String {
    strip_non_alphanumeric(&normalize(text))
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest,
/// so `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{clean_name, normalize, normalize_domain, strip_non_alphanumeric, title_case};

    #[test]
    fn normalize_trims_collapses_and_lowercases() {
        assert_eq!(normalize("  Mary \t\n  Jane  "), "mary jane");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "  John  ",
            "O'Neil\t\tSmith",
            "@@Example.COM@",
            "Ünïcode  NAME",
            "a\r\nb\u{a0}c",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input {sample:?}");
        }
    }

    #[test]
    fn strip_non_alphanumeric_removes_punctuation_and_spaces() {
        assert_eq!(
            strip_non_alphanumeric("o'brien-smith 2nd"),
            "obriensmith2nd"
        );
    }

    #[test]
    fn strip_non_alphanumeric_drops_non_ascii_letters() {
        assert_eq!(strip_non_alphanumeric("josé"), "jos");
    }

    #[test]
    fn normalize_domain_removes_every_at() {
        assert_eq!(normalize_domain("@@example.com@"), "example.com");
        assert_eq!(normalize_domain(" @Sub-Domain.Example.ORG "), "sub-domain.example.org");
    }

    #[test]
    fn normalize_domain_keeps_unvalidated_input() {
        assert_eq!(normalize_domain("localhost"), "localhost");
    }

    #[test]
    fn clean_name_combines_both_steps() {
        assert_eq!(clean_name("  Mary-Jane  "), "maryjane");
        assert_eq!(clean_name("***"), "");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("JOHN doe"), "John Doe");
        assert_eq!(title_case(""), "");
    }
}
