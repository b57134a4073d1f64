use std::fmt;
use std::slice;

use serde::Serialize;

use crate::error::CoreError;
use crate::normalize::{normalize, normalize_domain, strip_non_alphanumeric};

pub const CANDIDATE_COUNT: usize = 4;

/// How candidates are rendered.
///
/// `Legacy` keeps the trailing `,` on the first three with-last-name formats,
/// matching the output users have been copying so far. `Clean` drops it and
/// must be asked for explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStyle {
    #[default]
    Legacy,
    Clean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalPart {
    FirstDotLast,
    First,
    Last,
    InitialLast,
    FirstDotContact,
    InfoDotFirst,
    FirstDotAdmin,
}

impl LocalPart {
    pub fn pattern(self) -> &'static str {
        match self {
            LocalPart::FirstDotLast => "firstname.lastname",
            LocalPart::First => "firstname",
            LocalPart::Last => "lastname",
            LocalPart::InitialLast => "flastname",
            LocalPart::FirstDotContact => "firstname.contact",
            LocalPart::InfoDotFirst => "info.firstname",
            LocalPart::FirstDotAdmin => "firstname.admin",
        }
    }

    /// Returns `None` only for `InitialLast` when there is no initial to take.
    fn render(self, first: &str, last: &str) -> Option<String> {
        let local = match self {
            LocalPart::FirstDotLast => format!("{first}.{last}"),
            LocalPart::First => first.to_string(),
            LocalPart::Last => last.to_string(),
            LocalPart::InitialLast => {
                let initial = first.chars().next()?;
                format!("{initial}{last}")
            }
            LocalPart::FirstDotContact => format!("{first}.contact"),
            LocalPart::InfoDotFirst => format!("info.{first}"),
            LocalPart::FirstDotAdmin => format!("{first}.admin"),
        };
        Some(local)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub local_part: LocalPart,
    pub legacy_trailing_comma: bool,
}

impl Template {
    const fn new(local_part: LocalPart, legacy_trailing_comma: bool) -> Self {
        Self {
            local_part,
            legacy_trailing_comma,
        }
    }

    /// Human readable form, e.g. `firstname.lastname@domain.com`.
    pub fn pattern(&self) -> String {
        format!("{}@domain.com", self.local_part.pattern())
    }

    fn render(
        &self,
        first: &str,
        last: &str,
        domain: &str,
        style: CandidateStyle,
    ) -> Option<String> {
        let local = self.local_part.render(first, last)?;
        let comma = match style {
            CandidateStyle::Legacy if self.legacy_trailing_comma => ",",
            _ => "",
        };
        Some(format!("{local}@{domain}{comma}"))
    }
}

/// Formats produced when a last name is supplied, in preference order.
pub const WITH_LAST_NAME: [Template; CANDIDATE_COUNT] = [
    Template::new(LocalPart::FirstDotLast, true),
    Template::new(LocalPart::First, true),
    Template::new(LocalPart::Last, true),
    Template::new(LocalPart::InitialLast, false),
];

/// Formats produced from a first name alone, in preference order.
pub const FIRST_NAME_ONLY: [Template; CANDIDATE_COUNT] = [
    Template::new(LocalPart::First, false),
    Template::new(LocalPart::FirstDotContact, false),
    Template::new(LocalPart::InfoDotFirst, false),
    Template::new(LocalPart::FirstDotAdmin, false),
];

/// The four generated guesses, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateList([String; CANDIDATE_COUNT]);

impl CandidateList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        CANDIDATE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }

    /// One candidate per line, ready to paste.
    pub fn to_block(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_block())
    }
}

impl IntoIterator for CandidateList {
    type Item = String;
    type IntoIter = std::array::IntoIter<String, CANDIDATE_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generates candidates in the legacy style.
///
/// A last name counts as supplied when the raw argument is present and
/// non-empty, even if nothing survives cleaning. Callers are expected to have
/// rejected an empty first name or domain already; see
/// [`FormatRequest`](crate::request::FormatRequest).
///
/// Fails with [`CoreError::DegenerateFirstName`] when a last name is supplied
/// but the first name has no ASCII letters or digits, since the
/// first-initial format cannot be built.
pub fn generate(
    first_name: &str,
    last_name: Option<&str>,
    domain: &str,
) -> Result<CandidateList, CoreError> {
    generate_with_style(first_name, last_name, domain, CandidateStyle::Legacy)
}

pub fn generate_with_style(
    first_name: &str,
    last_name: Option<&str>,
    domain: &str,
    style: CandidateStyle,
) -> Result<CandidateList, CoreError> {
    let last_name = last_name.filter(|raw| !raw.is_empty());

    let first_clean = strip_non_alphanumeric(&normalize(first_name));
    let last_clean = last_name
        .map(|raw| strip_non_alphanumeric(&normalize(raw)))
        .unwrap_or_default();
    let domain = normalize_domain(domain);

    let templates = if last_name.is_some() {
        &WITH_LAST_NAME
    } else {
        &FIRST_NAME_ONLY
    };

    let mut candidates: [String; CANDIDATE_COUNT] = Default::default();
    for (slot, template) in candidates.iter_mut().zip(templates) {
        *slot = template
            .render(&first_clean, &last_clean, &domain, style)
            .ok_or_else(|| CoreError::DegenerateFirstName {
                raw: first_name.to_string(),
            })?;
    }

    Ok(CandidateList(candidates))
}

#[cfg(test)]
mod tests {
    use super::{
        generate, generate_with_style, CandidateStyle, FIRST_NAME_ONLY, WITH_LAST_NAME,
    };
    use crate::error::CoreError;

    #[test]
    fn generate_with_last_name() {
        let list = generate("John", Some("Doe"), "company.com").expect("generate");
        assert_eq!(
            list.as_slice(),
            [
                "john.doe@company.com,",
                "john@company.com,",
                "doe@company.com,",
                "jdoe@company.com",
            ]
        );
    }

    #[test]
    fn generate_first_name_only() {
        let list = generate("Jane", Some(""), "Acme.io").expect("generate");
        assert_eq!(
            list.as_slice(),
            [
                "jane@acme.io",
                "jane.contact@acme.io",
                "info.jane@acme.io",
                "jane.admin@acme.io",
            ]
        );
        assert_eq!(generate("Jane", None, "Acme.io").expect("generate"), list);
    }

    #[test]
    fn generate_cleans_whitespace_punctuation_and_at() {
        let list =
            generate("  Mary-Jane  ", Some("O'Neil"), "@sub.domain.org").expect("generate");
        assert_eq!(
            list.as_slice(),
            [
                "maryjane.oneil@sub.domain.org,",
                "maryjane@sub.domain.org,",
                "oneil@sub.domain.org,",
                "moneil@sub.domain.org",
            ]
        );
    }

    #[test]
    fn generate_ignores_case() {
        let upper = generate("John", Some("Doe"), "Company.com").expect("generate");
        let lower = generate("john", Some("doe"), "company.com").expect("generate");
        assert_eq!(upper, lower);
    }

    #[test]
    fn trailing_commas_only_on_first_three_with_last_name() {
        let list = generate("Ada", Some("Lovelace"), "example.org").expect("generate");
        let (head, tail) = list.as_slice().split_at(3);
        assert!(head.iter().all(|candidate| candidate.ends_with(',')));
        assert!(!tail[0].ends_with(','));
    }

    #[test]
    fn first_name_only_candidates_contain_tokens_without_commas() {
        for (first, domain) in [("Zoë", "x.io"), ("a b", "@@y.co@"), ("R2-D2", "droids")] {
            let list = generate(first, None, domain).expect("generate");
            assert_eq!(list.len(), 4);
            let first_clean = crate::normalize::clean_name(first);
            let domain_clean = crate::normalize::normalize_domain(domain);
            for candidate in &list {
                assert!(candidate.contains(&first_clean), "{candidate}");
                assert!(candidate.ends_with(&format!("@{domain_clean}")), "{candidate}");
                assert!(!candidate.ends_with(','), "{candidate}");
            }
        }
    }

    #[test]
    fn degenerate_first_name_is_rejected_with_last_name() {
        let err = generate("***", Some("Smith"), "x.com").unwrap_err();
        assert_eq!(
            err,
            CoreError::DegenerateFirstName {
                raw: "***".to_string()
            }
        );
    }

    #[test]
    fn degenerate_first_name_is_accepted_without_last_name() {
        let list = generate("***", None, "x.com").expect("generate");
        assert_eq!(list.as_slice()[0], "@x.com");
        assert_eq!(list.as_slice()[2], "info.@x.com");
    }

    #[test]
    fn whitespace_last_name_still_counts_as_supplied() {
        let list = generate("John", Some("   "), "x.com").expect("generate");
        assert_eq!(list.as_slice()[0], "john.@x.com,");
        assert_eq!(list.as_slice()[3], "j@x.com");
    }

    #[test]
    fn clean_style_drops_trailing_commas() {
        let list = generate_with_style("John", Some("Doe"), "company.com", CandidateStyle::Clean)
            .expect("generate");
        assert_eq!(
            list.as_slice(),
            [
                "john.doe@company.com",
                "john@company.com",
                "doe@company.com",
                "jdoe@company.com",
            ]
        );
    }

    #[test]
    fn to_block_joins_with_newlines() {
        let list = generate("Jane", None, "acme.io").expect("generate");
        assert_eq!(
            list.to_block(),
            "jane@acme.io\njane.contact@acme.io\ninfo.jane@acme.io\njane.admin@acme.io"
        );
        assert_eq!(list.to_string(), list.to_block());
    }

    #[test]
    fn template_patterns_describe_each_table() {
        let with_last: Vec<String> = WITH_LAST_NAME.iter().map(|t| t.pattern()).collect();
        assert_eq!(
            with_last,
            [
                "firstname.lastname@domain.com",
                "firstname@domain.com",
                "lastname@domain.com",
                "flastname@domain.com",
            ]
        );
        assert_eq!(FIRST_NAME_ONLY[2].pattern(), "info.firstname@domain.com");
    }

    #[test]
    fn candidate_list_serializes_as_array() {
        let list = generate("Jane", None, "acme.io").expect("generate");
        let value = serde_json::to_value(&list).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[1], "jane.contact@acme.io");
    }
}
