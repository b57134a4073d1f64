use crate::candidate::{generate_with_style, CandidateList, CandidateStyle};
use crate::error::CoreError;
use crate::normalize::{normalize, title_case};

/// Raw form input that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    first_name: String,
    last_name: Option<String>,
    domain: String,
}

impl FormatRequest {
    pub fn new(
        first_name: &str,
        last_name: Option<&str>,
        domain: &str,
    ) -> Result<Self, CoreError> {
        if first_name.trim().is_empty() {
            return Err(CoreError::MissingFirstName);
        }
        if domain.trim().is_empty() {
            return Err(CoreError::MissingDomain);
        }
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.map(str::to_string),
            domain: domain.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn has_last_name(&self) -> bool {
        self.last_name().is_some_and(|raw| !raw.is_empty())
    }

    /// Title-cased "First Last" for headings.
    pub fn display_name(&self) -> String {
        let mut name = title_case(&normalize(&self.first_name));
        if let Some(last) = self.last_name() {
            let last = title_case(&normalize(last));
            if !last.is_empty() {
                name.push(' ');
                name.push_str(&last);
            }
        }
        name
    }

    pub fn generate(&self, style: CandidateStyle) -> Result<CandidateList, CoreError> {
        generate_with_style(&self.first_name, self.last_name(), &self.domain, style)
    }
}
