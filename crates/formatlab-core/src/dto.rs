use crate::candidate::{CandidateList, CandidateStyle, Template};
use crate::request::FormatRequest;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateListDto {
    pub display_name: String,
    pub with_last_name: bool,
    pub style: CandidateStyle,
    pub candidates: CandidateList,
}

impl CandidateListDto {
    pub fn new(request: &FormatRequest, style: CandidateStyle, candidates: CandidateList) -> Self {
        Self {
            display_name: request.display_name(),
            with_last_name: request.has_last_name(),
            style,
            candidates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDto {
    pub rank: usize,
    pub pattern: String,
    pub legacy_trailing_comma: bool,
}

impl TemplateDto {
    pub fn from_table(templates: &[Template]) -> Vec<Self> {
        templates
            .iter()
            .enumerate()
            .map(|(idx, template)| Self {
                rank: idx + 1,
                pattern: template.pattern(),
                legacy_trailing_comma: template.legacy_trailing_comma,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateListDto, TemplateDto};
    use crate::candidate::{CandidateStyle, WITH_LAST_NAME};
    use crate::request::FormatRequest;

    #[test]
    fn candidate_list_dto_serializes_fields() {
        let request = FormatRequest::new("John", Some("Doe"), "company.com").expect("request");
        let list = request.generate(CandidateStyle::Legacy).expect("generate");
        let dto = CandidateListDto::new(&request, CandidateStyle::Legacy, list);
        let value = serde_json::to_value(&dto).expect("json");
        assert_eq!(value["display_name"], "John Doe");
        assert_eq!(value["with_last_name"], true);
        assert_eq!(value["style"], "legacy");
        assert_eq!(value["candidates"][0], "john.doe@company.com,");
    }

    #[test]
    fn template_dto_ranks_from_one() {
        let items = TemplateDto::from_table(&WITH_LAST_NAME);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[3].pattern, "flastname@domain.com");
        assert!(!items[3].legacy_trailing_comma);
    }
}
