pub mod candidate;
pub mod dto;
pub mod error;
pub mod normalize;
pub mod request;

pub use candidate::{
    generate, generate_with_style, CandidateList, CandidateStyle, LocalPart, Template,
    CANDIDATE_COUNT, FIRST_NAME_ONLY, WITH_LAST_NAME,
};
pub use dto::{CandidateListDto, TemplateDto};
pub use error::CoreError;
pub use normalize::{clean_name, normalize, normalize_domain, strip_non_alphanumeric, title_case};
pub use request::FormatRequest;
