use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("domain is required")]
    MissingDomain,
    #[error("first name {raw:?} has no letters or digits to build an initial from")]
    DegenerateFirstName { raw: String },
}
