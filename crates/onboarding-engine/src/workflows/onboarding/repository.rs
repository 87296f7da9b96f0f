use super::contract::ContractDraft;

/// Storage abstraction for generated contract drafts.
pub trait DocumentRepository: Send + Sync {
    fn insert(&self, draft: ContractDraft) -> Result<ContractDraft, RepositoryError>;
    fn fetch(&self, file_name: &str) -> Result<Option<ContractDraft>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("document already exists")]
    Conflict,
    #[error("document not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
