use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] authzcore::error::BackendError),
    #[error("Misconfiguration: {0}")]
    Misconfiguration(&'static str),
}
