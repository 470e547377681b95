use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The author name must not be empty")]
    EmptyAuthorName,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
