use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriprError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),
}

pub type TriprResult<T> = Result<T, TriprError>;
