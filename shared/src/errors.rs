use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Malformed send response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Response has {actual} results but {expected} contexts were supplied")]
    ContextMismatch { expected: usize, actual: usize },
}
