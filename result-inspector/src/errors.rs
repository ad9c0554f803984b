use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Standard input can only be read once, but both the response and tokens are '-'")]
    StdinReused,

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
