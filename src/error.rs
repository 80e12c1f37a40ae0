use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url `{0}` cannot take path segments")]
    CannotBeABase(String),
    #[error("error from http transport")]
    TransportError(#[from] reqwest::Error),
    #[error("could not encode request body")]
    EncodeError(#[source] serde_json::Error),
    #[error("could not decode response body")]
    DecodeError(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
