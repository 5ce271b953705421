use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid sheet URL: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("sheet body from {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("malformed CSV from {url}: {source}")]
    Csv {
        url: String,
        #[source]
        source: csv::Error,
    },
}
