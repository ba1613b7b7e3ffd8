use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not a recognizable video share URL: {0}")]
    InvalidShareUrl(String),

    #[error("Lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup endpoint returned status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
