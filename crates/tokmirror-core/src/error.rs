use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open export archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to read archive member: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive member '{0}' is not valid UTF-8 text")]
    Decode(String),

    #[error("Failed to parse JSON export: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No recognizable export members found in archive")]
    NoExportData,
}

pub type Result<T> = std::result::Result<T, Error>;
