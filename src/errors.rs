use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("npy write error: {0}")]
    Npy(#[from] ndarray_npy::WriteNpyError),
    #[error("tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("unsupported language {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, TtsError>;
