use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
