#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("course has no header stream: {path}")]
    MissingHeader { path: String },

    #[error("read out of range at offset {offset}: need {need} bytes, stream is {size} bytes")]
    TruncatedRead { offset: usize, need: usize, size: usize },

    #[error("tileset not found: {name}")]
    TilesetNotFound { name: String },

    #[error("stream not found: {path}")]
    StreamNotFound { path: String },

    #[error("archive error: {0}")]
    Archive(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
