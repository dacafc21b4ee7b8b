use std::path::PathBuf;

use crate::block::BlockKind;
use crate::span::Delimiter;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can make a document (or a page built from one) fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed emphasis/code span: missing closing `{delimiter}`")]
    UnmatchedDelimiter { delimiter: Delimiter },

    #[error("wrong block kind: expected {expected}, got {actual}")]
    WrongBlockKind {
        expected: BlockKind,
        actual: BlockKind,
    },

    #[error("node missing required value")]
    MissingValue,

    #[error("node missing required tag")]
    MissingTag,

    #[error("no top-level heading found")]
    MissingTitle,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to render {path}: {source}")]
    Page { path: PathBuf, source: Box<Error> },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
