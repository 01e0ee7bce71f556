use std::fmt;
use std::path::PathBuf;

use crate::base::{ChunkId, ToStdPath};

pub const CHUNK_EXTENSION: &str = "csv";

/// Location of the input file, relative to the store root.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SourcePath {
    path: PathBuf,
}

impl SourcePath {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        SourcePath { path: path.into() }
    }
}

impl ToStdPath for SourcePath {
    fn std_path(&self) -> PathBuf {
        self.path.clone()
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path.to_string_lossy())
    }
}

/// Output file name for one chunk: `<prefix><id>.csv`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ChunkPath {
    prefix: String,
    id: ChunkId,
}

impl ChunkPath {
    pub fn new<S: Into<String>>(prefix: S, id: ChunkId) -> Self {
        ChunkPath {
            prefix: prefix.into(),
            id,
        }
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    pub fn file_name(&self) -> String {
        format!("{}{}.{}", self.prefix, self.id, CHUNK_EXTENSION)
    }
}

impl ToStdPath for ChunkPath {
    fn std_path(&self) -> PathBuf {
        PathBuf::from(self.file_name())
    }
}

impl fmt::Display for ChunkPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
