use std::fmt;
use std::path::PathBuf;

pub trait ToStdPath {
    fn std_path(&self) -> PathBuf;
}

/// Count of data rows, excluding the header.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Rows(usize);

impl Rows {
    pub fn new(count: usize) -> Self {
        Rows(count)
    }

    pub fn count(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Rows {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} rows", self.0)
    }
}

/// Half-open interval `[start, end)` of data row indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        RowRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// 1-based chunk index, as it appears in output file names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ChunkId(usize);

impl ChunkId {
    pub fn new(index: usize) -> Self {
        ChunkId(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
