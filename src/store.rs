use std::fs;
use std::io;
use std::path::PathBuf;

use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use thiserror::Error;

use crate::base::ToStdPath;
use crate::dataset::{Chunk, Dataset};
use crate::path::{ChunkPath, SourcePath};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing header row: {0}")]
    MissingHeader(SourcePath),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub trait Store {
    fn read_dataset(&self, path: &SourcePath) -> Result<Dataset>;
    fn write_chunk(&self, path: &ChunkPath, chunk: &Chunk) -> Result<()>;
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    fn fs_path(&self, path: PathBuf) -> PathBuf {
        let mut buf = self.root.clone();
        buf.push(path);
        buf
    }
}

impl Store for FileStore {
    fn read_dataset(&self, path: &SourcePath) -> Result<Dataset> {
        let file = fs::File::open(self.fs_path(path.std_path()))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(io::BufReader::new(file));

        let header = reader.byte_headers()?.clone();
        if header.is_empty() {
            return Err(StoreError::MissingHeader(path.clone()));
        }

        let rows = reader
            .byte_records()
            .collect::<std::result::Result<Vec<ByteRecord>, csv::Error>>()?;

        Ok(Dataset::new(header, rows))
    }

    fn write_chunk(&self, path: &ChunkPath, chunk: &Chunk) -> Result<()> {
        let file = fs::File::create(self.fs_path(path.std_path()))?;

        // csv::Writer buffers internally, no BufWriter needed.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        writer.write_byte_record(chunk.header())?;
        for row in chunk.rows() {
            writer.write_byte_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}
