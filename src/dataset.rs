use csv::ByteRecord;

use crate::base::{RowRange, Rows};

/// An ordered set of data records under a single header record.
#[derive(Clone, Debug)]
pub struct Dataset {
    header: ByteRecord,
    rows: Vec<ByteRecord>,
}

impl Dataset {
    pub fn new(header: ByteRecord, rows: Vec<ByteRecord>) -> Self {
        Dataset { header, rows }
    }

    pub fn header(&self) -> &ByteRecord {
        &self.header
    }

    pub fn num_rows(&self) -> Rows {
        Rows::new(self.rows.len())
    }

    /// A new dataset holding only the first `n` rows. The original is
    /// left untouched; shorter inputs come back unchanged.
    pub fn head(&self, n: usize) -> Dataset {
        Dataset {
            header: self.header.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// The rows in `range`, clamped to the dataset length. Ranges past
    /// the end yield an empty chunk rather than an error.
    pub fn slice(&self, range: RowRange) -> Chunk {
        let start = range.start.min(self.rows.len());
        let end = range.end.min(self.rows.len());

        Chunk {
            header: self.header.clone(),
            rows: self.rows[start..end].to_vec(),
        }
    }
}

/// A contiguous run of rows destined for one output file, carrying its
/// own copy of the header.
#[derive(Clone, Debug)]
pub struct Chunk {
    header: ByteRecord,
    rows: Vec<ByteRecord>,
}

impl Chunk {
    pub fn header(&self) -> &ByteRecord {
        &self.header
    }

    pub fn rows(&self) -> &[ByteRecord] {
        &self.rows
    }

    pub fn num_rows(&self) -> Rows {
        Rows::new(self.rows.len())
    }
}
