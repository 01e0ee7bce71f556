use crate::base::{ChunkId, RowRange};

/// Fixed-stride partition of the first `take` rows into `chunk_count`
/// chunks of `chunk_rows` each.
#[derive(Clone, Copy, Debug)]
pub struct SplitPlan {
    take: usize,
    chunk_rows: usize,
    chunk_count: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChunkSpec {
    pub id: ChunkId,
    pub range: RowRange,
}

impl SplitPlan {
    pub fn new(take: usize, chunk_rows: usize, chunk_count: usize) -> Self {
        SplitPlan {
            take,
            chunk_rows,
            chunk_count,
        }
    }

    pub fn take(&self) -> usize {
        self.take
    }

    /// Chunk `i` (0-indexed) covers rows `[i * chunk_rows, (i + 1) * chunk_rows)`
    /// and is named with the 1-based id `i + 1`.
    pub fn chunks(&self) -> Vec<ChunkSpec> {
        (0..self.chunk_count)
            .map(|i| ChunkSpec {
                id: ChunkId::new(i + 1),
                range: RowRange::new(i * self.chunk_rows, (i + 1) * self.chunk_rows),
            })
            .collect()
    }

    /// Rows past the truncation point, never read into any chunk.
    pub fn discarded(&self, total_rows: usize) -> usize {
        total_rows.saturating_sub(self.take)
    }
}
