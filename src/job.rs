use std::fmt;

use anyhow::Result;

use crate::base::Rows;
use crate::path::{ChunkPath, SourcePath};
use crate::plan::SplitPlan;
use crate::store::Store;

pub struct SplitReport {
    written: Vec<(ChunkPath, Rows)>,
    discarded: Rows,
}

impl SplitReport {
    fn new(written: Vec<(ChunkPath, Rows)>, discarded: Rows) -> Self {
        SplitReport { written, discarded }
    }

    pub fn written(&self) -> &[(ChunkPath, Rows)] {
        &self.written
    }

    pub fn discarded(&self) -> Rows {
        self.discarded
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "written:")?;
        for (path, rows) in &self.written {
            writeln!(f, "  - {} ({})", path, rows)?;
        }
        write!(f, "discarded: {}", self.discarded)
    }
}

pub trait Job {
    fn run(&self, store: &dyn Store) -> Result<SplitReport>;
}

/// Load the source, keep its first `plan.take()` rows, and write one
/// output file per chunk of the plan, in increasing chunk order.
pub struct SplitDataset {
    source: SourcePath,
    plan: SplitPlan,
    prefix: String,
}

impl SplitDataset {
    pub fn new<S: Into<String>>(source: SourcePath, plan: SplitPlan, prefix: S) -> Self {
        SplitDataset {
            source,
            plan,
            prefix: prefix.into(),
        }
    }
}

impl Job for SplitDataset {
    fn run(&self, store: &dyn Store) -> Result<SplitReport> {
        let dataset = store.read_dataset(&self.source)?;

        let discarded = self.plan.discarded(dataset.num_rows().count());
        let dataset = dataset.head(self.plan.take());

        let mut written = vec![];
        for spec in self.plan.chunks() {
            let chunk = dataset.slice(spec.range);
            let path = ChunkPath::new(self.prefix.as_str(), spec.id);

            store.write_chunk(&path, &chunk)?;
            written.push((path, chunk.num_rows()));
        }

        Ok(SplitReport::new(written, Rows::new(discarded)))
    }
}
