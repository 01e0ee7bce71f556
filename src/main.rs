use std::path::PathBuf;

use anyhow::Result;

use splitcsv::job::{Job, SplitDataset};
use splitcsv::path::SourcePath;
use splitcsv::plan::SplitPlan;
use splitcsv::store::FileStore;

const SOURCE_FILE: &str = "your_file.csv";
const TAKE_ROWS: usize = 800;
const CHUNK_ROWS: usize = 100;
const CHUNK_COUNT: usize = 8;
const CHUNK_PREFIX: &str = "split_";

fn main() -> Result<()> {
    let store = FileStore::new(PathBuf::from("."));
    let plan = SplitPlan::new(TAKE_ROWS, CHUNK_ROWS, CHUNK_COUNT);
    let job = SplitDataset::new(SourcePath::new(SOURCE_FILE), plan, CHUNK_PREFIX);

    job.run(&store)?;

    println!("CSV split completed. 8 files of 100 rows each created. Remaining 8 rows discarded.");

    Ok(())
}
