use std::fs;
use std::path::Path;

use splitcsv::job::{Job, SplitDataset};
use splitcsv::path::SourcePath;
use splitcsv::plan::SplitPlan;
use splitcsv::store::FileStore;

const SOURCE: &str = "your_file.csv";

fn write_source(root: &Path, num_rows: usize) {
    let mut lines = vec!["id,name".to_string()];
    lines.extend((0..num_rows).map(|i| format!("{},row-{}", i, i)));
    fs::write(root.join(SOURCE), lines.join("\n") + "\n").unwrap();
}

fn run_split(root: &Path) {
    let store = FileStore::new(root.to_path_buf());
    let plan = SplitPlan::new(800, 100, 8);
    let job = SplitDataset::new(SourcePath::new(SOURCE), plan, "split_");
    job.run(&store).unwrap();
}

fn data_rows(root: &Path, file_name: &str) -> Vec<String> {
    let contents = fs::read_to_string(root.join(file_name)).unwrap();
    let mut lines = contents.lines().map(str::to_string);
    assert_eq!(lines.next().as_deref(), Some("id,name"));
    lines.collect()
}

fn ids(rows: &[String]) -> Vec<usize> {
    rows.iter()
        .map(|row| row.split(',').next().unwrap().parse().unwrap())
        .collect()
}

#[test]
fn splits_808_rows_into_8_full_chunks() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 808);
    run_split(dir.path());

    for i in 1..=8 {
        let rows = data_rows(dir.path(), &format!("split_{}.csv", i));
        assert_eq!(rows.len(), 100);

        let expected: Vec<usize> = ((i - 1) * 100..i * 100).collect();
        assert_eq!(ids(&rows), expected);
    }
}

#[test]
fn chunks_cover_the_first_800_rows_without_gaps_or_overlap() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 808);
    run_split(dir.path());

    let mut all_ids = vec![];
    for i in 1..=8 {
        all_ids.extend(ids(&data_rows(dir.path(), &format!("split_{}.csv", i))));
    }

    let expected: Vec<usize> = (0..800).collect();
    assert_eq!(all_ids, expected);
}

#[test]
fn trailing_rows_appear_in_no_output() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 808);
    run_split(dir.path());

    for i in 1..=8 {
        let rows = data_rows(dir.path(), &format!("split_{}.csv", i));
        assert!(ids(&rows).iter().all(|id| *id < 800));
    }
}

#[test]
fn exactly_800_rows_fill_every_chunk() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 800);
    run_split(dir.path());

    for i in 1..=8 {
        let rows = data_rows(dir.path(), &format!("split_{}.csv", i));
        assert_eq!(rows.len(), 100);
    }
}

#[test]
fn short_input_yields_short_and_empty_chunks() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 250);
    run_split(dir.path());

    assert_eq!(data_rows(dir.path(), "split_1.csv").len(), 100);
    assert_eq!(data_rows(dir.path(), "split_2.csv").len(), 100);
    assert_eq!(data_rows(dir.path(), "split_3.csv").len(), 50);

    // Chunks past the data still exist, header only.
    for i in 4..=8 {
        assert_eq!(data_rows(dir.path(), &format!("split_{}.csv", i)).len(), 0);
    }
}

#[test]
fn rerunning_produces_byte_identical_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 808);

    run_split(dir.path());
    let first: Vec<Vec<u8>> = (1..=8)
        .map(|i| fs::read(dir.path().join(format!("split_{}.csv", i))).unwrap())
        .collect();

    run_split(dir.path());
    let second: Vec<Vec<u8>> = (1..=8)
        .map(|i| fs::read(dir.path().join(format!("split_{}.csv", i))).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn report_records_chunk_paths_and_discarded_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), 808);

    let store = FileStore::new(dir.path().to_path_buf());
    let plan = SplitPlan::new(800, 100, 8);
    let job = SplitDataset::new(SourcePath::new(SOURCE), plan, "split_");
    let report = job.run(&store).unwrap();

    assert_eq!(report.discarded().count(), 8);
    assert_eq!(report.written().len(), 8);
    assert_eq!(report.written()[0].0.to_string(), "split_1.csv");
    assert_eq!(report.written()[7].0.to_string(), "split_8.csv");
    assert!(report.written().iter().all(|(_, rows)| rows.count() == 100));
}

#[test]
fn quoted_fields_survive_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut lines = vec!["id,name".to_string()];
    lines.extend((0..120).map(|i| format!("{},\"row, {}\"", i, i)));
    fs::write(dir.path().join(SOURCE), lines.join("\n") + "\n").unwrap();

    run_split(dir.path());

    let contents = fs::read_to_string(dir.path().join("split_1.csv")).unwrap();
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 100);
    assert_eq!(rows[42].get(1), Some("row, 42"));
}

#[test]
fn missing_input_fails_the_job() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::new(dir.path().to_path_buf());
    let plan = SplitPlan::new(800, 100, 8);
    let job = SplitDataset::new(SourcePath::new(SOURCE), plan, "split_");

    assert!(job.run(&store).is_err());
}
