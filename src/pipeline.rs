//! Pipeline orchestrators: single-threaded and concurrent.
//!
//! Both modes feed partitions to the selected sorting algorithm and hand one
//! merged partition to the output writer. The concurrent mode has exactly
//! two synchronization barriers: all read workers complete, then all sort
//! workers complete; the merge phase after them is strictly sequential.

use crate::compare;
use crate::config::{Algorithm, PipelineMode, SortConfig};
use crate::error::{SortContext, SortError, SortResult};
use crate::exchange_sort::exchange_sort;
use crate::input::{list_input_files, read_lines};
use crate::merge::merge_all;
use crate::radix_sort::radix_sort;
use crate::{Partition, EXIT_SUCCESS, SORT_FAILURE};
use crossbeam_channel::bounded;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

/// Run the configured pipeline end to end.
///
/// A partition whose read fails is reported to stderr and skipped; sibling
/// workers keep running and the output is assembled from the partitions
/// that succeeded. The returned exit code is [`SORT_FAILURE`] when anything
/// was skipped, [`EXIT_SUCCESS`] otherwise.
pub fn run(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;
    let files = list_input_files(&config.input_dir)?;
    let started = Instant::now();

    let (merged, failures) = match config.mode {
        PipelineMode::SingleThreaded => run_single_threaded(&files, config),
        PipelineMode::Concurrent => run_concurrent(&files, config)?,
    };

    for failure in &failures {
        eprintln!("dirsort: {failure}");
    }

    write_output(&config.output_file, &merged)?;
    report(config, merged.len(), started);

    Ok(if failures.is_empty() {
        EXIT_SUCCESS
    } else {
        SORT_FAILURE
    })
}

/// Read every file sequentially into one aggregated partition and sort it
/// once. No merge is needed.
fn run_single_threaded(
    files: &[PathBuf],
    config: &SortConfig,
) -> (Partition, Vec<SortError>) {
    let mut master = Partition::new();
    let mut failures = Vec::new();

    for (index, path) in files.iter().enumerate() {
        match read_lines(path) {
            Ok(mut lines) => master.append(&mut lines),
            Err(err) => {
                failures.push(SortError::partition_failed(index, path, &err.to_string()))
            }
        }
    }

    sort_partition(&mut master, config);
    (master, failures)
}

/// Read and sort one partition per file in parallel, then fold-merge.
fn run_concurrent(
    files: &[PathBuf],
    config: &SortConfig,
) -> SortResult<(Partition, Vec<SortError>)> {
    // Read phase: one worker per file, results funneled through a channel
    // keyed by file index. The scope join is the first barrier.
    let (sender, receiver) = bounded(files.len());
    thread::scope(|scope| {
        for (index, path) in files.iter().enumerate() {
            let sender = sender.clone();
            scope.spawn(move || {
                let _ = sender.send((index, read_lines(path)));
            });
        }
    });
    drop(sender);

    let mut slots: Vec<Option<SortResult<Partition>>> = Vec::with_capacity(files.len());
    slots.resize_with(files.len(), || None);
    while let Ok((index, result)) = receiver.recv() {
        slots[index] = Some(result);
    }

    // Partitions stay in file order; failed reads are skipped
    let mut partitions = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(Ok(lines)) => partitions.push(lines),
            Some(Err(err)) => failures.push(SortError::partition_failed(
                index,
                &files[index],
                &err.to_string(),
            )),
            None => failures.push(SortError::partition_failed(
                index,
                &files[index],
                "read worker did not report",
            )),
        }
    }

    // Sort phase: each worker owns its partition exclusively, no shared
    // state. The parallel iterator completing is the second barrier.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_thread_count())
        .build()
        .map_err(|e| SortError::thread_pool(&e.to_string()))?;
    pool.install(|| {
        partitions
            .par_iter_mut()
            .for_each(|partition| sort_partition(partition, config));
    });

    // Merge phase: strictly sequential left-to-right fold in file order
    let merged = merge_all(partitions, config.policy);
    Ok((merged, failures))
}

/// Dispatch one partition to the selected algorithm
fn sort_partition(partition: &mut Partition, config: &SortConfig) {
    match config.algorithm {
        Algorithm::Exchange => exchange_sort(partition, config.policy),
        Algorithm::Radix => radix_sort(partition, config.policy),
    }
    debug_assert!(compare::is_sorted(partition, config.policy));
}

/// Write the merged partition as newline-joined text
fn write_output(path: &Path, lines: &Partition) -> SortResult<()> {
    let file = File::create(path).with_file_context(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line).with_file_context(path)?;
        writer.write_all(b"\n").with_file_context(path)?;
    }
    writer.flush().with_file_context(path)?;
    Ok(())
}

/// Report elapsed time and the algorithm used, GNU-tool style on stderr
fn report(config: &SortConfig, line_count: usize, started: Instant) {
    eprintln!(
        "dirsort: {} lines sorted with the {} algorithm ({} order) in {:?}",
        line_count,
        config.algorithm.label(),
        config.policy.label(),
        started.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderingPolicy;

    fn partition(lines: &[&[u8]]) -> Partition {
        lines.iter().map(|l| l.to_vec()).collect()
    }

    #[test]
    fn test_sort_partition_dispatches_both_algorithms() {
        for algorithm in [Algorithm::Radix, Algorithm::Exchange] {
            let config = SortConfig::new()
                .with_algorithm(algorithm)
                .with_policy(OrderingPolicy::AlphabeticalAscending);
            let mut lines = partition(&[b"b", b"a", b"c"]);
            sort_partition(&mut lines, &config);
            assert_eq!(lines, partition(&[b"a", b"b", b"c"]));
        }
    }

    #[test]
    fn test_write_output_joins_with_newlines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        write_output(&path, &partition(&[b"x", b"", b"y"])).expect("write");
        assert_eq!(std::fs::read(&path).expect("read"), b"x\n\ny\n");
    }
}
