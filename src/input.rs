//! Input directory enumeration and memory-mapped line reading.
//!
//! The sort and merge components never touch the filesystem; this module is
//! the collaborator that turns an input directory into partitions of
//! newline-stripped byte lines.

use crate::error::{SortContext, SortError, SortResult};
use crate::Partition;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// List the non-directory entries of `dir`, one future partition each.
///
/// Directory iteration order is platform-dependent, so entries are sorted
/// by path; partition order (and therefore merge order) is stable across
/// runs.
pub fn list_input_files(dir: &Path) -> SortResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SortError::not_a_directory(dir));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_file_context(dir)? {
        let entry = entry.with_file_context(dir)?;
        let path = entry.path();
        if !path.is_dir() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(SortError::empty_input_dir(dir));
    }

    files.sort();
    Ok(files)
}

/// Read one file into a partition of owned lines.
///
/// Lines are split on `\n`; a trailing newline does not produce a final
/// empty line. All other bytes, `\r` included, pass through verbatim.
pub fn read_lines(path: &Path) -> SortResult<Partition> {
    let file = File::open(path).with_file_context(path)?;
    let metadata = file.metadata().with_file_context(path)?;

    // Mapping a zero-length file fails on some platforms
    if metadata.len() == 0 {
        return Ok(Partition::new());
    }

    // SAFETY: the mapping is read-only and dropped before this function
    // returns; every line is copied out, nothing borrows the map afterwards
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(path)?;
    Ok(parse_lines(&mmap))
}

/// Split mapped bytes into owned newline-stripped lines
fn parse_lines(data: &[u8]) -> Partition {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &byte) in data.iter().enumerate() {
        if byte == b'\n' {
            lines.push(data[start..i].to_vec());
            start = i + 1;
        }
    }

    // Last line without a trailing newline
    if start < data.len() {
        lines.push(data[start..].to_vec());
    }

    lines
}
