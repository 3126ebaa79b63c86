//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Ordering policy applied by the comparator, the bucket counter and the
/// merger. The set is closed; every component branches exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Byte-wise comparison from the front, smallest first
    AlphabeticalAscending,
    /// Byte-wise comparison from the front, largest first
    AlphabeticalDescending,
    /// Byte-wise comparison from the last byte walking backward, smallest first
    LastLetterAscending,
}

impl OrderingPolicy {
    /// Human-readable name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            OrderingPolicy::AlphabeticalAscending => "ascending",
            OrderingPolicy::AlphabeticalDescending => "descending",
            OrderingPolicy::LastLetterAscending => "last-letter",
        }
    }
}

impl FromStr for OrderingPolicy {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match s {
            "ascending" => Ok(OrderingPolicy::AlphabeticalAscending),
            "descending" => Ok(OrderingPolicy::AlphabeticalDescending),
            "last-letter" => Ok(OrderingPolicy::LastLetterAscending),
            other => Err(SortError::InvalidPolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Which sorting component consumes a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Quadratic adjacent-exchange sort, kept for interface parity
    Exchange,
    /// Stable counting-pass radix sort over byte strings
    Radix,
}

impl Algorithm {
    /// Human-readable name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Exchange => "exchange",
            Algorithm::Radix => "radix",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match s {
            "exchange" => Ok(Algorithm::Exchange),
            "radix" => Ok(Algorithm::Radix),
            other => Err(SortError::InvalidAlgorithm {
                value: other.to_string(),
            }),
        }
    }
}

/// How partitions move through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    /// Read every file sequentially, concatenate, sort once
    SingleThreaded,
    /// Read and sort per file in parallel, then fold-merge
    Concurrent,
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Active ordering policy
    pub policy: OrderingPolicy,
    /// Selected sorting algorithm
    pub algorithm: Algorithm,
    /// Single-threaded or concurrent pipeline
    pub mode: PipelineMode,
    /// Directory whose non-directory entries are the input partitions
    pub input_dir: PathBuf,
    /// File the merged result is written to
    pub output_file: PathBuf,
    /// Number of worker threads for the concurrent sort phase
    pub threads: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            policy: OrderingPolicy::AlphabeticalAscending,
            algorithm: Algorithm::Radix,
            mode: PipelineMode::Concurrent,
            input_dir: PathBuf::from("input"),
            output_file: PathBuf::from("sorted.txt"),
            threads: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordering policy
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the sorting algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the pipeline mode
    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the input directory
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output file
    pub fn with_output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.output_file = file.into();
        self
    }

    /// Set the worker thread count
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(SortError::thread_pool("thread count must be positive"));
            }
            if threads > 1024 {
                return Err(SortError::thread_pool("too many threads (maximum 1024)"));
            }
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(SortError::parse("output file must not be empty"));
        }

        Ok(())
    }

    /// Get effective thread count
    pub fn effective_thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
