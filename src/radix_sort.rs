//! Radix sort driver for variable-length byte-string lines.
//!
//! Runs one stable [`bucket_pass`](crate::bucket::bucket_pass) per byte
//! position. Because every pass is stable, sorting on the least significant
//! position first and the most significant position last converges to the
//! full policy order after `max_len` passes.

use crate::bucket::bucket_pass;
use crate::config::OrderingPolicy;
use crate::Partition;

/// Sort a partition in place under the given policy.
///
/// Alphabetical policies compare from the front, so the leading byte is the
/// most significant digit and passes run from the rightmost position toward
/// position 0. `LastLetterAscending` compares from the end, so passes run
/// the opposite way: the deepest position from the end first and the line's
/// own last byte in the final pass.
pub fn radix_sort(lines: &mut Partition, policy: OrderingPolicy) {
    let max_len = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    // Covers the empty partition and the all-empty-lines partition
    if max_len == 0 {
        return;
    }

    match policy {
        OrderingPolicy::AlphabeticalAscending | OrderingPolicy::AlphabeticalDescending => {
            for digit in (0..max_len).rev() {
                bucket_pass(lines, digit, max_len, policy);
            }
        }
        OrderingPolicy::LastLetterAscending => {
            for digit in 0..max_len {
                bucket_pass(lines, digit, max_len, policy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;
    use OrderingPolicy::*;

    fn partition(lines: &[&[u8]]) -> Partition {
        lines.iter().map(|l| l.to_vec()).collect()
    }

    #[test]
    fn test_alphabetical_ascending() {
        let mut lines = partition(&[b"banana", b"apple", b"cherry"]);
        radix_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"apple", b"banana", b"cherry"]));
    }

    #[test]
    fn test_alphabetical_descending() {
        let mut lines = partition(&[b"banana", b"apple", b"cherry"]);
        radix_sort(&mut lines, AlphabeticalDescending);
        assert_eq!(lines, partition(&[b"cherry", b"banana", b"apple"]));
    }

    #[test]
    fn test_last_letter_shared_suffix() {
        // All share the suffix "at"; the third byte from the end decides
        let mut lines = partition(&[b"cat", b"bat", b"rat"]);
        radix_sort(&mut lines, LastLetterAscending);
        assert_eq!(lines, partition(&[b"bat", b"cat", b"rat"]));
    }

    #[test]
    fn test_last_letter_mixed_lengths() {
        let mut lines = partition(&[b"cat", b"at", b"t", b"format"]);
        radix_sort(&mut lines, LastLetterAscending);
        // Shorter suffix-tied lines come first: t, at, cat, format
        assert_eq!(lines, partition(&[b"t", b"at", b"cat", b"format"]));
    }

    #[test]
    fn test_prefix_tie_shorter_before_longer() {
        let mut lines = partition(&[b"apple", b"app"]);
        radix_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"app", b"apple"]));

        let mut lines = partition(&[b"app", b"apple"]);
        radix_sort(&mut lines, AlphabeticalDescending);
        assert_eq!(lines, partition(&[b"apple", b"app"]));
    }

    #[test]
    fn test_empty_partition_returns_unchanged() {
        let mut lines: Partition = Vec::new();
        radix_sort(&mut lines, AlphabeticalAscending);
        assert!(lines.is_empty());
        radix_sort(&mut lines, LastLetterAscending);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_all_empty_lines() {
        let mut lines = partition(&[b"", b"", b""]);
        radix_sort(&mut lines, AlphabeticalDescending);
        assert_eq!(lines, partition(&[b"", b"", b""]));
    }

    #[test]
    fn test_empty_lines_sort_to_the_correct_end() {
        let mut lines = partition(&[b"b", b"", b"a"]);
        radix_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"", b"a", b"b"]));

        let mut lines = partition(&[b"b", b"", b"a"]);
        radix_sort(&mut lines, AlphabeticalDescending);
        assert_eq!(lines, partition(&[b"b", b"a", b""]));
    }

    #[test]
    fn test_duplicates_survive() {
        let mut lines = partition(&[b"dup", b"a", b"dup", b"a"]);
        radix_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"a", b"a", b"dup", b"dup"]));
    }

    #[test]
    fn test_idempotence() {
        let mut lines = partition(&[b"pear", b"fig", b"plum", b"fig"]);
        radix_sort(&mut lines, LastLetterAscending);
        let once = lines.clone();
        radix_sort(&mut lines, LastLetterAscending);
        assert_eq!(lines, once);
    }

    #[test]
    fn test_high_byte_values() {
        let mut lines: Partition =
            vec![vec![0xff, 0x01], vec![0x00], vec![0xfe], vec![0xff]];
        radix_sort(&mut lines, AlphabeticalAscending);
        assert!(compare::is_sorted(&lines, AlphabeticalAscending));
        assert_eq!(lines[0], vec![0x00]);
    }

    #[test]
    fn test_agrees_with_comparator_sort() {
        let input = partition(&[
            b"pear", b"", b"apple", b"app", b"banana", b"band", b"b", b"pear",
        ]);
        for policy in [AlphabeticalAscending, AlphabeticalDescending, LastLetterAscending] {
            let mut radixed = input.clone();
            radix_sort(&mut radixed, policy);

            let mut reference = input.clone();
            reference.sort_by(|a, b| compare::compare(a, b, policy));

            assert_eq!(radixed, reference, "policy {policy:?}");
        }
    }
}
