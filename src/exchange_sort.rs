//! Quadratic adjacent-exchange sort.
//!
//! Reference algorithm kept for interface parity with the radix driver:
//! same contract, same policies, O(n^2) comparisons. Adjacent elements are
//! swapped only when strictly out of order, so the sort is stable.

use crate::compare::compare;
use crate::config::OrderingPolicy;
use crate::Line;
use std::cmp::Ordering;

/// Sort a partition in place under the given policy.
pub fn exchange_sort(lines: &mut [Line], policy: OrderingPolicy) {
    for pass in 1..lines.len() {
        for j in 0..lines.len() - pass {
            if compare(&lines[j], &lines[j + 1], policy) == Ordering::Greater {
                lines.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix_sort::radix_sort;
    use crate::Partition;
    use OrderingPolicy::*;

    fn partition(lines: &[&[u8]]) -> Partition {
        lines.iter().map(|l| l.to_vec()).collect()
    }

    #[test]
    fn test_ascending() {
        let mut lines = partition(&[b"banana", b"apple", b"cherry"]);
        exchange_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"apple", b"banana", b"cherry"]));
    }

    #[test]
    fn test_descending() {
        let mut lines = partition(&[b"banana", b"apple", b"cherry"]);
        exchange_sort(&mut lines, AlphabeticalDescending);
        assert_eq!(lines, partition(&[b"cherry", b"banana", b"apple"]));
    }

    #[test]
    fn test_last_letter() {
        let mut lines = partition(&[b"cat", b"bat", b"rat"]);
        exchange_sort(&mut lines, LastLetterAscending);
        assert_eq!(lines, partition(&[b"bat", b"cat", b"rat"]));
    }

    #[test]
    fn test_empty_and_single() {
        let mut lines: Partition = Vec::new();
        exchange_sort(&mut lines, AlphabeticalAscending);
        assert!(lines.is_empty());

        let mut lines = partition(&[b"only"]);
        exchange_sort(&mut lines, AlphabeticalAscending);
        assert_eq!(lines, partition(&[b"only"]));
    }

    #[test]
    fn test_matches_radix_sort() {
        let input = partition(&[
            b"pear", b"", b"apple", b"app", b"banana", b"band", b"b", b"pear",
        ]);
        for policy in [AlphabeticalAscending, AlphabeticalDescending, LastLetterAscending] {
            let mut exchanged = input.clone();
            exchange_sort(&mut exchanged, policy);

            let mut radixed = input.clone();
            radix_sort(&mut radixed, policy);

            assert_eq!(exchanged, radixed, "policy {policy:?}");
        }
    }
}
