//! Comparison functions for the three ordering policies.
//! All comparison functions are allocation-free for maximum sort performance.

use crate::config::OrderingPolicy;
use itertools::Itertools;
use std::cmp::Ordering;

/// Compare two lines under the given policy. Total order: equal bytes
/// compare `Equal`, so stable algorithms preserve input order on ties.
#[inline]
pub fn compare(a: &[u8], b: &[u8], policy: OrderingPolicy) -> Ordering {
    match policy {
        OrderingPolicy::AlphabeticalAscending => compare_alphabetical(a, b),
        OrderingPolicy::AlphabeticalDescending => compare_alphabetical(a, b).reverse(),
        OrderingPolicy::LastLetterAscending => compare_last_letter(a, b),
    }
}

/// Byte-wise comparison from the front. The first differing byte decides;
/// on a shared prefix the shorter line sorts first.
#[inline]
pub fn compare_alphabetical(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Byte-wise comparison from the last byte walking backward, i.e.
/// lexicographic order of the reversed byte sequences. The first differing
/// byte by distance from the end decides; on a shared suffix the shorter
/// line sorts first; simultaneous exhaustion means the lines are identical
/// and compares `Equal`.
#[inline]
pub fn compare_last_letter(a: &[u8], b: &[u8]) -> Ordering {
    a.iter().rev().cmp(b.iter().rev())
}

/// Check that consecutive lines are in order under the policy
pub fn is_sorted<L: AsRef<[u8]>>(lines: &[L], policy: OrderingPolicy) -> bool {
    lines
        .iter()
        .tuple_windows()
        .all(|(x, y)| compare(x.as_ref(), y.as_ref(), policy) != Ordering::Greater)
}
