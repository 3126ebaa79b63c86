//! Two-way merge of policy-sorted partitions.

use crate::compare::compare;
use crate::config::OrderingPolicy;
use crate::Partition;
use std::cmp::Ordering;

/// Merge two partitions that are already sorted under `policy` into one
/// sorted partition. Takes the left head on ties, so a left-to-right fold
/// keeps earlier partitions' lines ahead of equal later ones. Both inputs
/// are consumed; the output is a permutation of their concatenation.
pub fn merge(left: Partition, right: Partition, policy: OrderingPolicy) -> Partition {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut right_iter = right.into_iter();
    let mut pending = right_iter.next();

    for line in left {
        // Drain everything from the right side that the policy ranks
        // strictly before the current left head
        while let Some(candidate) = pending.take() {
            if compare(&candidate, &line, policy) == Ordering::Less {
                merged.push(candidate);
                pending = right_iter.next();
            } else {
                pending = Some(candidate);
                break;
            }
        }
        merged.push(line);
    }

    if let Some(candidate) = pending {
        merged.push(candidate);
    }
    merged.extend(right_iter);
    merged
}

/// Fold a sequence of sorted partitions left-to-right into one:
/// `merge(merge(p0, p1), p2)...`. The fold is strictly sequential in
/// partition order; callers rely on that for output fidelity.
pub fn merge_all(partitions: Vec<Partition>, policy: OrderingPolicy) -> Partition {
    let mut partitions = partitions.into_iter();
    let first = partitions.next().unwrap_or_default();
    partitions.fold(first, |acc, next| merge(acc, next, policy))
}
