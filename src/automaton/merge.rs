//! Merge sort driven by a precomputed merge plan
//!
//! The divide step is performed once, up front: the index range is bisected
//! recursively and every merge the textbook algorithm would perform is
//! recorded in post-order. Each call then performs the next merge in the plan.

use super::{Step, StepSort};

/// A pending merge of `array[left_begin..left_end]` with
/// `array[right_begin..right_end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub left_begin: usize,
    pub left_end: usize,
    pub right_begin: usize,
    pub right_end: usize,
}

impl MergeRange {
    /// Total number of elements covered
    pub fn len(&self) -> usize {
        self.right_end - self.left_begin
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSort {
    len: usize,
    plan: Vec<MergeRange>,
    cursor: usize,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let mut plan = Vec::with_capacity(len.saturating_sub(1));
        build_plan(0, len, &mut plan);
        MergeSort {
            len,
            plan,
            cursor: 0,
        }
    }

    /// The full merge plan, in execution order
    pub fn plan(&self) -> &[MergeRange] {
        &self.plan
    }

    /// Index of the next merge to perform
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Record the merges for `begin..end` in post-order
fn build_plan(begin: usize, end: usize, plan: &mut Vec<MergeRange>) {
    if end - begin < 2 {
        return;
    }

    let mid = begin + (end - begin) / 2;
    build_plan(begin, mid, plan);
    build_plan(mid, end, plan);
    plan.push(MergeRange {
        left_begin: begin,
        left_end: mid,
        right_begin: mid,
        right_end: end,
    });
}

impl StepSort for MergeSort {
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step {
        debug_assert_eq!(array.len(), self.len);

        let Some(range) = self.plan.get(self.cursor).copied() else {
            return Step::DONE;
        };

        let changed = merge(array, range);
        self.cursor += 1;

        Step {
            done: self.cursor == self.plan.len(),
            changed,
        }
    }
}

/// Stable two-way merge of the two halves of `range`, written back in place.
///
/// Returns whether any element changed position.
fn merge<T: Ord + Clone>(array: &mut [T], range: MergeRange) -> bool {
    let left = &array[range.left_begin..range.left_end];
    let right = &array[range.right_begin..range.right_end];

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        // Ties favour the left half
        if left[l] <= right[r] {
            merged.push(left[l].clone());
            l += 1;
        } else {
            merged.push(right[r].clone());
            r += 1;
        }
    }
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);

    let target = &mut array[range.left_begin..range.right_end];
    let changed = *target != merged[..];
    if changed {
        target.clone_from_slice(&merged);
    }
    changed
}
