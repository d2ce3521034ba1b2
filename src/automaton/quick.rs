//! Quick sort with an explicit range stack
//!
//! Recursion is replaced by a LIFO stack of pending ranges. Each call pops one
//! range and partitions it around its last element (Lomuto), then pushes the
//! right sub-range followed by the left one so the left side is handled first.

use super::{Step, StepSort};

/// Pending partition of `array[begin..end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRange {
    pub begin: usize,
    pub end: usize,
}

impl PartitionRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSort {
    len: usize,
    stack: Vec<PartitionRange>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        QuickSort {
            len,
            stack: vec![PartitionRange { begin: 0, end: len }],
        }
    }

    /// Pending ranges, bottom of the stack first
    pub fn pending(&self) -> &[PartitionRange] {
        &self.stack
    }

    fn push_if_unsorted(&mut self, begin: usize, end: usize) {
        let range = PartitionRange { begin, end };
        if range.len() >= 2 {
            self.stack.push(range);
        }
    }
}

impl StepSort for QuickSort {
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step {
        debug_assert_eq!(array.len(), self.len);

        let Some(range) = self.stack.pop() else {
            return Step::DONE;
        };

        // Nothing to partition; the next call moves on
        if range.len() < 2 {
            return Step::progress(false);
        }

        let (pivot, changed) = partition(array, range);

        // Right first so the left side is on top
        self.push_if_unsorted(pivot + 1, range.end);
        self.push_if_unsorted(range.begin, pivot);

        Step::progress(changed)
    }
}

/// Lomuto partition of a range holding at least two elements, pivoting on the
/// last one.
///
/// Returns the pivot's final index and whether the array changed.
fn partition<T: Ord>(array: &mut [T], range: PartitionRange) -> (usize, bool) {
    let pivot = range.end - 1;
    let mut boundary = range.begin;
    let mut changed = false;

    for j in range.begin..pivot {
        if array[j] < array[pivot] {
            if j != boundary {
                changed |= array[j] != array[boundary];
                array.swap(j, boundary);
            }
            boundary += 1;
        }
    }

    if boundary != pivot {
        changed |= array[boundary] != array[pivot];
        array.swap(boundary, pivot);
    }

    (boundary, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(begin: usize, end: usize) -> PartitionRange {
        PartitionRange { begin, end }
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut array = [5, 3, 2, 1, 7, 10, 6];
        let (pivot, changed) = partition(&mut array, range(0, 7));
        assert_eq!(pivot, 4);
        assert!(changed);
        assert_eq!(array, [5, 3, 2, 1, 6, 10, 7]);
    }

    #[test]
    fn test_partition_without_moves() {
        let mut array = [3, 2, 5];
        let (pivot, changed) = partition(&mut array, range(0, 3));
        assert_eq!(pivot, 2);
        assert!(!changed);
        assert_eq!(array, [3, 2, 5]);
    }

    #[test]
    fn test_left_range_processed_first() {
        let mut array = [5, 3, 2, 1, 7, 10, 6];
        let mut sort = QuickSort::new(array.len());
        sort.advance(&mut array);
        assert_eq!(sort.pending(), &[range(5, 7), range(0, 4)]);
    }

    #[test]
    fn test_sorted_subranges_are_not_pushed() {
        let mut array = [2, 1];
        let mut sort = QuickSort::new(2);
        assert_eq!(sort.advance(&mut array), Step::progress(true));
        assert!(sort.pending().is_empty());
        assert_eq!(sort.advance(&mut array), Step::DONE);
    }

    #[test]
    fn test_trivial_initial_range() {
        let mut array = [1];
        let mut sort = QuickSort::new(1);
        assert_eq!(sort.advance(&mut array), Step::progress(false));
        assert_eq!(sort.advance(&mut array), Step::DONE);
    }
}
