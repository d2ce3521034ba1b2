//! Heap sort as a two-phase state machine
//!
//! The heapify phase walks `i` down from the last parent, performing one
//! sift-down per call. The extract phase then swaps the root with position `i`,
//! shrinks the heap, and restores it with a single sift-down per call.

use super::{Step, StepSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapPhase {
    Heapify,
    Extract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapSort {
    len: usize,
    phase: HeapPhase,
    /// Heapify: root of the next sift-down. Extract: last index of the heap.
    cursor: usize,
}

impl HeapSort {
    pub fn new(len: usize) -> Self {
        if len < 2 {
            return HeapSort {
                len,
                phase: HeapPhase::Extract,
                cursor: 0,
            };
        }

        HeapSort {
            len,
            phase: HeapPhase::Heapify,
            cursor: (len - 2) / 2,
        }
    }

    pub fn phase(&self) -> HeapPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl StepSort for HeapSort {
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step {
        debug_assert_eq!(array.len(), self.len);

        match self.phase {
            HeapPhase::Heapify => {
                let changed = sift_down(array, self.cursor, self.len - 1);
                if self.cursor == 0 {
                    self.phase = HeapPhase::Extract;
                    self.cursor = self.len - 1;
                } else {
                    self.cursor -= 1;
                }
                Step::progress(changed)
            }
            HeapPhase::Extract => {
                // Only reachable for arrays of fewer than two elements
                if self.cursor == 0 {
                    return Step::DONE;
                }

                let swapped = array[0] != array[self.cursor];
                array.swap(0, self.cursor);
                self.cursor -= 1;
                let sifted = sift_down(array, 0, self.cursor);

                if self.cursor == 0 {
                    // The last extraction is always reported as a change
                    Step::finish(true)
                } else {
                    Step::progress(swapped || sifted)
                }
            }
        }
    }
}

/// Sink `array[root]` within the max-heap `array[..=end]`.
///
/// Returns whether at least one swap happened.
fn sift_down<T: Ord>(array: &mut [T], mut root: usize, end: usize) -> bool {
    let mut swapped = false;

    loop {
        let left = 2 * root + 1;
        if left > end {
            break;
        }

        let right = left + 1;
        let child = if right <= end && array[right] > array[left] {
            right
        } else {
            left
        };

        if array[child] <= array[root] {
            break;
        }

        array.swap(root, child);
        root = child;
        swapped = true;
    }

    swapped
}
