//! Bubble sort, one adjacent comparison per step

use super::{Step, StepSort};

/// Pass cursor `(i, j)`: `i` counts completed passes, `j` is the right-hand
/// element of the pair compared next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSort {
    len: usize,
    i: usize,
    j: usize,
}

impl BubbleSort {
    pub fn new(len: usize) -> Self {
        BubbleSort { len, i: 0, j: 1 }
    }

    /// Current `(pass, position)` cursor
    pub fn cursor(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl StepSort for BubbleSort {
    fn advance<T: Ord + Clone>(&mut self, array: &mut [T]) -> Step {
        debug_assert_eq!(array.len(), self.len);

        if self.i >= self.len {
            return Step::DONE;
        }

        // End of pass: the largest remaining element has settled at len - i - 1
        if self.j >= self.len - self.i {
            self.i += 1;
            self.j = 1;
            return Step::progress(false);
        }

        let changed = array[self.j] < array[self.j - 1];
        if changed {
            array.swap(self.j, self.j - 1);
        }

        self.j += 1;
        Step::progress(changed)
    }
}
