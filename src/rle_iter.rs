use crate::rle_list::RleList;
use crate::run::{Run, RunNode};
use slotmap::{DefaultKey, SlotMap};
use std::iter::FusedIterator;

/// Iterator that reconstructs the logical byte sequence.
///
/// Expands run-length encoded runs during iteration.
pub struct Iter<'a> {
    runs: &'a SlotMap<DefaultKey, RunNode>,
    current: Option<DefaultKey>,
    /// Remaining count for the current run
    remaining_run: usize,
    /// Remaining count for the whole list
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a RleList) -> Self {
        let remaining_run = list.head.map_or(0, |head| list.runs[head].run);
        Self {
            runs: &list.runs,
            current: list.head,
            remaining_run,
            remaining: list.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let node = &self.runs[current];
        let value = node.value;

        // Move to next run once this one is exhausted
        self.remaining_run -= 1;
        if self.remaining_run == 0 {
            self.current = node.next;
            self.remaining_run = self.current.map_or(0, |next| self.runs[next].run);
        }
        self.remaining -= 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the runs of a list, front to back.
pub struct Runs<'a> {
    runs: &'a SlotMap<DefaultKey, RunNode>,
    current: Option<DefaultKey>,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.runs[self.current?];
        self.current = node.next;
        Some(node.to_run())
    }
}

impl FusedIterator for Runs<'_> {}

impl RleList {
    /// Returns an iterator over the logical bytes.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator over the stored runs.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            runs: &self.runs,
            current: self.head,
        }
    }
}

impl<'a> IntoIterator for &'a RleList {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
