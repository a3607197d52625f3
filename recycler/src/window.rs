use alloc::collections::VecDeque;

use crate::pool::SlotId;
use crate::{Error, IndexRange, Result, Vec2};

/// One live slot in the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowEntry {
    pub index: usize,
    pub slot: SlotId,
    /// Local position of the slot, as last written to the host.
    pub position: Vec2,
}

/// The ordered run of entries currently backed by slots, head (lowest index) to tail.
///
/// Backed by a ring buffer, so both ends are O(1) and recycling never allocates once the
/// buffer has reached the window size.
#[derive(Clone, Debug, Default)]
pub struct Window {
    entries: VecDeque<WindowEntry>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn head(&self) -> Result<&WindowEntry> {
        self.entries.front().ok_or(Error::EmptyWindow)
    }

    pub fn tail(&self) -> Result<&WindowEntry> {
        self.entries.back().ok_or(Error::EmptyWindow)
    }

    /// Entry `offset` places after the head.
    pub fn get(&self, offset: usize) -> Option<&WindowEntry> {
        self.entries.get(offset)
    }

    pub fn push_head(&mut self, entry: WindowEntry) {
        self.entries.push_front(entry);
    }

    pub fn push_tail(&mut self, entry: WindowEntry) {
        self.entries.push_back(entry);
    }

    pub fn pop_head(&mut self) -> Result<WindowEntry> {
        self.entries.pop_front().ok_or(Error::EmptyWindow)
    }

    pub fn pop_tail(&mut self) -> Result<WindowEntry> {
        self.entries.pop_back().ok_or(Error::EmptyWindow)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &WindowEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut WindowEntry> + ExactSizeIterator {
        self.entries.iter_mut()
    }

    pub fn range(&self) -> Option<IndexRange> {
        let first = self.entries.front()?.index;
        let last = self.entries.back()?.index;
        Some(IndexRange { first, last })
    }

    /// Whether indexes run head → tail without gaps or repeats.
    pub fn is_contiguous(&self) -> bool {
        self.entries
            .iter()
            .zip(self.entries.iter().skip(1))
            .all(|(a, b)| b.index == a.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn entry(index: usize) -> WindowEntry {
        WindowEntry {
            index,
            slot: index,
            position: Vec2::ZERO,
        }
    }

    #[test]
    fn empty_window_reports_empty_window_error() {
        let mut w = Window::new();
        assert_eq!(w.head(), Err(Error::EmptyWindow));
        assert_eq!(w.tail(), Err(Error::EmptyWindow));
        assert_eq!(w.pop_head(), Err(Error::EmptyWindow));
        assert_eq!(w.pop_tail(), Err(Error::EmptyWindow));
        assert_eq!(w.range(), None);
        assert!(w.is_contiguous());
    }

    #[test]
    fn moving_tail_to_head_keeps_order() {
        let mut w = Window::with_capacity(4);
        for i in 3..7 {
            w.push_tail(entry(i));
        }
        let mut moved = w.pop_tail().unwrap();
        moved.index = w.head().unwrap().index - 1;
        w.push_head(moved);

        assert_eq!(
            w.iter().map(|e| e.index).collect::<Vec<_>>(),
            [2, 3, 4, 5]
        );
        assert_eq!(w.range(), Some(IndexRange { first: 2, last: 5 }));
        assert!(w.is_contiguous());
        // The recycled entry kept its slot.
        assert_eq!(w.head().unwrap().slot, 6);
        assert_eq!(w.get(0).map(|e| e.slot), Some(6));
        assert_eq!(w.get(3).map(|e| e.index), Some(5));
        assert_eq!(w.get(4), None);
    }

    #[test]
    fn gaps_break_contiguity() {
        let mut w = Window::new();
        w.push_tail(entry(0));
        w.push_tail(entry(2));
        assert!(!w.is_contiguous());
    }
}
