//! Fixed-capacity history window for trajectory visualization.

use crate::error::{Result, ViewerError};

/// Overwrite-oldest buffer with a constant number of slots.
///
/// Slots that have not been written yet hold `None`; consumers must treat
/// them as absent rather than as a real sample. Pushing never changes the
/// number of slots, it only replaces the oldest one.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Storage, indexed modulo capacity
    slots: Vec<Option<T>>,
    /// Index of the oldest slot
    head: usize,
    /// Number of slots holding a real value
    filled: usize,
}

impl<T: Clone> RingBuffer<T> {
    /// Create a buffer with `capacity` absent slots.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(ViewerError::InvalidCapacity { capacity });
        }
        Ok(Self {
            slots: vec![None; capacity],
            head: 0,
            filled: 0,
        })
    }

    /// Drop the oldest slot and append `value` as the newest.
    pub fn push(&mut self, value: T) {
        self.slots[self.head] = Some(value);
        self.head = (self.head + 1) % self.slots.len();
        self.filled = (self.filled + 1).min(self.slots.len());
    }

    /// Ordered contents, oldest first, absent slots included.
    pub fn snapshot(&self) -> Vec<Option<T>> {
        self.iter().map(|slot| slot.cloned()).collect()
    }

    /// Same as [`snapshot`](Self::snapshot), reusing `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut Vec<Option<T>>) {
        out.clear();
        out.extend(self.iter().map(|slot| slot.cloned()));
    }

    /// Mark every slot absent again.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.filled = 0;
    }
}

impl<T> RingBuffer<T> {
    /// Iterate over all slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter()).map(Option::as_ref)
    }

    /// Iterate over the real values only, oldest first.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().flatten()
    }

    /// Most recently pushed value.
    pub fn latest(&self) -> Option<&T> {
        let len = self.slots.len();
        self.slots[(self.head + len - 1) % len].as_ref()
    }

    /// Number of slots. Constant for the lifetime of the buffer.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a real value.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// True while no value has been pushed.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_capacity() {
        let err = RingBuffer::<f32>::new(0).unwrap_err();
        assert_eq!(err, ViewerError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn test_starts_absent() {
        let buffer: RingBuffer<i32> = RingBuffer::new(4).unwrap();
        assert_eq!(buffer.len(), 4);
        assert!(buffer.is_empty());
        assert_eq!(buffer.snapshot(), vec![None, None, None, None]);
        assert_eq!(buffer.latest(), None);
    }

    #[test]
    fn test_partial_fill_keeps_absent_prefix() {
        let mut buffer = RingBuffer::new(4).unwrap();
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.filled(), 2);
        assert_eq!(buffer.snapshot(), vec![None, None, Some(1), Some(2)]);
        assert_eq!(buffer.values().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_overwrites_oldest() {
        let mut buffer = RingBuffer::new(3).unwrap();
        for i in 1..=4 {
            buffer.push((i, i));
        }

        assert!(buffer.is_full());
        assert_eq!(
            buffer.snapshot(),
            vec![Some((2, 2)), Some((3, 3)), Some((4, 4))]
        );
        assert_eq!(buffer.latest(), Some(&(4, 4)));
    }

    #[test]
    fn test_length_and_tail_for_any_push_count() {
        for capacity in 1..=6 {
            let mut buffer = RingBuffer::new(capacity).unwrap();
            for pushes in 1..=15 {
                buffer.push(pushes);
                let snapshot = buffer.snapshot();
                assert_eq!(snapshot.len(), capacity);

                let kept = capacity.min(pushes);
                let expected: Vec<_> = (pushes - kept + 1..=pushes).map(Some).collect();
                assert_eq!(&snapshot[capacity - kept..], expected.as_slice());
            }
        }
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.push('a');
        let mut out = vec![Some('z'); 8];
        buffer.snapshot_into(&mut out);
        assert_eq!(out, vec![None, None, Some('a')]);
        assert_eq!(out, buffer.snapshot());
    }

    #[test]
    fn test_capacity_one() {
        let mut buffer = RingBuffer::new(1).unwrap();
        buffer.push(7);
        buffer.push(8);
        assert_eq!(buffer.snapshot(), vec![Some(8)]);
    }

    #[test]
    fn test_reset() {
        let mut buffer = RingBuffer::new(2).unwrap();
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.push(3.0);
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.snapshot(), vec![None, None]);
        buffer.push(4.0);
        assert_eq!(buffer.snapshot(), vec![None, Some(4.0)]);
    }
}
