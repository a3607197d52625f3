use alloc::vec::Vec;

use crate::SlotHost;

/// Position of a slot inside its [`SlotPool`].
pub type SlotId = usize;

/// The set of slots a recycler owns.
///
/// Live slots are addressed by [`SlotId`]. Slots that are no longer needed are moved by value
/// into a pending queue and handed to [`SlotHost::dispose_slot`] on the next flush, so each
/// slot is disposed exactly once. While the pool is deferring (a rebuild or windowing pass is
/// running) flushes do nothing.
#[derive(Clone, Debug)]
pub struct SlotPool<S> {
    live: Vec<S>,
    pending: Vec<S>,
    deferring: bool,
    shortfall: usize,
}

impl<S> Default for SlotPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SlotPool<S> {
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            pending: Vec::new(),
            deferring: false,
            shortfall: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&S> {
        self.live.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.live.iter()
    }

    /// Number of slots waiting to be disposed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// How many slots the last `ensure` call could not provide.
    pub fn shortfall(&self) -> usize {
        self.shortfall
    }

    pub fn is_deferring(&self) -> bool {
        self.deferring
    }

    pub(crate) fn set_deferring(&mut self, deferring: bool) {
        self.deferring = deferring;
    }

    /// Makes exactly `n` slots live if possible and returns how many are live afterwards.
    ///
    /// Existing live slots are kept in order. Missing slots are first reclaimed from the
    /// pending queue, then created through the host. Live slots beyond `n` are marked surplus.
    pub fn ensure<H>(&mut self, n: usize, host: &mut H) -> usize
    where
        H: SlotHost<Slot = S>,
    {
        if self.live.len() > n {
            self.mark_surplus(n);
        }

        let reclaim = n.saturating_sub(self.live.len()).min(self.pending.len());
        if reclaim > 0 {
            rtrace!(reclaim, "SlotPool::ensure: reclaiming pending slots");
            self.live.extend(self.pending.drain(..reclaim));
        }

        while self.live.len() < n {
            match host.create_slot() {
                Some(slot) => self.live.push(slot),
                None => break,
            }
        }

        self.shortfall = n - self.live.len();
        if self.shortfall > 0 {
            rwarn!(
                requested = n,
                created = self.live.len(),
                "SlotPool::ensure: slot factory unavailable"
            );
        }
        self.live.len()
    }

    /// Moves every live slot from `keep` onwards into the pending queue.
    ///
    /// Returns the number of slots marked.
    pub fn mark_surplus(&mut self, keep: usize) -> usize {
        if keep >= self.live.len() {
            return 0;
        }
        let surplus = self.live.split_off(keep);
        let marked = surplus.len();
        rdebug!(marked, keep, "SlotPool::mark_surplus");
        self.pending.extend(surplus);
        marked
    }

    /// Disposes all pending slots unless a pass is running.
    ///
    /// Returns the number of slots handed to the host.
    pub fn flush<H>(&mut self, host: &mut H) -> usize
    where
        H: SlotHost<Slot = S>,
    {
        if self.deferring {
            if !self.pending.is_empty() {
                rtrace!(
                    pending = self.pending.len(),
                    "SlotPool::flush: deferred, pass in progress"
                );
            }
            return 0;
        }
        let disposed = self.pending.len();
        for slot in self.pending.drain(..) {
            host.dispose_slot(slot);
        }
        disposed
    }
}
