use core::fmt;

use recycler::{Rect, Recycler, RecyclerOptions, Result, SlotHost, UpdateReport};

use crate::{LeadingAnchor, apply_anchor, capture_leading_anchor};

/// A framework-neutral controller that owns a `recycler::Recycler` together with the host that
/// creates and positions its slots.
///
/// Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` when UI events occur
/// - `tick()` once per frame, which runs the windowing pass against the owned host
pub struct Controller<H: SlotHost> {
    recycler: Recycler<H::Slot>,
    host: H,
}

impl<H> fmt::Debug for Controller<H>
where
    H: SlotHost + fmt::Debug,
    H::Slot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("recycler", &self.recycler)
            .field("host", &self.host)
            .finish()
    }
}

impl<H: SlotHost> Controller<H> {
    pub fn new(options: RecyclerOptions, host: H) -> Result<Self> {
        Ok(Self {
            recycler: Recycler::new(options)?,
            host,
        })
    }

    pub fn from_parts(recycler: Recycler<H::Slot>, host: H) -> Self {
        Self { recycler, host }
    }

    pub fn recycler(&self) -> &Recycler<H::Slot> {
        &self.recycler
    }

    pub fn recycler_mut(&mut self) -> &mut Recycler<H::Slot> {
        &mut self.recycler
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (Recycler<H::Slot>, H) {
        (self.recycler, self.host)
    }

    /// Call this when the UI reports a new viewport rectangle.
    pub fn on_viewport(&mut self, viewport: Rect) {
        self.recycler.set_viewport(viewport);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    pub fn on_scroll(&mut self, offset: f32) {
        self.recycler.set_content_offset(offset);
    }

    /// Runs one windowing pass against the owned host.
    pub fn tick(&mut self) -> UpdateReport {
        self.recycler.update(&mut self.host)
    }

    /// Scrolls so `index` leads the viewport. The window follows on the next `tick()`.
    ///
    /// Returns the applied (clamped) offset.
    pub fn jump_to_index(&mut self, index: usize) -> Result<f32> {
        self.recycler.jump_to_index(index)
    }

    pub fn leading_index(&self) -> Result<usize> {
        self.recycler.current_leading_index(&self.host)
    }

    pub fn set_object_count(&mut self, object_count: usize) {
        self.recycler.set_object_count(object_count);
    }

    pub fn capture_leading_anchor(&self) -> Option<LeadingAnchor> {
        capture_leading_anchor(&self.recycler, &self.host)
    }

    pub fn apply_anchor(
        &mut self,
        anchor: &LeadingAnchor,
        remap: impl FnMut(usize) -> Option<usize>,
    ) -> bool {
        apply_anchor(&mut self.recycler, anchor, remap)
    }

    /// Changes the item count while keeping the leading item where it was on screen.
    ///
    /// `remap` maps an index of the old data set to its index in the new one. Returns `false`
    /// when there was nothing to anchor or the leading item no longer exists; the count is
    /// changed either way.
    pub fn set_object_count_anchored(
        &mut self,
        object_count: usize,
        remap: impl FnMut(usize) -> Option<usize>,
    ) -> bool {
        let anchor = self.capture_leading_anchor();
        self.recycler.set_object_count(object_count);
        match anchor {
            Some(anchor) => apply_anchor(&mut self.recycler, &anchor, remap),
            None => false,
        }
    }
}
