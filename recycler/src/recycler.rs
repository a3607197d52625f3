use alloc::vec::Vec;

use crate::layout::GridLayout;
use crate::pool::SlotPool;
use crate::window::{Window, WindowEntry};
use crate::{
    Error, IndexRange, Rect, RecyclerOptions, Result, SlotHost, UpdateReport, Vec2, WindowItem,
};

/// A headless slot-recycling window.
///
/// The recycler keeps a small, fixed number of slots alive and maps them onto a contiguous run
/// of logical indexes around the viewport:
/// - It owns no UI objects; slots come from and go back to a [`SlotHost`].
/// - The host feeds it the viewport rectangle and the content offset, then calls
///   [`Self::update`] once per frame.
/// - Each update recycles boundary slots from one end of the window to the other until the
///   window surrounds the viewport again.
///
/// Lists and grids share one code path: a list is a grid with a single line.
#[derive(Clone, Debug)]
pub struct Recycler<S> {
    options: RecyclerOptions,
    layout: GridLayout,
    viewport: Rect,
    content_offset: f32,

    pool: SlotPool<S>,
    window: Window,
    target_size: usize,
    dirty: bool,
}

impl<S> Recycler<S> {
    /// Creates a recycler with an empty viewport.
    ///
    /// Nothing is allocated from the host until the first [`Self::update`] or
    /// [`Self::rebuild`].
    pub fn new(options: RecyclerOptions) -> Result<Self> {
        Self::with_viewport(options, Rect::default())
    }

    pub fn with_viewport(options: RecyclerOptions, viewport: Rect) -> Result<Self> {
        options.validate()?;
        rdebug!(
            object_count = options.object_count,
            lines = options.line_count(),
            "Recycler::new"
        );
        Ok(Self {
            layout: GridLayout::new(&options, viewport),
            options,
            viewport,
            content_offset: 0.0,
            pool: SlotPool::new(),
            window: Window::new(),
            target_size: 0,
            dirty: true,
        })
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    /// Installs new options. Invalid options are rejected and leave the recycler unchanged.
    ///
    /// Layout-affecting changes are applied by a rebuild on the next update.
    pub fn set_options(&mut self, options: RecyclerOptions) -> Result<()> {
        options.validate()?;
        if self.options == options {
            return Ok(());
        }
        rtrace!(
            object_count = options.object_count,
            lines = options.line_count(),
            "Recycler::set_options"
        );
        self.options = options;
        self.relayout();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut RecyclerOptions)) -> Result<()> {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next)
    }

    pub fn object_count(&self) -> usize {
        self.options.object_count
    }

    /// Changes the number of logical items. The window is rebuilt on the next update.
    pub fn set_object_count(&mut self, object_count: usize) {
        if self.options.object_count == object_count {
            return;
        }
        rdebug!(
            from = self.options.object_count,
            to = object_count,
            "Recycler::set_object_count"
        );
        self.options.object_count = object_count;
        self.relayout();
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Sets the viewport rectangle, in viewport space.
    ///
    /// A size change that alters the layout or the window size schedules a rebuild.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
    }

    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// Sets how far the content has scrolled along the scroll axis.
    ///
    /// The value is taken as is, so hosts with elastic overscroll can report offsets outside
    /// `0..=max_content_offset()`.
    pub fn set_content_offset(&mut self, offset: f32) {
        self.content_offset = offset;
    }

    /// Same as `set_content_offset`, but clamps to the content bounds. Returns the applied offset.
    pub fn set_content_offset_clamped(&mut self, offset: f32) -> f32 {
        self.content_offset = self.clamp_content_offset(offset);
        self.content_offset
    }

    /// Applies viewport and content offset together, e.g. from one host layout pass.
    pub fn apply_frame(&mut self, viewport: Rect, offset: f32) {
        self.set_viewport(viewport);
        self.set_content_offset(offset);
    }

    pub fn max_content_offset(&self) -> f32 {
        self.layout.max_offset(self.viewport_extent())
    }

    pub fn clamp_content_offset(&self, offset: f32) -> f32 {
        self.layout.clamp_offset(offset, self.viewport_extent())
    }

    /// Where the content's `(0, 0)` sits in viewport space.
    pub fn content_origin(&self) -> Vec2 {
        self.viewport.min - Vec2::on_axis(self.layout.axis(), self.content_offset)
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn content_size(&self) -> Vec2 {
        self.layout.content_size()
    }

    /// Local position `index` occupies under the current layout.
    pub fn position_of(&self, index: usize) -> Option<Vec2> {
        (index < self.layout.count()).then(|| self.layout.position_of(index))
    }

    /// Whether a rebuild is scheduled for the next update.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Slot count the last rebuild asked for.
    pub fn target_window_size(&self) -> usize {
        self.target_size
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn window_range(&self) -> Option<IndexRange> {
        self.window.range()
    }

    /// Reports the last rebuild's slot shortfall, if the host could not provide every slot.
    pub fn slot_shortfall(&self) -> Option<Error> {
        let missing = self.pool.shortfall();
        (missing > 0).then(|| Error::SlotCreationUnavailable {
            requested: self.target_size,
            created: self.target_size - missing,
        })
    }

    /// Number of surplus slots waiting for disposal.
    pub fn pending_disposals(&self) -> usize {
        self.pool.pending_len()
    }

    pub fn slot_pool(&self) -> &SlotPool<S> {
        &self.pool
    }

    /// The slot currently showing `index`, if it is inside the window.
    pub fn slot_for(&self, index: usize) -> Option<&S> {
        let range = self.window.range()?;
        if !range.contains(index) {
            return None;
        }
        let entry = self.window.get(index - range.first)?;
        self.pool.get(entry.slot)
    }

    /// Iterates the window head → tail.
    pub fn entries(&self) -> impl Iterator<Item = WindowItem<'_, S>> {
        self.window.iter().filter_map(|e| {
            Some(WindowItem {
                index: e.index,
                slot: self.pool.get(e.slot)?,
                position: e.position,
            })
        })
    }

    pub fn for_each_entry(&self, mut f: impl FnMut(WindowItem<'_, S>)) {
        for item in self.entries() {
            f(item);
        }
    }

    /// Collects the window into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_entry`]. Reuse `out` across frames
    /// to avoid allocating.
    pub fn collect_entries<'a>(&'a self, out: &mut Vec<WindowItem<'a, S>>) {
        out.clear();
        out.extend(self.entries());
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn viewport_extent(&self) -> f32 {
        self.viewport.extent(self.layout.axis())
    }

    /// Disposes surplus slots left by earlier rebuilds.
    ///
    /// Call this after your render pass when you do not want to wait for the next update.
    /// Returns the number of slots disposed.
    pub fn flush_surplus<H>(&mut self, host: &mut H) -> usize
    where
        H: SlotHost<Slot = S>,
    {
        self.pool.flush(host)
    }

    /// Rebuilds the window from scratch.
    ///
    /// Acquires exactly the ideal number of slots (surplus ones are queued for disposal),
    /// assigns indexes `0..n` with formula positions and notifies every slot in ascending order.
    pub fn rebuild<H>(&mut self, host: &mut H)
    where
        H: SlotHost<Slot = S>,
    {
        self.pool.set_deferring(true);

        let extent = self.viewport_extent();
        self.target_size = self.layout.window_size(extent);
        self.content_offset = self.layout.clamp_offset(self.content_offset, extent);

        let live = self.pool.ensure(self.target_size, host);
        rdebug!(
            object_count = self.layout.count(),
            target = self.target_size,
            live,
            "Recycler::rebuild"
        );

        self.window.clear();
        for index in 0..live {
            let entry = WindowEntry {
                index,
                slot: index,
                position: self.layout.position_of(index),
            };
            self.window.push_tail(entry);
        }
        for entry in self.window.iter() {
            if let Some(slot) = self.pool.get(entry.slot) {
                host.set_local_position(slot, entry.position);
            }
        }
        for entry in self.window.iter() {
            if let Some(slot) = self.pool.get(entry.slot) {
                host.on_index_assigned(entry.index, slot);
            }
        }

        self.dirty = false;
        self.pool.set_deferring(false);
    }

    /// Runs one windowing pass.
    ///
    /// In order: disposes surplus from earlier rebuilds, rebuilds if scheduled, re-seats the
    /// window when the viewport has left it entirely, then shifts backward and forward until
    /// neither edge wants to move.
    pub fn update<H>(&mut self, host: &mut H) -> UpdateReport
    where
        H: SlotHost<Slot = S>,
    {
        let mut report = UpdateReport {
            disposed: self.pool.flush(host),
            ..UpdateReport::default()
        };

        if self.dirty {
            self.rebuild(host);
            report.rebuilt = true;
        }
        if self.window.is_empty() {
            return report;
        }

        self.pool.set_deferring(true);
        if self.viewport_left_window(&*host) {
            self.reseat(host);
            report.reseated = true;
        }
        while self.shift_backward(host) {
            report.shifted_backward += 1;
        }
        while self.shift_forward(host) {
            report.shifted_forward += 1;
        }
        self.pool.set_deferring(false);

        debug_assert!(self.window.is_contiguous(), "window lost contiguity");
        if report.shifts() > 0 {
            rtrace!(
                backward = report.shifted_backward,
                forward = report.shifted_forward,
                range = ?self.window.range(),
                "Recycler::update"
            );
        }
        report
    }

    fn relayout(&mut self) {
        let next = GridLayout::new(&self.options, self.viewport);
        let size = next.window_size(self.viewport.extent(next.axis()));
        if next != self.layout || size != self.target_size {
            self.dirty = true;
        }
        self.layout = next;
    }

    /// Scroll-axis span of `entry` in viewport space: its start edge and the start of the
    /// next line.
    fn span<H>(&self, host: &H, entry: &WindowEntry) -> (f32, f32)
    where
        H: SlotHost<Slot = S>,
    {
        let axis = self.layout.axis();
        let origin = self.content_origin();
        let step = Vec2::on_axis(axis, self.layout.step_extent());
        let start = host.to_viewport_space(entry.position, origin).along(axis);
        let end = host
            .to_viewport_space(entry.position + step, origin)
            .along(axis);
        (start, end)
    }

    /// Moves the tail slot in front of the head when the tail is more than one step past the
    /// viewport's end edge.
    fn shift_backward<H>(&mut self, host: &mut H) -> bool
    where
        H: SlotHost<Slot = S>,
    {
        let (head, tail) = match (self.window.head(), self.window.tail()) {
            (Ok(head), Ok(tail)) => (*head, *tail),
            _ => return false,
        };
        if head.index == 0 {
            return false;
        }
        let axis = self.layout.axis();
        let (tail_start, _) = self.span(&*host, &tail);
        if tail_start - self.viewport.end(axis) <= self.layout.step_extent() {
            return false;
        }

        let Ok(mut entry) = self.window.pop_tail() else {
            return false;
        };
        entry.index = head.index - 1;
        entry.position = self.layout.before(head.index);
        self.window.push_head(entry);
        place(&self.pool, host, &entry);
        true
    }

    /// Moves the head slot behind the tail when the head is more than one step before the
    /// viewport's start edge.
    fn shift_forward<H>(&mut self, host: &mut H) -> bool
    where
        H: SlotHost<Slot = S>,
    {
        let (head, tail) = match (self.window.head(), self.window.tail()) {
            (Ok(head), Ok(tail)) => (*head, *tail),
            _ => return false,
        };
        if tail.index + 1 >= self.layout.count() {
            return false;
        }
        let axis = self.layout.axis();
        let (_, head_end) = self.span(&*host, &head);
        if self.viewport.start(axis) - head_end <= self.layout.step_extent() {
            return false;
        }

        let Ok(mut entry) = self.window.pop_head() else {
            return false;
        };
        entry.index = tail.index + 1;
        entry.position = self.layout.after(tail.index);
        self.window.push_tail(entry);
        place(&self.pool, host, &entry);
        true
    }

    /// Whether the viewport no longer overlaps the window widened by one step on each side.
    fn viewport_left_window<H>(&self, host: &H) -> bool
    where
        H: SlotHost<Slot = S>,
    {
        let (Ok(head), Ok(tail)) = (self.window.head(), self.window.tail()) else {
            return false;
        };
        let axis = self.layout.axis();
        let step = self.layout.step_extent();
        let (head_start, _) = self.span(host, head);
        let (_, tail_end) = self.span(host, tail);
        self.viewport.end(axis) < head_start - step || self.viewport.start(axis) > tail_end + step
    }

    /// Reassigns the whole window around the viewport in one go.
    ///
    /// Assumes `to_viewport_space` is translation-like; any residual error is corrected by the
    /// shift loops that run right after.
    fn reseat<H>(&mut self, host: &mut H)
    where
        H: SlotHost<Slot = S>,
    {
        let lines = self.layout.lines();
        let count = self.layout.count();
        let len = self.window.len();

        let line = self.layout.line_at(self.content_offset).saturating_sub(1);
        let mut first = line.saturating_mul(lines);
        let max_first = count.saturating_sub(len);
        if first > max_first {
            first = max_first - max_first % lines;
        }
        rdebug!(
            first,
            len,
            offset = self.content_offset,
            "Recycler::reseat"
        );

        for (k, entry) in self.window.iter_mut().enumerate() {
            entry.index = first + k;
            entry.position = self.layout.position_of(first + k);
        }
        for entry in self.window.iter() {
            place(&self.pool, host, entry);
        }
    }
}

/// Writes `entry`'s position to its slot and reports the index assignment.
fn place<S, H>(pool: &SlotPool<S>, host: &mut H, entry: &WindowEntry)
where
    H: SlotHost<Slot = S>,
{
    let slot = pool.get(entry.slot);
    debug_assert!(
        slot.is_some(),
        "window entry points at a missing slot ({})",
        entry.slot
    );
    let Some(slot) = slot else {
        return;
    };
    host.set_local_position(slot, entry.position);
    host.on_index_assigned(entry.index, slot);
}
