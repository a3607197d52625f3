use crate::geometry::abs;
use crate::{Error, Recycler, Result, SlotHost, Vec2};

impl<S> Recycler<S> {
    /// Returns the index whose visual center is closest to the viewport's leading edge (top for
    /// vertical, left for horizontal).
    ///
    /// The scan walks head → tail and stops at the first entry that is farther away than the
    /// previous one, relying on entries being laid out in increasing scroll order. Equal
    /// distances keep scanning, so in a grid the last index of the closest line wins. Right
    /// after a rebuild or re-seat the result is an approximation, not a guaranteed minimum.
    ///
    /// Fails with [`Error::EmptyWindow`] when no slots are live.
    pub fn current_leading_index<H>(&self, host: &H) -> Result<usize>
    where
        H: SlotHost<Slot = S>,
    {
        let axis = self.layout().axis();
        let edge = self.viewport().start(axis);
        let origin = self.content_origin();
        let cell = self.layout().cell_size();
        let half = Vec2::new(cell.x * 0.5, cell.y * 0.5);

        let mut best: Option<(usize, f32)> = None;
        for entry in self.window().iter() {
            let center = host
                .to_viewport_space(entry.position + half, origin)
                .along(axis);
            let distance = abs(center - edge);
            if let Some((_, closest)) = best {
                if distance > closest {
                    break;
                }
            }
            best = Some((entry.index, distance));
        }
        best.map(|(index, _)| index).ok_or(Error::EmptyWindow)
    }

    /// Computes the content offset that [`Self::jump_to_index`] would apply, without applying it.
    pub fn jump_offset(&self, index: usize) -> Result<f32> {
        let count = self.object_count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }
        Ok(self.layout().jump_offset(index, self.viewport_extent()))
    }

    /// Scrolls so the line holding `index` sits at the viewport's leading edge, clamped to the
    /// content bounds.
    ///
    /// Only the content offset changes; the window catches up on the next [`Self::update`].
    /// Returns the applied offset.
    pub fn jump_to_index(&mut self, index: usize) -> Result<f32> {
        let offset = self.jump_offset(index)?;
        rdebug!(index, offset, "Recycler::jump_to_index");
        self.set_content_offset(offset);
        Ok(offset)
    }
}
