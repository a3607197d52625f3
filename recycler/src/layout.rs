use crate::geometry::{self, floor_count};
use crate::{Axis, Padding, Rect, RecyclerOptions, Vec2};

/// Resolved index → position math for one options/viewport combination.
///
/// Lists are grids with a single line, so every routine here serves both topologies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    axis: Axis,
    lines: usize,
    count: usize,
    cell: Vec2,
    step: Vec2,
    padding: Padding,
    origin: Vec2,
    content_size: Vec2,
}

impl GridLayout {
    /// Resolves the layout. `options` must have passed `validate`.
    pub fn new(options: &RecyclerOptions, viewport: Rect) -> Self {
        let axis = options.direction;
        let cross = axis.cross();
        let lines = options.line_count().max(1);
        let count = options.object_count;
        let step = geometry::cell_step(options.cell_size, options.spacing);
        let padding = options.padding;

        let required_main = step.along(axis) * geometry::lines_along(count, lines) as f32;
        let required_cross = step.along(cross) * lines as f32;
        let content_main =
            geometry::content_extent(count, lines, step.along(axis), padding.total(axis));
        let natural_cross = required_cross + padding.total(cross);
        let content_cross = natural_cross.max(viewport.extent(cross));

        let origin = Vec2::from_axes(
            axis,
            geometry::start_offset(
                padding.leading(axis),
                padding.total(axis),
                content_main,
                required_main,
                options.child_alignment.on(axis),
            ),
            geometry::start_offset(
                padding.leading(cross),
                padding.total(cross),
                content_cross,
                required_cross,
                options.child_alignment.on(cross),
            ),
        );

        Self {
            axis,
            lines,
            count,
            cell: options.cell_size,
            step,
            padding,
            origin,
            content_size: Vec2::from_axes(axis, content_main, content_cross),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell
    }

    pub fn cell_extent(&self) -> f32 {
        self.cell.along(self.axis)
    }

    /// Cell plus spacing along the scroll axis.
    ///
    /// This is the shift trigger margin and the unit of the window size. With zero spacing it
    /// equals [`Self::cell_extent`].
    pub fn step_extent(&self) -> f32 {
        self.step.along(self.axis)
    }

    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    pub fn content_extent(&self) -> f32 {
        self.content_size.along(self.axis)
    }

    /// Local position of index 0.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Ideal number of slots for a viewport `viewport_extent` long, capped at the item count.
    pub fn window_size(&self, viewport_extent: f32) -> usize {
        geometry::window_size(viewport_extent, self.step_extent(), self.lines).min(self.count)
    }

    pub fn line_of(&self, index: usize) -> usize {
        index / self.lines
    }

    /// Local position of `index`, straight from the grid formula.
    pub fn position_of(&self, index: usize) -> Vec2 {
        self.cell_at(index / self.lines, index % self.lines)
    }

    /// Position for `head_index - 1`, the entry that goes in front of the head.
    ///
    /// A head at the start of its line means the new entry closes the previous line: it moves
    /// back one step on the scroll axis and to the far end of the cross axis. Otherwise it sits
    /// one step before the head on the cross axis. Either way the result is taken from the grid
    /// formula, never accumulated from the head's position.
    pub fn before(&self, head_index: usize) -> Vec2 {
        let line = self.line_of(head_index);
        let slot = head_index % self.lines;
        if slot == 0 {
            self.cell_at(line.saturating_sub(1), self.lines - 1)
        } else {
            self.cell_at(line, slot - 1)
        }
    }

    /// Position for `tail_index + 1`.
    ///
    /// Mirror of [`Self::before`]: a tail at the end of its line opens the next line.
    pub fn after(&self, tail_index: usize) -> Vec2 {
        let line = self.line_of(tail_index);
        let slot = tail_index % self.lines;
        if slot == self.lines - 1 {
            self.cell_at(line.saturating_add(1), 0)
        } else {
            self.cell_at(line, slot + 1)
        }
    }

    /// Largest valid content offset for a viewport `viewport_extent` long.
    pub fn max_offset(&self, viewport_extent: f32) -> f32 {
        (self.content_extent() - viewport_extent).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f32, viewport_extent: f32) -> f32 {
        offset.clamp(0.0, self.max_offset(viewport_extent))
    }

    /// Content offset that brings the line holding `index` to the viewport's leading edge.
    ///
    /// Does not validate `index`; callers check it against the item count.
    pub fn jump_offset(&self, index: usize, viewport_extent: f32) -> f32 {
        let line = self.line_of(index);
        let target = self.padding.leading(self.axis) + line as f32 * self.step.along(self.axis);
        self.clamp_offset(target, viewport_extent)
    }

    /// Line whose span contains `offset` (content-local, scroll axis). Clamps to line 0.
    pub fn line_at(&self, offset: f32) -> usize {
        floor_count((offset - self.origin.along(self.axis)) / self.step.along(self.axis))
    }

    fn cell_at(&self, line: usize, slot: usize) -> Vec2 {
        self.origin
            + Vec2::from_axes(
                self.axis,
                line as f32 * self.step.along(self.axis),
                slot as f32 * self.step.along(self.axis.cross()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Align, ChildAlignment, Topology};

    fn grid(lines: usize, count: usize) -> GridLayout {
        let opts = RecyclerOptions::new(count, Vec2::new(10.0, 20.0))
            .with_topology(Topology::Grid { lines });
        GridLayout::new(&opts, Rect::from_size(Vec2::new(30.0, 100.0)))
    }

    #[test]
    fn position_of_maps_index_to_line_and_slot() {
        let l = grid(3, 30);
        assert_eq!(l.position_of(0), Vec2::new(0.0, 0.0));
        assert_eq!(l.position_of(2), Vec2::new(20.0, 0.0));
        assert_eq!(l.position_of(3), Vec2::new(0.0, 20.0));
        assert_eq!(l.position_of(7), Vec2::new(10.0, 40.0));
    }

    #[test]
    fn before_wraps_at_line_start_and_steps_within_a_line() {
        let l = grid(3, 30);
        // Head 3 starts line 1: index 2 closes line 0 at the far cross end.
        let p = l.before(3);
        assert_eq!(p, l.position_of(2));
        assert_eq!(p.x - l.position_of(3).x, 20.0);
        assert_eq!(l.position_of(3).y - p.y, 20.0);

        // Head 4 is mid-line: index 3 only moves one cell on the cross axis.
        let p = l.before(4);
        assert_eq!(p, l.position_of(3));
        assert_eq!(p.y, l.position_of(4).y);
    }

    #[test]
    fn after_wraps_at_line_end_and_steps_within_a_line() {
        let l = grid(3, 30);
        assert_eq!(l.after(5), l.position_of(6));
        assert_eq!(l.after(6), l.position_of(7));
        assert_eq!(l.after(2), l.position_of(3));
    }

    #[test]
    fn single_line_degenerates_to_list_steps() {
        let l = grid(1, 10);
        assert_eq!(l.before(4), l.position_of(3));
        assert_eq!(l.after(4), l.position_of(5));
    }

    #[test]
    fn horizontal_grid_uses_rows_as_cross_axis() {
        let opts = RecyclerOptions::new(12, Vec2::new(10.0, 20.0))
            .with_direction(Axis::Horizontal)
            .with_lines(2)
            .with_spacing(Vec2::new(2.0, 4.0));
        let l = GridLayout::new(&opts, Rect::from_size(Vec2::new(50.0, 48.0)));
        assert_eq!(l.position_of(1), Vec2::new(0.0, 24.0));
        assert_eq!(l.position_of(2), Vec2::new(12.0, 0.0));
        assert_eq!(l.before(2), l.position_of(1));
        assert_eq!(l.after(1), l.position_of(2));
        assert_eq!(l.content_size(), Vec2::new(72.0, 48.0));
    }

    #[test]
    fn jump_offset_clamps_to_content_bounds() {
        let l = grid(3, 10); // 4 lines of 20 = 80, viewport 100
        assert_eq!(l.jump_offset(9, 100.0), 0.0);
        let l = grid(3, 300); // 100 lines
        assert_eq!(l.jump_offset(9, 100.0), 60.0);
        assert_eq!(l.jump_offset(299, 100.0), 2000.0 - 100.0);
    }

    #[test]
    fn center_alignment_centers_the_grid_in_a_wide_viewport() {
        let opts = RecyclerOptions::new(10, Vec2::new(10.0, 10.0))
            .with_lines(2)
            .with_child_alignment(ChildAlignment {
                horizontal: Align::Center,
                vertical: Align::Start,
            });
        let l = GridLayout::new(&opts, Rect::from_size(Vec2::new(100.0, 50.0)));
        assert_eq!(l.origin(), Vec2::new(40.0, 0.0));
        assert_eq!(l.content_size().x, 100.0);
    }

    #[test]
    fn neighbours_far_down_a_long_list_match_the_formula() {
        let opts = RecyclerOptions::new(1_000_000, Vec2::new(100.0, 33.0));
        let l = GridLayout::new(&opts, Rect::from_size(Vec2::new(100.0, 330.0)));
        for index in 800_000..800_200 {
            assert_eq!(l.after(index), l.position_of(index + 1));
            assert_eq!(l.before(index + 1), l.position_of(index));
        }
    }

    #[test]
    fn line_at_floors_and_clamps() {
        let l = grid(3, 300);
        assert_eq!(l.line_at(-5.0), 0);
        assert_eq!(l.line_at(39.0), 1);
        assert_eq!(l.line_at(40.0), 2);
    }
}
