use crate::{Axis, ChildAlignment, Error, Padding, Result, Topology, Vec2};

/// Configuration for [`crate::Recycler`].
///
/// Every field can be changed later through `Recycler::set_options`; the engine rebuilds its
/// window on the next update when the change affects the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerOptions {
    /// Number of logical items.
    pub object_count: usize,
    /// Size of one cell. Both components must be positive.
    pub cell_size: Vec2,
    /// Space added after every cell on each axis.
    ///
    /// Cell plus spacing is the step the window is sized and shifted by: a window holds
    /// `ceil(viewport / step) + 2` lines, and a slot is recycled once it sits more than one step
    /// outside the viewport.
    pub spacing: Vec2,
    pub padding: Padding,
    pub topology: Topology,
    /// The scroll axis.
    pub direction: Axis,
    /// Placement of the cell grid inside content space larger than the grid.
    pub child_alignment: ChildAlignment,
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            object_count: 0,
            cell_size: Vec2::new(100.0, 100.0),
            spacing: Vec2::ZERO,
            padding: Padding::default(),
            topology: Topology::List,
            direction: Axis::Vertical,
            child_alignment: ChildAlignment::default(),
        }
    }
}

impl RecyclerOptions {
    /// Creates options for a vertical list of `object_count` cells of `cell_size`.
    pub fn new(object_count: usize, cell_size: Vec2) -> Self {
        Self {
            object_count,
            cell_size,
            ..Self::default()
        }
    }

    pub fn with_object_count(mut self, object_count: usize) -> Self {
        self.object_count = object_count;
        self
    }

    pub fn with_cell_size(mut self, cell_size: Vec2) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_spacing(mut self, spacing: Vec2) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Shorthand for `with_topology(Topology::Grid { lines })`.
    pub fn with_lines(self, lines: usize) -> Self {
        self.with_topology(Topology::Grid { lines })
    }

    pub fn with_direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_child_alignment(mut self, child_alignment: ChildAlignment) -> Self {
        self.child_alignment = child_alignment;
        self
    }

    pub fn line_count(&self) -> usize {
        self.topology.line_count()
    }

    /// Checks the options for values the layout math cannot work with.
    ///
    /// The recycler calls this whenever options are installed, before any slot is touched.
    pub fn validate(&self) -> Result<()> {
        if self.topology.line_count() == 0 {
            return Err(Error::InvalidConfig("line count must be at least 1"));
        }
        if !is_positive(self.cell_size.x) || !is_positive(self.cell_size.y) {
            return Err(Error::InvalidConfig("cell size must be positive and finite"));
        }
        if !is_non_negative(self.spacing.x) || !is_non_negative(self.spacing.y) {
            return Err(Error::InvalidConfig("spacing must be non-negative and finite"));
        }
        let p = self.padding;
        if ![p.left, p.right, p.top, p.bottom]
            .into_iter()
            .all(is_non_negative)
        {
            return Err(Error::InvalidConfig("padding must be non-negative and finite"));
        }
        Ok(())
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
