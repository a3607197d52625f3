use core::ops::{Add, Sub};

/// The scroll axis of a recycler.
///
/// `Vertical` scrolls top → bottom, `Horizontal` scrolls left → right. The other axis is the
/// cross axis, along which grid lines are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A 2-D point or size in layout space (x grows right, y grows down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a vector with `value` on `axis` and zero on the other axis.
    pub fn on_axis(axis: Axis, value: f32) -> Self {
        Self::ZERO.with(axis, value)
    }

    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn with(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }

    /// Builds a vector from scroll-axis and cross-axis components.
    pub fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        Self::ZERO.with(axis, main).with(axis.cross(), cross)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// The edge of the rect facing the start of the content (top or left).
    pub fn start(&self, axis: Axis) -> f32 {
        self.min.along(axis)
    }

    /// The edge of the rect facing the end of the content (bottom or right).
    pub fn end(&self, axis: Axis) -> f32 {
        self.max.along(axis)
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        self.end(axis) - self.start(axis)
    }
}

/// Four-sided padding around the content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    /// Padding before the content on `axis` (left or top).
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Padding after the content on `axis` (right or bottom).
    pub fn trailing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    pub fn total(&self, axis: Axis) -> f32 {
        self.leading(axis) + self.trailing(axis)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    pub fn fraction(self) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Where the cell grid sits inside content space that is larger than the grid itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildAlignment {
    pub horizontal: Align,
    pub vertical: Align,
}

impl ChildAlignment {
    pub fn on(&self, axis: Axis) -> Align {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// How logical indexes map onto cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// One cell per line along the scroll axis.
    #[default]
    List,
    /// `lines` cells per line; index `i` sits on line `i / lines`, slot `i % lines`.
    Grid { lines: usize },
}

impl Topology {
    pub fn line_count(self) -> usize {
        match self {
            Self::List => 1,
            Self::Grid { lines } => lines,
        }
    }
}

/// An inclusive range of logical indexes currently backed by slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub first: usize,
    pub last: usize,
}

impl IndexRange {
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }
}

/// A window entry as seen by the host.
#[derive(Debug)]
pub struct WindowItem<'a, S> {
    pub index: usize,
    pub slot: &'a S,
    /// Local position of the slot's top-left corner inside the content.
    pub position: Vec2,
}

impl<S> Clone for WindowItem<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for WindowItem<'_, S> {}

/// What one call to `Recycler::update` did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateReport {
    pub rebuilt: bool,
    pub reseated: bool,
    pub shifted_forward: usize,
    pub shifted_backward: usize,
    pub disposed: usize,
}

impl UpdateReport {
    pub fn shifts(&self) -> usize {
        self.shifted_forward + self.shifted_backward
    }
}
