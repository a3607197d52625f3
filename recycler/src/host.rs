use crate::Vec2;

/// The host side of a [`crate::Recycler`].
///
/// The engine never creates, destroys, or draws anything itself. It asks the host for slots,
/// tells it where to put them, and reports which logical index each slot now shows.
///
/// All callbacks run synchronously inside the engine call that triggered them.
pub trait SlotHost {
    /// An opaque handle to one reusable visual element.
    type Slot;

    /// Produces a new slot, or `None` when no slot can be made (e.g. no template).
    ///
    /// Returning `None` is not fatal: the window just ends up smaller than ideal.
    fn create_slot(&mut self) -> Option<Self::Slot>;

    /// Destroys a slot that is no longer needed.
    ///
    /// Called at most once per slot, and never while a rebuild or windowing pass is running.
    fn dispose_slot(&mut self, slot: Self::Slot);

    /// Moves `slot` to `position` (top-left corner, content-local coordinates).
    fn set_local_position(&mut self, slot: &Self::Slot, position: Vec2);

    /// Called whenever `slot` starts showing `index`.
    ///
    /// During a rebuild this fires for every slot in ascending index order.
    fn on_index_assigned(&mut self, index: usize, slot: &Self::Slot);

    /// Converts a content-local point into viewport space.
    ///
    /// `content_origin` is where the content's `(0, 0)` currently sits in viewport space. The
    /// default is a plain translation; override it when the host applies scaling or other
    /// transforms between content and viewport.
    fn to_viewport_space(&self, local: Vec2, content_origin: Vec2) -> Vec2 {
        content_origin + local
    }
}
