use recycler::{Recycler, SlotHost};

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - replacing the data set while keeping the same item at the top of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeadingAnchor {
    /// Index reported by `Recycler::current_leading_index` when the anchor was taken.
    pub index: usize,
    /// The distance from the start of the anchor's line to the content offset.
    pub offset_in_line: f32,
}

/// Captures an anchor for the item nearest the viewport's leading edge.
///
/// Returns `None` if the window is empty.
pub fn capture_leading_anchor<H: SlotHost>(
    recycler: &Recycler<H::Slot>,
    host: &H,
) -> Option<LeadingAnchor> {
    let index = recycler.current_leading_index(host).ok()?;
    let axis = recycler.layout().axis();
    let line_start = recycler.position_of(index)?.along(axis);
    Some(LeadingAnchor {
        index,
        offset_in_line: recycler.content_offset() - line_start,
    })
}

/// Applies a previously captured anchor by adjusting the content offset.
///
/// The adapter must provide a `remap` from the anchor's old index to its index in the *current*
/// data set. The window itself follows on the next `Recycler::update`.
///
/// Returns `true` when the anchor was successfully applied.
pub fn apply_anchor<S>(
    recycler: &mut Recycler<S>,
    anchor: &LeadingAnchor,
    mut remap: impl FnMut(usize) -> Option<usize>,
) -> bool {
    let Some(index) = remap(anchor.index) else {
        return false;
    };
    let Some(position) = recycler.position_of(index) else {
        return false;
    };
    let target = position.along(recycler.layout().axis()) + anchor.offset_in_line;
    recycler.set_content_offset_clamped(target);
    true
}
