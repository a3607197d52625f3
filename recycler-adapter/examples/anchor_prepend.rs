use recycler::{Rect, RecyclerOptions, SlotHost, Vec2};
use recycler_adapter::Controller;

/// Slots are just numbers; a real adapter would hold widgets or scene nodes here.
#[derive(Default)]
struct Labels {
    next: u32,
}

impl SlotHost for Labels {
    type Slot = u32;

    fn create_slot(&mut self) -> Option<u32> {
        self.next += 1;
        Some(self.next - 1)
    }

    fn dispose_slot(&mut self, _slot: u32) {}

    fn set_local_position(&mut self, _slot: &u32, _position: Vec2) {}

    fn on_index_assigned(&mut self, _index: usize, _slot: &u32) {}
}

fn main() {
    // Example: preserve visual scroll position across "prepend" (chat/timeline load older messages).
    //
    // The adapter flow is typically:
    // 1) capture an anchor (leading index + offset inside its line) before data changes
    // 2) apply data changes (object count)
    // 3) re-apply the anchor so the same item stays in the same place
    let options = RecyclerOptions::new(100, Vec2::new(320.0, 48.0));
    let mut c = Controller::new(options, Labels::default()).expect("valid options");
    c.on_viewport(Rect::from_size(Vec2::new(320.0, 480.0)));
    c.tick();

    c.on_scroll(1000.0);
    c.tick();
    println!(
        "before prepend: off={} leading={:?}",
        c.recycler().content_offset(),
        c.leading_index()
    );

    // Load 10 older messages above: old items shift by +10 indexes.
    let ok = c.set_object_count_anchored(110, |i| Some(i + 10));
    let report = c.tick();

    println!(
        "after prepend: ok={ok} off={} leading={:?} report={report:?}",
        c.recycler().content_offset(),
        c.leading_index()
    );
}
