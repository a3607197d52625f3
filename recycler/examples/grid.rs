// Example: a 4-column photo grid with spacing and padding.
use recycler::{Padding, Rect, Recycler, RecyclerOptions, SlotHost, Vec2};

struct Thumbs;

impl SlotHost for Thumbs {
    type Slot = usize;

    fn create_slot(&mut self) -> Option<usize> {
        Some(0)
    }

    fn dispose_slot(&mut self, _slot: usize) {}

    fn set_local_position(&mut self, _slot: &usize, _position: Vec2) {}

    fn on_index_assigned(&mut self, _index: usize, _slot: &usize) {}
}

fn main() {
    let options = RecyclerOptions::new(10_000, Vec2::new(90.0, 90.0))
        .with_lines(4)
        .with_spacing(Vec2::new(6.0, 6.0))
        .with_padding(Padding::uniform(8.0));
    let viewport = Rect::from_size(Vec2::new(400.0, 600.0));
    let mut r = Recycler::with_viewport(options, viewport).expect("valid options");
    let mut host = Thumbs;

    r.update(&mut host);
    println!(
        "window={} of {} content={:?}",
        r.window_len(),
        r.object_count(),
        r.content_size()
    );

    for offset in [50.0, 250.0, 1_000.0, 40_000.0] {
        r.set_content_offset_clamped(offset);
        let report = r.update(&mut host);
        let first = r.entries().next();
        println!(
            "offset={offset}: {report:?} range={:?} head={:?}",
            r.window_range(),
            first.map(|item| (item.index, item.position))
        );
    }
}
