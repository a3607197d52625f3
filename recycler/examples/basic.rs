// Example: a million-row list backed by a handful of slots.
use recycler::{Rect, Recycler, RecyclerOptions, SlotHost, Vec2};

#[derive(Default)]
struct Rows {
    created: usize,
}

impl SlotHost for Rows {
    type Slot = String;

    fn create_slot(&mut self) -> Option<String> {
        self.created += 1;
        Some(format!("row-widget-{}", self.created))
    }

    fn dispose_slot(&mut self, slot: String) {
        println!("dispose {slot}");
    }

    fn set_local_position(&mut self, _slot: &String, _position: Vec2) {}

    fn on_index_assigned(&mut self, index: usize, slot: &String) {
        println!("{slot} now shows row {index}");
    }
}

fn main() {
    let options = RecyclerOptions::new(1_000_000, Vec2::new(400.0, 24.0));
    let viewport = Rect::from_size(Vec2::new(400.0, 240.0));
    let mut r = Recycler::with_viewport(options, viewport).expect("valid options");
    let mut rows = Rows::default();

    r.update(&mut rows);
    println!("slots={} content={:?}", rows.created, r.content_size());

    r.set_content_offset(60.0);
    let report = r.update(&mut rows);
    println!("scrolled: {report:?} window={:?}", r.window_range());

    let off = r.jump_to_index(999_999).expect("index in range");
    let report = r.update(&mut rows);
    println!("jumped to offset={off}: {report:?} window={:?}", r.window_range());
    println!("leading={:?}", r.current_leading_index(&rows));
}
