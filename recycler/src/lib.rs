//! A headless slot-recycling window engine for huge lists and grids.
//!
//! For adapter-level utilities (a per-frame controller, leading-item anchoring), see the
//! `recycler-adapter` crate.
//!
//! This crate keeps a small, constant number of visual slots alive and slides them over a
//! potentially unbounded sequence of logical indexes as the viewport scrolls: a ring-buffer
//! window of `(index, slot)` entries, a threshold-based shift loop that recycles boundary slots
//! across one axis or a multi-line grid, and the index/offset math for jumping to an index or
//! asking which index sits at the viewport's leading edge.
//!
//! It is UI-agnostic. A host layer is expected to provide, through [`SlotHost`]:
//! - slot creation and disposal
//! - a per-slot position setter
//! - optionally, a content → viewport coordinate transform
//!
//! and to push the viewport rectangle and scroll offset into the [`Recycler`] each frame.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod host;
mod layout;
mod navigation;
mod options;
mod pool;
mod recycler;
mod types;
mod window;


pub use error::{Error, Result};
pub use host::SlotHost;
pub use layout::GridLayout;
pub use options::RecyclerOptions;
pub use pool::{SlotId, SlotPool};
pub use recycler::Recycler;
pub use types::{
    Align, Axis, ChildAlignment, IndexRange, Padding, Rect, Topology, UpdateReport, Vec2,
    WindowItem,
};
pub use window::{Window, WindowEntry};
