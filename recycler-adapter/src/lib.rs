//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only owns the window math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that owns a recycler together with its slot host and drives it per frame
//! - Leading-item anchoring (e.g. prepend in chat/timelines without visual jumps)
//!
//! This crate is intentionally framework-agnostic (no game engine or GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;


pub use anchor::{LeadingAnchor, apply_anchor, capture_leading_anchor};
pub use controller::Controller;
