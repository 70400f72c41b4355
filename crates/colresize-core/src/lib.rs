#![forbid(unsafe_code)]

//! Core: column resize state machine, drag bounds, and header traversal.
//!
//! # Role
//! `colresize-core` holds everything about a column drag that does not depend
//! on a host table: the header tree model, the bounds calculator, the pure
//! reducer, and normalized pointer input.
//!
//! # Primary pieces
//! - **HeaderNode**: one column or group with aggregate width bounds.
//! - **MaxChangePx**: how far a boundary may move, in pixels.
//! - **reduce**: `(state, action) -> state` over [`ColumnResizingState`].
//! - **PointerInput**: mouse and single-touch events as one coordinate stream.
//!
//! # How it fits
//! `colresize-table` owns the state, turns host pointer events into
//! [`ResizeAction`]s, and reads the resulting widths back onto headers each
//! render pass.

pub mod constraint;
pub mod header;
pub mod input;
pub mod machine;

pub use constraint::{MaxChangePx, width_unit_per_px};
pub use header::{HeaderId, HeaderNode, collect_leaves, header_id_widths};
pub use input::{InputModality, PointerInput, PointerPhase, TouchPoint};
pub use machine::{ColumnResizingState, DragSnapshot, ResizeAction, StartResize, reduce};
