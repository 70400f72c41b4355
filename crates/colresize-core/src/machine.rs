#![forbid(unsafe_code)]

//! Column resize state machine.
//!
//! The machine is a pure reducer: [`reduce`] takes the current
//! [`ColumnResizingState`] (if any) and one [`ResizeAction`] and returns the
//! next state. The owner holds the single mutable copy and applies actions in
//! order.
//!
//! ```text
//! Idle --Start--> Dragging --Move*--> Dragging --End--> Idle
//!   ^                                                     |
//!   +-------------------- Reset (any state) --------------+
//! ```
//!
//! `End` keeps the committed widths and the drag snapshot; only the pointer
//! origin and the active column are cleared.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constraint::MaxChangePx;
use crate::header::{HeaderId, HeaderNode};

/// Payload of a drag start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartResize {
    /// Header whose right edge is being dragged.
    pub column_id: HeaderId,
    /// Width of that header when the drag starts.
    pub column_width: f64,
    pub header_id_widths: Vec<(HeaderId, f64)>,
    pub left_header: HeaderNode,
    pub right_header: HeaderNode,
    pub width_unit_per_px: f64,
    /// Top-level headers of the instance at drag start.
    pub headers: Vec<HeaderNode>,
    pub client_x: f64,
}

/// Actions understood by [`reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResizeAction {
    /// Seed the state if no other owner did.
    Init,
    /// Drop all recorded widths and any drag in progress.
    Reset,
    Start(Box<StartResize>),
    Move { client_x: f64 },
    End,
}

impl ResizeAction {
    /// Short stable name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Reset => "reset",
            Self::Start(_) => "start",
            Self::Move { .. } => "move",
            Self::End => "end",
        }
    }
}

/// Values captured when a drag starts; constant for the drag's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSnapshot {
    pub left_header: HeaderNode,
    pub right_header: HeaderNode,
    pub left_header_initial_width: f64,
    pub right_header_initial_width: f64,
    pub width_unit_per_px: f64,
    pub max_change_px: MaxChangePx,
    /// Leaf ids and widths under the dragged header; kept for consumers.
    pub header_id_widths: Vec<(HeaderId, f64)>,
    pub headers: Vec<HeaderNode>,
}

/// Resize subtree of the shared table state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnResizingState {
    /// Widths of headers resized since the last reset.
    pub column_widths: FxHashMap<HeaderId, f64>,
    pub is_resizing_column: Option<HeaderId>,
    pub start_x: Option<f64>,
    /// Snapshot of the current drag, or of the last finished one.
    pub drag: Option<DragSnapshot>,
}

impl ColumnResizingState {
    /// True between a start and its matching end.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_resizing_column.is_some()
    }

    /// Recorded width for `id`, if it was resized since the last reset.
    #[must_use]
    pub fn width_of(&self, id: &str) -> Option<f64> {
        self.column_widths.get(id).copied()
    }
}

/// Apply one action to the resize state.
#[must_use]
pub fn reduce(state: Option<&ColumnResizingState>, action: &ResizeAction) -> ColumnResizingState {
    match action {
        ResizeAction::Init => state.cloned().unwrap_or_default(),
        ResizeAction::Reset => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                was_resizing = state.is_some_and(ColumnResizingState::is_active),
                "column resize state reset"
            );
            ColumnResizingState::default()
        }
        ResizeAction::Start(start) => start_drag(state.cloned().unwrap_or_default(), start),
        ResizeAction::Move { client_x } => {
            move_drag(state.cloned().unwrap_or_default(), *client_x)
        }
        ResizeAction::End => {
            let mut next = state.cloned().unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                column = ?next.is_resizing_column,
                "column resize finished"
            );
            next.start_x = None;
            next.is_resizing_column = None;
            next
        }
    }
}

fn start_drag(mut state: ColumnResizingState, start: &StartResize) -> ColumnResizingState {
    let max_change_px = MaxChangePx::between(
        &start.left_header,
        &start.right_header,
        start.width_unit_per_px,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        column = %start.column_id,
        left = %start.left_header.id,
        right = %start.right_header.id,
        min_delta = max_change_px.min,
        max_delta = max_change_px.max,
        width_unit_per_px = start.width_unit_per_px,
        "column resize started"
    );

    state.start_x = Some(start.client_x);
    state.is_resizing_column = Some(start.column_id.clone());
    state.drag = Some(DragSnapshot {
        left_header: start.left_header.clone(),
        right_header: start.right_header.clone(),
        left_header_initial_width: start.column_width,
        right_header_initial_width: start.right_header.total_width,
        width_unit_per_px: start.width_unit_per_px,
        max_change_px,
        header_id_widths: start.header_id_widths.clone(),
        headers: start.headers.clone(),
    });
    state
}

fn move_drag(mut state: ColumnResizingState, client_x: f64) -> ColumnResizingState {
    let (Some(start_x), Some(drag)) = (state.start_x, state.drag.as_ref()) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(client_x, "move without active column resize ignored");
        return state;
    };

    let raw_delta = client_x - start_x;
    let delta_x = drag.max_change_px.clamp(raw_delta);
    let delta_width_unit = delta_x * drag.width_unit_per_px;
    // Share of the left header's initial width, scaled back; keeps the
    // floating-point path identical across repeated moves. A zero-width
    // left header has no share to scale.
    let width_change = if drag.left_header_initial_width == 0.0 {
        delta_width_unit
    } else {
        let share = delta_width_unit / drag.left_header_initial_width;
        drag.left_header_initial_width * share
    };

    let left_width = (drag.left_header_initial_width + width_change).max(0.0);
    let right_width = (drag.right_header_initial_width - width_change).max(0.0);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        raw_delta,
        delta_x,
        left_width,
        right_width,
        "column resize moved"
    );

    let left_id = drag.left_header.id.clone();
    let right_id = drag.right_header.id.clone();
    state.column_widths.insert(left_id, left_width);
    state.column_widths.insert(right_id, right_width);
    state
}
