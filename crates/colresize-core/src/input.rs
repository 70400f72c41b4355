#![forbid(unsafe_code)]

//! Normalized pointer input for column drags.
//!
//! Mouse and single-touch input collapse into one stream of horizontal
//! coordinates. Only the x axis matters for a column boundary.

use serde::{Deserialize, Serialize};

/// Input device family of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputModality {
    Mouse,
    Touch,
}

/// Lifecycle phase of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// One active touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub identifier: u32,
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(identifier: u32, client_x: f64, client_y: f64) -> Self {
        Self {
            identifier,
            client_x,
            client_y,
        }
    }
}

/// Pointer event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerInput {
    MouseDown {
        client_x: f64,
    },
    MouseMove {
        client_x: f64,
    },
    MouseUp {
        client_x: f64,
    },
    TouchStart {
        touches: Vec<TouchPoint>,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
        /// Whether the host allows default handling to be suppressed.
        #[serde(default)]
        cancelable: bool,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
}

impl PointerInput {
    #[must_use]
    pub const fn modality(&self) -> InputModality {
        match self {
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp { .. } => {
                InputModality::Mouse
            }
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd { .. } => {
                InputModality::Touch
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> PointerPhase {
        match self {
            Self::MouseDown { .. } | Self::TouchStart { .. } => PointerPhase::Press,
            Self::MouseMove { .. } | Self::TouchMove { .. } => PointerPhase::Move,
            Self::MouseUp { .. } | Self::TouchEnd { .. } => PointerPhase::Release,
        }
    }

    /// Number of touch contacts carried by the event; zero for mouse input.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        match self {
            Self::TouchStart { touches }
            | Self::TouchMove { touches, .. }
            | Self::TouchEnd { touches } => touches.len(),
            _ => 0,
        }
    }

    /// Horizontal coordinate fed to the resize machine.
    ///
    /// Touch presses are rounded to whole pixels (halves up); touch moves use the raw
    /// first contact. Returns `None` for touch events without contacts.
    #[must_use]
    pub fn client_x(&self) -> Option<f64> {
        match self {
            Self::MouseDown { client_x }
            | Self::MouseMove { client_x }
            | Self::MouseUp { client_x } => Some(*client_x),
            Self::TouchStart { touches } => {
                touches.first().map(|t| round_half_up(t.client_x))
            }
            Self::TouchMove { touches, .. } | Self::TouchEnd { touches } => {
                touches.first().map(|t| t.client_x)
            }
        }
    }

    /// True for touch moves whose default handling may be suppressed.
    #[must_use]
    pub const fn is_suppressible(&self) -> bool {
        matches!(
            self,
            Self::TouchMove {
                cancelable: true,
                ..
            }
        )
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
