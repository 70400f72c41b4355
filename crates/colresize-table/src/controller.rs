#![forbid(unsafe_code)]

//! Drag controller for column resize boundaries.
//!
//! The controller turns host pointer events into resize actions while
//! enforcing:
//! - one drag at a time,
//! - single-finger touch only (multi-touch presses never start a drag),
//! - global listeners attached on press and detached exactly once on release.
//!
//! Listener ownership is modeled as a [`CaptureLease`]: acquiring it attaches
//! the listener set for the drag's modality to the host's
//! [`InputCaptureScope`], and the only way to give it back is
//! [`CaptureLease::release`], which consumes it. A controller dropped
//! mid-drag releases its lease.

use bitflags::bitflags;
use colresize_core::{
    HeaderId, HeaderNode, InputModality, PointerInput, PointerPhase, ResizeAction, StartResize,
    header_id_widths,
};

bitflags! {
    /// Global listeners a drag keeps attached.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CaptureListeners: u8 {
        const MOUSE_MOVE = 1 << 0;
        const MOUSE_UP = 1 << 1;
        const TOUCH_MOVE = 1 << 2;
        const TOUCH_END = 1 << 3;
    }
}

impl CaptureListeners {
    /// Move and release listeners for one modality.
    #[must_use]
    pub const fn for_modality(modality: InputModality) -> Self {
        match modality {
            InputModality::Mouse => Self::MOUSE_MOVE.union(Self::MOUSE_UP),
            InputModality::Touch => Self::TOUCH_MOVE.union(Self::TOUCH_END),
        }
    }

    /// Listener that receives `input`, if it is a move or release.
    #[must_use]
    pub fn for_input(input: &PointerInput) -> Self {
        match input {
            PointerInput::MouseMove { .. } => Self::MOUSE_MOVE,
            PointerInput::MouseUp { .. } => Self::MOUSE_UP,
            PointerInput::TouchMove { .. } => Self::TOUCH_MOVE,
            PointerInput::TouchEnd { .. } => Self::TOUCH_END,
            PointerInput::MouseDown { .. } | PointerInput::TouchStart { .. } => Self::empty(),
        }
    }
}

/// Host-side global input capture (e.g. document-level listeners).
pub trait InputCaptureScope {
    fn attach(&mut self, listeners: CaptureListeners);
    fn detach(&mut self, listeners: CaptureListeners);
}

/// In-memory capture scope; hosts consult it to decide which global events
/// to forward to [`DragController::pointer_event`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSet {
    attached: CaptureListeners,
}

impl CaptureSet {
    #[must_use]
    pub const fn attached(&self) -> CaptureListeners {
        self.attached
    }

    /// True when a listener for `input` is attached.
    #[must_use]
    pub fn wants(&self, input: &PointerInput) -> bool {
        let listener = CaptureListeners::for_input(input);
        !listener.is_empty() && self.attached.contains(listener)
    }
}

impl InputCaptureScope for CaptureSet {
    fn attach(&mut self, listeners: CaptureListeners) {
        self.attached.insert(listeners);
    }

    fn detach(&mut self, listeners: CaptureListeners) {
        self.attached.remove(listeners);
    }
}

/// Listeners held by the active drag.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a lease must be released or its listeners leak"]
pub struct CaptureLease {
    modality: InputModality,
    listeners: CaptureListeners,
}

impl CaptureLease {
    fn acquire(scope: &mut impl InputCaptureScope, modality: InputModality) -> Self {
        let listeners = CaptureListeners::for_modality(modality);
        scope.attach(listeners);
        Self {
            modality,
            listeners,
        }
    }

    /// Detach the listeners this lease attached.
    pub fn release(self, scope: &mut impl InputCaptureScope) {
        scope.detach(self.listeners);
    }

    #[must_use]
    pub const fn modality(&self) -> InputModality {
        self.modality
    }

    #[must_use]
    pub const fn listeners(&self) -> CaptureListeners {
        self.listeners
    }
}

/// What the controller needs from the table it drives.
pub trait ResizeHost {
    /// Top-level headers, in display order.
    fn headers(&self) -> &[HeaderNode];
    /// Width units per rendered pixel; `None` until the container is measured.
    fn width_unit_per_px(&self) -> Option<f64>;
    fn dispatch_resize(&mut self, action: ResizeAction);
}

/// Why an input event produced no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    /// A press arrived with more than one touch contact.
    MultiTouch,
    NotAPress,
    DragAlreadyActive,
    NoActiveDrag,
    /// Event from a different input modality than the active drag.
    ModalityMismatch,
    /// Touch event without any contact point.
    MissingCoordinate,
    UnknownHeader,
    /// The header is the last top-level header.
    NoRightNeighbor,
    ContainerUnmeasured,
}

/// Outcome of one controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Started,
    Moved,
    Ended,
    Ignored(DragIgnoredReason),
}

/// Requests back to the host for the event just handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventDisposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

/// Result of one controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDispatch {
    pub outcome: DragOutcome,
    pub disposition: EventDisposition,
}

impl DragDispatch {
    const fn outcome(outcome: DragOutcome) -> Self {
        Self {
            outcome,
            disposition: EventDisposition {
                prevent_default: false,
                stop_propagation: false,
            },
        }
    }

    fn ignored(reason: DragIgnoredReason) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(?reason, "column resize input ignored");
        Self::outcome(DragOutcome::Ignored(reason))
    }
}

/// Drives column drags against a [`ResizeHost`].
#[derive(Debug)]
pub struct DragController<S: InputCaptureScope> {
    scope: S,
    lease: Option<CaptureLease>,
}

impl<S: InputCaptureScope> DragController<S> {
    pub fn new(scope: S) -> Self {
        Self { scope, lease: None }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.lease.is_some()
    }

    /// Modality of the active drag.
    #[must_use]
    pub fn active_modality(&self) -> Option<InputModality> {
        self.lease.as_ref().map(CaptureLease::modality)
    }

    #[must_use]
    pub fn scope(&self) -> &S {
        &self.scope
    }

    /// Handle a press on the resizer of `header_id`.
    pub fn press(
        &mut self,
        host: &mut impl ResizeHost,
        header_id: &HeaderId,
        input: &PointerInput,
    ) -> DragDispatch {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("colresize.press", header = %header_id).entered();

        if input.phase() != PointerPhase::Press {
            return DragDispatch::ignored(DragIgnoredReason::NotAPress);
        }
        if input.touch_count() > 1 {
            return DragDispatch::ignored(DragIgnoredReason::MultiTouch);
        }
        if self.lease.is_some() {
            return DragDispatch::ignored(DragIgnoredReason::DragAlreadyActive);
        }
        let Some(client_x) = input.client_x() else {
            return DragDispatch::ignored(DragIgnoredReason::MissingCoordinate);
        };

        let headers = host.headers();
        let Some(index) = headers.iter().position(|h| h.id == *header_id) else {
            return DragDispatch::ignored(DragIgnoredReason::UnknownHeader);
        };
        let Some(right_header) = headers.get(index + 1) else {
            return DragDispatch::ignored(DragIgnoredReason::NoRightNeighbor);
        };
        let Some(width_unit_per_px) = host.width_unit_per_px() else {
            return DragDispatch::ignored(DragIgnoredReason::ContainerUnmeasured);
        };

        let left_header = &headers[index];
        let start = StartResize {
            column_id: left_header.id.clone(),
            column_width: left_header.total_width,
            header_id_widths: header_id_widths(left_header),
            left_header: left_header.clone(),
            right_header: right_header.clone(),
            width_unit_per_px,
            headers: headers.to_vec(),
            client_x,
        };

        self.lease = Some(CaptureLease::acquire(&mut self.scope, input.modality()));
        host.dispatch_resize(ResizeAction::Start(Box::new(start)));
        DragDispatch::outcome(DragOutcome::Started)
    }

    /// Handle a globally captured move or release.
    pub fn pointer_event(
        &mut self,
        host: &mut impl ResizeHost,
        input: &PointerInput,
    ) -> DragDispatch {
        let Some(lease) = self.lease.as_ref() else {
            return DragDispatch::ignored(DragIgnoredReason::NoActiveDrag);
        };
        if lease.modality() != input.modality() {
            return DragDispatch::ignored(DragIgnoredReason::ModalityMismatch);
        }

        match input.phase() {
            PointerPhase::Press => DragDispatch::ignored(DragIgnoredReason::DragAlreadyActive),
            PointerPhase::Move => {
                let Some(client_x) = input.client_x() else {
                    return DragDispatch::ignored(DragIgnoredReason::MissingCoordinate);
                };
                host.dispatch_resize(ResizeAction::Move { client_x });
                let suppress = input.is_suppressible();
                DragDispatch {
                    outcome: DragOutcome::Moved,
                    disposition: EventDisposition {
                        prevent_default: suppress,
                        stop_propagation: suppress,
                    },
                }
            }
            PointerPhase::Release => {
                self.release();
                host.dispatch_resize(ResizeAction::End);
                DragDispatch::outcome(DragOutcome::Ended)
            }
        }
    }

    fn release(&mut self) {
        if let Some(lease) = self.lease.take() {
            lease.release(&mut self.scope);
        }
    }
}

impl<S: InputCaptureScope> Drop for DragController<S> {
    fn drop(&mut self) {
        self.release();
    }
}
