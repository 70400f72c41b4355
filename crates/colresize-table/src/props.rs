#![forbid(unsafe_code)]

//! Descriptive props handed back to the host.
//!
//! Props carry no rendering logic: they describe bindings and presentation
//! hints that the host applies to its own elements. A prop getter folds every
//! registered [`PropContributor`] left to right, then the caller's extra
//! props; see [`Props::merge`] for the merge rules.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use colresize_core::{HeaderId, HeaderNode, PointerInput};

use crate::instance::TableInstance;

/// CSS-like positioning hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

/// Pointer cursor hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    ColResize,
    Default,
}

/// Semantic role hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Separator,
}

/// Presentation hints; `None` means "not set by this contributor".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub position: Option<Position>,
    pub cursor: Option<Cursor>,
}

impl Style {
    fn merge(self, next: Style) -> Style {
        Style {
            position: next.position.or(self.position),
            cursor: next.cursor.or(self.cursor),
        }
    }
}

/// Press event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressEvent {
    MouseDown,
    TouchStart,
}

/// Routes a press on the host element to the drag controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressBinding {
    pub event: PressEvent,
    pub header: HeaderId,
}

impl PressBinding {
    /// True when `input` is the press this binding listens for.
    #[must_use]
    pub fn accepts(&self, input: &PointerInput) -> bool {
        matches!(
            (self.event, input),
            (PressEvent::MouseDown, PointerInput::MouseDown { .. })
                | (PressEvent::TouchStart, PointerInput::TouchStart { .. })
        )
    }
}

/// Slot the host fills with the rendered table container width in pixels.
#[derive(Debug, Clone, Default)]
pub struct ContainerRef(Rc<Cell<Option<f64>>>);

impl ContainerRef {
    pub fn set_width(&self, px: f64) {
        self.0.set(Some(px));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.0.get()
    }
}

impl PartialEq for ContainerRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Merged props for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    pub style: Style,
    pub draggable: Option<bool>,
    pub role: Option<Role>,
    pub bindings: Vec<PressBinding>,
    pub container_ref: Option<ContainerRef>,
    /// Free-form host attributes.
    pub attributes: BTreeMap<String, String>,
}

impl Props {
    /// Merge `next` over `self`.
    ///
    /// Style fields and attributes merge key-wise with `next` winning; scalar
    /// fields are replaced when `next` sets them; bindings accumulate.
    #[must_use]
    pub fn merge(mut self, next: Props) -> Props {
        self.style = self.style.merge(next.style);
        self.draggable = next.draggable.or(self.draggable);
        self.role = next.role.or(self.role);
        self.bindings.extend(next.bindings);
        if next.container_ref.is_some() {
            self.container_ref = next.container_ref;
        }
        self.attributes.extend(next.attributes);
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Binding for `input`, if any.
    #[must_use]
    pub fn binding_for(&self, input: &PointerInput) -> Option<&PressBinding> {
        self.bindings.iter().find(|binding| binding.accepts(input))
    }
}

/// What a prop contributor sees while props are resolved.
#[derive(Clone, Copy)]
pub struct PropContext<'a> {
    pub instance: &'a TableInstance,
    pub header: Option<&'a HeaderNode>,
}

type DynamicProps = Rc<dyn Fn(Props, &PropContext<'_>) -> Props>;

/// One entry in a prop-getter hook channel.
#[derive(Clone)]
pub enum PropContributor {
    Static(Props),
    Dynamic(DynamicProps),
}

impl PropContributor {
    pub fn dynamic(f: impl Fn(Props, &PropContext<'_>) -> Props + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    fn apply(&self, acc: Props, ctx: &PropContext<'_>) -> Props {
        match self {
            Self::Static(props) => acc.merge(props.clone()),
            Self::Dynamic(f) => f(acc, ctx),
        }
    }
}

impl fmt::Debug for PropContributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(props) => f.debug_tuple("Static").field(props).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Fold `contributors` in order, then `extra`.
#[must_use]
pub fn make_prop_getter(
    contributors: &[PropContributor],
    ctx: &PropContext<'_>,
    extra: Props,
) -> Props {
    contributors
        .iter()
        .fold(Props::default(), |acc, contributor| contributor.apply(acc, ctx))
        .merge(extra)
}

/// Resizer affordance for one header.
pub(crate) fn resizer_props(header: &HeaderNode) -> Props {
    Props {
        style: Style {
            cursor: Some(Cursor::ColResize),
            ..Style::default()
        },
        draggable: Some(false),
        role: Some(Role::Separator),
        bindings: vec![
            PressBinding {
                event: PressEvent::MouseDown,
                header: header.id.clone(),
            },
            PressBinding {
                event: PressEvent::TouchStart,
                header: header.id.clone(),
            },
        ],
        ..Props::default()
    }
}
