#![forbid(unsafe_code)]

//! Table side of column resizing.
//!
//! # Role
//! `colresize-table` plugs the resize machine from `colresize-core` into a
//! table instance: it registers the plugin's hooks, owns the shared state,
//! annotates headers with `can_resize`/`width`/`is_resizing` each pass, and
//! drives drags from host pointer events.
//!
//! # Host loop
//! ```ignore
//! let mut table = TableInstance::new(TableOptions::default(), vec![RESIZE_COLUMNS]);
//! table.render(&columns)?;
//! table.container_ref().set_width(measured_px);
//!
//! let mut drag = DragController::new(CaptureSet::default());
//! // press on a resizer element bound via `table.resizer_props(id, extra)`
//! drag.press(&mut table, &binding.header, &input);
//! // global events while `drag.scope().wants(&input)`
//! drag.pointer_event(&mut table, &input);
//! ```

pub mod column;
pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod instance;
pub mod plugin;
pub mod props;
pub mod state;

pub use column::{ColumnDef, compute_dimensions};
pub use config::{ConfigError, DefaultColumn, TableDefinition, TableOptions};
pub use controller::{
    CaptureLease, CaptureListeners, CaptureSet, DragController, DragDispatch, DragIgnoredReason,
    DragOutcome, EventDisposition, InputCaptureScope, ResizeHost,
};
pub use error::PluginError;
pub use hooks::{DimensionHook, Hooks, InstanceHook, StateReducer};
pub use instance::TableInstance;
pub use plugin::{ABSOLUTE_LAYOUT, Plugin, RESIZE_COLUMNS, ensure_plugin_order};
pub use props::{
    ContainerRef, Cursor, Position, PressBinding, PressEvent, PropContext, PropContributor, Props,
    Role, Style, make_prop_getter,
};
pub use state::{TableAction, TableState};
