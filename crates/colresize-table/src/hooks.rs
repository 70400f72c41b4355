#![forbid(unsafe_code)]

//! Hook channels a plugin registers into.
//!
//! The instance rebuilds [`Hooks`] from its plugin list at the start of
//! every render pass and invokes each channel in registration order.

use std::fmt;

use crate::error::PluginError;
use crate::instance::TableInstance;
use crate::props::PropContributor;
use crate::state::{TableAction, TableState};

/// Returns the next state, or `None` when the action is not handled.
pub type StateReducer = fn(&TableState, &TableAction) -> Option<TableState>;

/// Runs before header dimensions are computed; must not fail.
pub type DimensionHook = fn(&mut TableInstance);

/// Per-pass instance setup.
pub type InstanceHook = fn(&mut TableInstance) -> Result<(), PluginError>;

/// Registry of hook channels for one render pass.
#[derive(Clone, Default)]
pub struct Hooks {
    pub get_table_props: Vec<PropContributor>,
    pub get_header_props: Vec<PropContributor>,
    pub get_resizer_props: Vec<PropContributor>,
    pub state_reducers: Vec<StateReducer>,
    pub use_instance_before_dimensions: Vec<DimensionHook>,
    pub use_instance: Vec<InstanceHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("get_table_props", &self.get_table_props.len())
            .field("get_header_props", &self.get_header_props.len())
            .field("get_resizer_props", &self.get_resizer_props.len())
            .field("state_reducers", &self.state_reducers.len())
            .field(
                "use_instance_before_dimensions",
                &self.use_instance_before_dimensions.len(),
            )
            .field("use_instance", &self.use_instance.len())
            .finish()
    }
}
