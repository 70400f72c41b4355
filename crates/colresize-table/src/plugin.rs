#![forbid(unsafe_code)]

//! Plugin identity, install-order checks, and the column resize plugin.
//!
//! [`RESIZE_COLUMNS`] registers into five channels:
//! - `get_resizer_props`: the default resizer affordance (replaces the channel),
//! - `get_header_props`: a static `position: relative` hint,
//! - `state_reducers`: the column resize reducer,
//! - `use_instance_before_dimensions`: per-header `can_resize`/`width`/`is_resizing`,
//! - `use_instance`: order check, auto reset, and the container-width slot.

use colresize_core::{HeaderNode, ResizeAction, reduce};

use crate::error::PluginError;
use crate::hooks::Hooks;
use crate::instance::TableInstance;
use crate::props::{Position, PropContext, PropContributor, Props, Style, resizer_props};
use crate::state::{TableAction, TableState};

/// Name under which an absolute-layout plugin registers.
pub const ABSOLUTE_LAYOUT: &str = "absolute_layout";

/// A named bundle of hook registrations.
#[derive(Debug, Clone, Copy)]
pub struct Plugin {
    pub name: &'static str,
    pub register: fn(&mut Hooks),
}

/// Column resizing.
pub const RESIZE_COLUMNS: Plugin = Plugin {
    name: "resize_columns",
    register: register_resize_columns,
};

/// Fail unless `plugin` is installed and every installed name in `befores`
/// precedes it.
pub fn ensure_plugin_order(
    plugins: &[Plugin],
    befores: &[&str],
    plugin: &str,
) -> Result<(), PluginError> {
    let Some(index) = plugins.iter().position(|p| p.name == plugin) else {
        return Err(PluginError::PluginNotFound {
            plugin: plugin.to_owned(),
        });
    };
    for before in befores {
        if let Some(before_index) = plugins.iter().position(|p| p.name == *before)
            && before_index > index
        {
            return Err(PluginError::PluginOrder {
                plugin: plugin.to_owned(),
                must_follow: (*before).to_owned(),
            });
        }
    }
    Ok(())
}

fn register_resize_columns(hooks: &mut Hooks) {
    hooks.get_resizer_props = vec![PropContributor::dynamic(default_resizer_props)];
    hooks.get_header_props.push(PropContributor::Static(Props {
        style: Style {
            position: Some(Position::Relative),
            ..Style::default()
        },
        ..Props::default()
    }));
    hooks.state_reducers.push(resize_reducer);
    hooks.use_instance.push(use_instance);
    hooks
        .use_instance_before_dimensions
        .push(use_instance_before_dimensions);
}

fn default_resizer_props(acc: Props, ctx: &PropContext<'_>) -> Props {
    match ctx.header {
        Some(header) => acc.merge(resizer_props(header)),
        None => acc,
    }
}

fn resize_reducer(state: &TableState, action: &TableAction) -> Option<TableState> {
    let next = match action {
        TableAction::Init => reduce(state.column_resizing.as_ref(), &ResizeAction::Init),
        TableAction::Resize { action } => reduce(state.column_resizing.as_ref(), action),
        TableAction::Custom { .. } => return None,
    };
    let mut state = state.clone();
    state.column_resizing = Some(next);
    Some(state)
}

/// `can_resize`: the first explicit opt-out wins, else the column default.
pub(crate) fn resolve_can_resize(
    header_disabled: Option<bool>,
    table_disabled: bool,
    default_can_resize: bool,
) -> bool {
    (header_disabled == Some(true))
        .then_some(false)
        .or(table_disabled.then_some(false))
        .unwrap_or(default_can_resize)
}

/// Recorded width, then configured width, then the current width.
///
/// A recorded zero is a real width; a configured zero counts as unset.
pub(crate) fn resolve_width(recorded: Option<f64>, header: &HeaderNode) -> f64 {
    recorded
        .filter(|w| !w.is_nan())
        .or(header.original_width.filter(|w| *w != 0.0 && !w.is_nan()))
        .unwrap_or(header.width)
}

fn use_instance_before_dimensions(instance: &mut TableInstance) {
    let options = *instance.options();
    let resizing = instance.state().column_resizing();
    for header in instance.headers_mut() {
        header.visit_mut(&mut |node: &mut HeaderNode| {
            node.can_resize = resolve_can_resize(
                node.disable_resizing,
                options.disable_resizing,
                options.default_column.can_resize,
            );
            node.width = resolve_width(resizing.width_of(node.id.as_str()), node);
            node.is_resizing = resizing.is_resizing_column.as_ref() == Some(&node.id);
        });
    }
}

fn use_instance(instance: &mut TableInstance) -> Result<(), PluginError> {
    let order = ensure_plugin_order(instance.plugins(), &[ABSOLUTE_LAYOUT], RESIZE_COLUMNS.name);
    if let Err(error) = order {
        #[cfg(feature = "tracing")]
        tracing::error!(%error, "column resize plugin misordered");
        return Err(error);
    }

    if instance.columns_changed() && instance.options().auto_reset_resize {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = "columns_changed", "auto reset of column widths");
        instance.dispatch(ResizeAction::Reset.into());
    }

    let container = instance.container_ref().clone();
    instance.hooks_mut().get_table_props.push(PropContributor::Static(Props {
        container_ref: Some(container),
        ..Props::default()
    }));
    Ok(())
}
