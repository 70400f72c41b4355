#![forbid(unsafe_code)]

//! Table instance: the single owner of shared state for one table.
//!
//! A render pass runs, in order:
//! 1. rebuild [`Hooks`] from the installed plugins,
//! 2. build headers from the column definitions,
//! 3. `use_instance_before_dimensions` hooks,
//! 4. the dimension pass (leaf clamp, group sums),
//! 5. `use_instance` hooks.
//!
//! [`TableInstance::dispatch`] folds an action through every registered
//! reducer and then repeats steps 2-4, so headers always reflect the latest
//! state without a full render.

use colresize_core::{HeaderId, HeaderNode, ResizeAction, collect_leaves, width_unit_per_px};

use crate::column::{ColumnDef, compute_dimensions};
use crate::config::TableOptions;
use crate::controller::ResizeHost;
use crate::error::PluginError;
use crate::hooks::Hooks;
use crate::plugin::Plugin;
use crate::props::{ContainerRef, PropContext, Props, make_prop_getter};
use crate::state::{TableAction, TableState};

/// One table's plugins, state, and current headers.
#[derive(Debug)]
pub struct TableInstance {
    plugins: Vec<Plugin>,
    options: TableOptions,
    hooks: Hooks,
    state: TableState,
    columns: Vec<ColumnDef>,
    headers: Vec<HeaderNode>,
    total_columns_width: f64,
    container_ref: ContainerRef,
    columns_changed: bool,
    mounted: bool,
}

impl TableInstance {
    /// Create an instance and dispatch the init action.
    pub fn new(options: TableOptions, plugins: Vec<Plugin>) -> Self {
        let hooks = build_hooks(&plugins);
        let mut instance = Self {
            plugins,
            options,
            hooks,
            state: TableState::default(),
            columns: Vec::new(),
            headers: Vec::new(),
            total_columns_width: 0.0,
            container_ref: ContainerRef::default(),
            columns_changed: false,
            mounted: false,
        };
        instance.dispatch(TableAction::Init);
        instance
    }

    /// Run one render pass over `columns`.
    pub fn render(&mut self, columns: &[ColumnDef]) -> Result<(), PluginError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "colresize.render",
            columns = columns.len(),
            mounted = self.mounted
        )
        .entered();

        self.columns_changed = self.mounted && self.columns != columns;
        if self.columns != columns {
            self.columns = columns.to_vec();
        }
        self.hooks = build_hooks(&self.plugins);
        self.refresh_headers();

        for hook in self.hooks.use_instance.clone() {
            hook(self)?;
        }
        self.mounted = true;
        self.columns_changed = false;
        Ok(())
    }

    /// Fold `action` through every reducer, then refresh headers.
    pub fn dispatch(&mut self, action: TableAction) {
        let mut state = self.state.clone();
        for reducer in &self.hooks.state_reducers {
            if let Some(next) = reducer(&state, &action) {
                state = next;
            }
        }
        self.state = state;
        self.refresh_headers();
    }

    /// Drop every recorded width and any drag in progress.
    pub fn reset_resizing(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = "manual", "reset of column widths");
        self.dispatch(ResizeAction::Reset.into());
    }

    fn refresh_headers(&mut self) {
        self.headers = self
            .columns
            .iter()
            .map(|column| column.to_header(&self.options.default_column))
            .collect();
        for hook in self.hooks.use_instance_before_dimensions.clone() {
            hook(self);
        }
        for header in &mut self.headers {
            compute_dimensions(header);
        }
        self.total_columns_width = self.headers.iter().map(|h| h.total_width).sum();
    }

    #[must_use]
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// Top-level headers for the current pass.
    #[must_use]
    pub fn headers(&self) -> &[HeaderNode] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [HeaderNode] {
        &mut self.headers
    }

    /// Every header node, each group after its children.
    #[must_use]
    pub fn flat_headers(&self) -> Vec<&HeaderNode> {
        self.headers.iter().flat_map(collect_leaves).collect()
    }

    #[must_use]
    pub fn header(&self, id: &str) -> Option<&HeaderNode> {
        self.headers.iter().find_map(|header| header.find(id))
    }

    /// Sum of top-level header widths, in width units.
    #[must_use]
    pub fn total_columns_width(&self) -> f64 {
        self.total_columns_width
    }

    /// Slot the host binds to the rendered table container.
    #[must_use]
    pub fn container_ref(&self) -> &ContainerRef {
        &self.container_ref
    }

    /// True during the `use_instance` hooks of a pass whose column
    /// definitions differ from the previous pass.
    #[must_use]
    pub fn columns_changed(&self) -> bool {
        self.columns_changed
    }

    /// Props for the table container element.
    #[must_use]
    pub fn table_props(&self, extra: Props) -> Props {
        let ctx = PropContext {
            instance: self,
            header: None,
        };
        make_prop_getter(&self.hooks.get_table_props, &ctx, extra)
    }

    /// Props for a header cell.
    #[must_use]
    pub fn header_props(&self, id: &str, extra: Props) -> Option<Props> {
        let header = self.header(id)?;
        let ctx = PropContext {
            instance: self,
            header: Some(header),
        };
        Some(make_prop_getter(&self.hooks.get_header_props, &ctx, extra))
    }

    /// Resizer affordance for a header; `None` when it cannot be resized.
    #[must_use]
    pub fn resizer_props(&self, id: &str, extra: Props) -> Option<Props> {
        let header = self.header(id).filter(|header| header.can_resize)?;
        let ctx = PropContext {
            instance: self,
            header: Some(header),
        };
        Some(make_prop_getter(&self.hooks.get_resizer_props, &ctx, extra))
    }

    /// Effective width of a header for the current pass.
    #[must_use]
    pub fn column_width(&self, id: &HeaderId) -> Option<f64> {
        self.header(id.as_str()).map(|header| header.width)
    }
}

impl ResizeHost for TableInstance {
    fn headers(&self) -> &[HeaderNode] {
        &self.headers
    }

    fn width_unit_per_px(&self) -> Option<f64> {
        let container_px = self.container_ref.width()?;
        width_unit_per_px(self.total_columns_width, container_px)
    }

    fn dispatch_resize(&mut self, action: ResizeAction) {
        self.dispatch(action.into());
    }
}

fn build_hooks(plugins: &[Plugin]) -> Hooks {
    let mut hooks = Hooks::default();
    for plugin in plugins {
        (plugin.register)(&mut hooks);
    }
    hooks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::RESIZE_COLUMNS;
    use crate::props::{Cursor, Position, Role};
    use colresize_core::{StartResize, header_id_widths};
    use pretty_assertions::assert_eq;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name").width(100.0).min_width(50.0).max_width(300.0),
            ColumnDef::new("age").width(100.0).min_width(50.0).max_width(300.0),
            ColumnDef::new("notes")
                .width(100.0)
                .disable_resizing(true),
        ]
    }

    fn instance() -> TableInstance {
        let mut instance = TableInstance::new(TableOptions::default(), vec![RESIZE_COLUMNS]);
        instance.render(&columns()).expect("render");
        instance
    }

    fn start(instance: &TableInstance, x: f64) -> ResizeAction {
        let left = instance.header("name").expect("name").clone();
        let right = instance.header("age").expect("age").clone();
        ResizeAction::Start(Box::new(StartResize {
            column_id: left.id.clone(),
            column_width: left.total_width,
            header_id_widths: header_id_widths(&left),
            left_header: left,
            right_header: right,
            width_unit_per_px: 1.0,
            headers: instance.headers().to_vec(),
            client_x: x,
        }))
    }

    #[test]
    fn init_seeds_resize_state() {
        let instance = TableInstance::new(TableOptions::default(), vec![RESIZE_COLUMNS]);
        assert!(instance.state().column_resizing.is_some());
    }

    #[test]
    fn headers_are_annotated() {
        let instance = instance();
        let name = instance.header("name").expect("name");
        assert!(name.can_resize);
        assert!(!name.is_resizing);
        assert_eq!(name.width, 100.0);
        let notes = instance.header("notes").expect("notes");
        assert!(!notes.can_resize);
        assert_eq!(instance.total_columns_width(), 300.0);
    }

    #[test]
    fn global_disable_turns_off_every_header() {
        let options = TableOptions {
            disable_resizing: true,
            ..TableOptions::default()
        };
        let mut instance = TableInstance::new(options, vec![RESIZE_COLUMNS]);
        instance.render(&columns()).expect("render");
        assert!(instance.flat_headers().iter().all(|h| !h.can_resize));
        assert!(instance.resizer_props("name", Props::default()).is_none());
    }

    #[test]
    fn dispatch_updates_widths_live() {
        let mut instance = instance();
        instance.dispatch(start(&instance, 500.0).into());
        assert!(instance.header("name").expect("name").is_resizing);
        instance.dispatch(ResizeAction::Move { client_x: 530.0 }.into());
        assert_eq!(instance.column_width(&"name".into()), Some(130.0));
        assert_eq!(instance.column_width(&"age".into()), Some(70.0));
        assert_eq!(instance.total_columns_width(), 300.0);
        instance.dispatch(ResizeAction::End.into());
        assert!(!instance.header("name").expect("name").is_resizing);
        assert_eq!(instance.header("name").map(|h| h.total_width), Some(130.0));
    }

    #[test]
    fn reset_resizing_restores_configured_widths() {
        let mut instance = instance();
        instance.dispatch(start(&instance, 0.0).into());
        instance.dispatch(ResizeAction::Move { client_x: 20.0 }.into());
        instance.reset_resizing();
        assert_eq!(instance.column_width(&"name".into()), Some(100.0));
        assert!(instance.state().column_resizing().column_widths.is_empty());
    }

    #[test]
    fn auto_reset_on_column_change_but_not_on_mount() {
        let mut instance = instance();
        instance.dispatch(start(&instance, 0.0).into());
        instance.dispatch(ResizeAction::Move { client_x: 20.0 }.into());
        instance.dispatch(ResizeAction::End.into());

        // Same definitions: widths survive.
        instance.render(&columns()).expect("render");
        assert_eq!(instance.column_width(&"name".into()), Some(120.0));

        let mut changed = columns();
        changed.push(ColumnDef::new("extra").width(40.0));
        instance.render(&changed).expect("render");
        assert_eq!(instance.column_width(&"name".into()), Some(100.0));
    }

    #[test]
    fn auto_reset_can_be_disabled() {
        let options = TableOptions {
            auto_reset_resize: false,
            ..TableOptions::default()
        };
        let mut instance = TableInstance::new(options, vec![RESIZE_COLUMNS]);
        instance.render(&columns()).expect("render");
        instance.dispatch(start(&instance, 0.0).into());
        instance.dispatch(ResizeAction::Move { client_x: 20.0 }.into());
        let mut changed = columns();
        changed.push(ColumnDef::new("extra"));
        instance.render(&changed).expect("render");
        assert_eq!(instance.column_width(&"name".into()), Some(120.0));
    }

    #[test]
    fn props_reach_the_host() {
        let instance = instance();
        let header = instance
            .header_props("name", Props::default())
            .expect("header props");
        assert_eq!(header.style.position, Some(Position::Relative));

        let resizer = instance
            .resizer_props("name", Props::default().attribute("title", "resize"))
            .expect("resizer props");
        assert_eq!(resizer.style.cursor, Some(Cursor::ColResize));
        assert_eq!(resizer.role, Some(Role::Separator));
        assert_eq!(resizer.draggable, Some(false));
        assert_eq!(resizer.attributes.get("title").map(String::as_str), Some("resize"));

        let table = instance.table_props(Props::default());
        assert_eq!(table.container_ref.as_ref(), Some(instance.container_ref()));
    }

    #[test]
    fn table_props_do_not_accumulate_across_passes() {
        let mut instance = instance();
        instance.render(&columns()).expect("render");
        instance.render(&columns()).expect("render");
        assert_eq!(instance.hooks().get_table_props.len(), 1);
    }

    #[test]
    fn width_ratio_needs_measured_container() {
        let instance = instance();
        assert_eq!(ResizeHost::width_unit_per_px(&instance), None);
        instance.container_ref().set_width(150.0);
        assert_eq!(ResizeHost::width_unit_per_px(&instance), Some(2.0));
    }
}
