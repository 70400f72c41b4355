#![forbid(unsafe_code)]

//! Interactive column resizing for data tables.
//!
//! This crate is the public surface: it re-exports the resize machine from
//! `colresize-core` and the table integration from `colresize-table`, adds a
//! unified [`Error`], and offers a prelude for hosts.
//!
//! ```ignore
//! use colresize::prelude::*;
//!
//! let definition = colresize::load_definition("table.toml")?;
//! let mut table = colresize::open_table(&definition, vec![RESIZE_COLUMNS])?;
//! table.container_ref().set_width(960.0);
//! let mut drag = DragController::new(CaptureSet::default());
//! ```

pub mod error;

#[cfg(feature = "config")]
use std::path::Path;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use colresize_core::{
    ColumnResizingState, DragSnapshot, HeaderId, HeaderNode, InputModality, MaxChangePx,
    PointerInput, PointerPhase, ResizeAction, StartResize, TouchPoint, reduce,
};

// --- Table re-exports ------------------------------------------------------

pub use colresize_table::{
    ABSOLUTE_LAYOUT, CaptureListeners, CaptureSet, ColumnDef, ConfigError, DefaultColumn,
    DragController, DragDispatch, DragIgnoredReason, DragOutcome, EventDisposition,
    InputCaptureScope, Plugin, PluginError, Props, RESIZE_COLUMNS, ResizeHost, TableAction,
    TableDefinition, TableInstance, TableOptions, TableState,
};

/// Build an instance from a definition and run its first render pass.
pub fn open_table(definition: &TableDefinition, plugins: Vec<Plugin>) -> Result<TableInstance> {
    let mut table = TableInstance::new(definition.options, plugins);
    table.render(&definition.columns)?;
    Ok(table)
}

/// Load a table definition; `.json` files parse as JSON, anything else as
/// TOML.
#[cfg(feature = "config")]
pub fn load_definition(path: impl AsRef<Path>) -> Result<TableDefinition> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let definition = if is_json {
        TableDefinition::from_json_str(&content)?
    } else {
        TableDefinition::from_toml_str(&content)?
    };
    Ok(definition)
}

pub mod prelude {
    pub use crate::{
        CaptureSet, ColumnDef, DragController, DragOutcome, Error, HeaderId, PointerInput, Props,
        RESIZE_COLUMNS, Result, TableInstance, TableOptions,
    };

    pub use crate::{core, table};
}

pub use colresize_core as core;
pub use colresize_table as table;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn definition() -> TableDefinition {
        TableDefinition {
            options: TableOptions::default(),
            columns: vec![
                ColumnDef::new("a").width(80.0),
                ColumnDef::new("b").width(120.0),
            ],
        }
    }

    #[test]
    fn open_table_renders_headers() {
        let table = open_table(&definition(), vec![RESIZE_COLUMNS]).expect("open");
        assert_eq!(table.headers().len(), 2);
        assert_eq!(table.total_columns_width(), 200.0);
    }

    #[test]
    fn open_table_reports_plugin_order() {
        fn noop(_: &mut colresize_table::Hooks) {}
        let layout = Plugin {
            name: ABSOLUTE_LAYOUT,
            register: noop,
        };
        let err = open_table(&definition(), vec![RESIZE_COLUMNS, layout]).expect_err("misordered");
        assert!(matches!(err, Error::Plugin(PluginError::PluginOrder { .. })));
    }

    #[cfg(feature = "config")]
    #[test]
    fn load_definition_picks_format_by_extension() {
        use std::io::Write;

        let dir = tempfile::tempdir().expect("tempdir");
        let json = dir.path().join("table.json");
        std::fs::File::create(&json)
            .and_then(|mut f| f.write_all(br#"{"columns": [{"id": "a", "width": 90.0}]}"#))
            .expect("write json");
        let loaded = load_definition(&json).expect("json definition");
        assert_eq!(loaded.columns[0].width, Some(90.0));

        let toml = dir.path().join("table.toml");
        std::fs::write(&toml, "disable_resizing = true\n[[columns]]\nid = \"a\"\n")
            .expect("write toml");
        let loaded = load_definition(&toml).expect("toml definition");
        assert!(loaded.options.disable_resizing);

        std::fs::write(&toml, "[default_column]\nmin_width = 10.0\nmax_width = 5.0\n")
            .expect("write toml");
        let err = load_definition(&toml).expect_err("invalid bounds");
        assert!(matches!(err, Error::Config(ConfigError::Validation(_))));

        let err = load_definition(dir.path().join("missing.toml")).expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }
}
