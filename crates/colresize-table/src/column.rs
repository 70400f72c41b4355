#![forbid(unsafe_code)]

//! Column definitions and header construction.

use colresize_core::{HeaderId, HeaderNode};
use serde::{Deserialize, Serialize};

use crate::config::DefaultColumn;

/// User-facing definition of one column or column group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: HeaderId,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub min_width: Option<f64>,
    #[serde(default)]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub disable_resizing: Option<bool>,
    /// Child columns; non-empty makes this a group.
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl ColumnDef {
    pub fn new(id: impl Into<HeaderId>) -> Self {
        Self {
            id: id.into(),
            width: None,
            min_width: None,
            max_width: None,
            disable_resizing: None,
            columns: Vec::new(),
        }
    }

    pub fn group(id: impl Into<HeaderId>, columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    #[must_use]
    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn disable_resizing(mut self, disable: bool) -> Self {
        self.disable_resizing = Some(disable);
        self
    }

    /// Build the header subtree for this definition.
    ///
    /// Leaf totals come from the definition (or `defaults`); group totals are
    /// sums over children.
    #[must_use]
    pub fn to_header(&self, defaults: &DefaultColumn) -> HeaderNode {
        let mut header = if self.columns.is_empty() {
            HeaderNode::leaf(
                self.id.clone(),
                self.width.unwrap_or(defaults.width),
                self.min_width.unwrap_or(defaults.min_width),
                self.max_width.unwrap_or(defaults.max_width),
            )
        } else {
            let children = self
                .columns
                .iter()
                .map(|column| column.to_header(defaults))
                .collect();
            HeaderNode::group(self.id.clone(), children)
        };
        header.disable_resizing = self.disable_resizing;
        header
    }
}

/// Recompute aggregate widths bottom-up from each node's resolved `width`.
///
/// Leaves clamp their width into `[total_min_width, total_max_width]`;
/// groups sum their children.
pub fn compute_dimensions(header: &mut HeaderNode) {
    if header.is_leaf() {
        header.total_width = header
            .width
            .max(header.total_min_width)
            .min(header.total_max_width);
        return;
    }
    let (mut width, mut min, mut max) = (0.0, 0.0, 0.0);
    for child in &mut header.columns {
        compute_dimensions(child);
        width += child.total_width;
        min += child.total_min_width;
        max += child.total_max_width;
    }
    header.total_width = width;
    header.total_min_width = min;
    header.total_max_width = max;
}
