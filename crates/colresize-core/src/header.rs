#![forbid(unsafe_code)]

//! Header nodes and leaf traversal.
//!
//! A [`HeaderNode`] is one column or column group in the current render pass.
//! The host rebuilds the tree every pass; the aggregate `total_*` bounds come
//! from the host layout pass and are treated as read-only input here.
//!
//! # Leaf order
//!
//! [`collect_leaves`] walks children first and appends a node only after all
//! of its descendants, so the returned sequence always ends with the root it
//! was called on. Groups are part of the output; callers that need true
//! leaves filter with [`HeaderNode::is_leaf`].

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a column or column group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderId(String);

impl HeaderId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HeaderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for HeaderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for HeaderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_can_resize() -> bool {
    true
}

/// One column or column group in a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderNode {
    pub id: HeaderId,
    /// Aggregate width over the leaf descendants, in width units.
    pub total_width: f64,
    pub total_min_width: f64,
    pub total_max_width: f64,
    /// Child headers in display order; empty for leaves.
    #[serde(default)]
    pub columns: Vec<HeaderNode>,
    /// Width from the column definition, before any resize was applied.
    #[serde(default)]
    pub original_width: Option<f64>,
    /// Effective width for this pass.
    pub width: f64,
    /// Per-column opt-out from the column definition.
    #[serde(default)]
    pub disable_resizing: Option<bool>,
    #[serde(default = "default_can_resize")]
    pub can_resize: bool,
    #[serde(default)]
    pub is_resizing: bool,
}

impl HeaderNode {
    /// Leaf header with explicit bounds.
    pub fn leaf(id: impl Into<HeaderId>, width: f64, min_width: f64, max_width: f64) -> Self {
        Self {
            id: id.into(),
            total_width: width,
            total_min_width: min_width,
            total_max_width: max_width,
            columns: Vec::new(),
            original_width: Some(width),
            width,
            disable_resizing: None,
            can_resize: true,
            is_resizing: false,
        }
    }

    /// Group header whose totals are the sums of its children.
    pub fn group(id: impl Into<HeaderId>, columns: Vec<HeaderNode>) -> Self {
        let total_width = columns.iter().map(|c| c.total_width).sum();
        let total_min_width = columns.iter().map(|c| c.total_min_width).sum();
        let total_max_width = columns.iter().map(|c| c.total_max_width).sum();
        Self {
            id: id.into(),
            total_width,
            total_min_width,
            total_max_width,
            columns,
            original_width: None,
            width: total_width,
            disable_resizing: None,
            can_resize: true,
            is_resizing: false,
        }
    }

    /// Set the per-column resize opt-out.
    #[must_use]
    pub fn with_disable_resizing(mut self, disable: bool) -> Self {
        self.disable_resizing = Some(disable);
        self
    }

    /// True when this header has no child columns.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.columns.is_empty()
    }

    /// Visit this node and every descendant, children before parents.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut HeaderNode)) {
        for child in &mut self.columns {
            child.visit_mut(f);
        }
        f(self);
    }

    /// Find a node by id in this subtree.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&HeaderNode> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.columns.iter().find_map(|child| child.find(id))
    }
}

/// Collect `header` and its descendants, each node after its children.
///
/// The last element is always `header` itself.
#[must_use]
pub fn collect_leaves(header: &HeaderNode) -> Vec<&HeaderNode> {
    let mut out = Vec::new();
    push_post_order(header, &mut out);
    out
}

fn push_post_order<'a>(header: &'a HeaderNode, out: &mut Vec<&'a HeaderNode>) {
    for child in &header.columns {
        push_post_order(child, out);
    }
    out.push(header);
}

/// `(id, total_width)` pairs in [`collect_leaves`] order.
#[must_use]
pub fn header_id_widths(header: &HeaderNode) -> Vec<(HeaderId, f64)> {
    collect_leaves(header)
        .into_iter()
        .map(|node| (node.id.clone(), node.total_width))
        .collect()
}
