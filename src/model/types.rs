//! Core data types for the drilldown tree
//!
//! The menu tree is immutable input: it is deserialized once at startup and
//! never mutated afterwards. Children are held behind `Arc<[NavItem]>` so a
//! materialized `Level` shares the tree instead of copying it, and several
//! navigation states can safely point into the same tree.

use serde::Deserialize;
use std::sync::Arc;

/// A node in the static menu tree.
///
/// A node with a non-empty `children` sequence is a *branch* (activating it
/// descends one level); a node with no children is a *leaf* (activating it
/// fires a selection event). An absent `children` field and an empty one are
/// equivalent.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavItem {
    /// Identifier, unique among siblings (used for stable identity when
    /// rendering; not globally unique)
    pub id: String,

    /// Display name; doubles as the title of the level this node opens
    pub label: String,

    /// Optional icon name, resolved by the presentation layer
    #[serde(default)]
    pub icon: Option<String>,

    /// Optional supplementary text shown under the label
    #[serde(default)]
    pub description: Option<String>,

    /// Disabled nodes are fully inert: no descend, no selection event
    #[serde(default)]
    pub disabled: bool,

    /// Child nodes; empty for leaves
    #[serde(default)]
    pub children: Arc<[NavItem]>,
}

impl NavItem {
    /// Create a leaf node with just an id and label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            description: None,
            disabled: false,
            children: Arc::from([]),
        }
    }

    /// Set the icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the node as disabled
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach children, turning the node into a branch
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children.into();
        self
    }

    /// A branch opens a new level when activated
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// A leaf fires a selection event when activated
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A materialized view of one depth in the traversal: the items visible at
/// that depth plus the title shown for it (the root title at depth 0, else
/// the label of the node that was entered).
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub title: String,
    pub items: Arc<[NavItem]>,
}

/// Last traversal direction, exposed purely as a display hint (e.g. slide
/// direction); never consumed by the navigation logic itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Back,
}
