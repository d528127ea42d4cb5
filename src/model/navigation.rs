//! Navigation state machine
//!
//! Owns the traversal stack over the static menu tree and provides the only
//! legal mutations to it: descend into a child node, ascend to the parent,
//! or jump to an arbitrary ancestor via the breadcrumb trail.
//!
//! Invariants:
//! - `levels` is never empty; `levels[0]` is always the root level
//! - `breadcrumbs[i] == levels[i].title` for every `i`
//! - the input tree is never mutated, only referenced
//!
//! All guard failures (disabled node, ascend at root, out-of-range jump) are
//! silent no-ops rather than errors: every input originates from a trusted,
//! statically authored tree, so there is nothing actionable to report.

use super::types::{Direction, Level, NavItem};
use std::sync::Arc;

/// The mutable traversal state over an immutable menu tree.
///
/// The "current level" is the last entry of the level stack; "at root" means
/// the stack holds a single entry. There is no separate state enum: the stack
/// itself is the state.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    levels: Vec<Level>,
    breadcrumbs: Vec<String>,
    direction: Direction,
}

impl NavigationState {
    /// Create a state machine positioned at the root level of `tree`.
    pub fn new(tree: Arc<[NavItem]>, root_title: impl Into<String>) -> Self {
        let title = root_title.into();
        Self {
            levels: vec![Level {
                title: title.clone(),
                items: tree,
            }],
            breadcrumbs: vec![title],
            direction: Direction::Forward,
        }
    }

    /// Reinitialize from a new tree and root title.
    ///
    /// The tree is external configuration; when it changes the traversal is
    /// rebuilt from scratch, never patched incrementally.
    pub fn reset(&mut self, tree: Arc<[NavItem]>, root_title: impl Into<String>) {
        *self = Self::new(tree, root_title);
    }

    /// The level currently displayed.
    pub fn current(&self) -> &Level {
        // Invariant: levels is never empty
        self.levels.last().unwrap()
    }

    /// The parent of the current level, if any.
    pub fn previous(&self) -> Option<&Level> {
        self.levels.len().checked_sub(2).map(|i| &self.levels[i])
    }

    /// Full level stack, root first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Level titles from root to current, in lockstep with `levels()`.
    pub fn breadcrumbs(&self) -> &[String] {
        &self.breadcrumbs
    }

    /// Last traversal direction (display hint only).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current depth; 0 at the root level.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn at_root(&self) -> bool {
        self.levels.len() == 1
    }

    pub fn can_go_back(&self) -> bool {
        self.levels.len() > 1
    }

    /// Forward traversal: activate `item`.
    ///
    /// Disabled items are fully inert. A branch pushes a new level titled
    /// with the item's label; a leaf leaves the stack untouched and invokes
    /// `on_leaf_selected` exactly once, synchronously, fire-and-forget.
    ///
    /// Membership of `item` in the current level's items is trusted, not
    /// validated; the caller hands over items it obtained from `current()`.
    pub fn descend<F>(&mut self, item: &NavItem, on_leaf_selected: F)
    where
        F: FnOnce(&NavItem),
    {
        if item.disabled {
            return;
        }

        if item.is_branch() {
            self.levels.push(Level {
                title: item.label.clone(),
                items: Arc::clone(&item.children),
            });
            self.breadcrumbs.push(item.label.clone());
            self.direction = Direction::Forward;
        } else {
            on_leaf_selected(item);
        }
    }

    /// Back traversal: pop one level. No-op at the root.
    pub fn ascend(&mut self) {
        if self.levels.len() > 1 {
            self.levels.pop();
            self.breadcrumbs.pop();
            self.direction = Direction::Back;
        }
    }

    /// Breadcrumb jump: make `levels[index]` current by truncating everything
    /// below it in one batch pop. Intermediate levels never become current.
    ///
    /// Jumping to the already-current level or beyond it is a no-op.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.levels.len() - 1 {
            self.levels.truncate(index + 1);
            self.breadcrumbs.truncate(index + 1);
            self.direction = Direction::Back;
        }
    }
}
