//! Navigation orchestration methods
//!
//! Methods bridging key input, the navigation state machine and the
//! per-level cursor stack:
//! - Moving the cursor within the current level
//! - Activating the selected item (descend or leaf selection)
//! - Going back one level or jumping via the breadcrumb trail
//!
//! Invariant kept here: `cursors.len() == nav.levels().len()` — one cursor
//! slot per level, so ascending restores the cursor the level had before.

use crate::{log_debug, logic, App};

impl App {
    pub(crate) fn move_selection_down(&mut self) {
        let list_len = self.nav.current().items.len();
        let depth = self.nav.depth();
        if let Some(cursor) = self.cursors.get_mut(depth) {
            *cursor = logic::navigation::next_selection(*cursor, list_len);
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        let list_len = self.nav.current().items.len();
        let depth = self.nav.depth();
        if let Some(cursor) = self.cursors.get_mut(depth) {
            *cursor = logic::navigation::prev_selection(*cursor, list_len);
        }
    }

    /// Activate the item under the cursor: descend into a branch, fire the
    /// selection affordance for a leaf, do nothing for a disabled item.
    pub(crate) fn activate_selected(&mut self) {
        let depth = self.nav.depth();
        let Some(index) = self.cursors.get(depth).copied().flatten() else {
            return;
        };
        let Some(item) = self.nav.current().items.get(index).cloned() else {
            return;
        };

        let mut selected_label = None;
        self.nav
            .descend(&item, |leaf| selected_label = Some(leaf.label.clone()));

        if let Some(label) = selected_label {
            log_debug(&format!("leaf selected: id={}", item.id));
            self.show_toast(format!("Selected: {}", label));
        } else if self.nav.depth() > depth {
            // Entered a new level: give it a fresh cursor
            let first = if self.nav.current().items.is_empty() {
                None
            } else {
                Some(0)
            };
            self.cursors.push(first);
        }
        // Disabled item: state machine ignored it, nothing to do
    }

    pub(crate) fn go_back(&mut self) {
        if self.nav.can_go_back() {
            self.nav.ascend();
            self.cursors.truncate(self.nav.depth() + 1);
        }
    }

    /// Jump straight to breadcrumb `index`; cursors below it are dropped in
    /// the same batch, so intermediate levels never become current.
    pub(crate) fn jump_to_level(&mut self, index: usize) {
        self.nav.jump_to(index);
        self.cursors.truncate(self.nav.depth() + 1);
    }
}
